use crate::domain::category::Category;
use crate::domain::validation::{DomainError, ValidationError, ValidationHandler, Validator};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

/// Name rules for [`Category`]. At most one name error is reported per pass.
///
/// Description and active flag are not checked.
pub struct CategoryValidator<'a> {
    category: &'a Category,
    handler: &'a mut dyn ValidationHandler,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category, handler: &'a mut dyn ValidationHandler) -> Self {
        Self { category, handler }
    }

    fn check_name_constraints(&mut self) -> Result<(), DomainError> {
        let Some(name) = self.category.name() else {
            return self
                .handler
                .append(ValidationError::new("'name' should not be null"));
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return self
                .handler
                .append(ValidationError::new("'name' should not be blank"));
        }

        let length = trimmed.chars().count();
        if length < NAME_MIN_LENGTH {
            self.handler.append(ValidationError::new(format!(
                "'name' should have at least {NAME_MIN_LENGTH} characters"
            )))
        } else if length > NAME_MAX_LENGTH {
            self.handler.append(ValidationError::new(format!(
                "'name' should have at most {NAME_MAX_LENGTH} characters"
            )))
        } else {
            Ok(())
        }
    }
}

impl Validator for CategoryValidator<'_> {
    fn validate(&mut self) -> Result<(), DomainError> {
        self.check_name_constraints()
    }
}
