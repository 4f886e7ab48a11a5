//! Domain layer: the `Category` aggregate, its validation rules and the value
//! objects shared with the repository and service layers.

pub mod category;
pub mod category_validator;
pub mod entity;
pub mod pagination;
pub mod types;
pub mod validation;
