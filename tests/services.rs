use catalogue_admin::domain::entity::Entity;
use catalogue_admin::domain::types::CategoryId;
use catalogue_admin::domain::validation::ValidationHandler;
use catalogue_admin::dto::categories::{
    CreateCategoryCommand, DeleteCategoryCommand, GetCategoryByIdCommand, UpdateCategoryCommand,
};
use catalogue_admin::forms::categories::SearchCategoriesForm;
use catalogue_admin::repository::{CategoryReader, CategorySearchQuery};
use catalogue_admin::services::ServiceError;
use catalogue_admin::services::categories::{
    create_category, delete_category, get_category_by_id, list_categories, update_category,
};

mod common;

#[test]
fn create_then_get_round_trips_through_storage() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let output = create_category(
        CreateCategoryCommand {
            name: Some("Category".to_string()),
            description: Some("Category Description".to_string()),
            is_active: true,
        },
        &repo,
    )
    .expect("valid command should create");

    let dto = get_category_by_id(
        GetCategoryByIdCommand {
            id: output.id.as_str().to_string(),
        },
        &repo,
    )
    .expect("created category should be readable");

    assert_eq!(dto.id, output.id);
    assert_eq!(dto.name.as_deref(), Some("Category"));
    assert_eq!(dto.description.as_deref(), Some("Category Description"));
    assert!(dto.is_active);
    assert_eq!(dto.created_at, dto.updated_at);
    assert!(dto.deleted_at.is_none());

    let json = serde_json::to_value(&dto).expect("dto should serialize");
    assert_eq!(json["id"], output.id.as_str());
    assert_eq!(json["is_active"], true);
    assert!(json["deleted_at"].is_null());
}

#[test]
fn create_with_short_name_reports_notification() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let notification = create_category(
        CreateCategoryCommand {
            name: Some("ab".to_string()),
            description: None,
            is_active: true,
        },
        &repo,
    )
    .unwrap_err();

    assert_eq!(notification.errors().len(), 1);
    assert_eq!(
        notification.first_message(),
        Some("'name' should have at least 3 characters")
    );
    let page = repo
        .list_categories(&CategorySearchQuery::new(0, 10))
        .expect("should list");
    assert_eq!(page.total, 0);
}

#[test]
fn update_persists_deactivation() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let seeded = common::seed_categories(&repo);
    let target = &seeded[0];

    let output = update_category(
        UpdateCategoryCommand {
            id: target.id().clone(),
            name: Some("Films".to_string()),
            description: None,
            is_active: false,
        },
        &repo,
    )
    .expect("category exists")
    .expect("command is valid");

    let stored = repo
        .get_category_by_id(&output.id)
        .expect("should read")
        .expect("category should exist");
    assert_eq!(stored.name(), Some("Films"));
    assert_eq!(stored.description(), None);
    assert!(!stored.is_active());
    assert!(stored.deleted_at().is_some());
    assert_eq!(stored.created_at(), target.created_at());
}

#[test]
fn update_of_unknown_id_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let err = update_category(
        UpdateCategoryCommand {
            id: CategoryId::from("123"),
            name: Some("Films".to_string()),
            description: None,
            is_active: true,
        },
        &repo,
    )
    .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.to_string(), "Category with ID 123 was not found");
}

#[test]
fn delete_removes_category() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let seeded = common::seed_categories(&repo);
    let id = seeded[1].id().as_str().to_string();

    let output = delete_category(DeleteCategoryCommand { id: id.clone() }, &repo)
        .expect("category should be deleted");
    assert_eq!(output.id, id);

    let err = get_category_by_id(GetCategoryByIdCommand { id: id.clone() }, &repo).unwrap_err();
    assert_eq!(err.to_string(), format!("Category with ID {id} was not found"));

    let err = delete_category(DeleteCategoryCommand { id }, &repo).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn list_applies_search_form() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    common::seed_categories(&repo);

    let form = SearchCategoriesForm {
        page: Some(0),
        per_page: Some(2),
        search: Some("stories".to_string()),
        sort: Some("name".to_string()),
        dir: Some("desc".to_string()),
    };
    let query: CategorySearchQuery = form.try_into().expect("form is valid");

    let page = list_categories(&query, &repo).expect("should list");

    assert_eq!(page.current_page, 0);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.total, 2);
    let names: Vec<_> = page
        .items
        .iter()
        .map(|c| c.name.clone().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Series", "Documentary"]);
}
