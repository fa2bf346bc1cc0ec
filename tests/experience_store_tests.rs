
use experience_service::{
    entities::experience::ExperienceInput,
    errors::{AppError, NotFoundKind},
    use_cases::experience::ExperienceHandler,
};
use uuid::Uuid;

use test_utils::{date, engineer_input, InMemoryExperienceRepo, StubCompanies, StubJobCategories};

type StoreHandler = ExperienceHandler<InMemoryExperienceRepo, StubCompanies, StubJobCategories>;

fn handler() -> StoreHandler {
    ExperienceHandler::new(InMemoryExperienceRepo::new(), StubCompanies, StubJobCategories)
}

#[tokio::test]
async fn create_then_get_returns_an_equal_record() {
    let handler = handler();
    let input = engineer_input();

    let created = handler.create(input.clone()).await.unwrap();
    let fetched = handler.get_by_id(created.id).await.unwrap();

    // Id is server-assigned; the five data fields must match the input.
    assert_eq!(fetched, created);
    assert_eq!(fetched.job_title, input.job_title.unwrap());
    assert_eq!(fetched.company_id, input.company_id.unwrap());
    assert_eq!(fetched.job_category_id, input.job_category_id.unwrap());
    assert_eq!(fetched.start_date, input.start_date.unwrap());
    assert_eq!(fetched.end_date, input.end_date.unwrap());
}

#[tokio::test]
async fn create_makes_the_record_visible_in_get_all() {
    let handler = handler();

    let created = handler.create(engineer_input()).await.unwrap();
    let all = handler.get_all().await.unwrap();

    assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn get_all_on_empty_store_succeeds() {
    let handler = handler();
    assert!(handler.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_overwrites_every_field_except_id() {
    let handler = handler();
    let created = handler.create(engineer_input()).await.unwrap();

    let replacement = ExperienceInput {
        id: Some(created.id),
        job_title: Some("Staff Engineer".to_string()),
        job_category_id: Some(Uuid::new_v4()),
        company_id: Some(Uuid::new_v4()),
        start_date: Some(date(2023, 2, 1)),
        end_date: Some(date(2024, 12, 31)),
    };

    let updated = handler.update(replacement.clone()).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.job_title, "Staff Engineer");
    assert_eq!(updated.job_category_id, replacement.job_category_id.unwrap());
    assert_eq!(updated.company_id, replacement.company_id.unwrap());
    assert_eq!(updated.start_date, date(2023, 2, 1));
    assert_eq!(updated.end_date, date(2024, 12, 31));

    assert_eq!(handler.get_by_id(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn update_on_unknown_id_leaves_the_store_unchanged() {
    let handler = handler();
    let created = handler.create(engineer_input()).await.unwrap();

    let stranger = ExperienceInput {
        id: Some(Uuid::new_v4()),
        ..engineer_input()
    };

    let result = handler.update(stranger).await;
    assert!(matches!(
        result,
        Err(AppError::NotFound(NotFoundKind::Experience))
    ));
    assert_eq!(handler.get_all().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn delete_then_get_reports_not_found() {
    let handler = handler();
    let created = handler.create(engineer_input()).await.unwrap();

    handler.delete(created.id).await.unwrap();

    let result = handler.get_by_id(created.id).await;
    assert!(matches!(
        result,
        Err(AppError::NotFound(NotFoundKind::Experience))
    ));
}

#[tokio::test]
async fn delete_on_unknown_id_reports_not_found() {
    let handler = handler();

    let result = handler.delete(Uuid::new_v4()).await;
    assert!(matches!(
        result,
        Err(AppError::NotFound(NotFoundKind::Experience))
    ));
}

#[tokio::test]
async fn invalid_date_range_persists_nothing() {
    let handler = handler();

    let input = ExperienceInput {
        start_date: Some(date(2024, 6, 1)),
        end_date: Some(date(2024, 1, 1)),
        ..engineer_input()
    };

    let result = handler.create(input).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(handler.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn detailed_view_composes_record_with_resolved_collaborators() {
    let handler = handler();
    let created = handler.create(engineer_input()).await.unwrap();

    let detailed = handler
        .get_detailed_by_id(created.id, "Bearer test-token")
        .await
        .unwrap();

    assert_eq!(detailed.id, created.id);
    assert_eq!(detailed.job_title, created.job_title);
    assert_eq!(detailed.start_date, created.start_date);
    assert_eq!(detailed.end_date, created.end_date);
    assert_eq!(detailed.company.id, created.company_id);
    assert_eq!(detailed.job_category.id, created.job_category_id);
}
