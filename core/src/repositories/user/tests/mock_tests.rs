use crate::domain::entities::user::{AccountStatus, User};
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

#[tokio::test]
async fn test_mock_find_by_id() {
    let repo = MockUserRepository::new().with_user(User::new(7, "seven@example.com"));

    let found = repo.find_by_id(7).await.unwrap();
    assert_eq!(found.map(|u| u.email), Some("seven@example.com".to_string()));

    let missing = repo.find_by_id(8).await.unwrap();
    assert!(missing.is_none());
    assert_eq!(repo.lookup_count(), 2);
}

#[tokio::test]
async fn test_mock_insert_replaces_record() {
    let repo = MockUserRepository::new().with_user(User::new(42, "old@example.com"));

    let mut updated = User::new(42, "old@example.com");
    updated.set_status(AccountStatus::Suspended);
    repo.insert(updated);

    let user = repo.find_by_id(42).await.unwrap().unwrap();
    assert!(!user.is_active());
}

#[tokio::test]
async fn test_mock_failure_switch() {
    let repo = MockUserRepository::new().with_user(User::new(1, "a@example.com"));
    repo.set_should_fail(true);

    let result = repo.find_by_id(1).await;
    assert!(matches!(result, Err(DomainError::Database(_))));
}
