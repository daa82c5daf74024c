//! Behaviour every `UserRepository` backend must share

use user_service::domain::{RepositoryError, User, UserRepository};

use super::*;

/// Runs against an empty store and leaves it empty
pub async fn assert_repository_contract(repository: &dyn UserRepository) {
    repository.delete_all().await.unwrap();
    repository.ping().await.unwrap();

    // insert + find
    repository.insert(&first_user()).await.unwrap();
    repository.insert(&second_user()).await.unwrap();
    let stored = repository.find_by_username(FIRST_USERNAME).await.unwrap();
    assert_eq!(stored, Some(first_user()));
    assert_eq!(stored.unwrap().balance.to_string(), FIRST_BALANCE);
    assert!(repository
        .find_by_username(NON_EXISTING_USERNAME)
        .await
        .unwrap()
        .is_none());
    assert_eq!(repository.count().await.unwrap(), 2);

    // duplicate username
    let duplicate = User {
        id: "id3".into(),
        ..first_user()
    };
    match repository.insert(&duplicate).await {
        Err(RepositoryError::DuplicateUsername { username }) => assert_eq!(username, FIRST_USERNAME),
        other => panic!("expected DuplicateUsername, got {:?}", other),
    }
    assert_eq!(repository.count().await.unwrap(), 2);

    // paging in insertion order
    assert_eq!(repository.find_page(0, 1).await.unwrap(), vec![first_user()]);
    assert_eq!(repository.find_page(1, 1).await.unwrap(), vec![second_user()]);
    assert!(repository.find_page(2, 1).await.unwrap().is_empty());
    assert_eq!(repository.find_page(0, 10).await.unwrap().len(), 2);

    // update by id
    let credited = User {
        balance: dec("103.50"),
        ..first_user()
    };
    assert!(repository.update(&credited).await.unwrap());
    assert_eq!(
        repository.find_by_username(FIRST_USERNAME).await.unwrap(),
        Some(credited)
    );
    let ghost = User {
        id: "missing".into(),
        username: NON_EXISTING_USERNAME.into(),
        ..first_user()
    };
    assert!(!repository.update(&ghost).await.unwrap());

    // delete
    assert!(repository.delete_by_username(FIRST_USERNAME).await.unwrap());
    assert!(!repository.delete_by_username(FIRST_USERNAME).await.unwrap());
    assert!(repository.find_by_username(FIRST_USERNAME).await.unwrap().is_none());
    assert_eq!(repository.count().await.unwrap(), 1);

    repository.delete_all().await.unwrap();
    assert_eq!(repository.count().await.unwrap(), 0);
}
