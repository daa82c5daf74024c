//! MongoDB backend against a throwaway container
//! Requires Docker - run with `cargo test --features mongo -- --ignored`

#![cfg(feature = "mongo")]

mod common;

use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};

use common::repository_contract::assert_repository_contract;
use common::*;
use user_service::domain::UserRepository;
use user_service::infrastructure::persistence::MongoUserRepository;

async fn start_mongo() -> (ContainerAsync<GenericImage>, String) {
    let container = GenericImage::new("mongo", "7.0")
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
        .start()
        .await
        .expect("Failed to start MongoDB container");

    let port = container
        .get_host_port_ipv4(27017)
        .await
        .expect("Failed to get port");
    let uri = format!("mongodb://127.0.0.1:{}", port);

    (container, uri)
}

#[tokio::test]
#[ignore = "requires Docker for MongoDB container"]
async fn mongo_repository_honours_contract() {
    let (_container, uri) = start_mongo().await;

    let repository = MongoUserRepository::connect(&uri, "user_service_test")
        .await
        .expect("Failed to connect");

    assert_repository_contract(&repository).await;
    assert_eq!(repository.backend(), "mongodb");
}

#[tokio::test]
#[ignore = "requires Docker for MongoDB container"]
async fn duplicate_username_surfaces_as_conflict() {
    let (_container, uri) = start_mongo().await;
    let repository = MongoUserRepository::connect(&uri, "user_service_test")
        .await
        .expect("Failed to connect");
    repository.insert(&first_user()).await.unwrap();

    let service = user_service::application::UserService::new(std::sync::Arc::new(repository));
    let err = service
        .create_user(FIRST_USERNAME, first_user_request())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), format!("User already exists: username = {FIRST_USERNAME}"));
}
