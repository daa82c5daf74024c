//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

pub mod repository_contract;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;

use user_service::application::{UserRequest, UserResponse, UserService};
use user_service::domain::{User, UserRepository};
use user_service::infrastructure::observability::HealthChecker;
use user_service::infrastructure::persistence::InMemoryUserRepository;
use user_service::interfaces::http::create_router;
use user_service::shared::USERNAME_HEADER;

pub const NON_EXISTING_USERNAME: &str = "notfound123";

pub const FIRST_ID: &str = "id1";
pub const FIRST_USERNAME: &str = "alice123";
pub const FIRST_NAME: &str = "Alice";
pub const FIRST_SURNAME: &str = "Smith";
pub const FIRST_BALANCE: &str = "100.50";

pub const SECOND_ID: &str = "id2";
pub const SECOND_USERNAME: &str = "bob456";
pub const SECOND_NAME: &str = "Bob";
pub const SECOND_SURNAME: &str = "Johnson";
pub const SECOND_BALANCE: &str = "250.00";

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn first_user() -> User {
    User {
        id: FIRST_ID.into(),
        username: FIRST_USERNAME.into(),
        name: FIRST_NAME.into(),
        surname: FIRST_SURNAME.into(),
        balance: dec(FIRST_BALANCE),
    }
}

pub fn second_user() -> User {
    User {
        id: SECOND_ID.into(),
        username: SECOND_USERNAME.into(),
        name: SECOND_NAME.into(),
        surname: SECOND_SURNAME.into(),
        balance: dec(SECOND_BALANCE),
    }
}

pub fn first_user_request() -> UserRequest {
    UserRequest::new(FIRST_NAME, FIRST_SURNAME)
}

pub fn update_user_request() -> UserRequest {
    UserRequest::new(SECOND_NAME, SECOND_SURNAME)
}

pub fn first_user_response() -> UserResponse {
    UserResponse {
        id: FIRST_ID.into(),
        username: FIRST_USERNAME.into(),
        name: FIRST_NAME.into(),
        surname: FIRST_SURNAME.into(),
        balance: dec(FIRST_BALANCE),
    }
}

/// Router over a fresh in-memory store, plus direct access to that store
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryUserRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryUserRepository::new());
        let service = Arc::new(UserService::new(repository.clone()));
        let router = create_router(service, Arc::new(HealthChecker::new("test")));
        Self { router, repository }
    }

    pub async fn with_users(users: &[User]) -> Self {
        let app = Self::new();
        for user in users {
            app.repository.insert(user).await.unwrap();
        }
        app
    }

    pub async fn stored(&self, username: &str) -> Option<User> {
        self.repository.find_by_username(username).await.unwrap()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        username: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(username) = username {
            builder = builder.header(USERNAME_HEADER, username);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            body: bytes.to_vec(),
        }
    }

    pub async fn get(&self, uri: &str, username: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, username, None).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "invalid JSON body ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn message(&self) -> String {
        self.json::<Value>()["message"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }
}
