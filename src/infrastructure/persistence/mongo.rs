//! MongoDB user repository
//!
//! Accounts live in the `user` collection. `username` carries a unique
//! index created by [`MongoUserRepository::connect`]; the balance is stored
//! as a decimal string so no precision is lost.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{RepositoryError, User, UserRepository};

pub const COLLECTION: &str = "user";

const DUPLICATE_KEY: i32 = 11000;

/// Stored document layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    username: String,
    name: String,
    surname: String,
    balance: Decimal,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            surname: user.surname.clone(),
            balance: user.balance,
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id,
            username: doc.username,
            name: doc.name,
            surname: doc.surname,
            balance: doc.balance,
        }
    }
}

pub struct MongoUserRepository {
    client: Client,
    database: String,
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Connects and makes sure the unique username index exists
    pub async fn connect(uri: &str, database: &str) -> Result<Self, RepositoryError> {
        let client = Client::with_uri_str(uri).await.map_err(storage_error)?;
        let collection = client.database(database).collection::<UserDocument>(COLLECTION);

        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        collection.create_index(index, None).await.map_err(storage_error)?;

        info!(database, collection = COLLECTION, "MongoDB repository ready");

        Ok(Self {
            client,
            database: database.to_string(),
            collection,
        })
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[tracing::instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let found = self
            .collection
            .find_one(doc! { "username": username }, None)
            .await
            .map_err(storage_error)?;
        Ok(found.map(User::from))
    }

    #[tracing::instrument(skip(self))]
    async fn find_page(&self, skip: u64, limit: u32) -> Result<Vec<User>, RepositoryError> {
        let options = FindOptions::builder()
            .skip(skip)
            .limit(i64::from(limit))
            .build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(storage_error)?;
        let docs: Vec<UserDocument> = cursor.try_collect().await.map_err(storage_error)?;
        Ok(docs.into_iter().map(User::from).collect())
    }

    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        match self.collection.insert_one(UserDocument::from(user), None).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(RepositoryError::DuplicateUsername {
                username: user.username.clone(),
            }),
            Err(e) => Err(storage_error(e)),
        }
    }

    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    async fn update(&self, user: &User) -> Result<bool, RepositoryError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": user.id.as_str() }, UserDocument::from(user), None)
            .await
            .map_err(storage_error)?;
        Ok(result.matched_count > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        let result = self
            .collection
            .delete_one(doc! { "username": username }, None)
            .await
            .map_err(storage_error)?;
        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.collection
            .count_documents(doc! {}, None)
            .await
            .map_err(storage_error)
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.collection
            .delete_many(doc! {}, None)
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

fn storage_error(err: MongoError) -> RepositoryError {
    tracing::error!("MongoDB error: {}", err);
    RepositoryError::Storage {
        message: err.to_string(),
    }
}
