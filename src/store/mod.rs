//! Store abstractions consumed by the rest of the chat server.

mod error;
mod user_terms_of_service;

pub use error::StoreError;
pub use user_terms_of_service::SqlUserTermsOfServiceStore;

use crate::models;
use async_trait::async_trait;

#[async_trait]
pub trait UserTermsOfServiceStore: Send + Sync {
    /// The acceptance record of `user_id`, or [`StoreError::NotFound`].
    async fn get_by_user(&self, user_id: &str) -> Result<models::UserTermsOfService, StoreError>;

    /// Stamps and validates `item`, then updates the user's row or inserts one.
    async fn save(
        &self,
        item: models::UserTermsOfService,
    ) -> Result<models::UserTermsOfService, StoreError>;

    /// Deleting a pair that has no row is not an error.
    async fn delete(&self, user_id: &str, terms_of_service_id: &str) -> Result<(), StoreError>;
}
