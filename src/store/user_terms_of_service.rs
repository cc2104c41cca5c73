use super::{StoreError, UserTermsOfServiceStore};
use crate::db;
use crate::helpers::db_pools::SqlStore;
use crate::models;
use async_trait::async_trait;

const RESOURCE: &str = "UserTermsOfService";

#[derive(Clone, Debug)]
pub struct SqlUserTermsOfServiceStore {
    sql_store: SqlStore,
}

impl SqlUserTermsOfServiceStore {
    pub fn new(sql_store: SqlStore) -> Self {
        Self { sql_store }
    }
}

#[async_trait]
impl UserTermsOfServiceStore for SqlUserTermsOfServiceStore {
    #[tracing::instrument(name = "Get user's terms of service acceptance.", skip(self))]
    async fn get_by_user(&self, user_id: &str) -> Result<models::UserTermsOfService, StoreError> {
        db::user_terms_of_service::fetch_by_user(self.sql_store.get_replica(), user_id)
            .await
            .map_err(|err| {
                StoreError::database(
                    format!("failed to get {} with userId={}", RESOURCE, user_id),
                    err,
                )
            })?
            .ok_or_else(|| StoreError::not_found(RESOURCE, format!("userId={}", user_id)))
    }

    #[tracing::instrument(name = "Save user's terms of service acceptance.", skip(self, item), fields(user_id = %item.user_id))]
    async fn save(
        &self,
        mut item: models::UserTermsOfService,
    ) -> Result<models::UserTermsOfService, StoreError> {
        item.pre_save();
        item.is_valid().map_err(|err| {
            tracing::info!("Rejected invalid terms of service acceptance: {}", err);
            StoreError::Invalid {
                resource: RESOURCE,
                reason: err.to_string(),
            }
        })?;

        let master = self.sql_store.get_master();
        let updated = db::user_terms_of_service::update(master, &item)
            .await
            .map_err(|err| {
                StoreError::database(
                    format!(
                        "failed to update {} with userId={} and termsOfServiceId={}",
                        RESOURCE, item.user_id, item.terms_of_service_id
                    ),
                    err,
                )
            })?;

        if updated == 0 {
            db::user_terms_of_service::insert(master, &item)
                .await
                .map_err(|err| {
                    StoreError::database(
                        format!(
                            "failed to save {} with userId={} and termsOfServiceId={}",
                            RESOURCE, item.user_id, item.terms_of_service_id
                        ),
                        err,
                    )
                })?;
        }

        tracing::info!(
            "Terms of service {} accepted by user {}",
            item.terms_of_service_id,
            item.user_id
        );
        Ok(item)
    }

    #[tracing::instrument(name = "Delete user's terms of service acceptance.", skip(self))]
    async fn delete(&self, user_id: &str, terms_of_service_id: &str) -> Result<(), StoreError> {
        let deleted = db::user_terms_of_service::delete(
            self.sql_store.get_master(),
            user_id,
            terms_of_service_id,
        )
        .await
        .map_err(|err| {
            StoreError::database(
                format!(
                    "failed to delete {} with userId={} and termsOfServiceId={}",
                    RESOURCE, user_id, terms_of_service_id
                ),
                err,
            )
        })?;

        tracing::debug!("Deleted {} terms of service row(s)", deleted);
        Ok(())
    }
}
