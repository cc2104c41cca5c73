//! SQL statements for the `UserTermsOfService` table.
//!
//! Callers choose the pool: reads may go to a replica, writes must go to
//! the master.

use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_by_user(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<models::UserTermsOfService>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch terms of service acceptance by user id.");
    sqlx::query_as::<_, models::UserTermsOfService>(
        r#"
        SELECT
            UserId, TermsOfServiceId, CreateAt
        FROM UserTermsOfService
        WHERE UserId = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
}

/// Returns the number of rows updated; zero means the user has no record yet.
pub async fn update(pool: &PgPool, item: &models::UserTermsOfService) -> Result<u64, sqlx::Error> {
    let query_span = tracing::info_span!("Updating terms of service acceptance");
    sqlx::query::<sqlx::Postgres>(
        r#"
        UPDATE UserTermsOfService
        SET
            TermsOfServiceId = $2,
            CreateAt = $3
        WHERE UserId = $1
        "#,
    )
    .bind(&item.user_id)
    .bind(&item.terms_of_service_id)
    .bind(item.create_at)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|result| result.rows_affected())
}

pub async fn insert(pool: &PgPool, item: &models::UserTermsOfService) -> Result<(), sqlx::Error> {
    let query_span = tracing::info_span!("Saving new terms of service acceptance into the database");
    sqlx::query::<sqlx::Postgres>(
        r#"
        INSERT INTO UserTermsOfService (UserId, TermsOfServiceId, CreateAt)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(&item.user_id)
    .bind(&item.terms_of_service_id)
    .bind(item.create_at)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
}

pub async fn delete(
    pool: &PgPool,
    user_id: &str,
    terms_of_service_id: &str,
) -> Result<u64, sqlx::Error> {
    let query_span = tracing::info_span!("Deleting terms of service acceptance");
    sqlx::query::<sqlx::Postgres>(
        "DELETE FROM UserTermsOfService WHERE UserId = $1 AND TermsOfServiceId = $2;",
    )
    .bind(user_id)
    .bind(terms_of_service_id)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|result| result.rows_affected())
}
