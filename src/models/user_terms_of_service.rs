use crate::models::id::{new_id, validate_id};
use chrono::Utc;
use serde_derive::{Deserialize, Serialize};
use serde_valid::Validate;

/// Which terms-of-service version a user has accepted, and when.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct UserTermsOfService {
    #[sqlx(rename = "userid")]
    #[validate(custom(validate_id))]
    pub user_id: String,
    #[sqlx(rename = "termsofserviceid")]
    #[validate(custom(validate_id))]
    pub terms_of_service_id: String,
    /// Milliseconds since the Unix epoch.
    #[sqlx(rename = "createat")]
    #[validate(minimum = 1)]
    pub create_at: i64,
}

impl UserTermsOfService {
    pub fn new(user_id: impl Into<String>, terms_of_service_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            terms_of_service_id: terms_of_service_id.into(),
            create_at: 0,
        }
    }

    /// Stamps the record before it is written.
    pub fn pre_save(&mut self) {
        if self.user_id.is_empty() {
            self.user_id = new_id();
        }
        self.create_at = Utc::now().timestamp_millis();
    }

    pub fn is_valid(&self) -> Result<(), serde_valid::validation::Errors> {
        self.validate()
    }
}
