use crate::store::{SqlUserTermsOfServiceStore, UserTermsOfServiceStore};
use tokio::runtime::Runtime;

pub struct DeleteCommand {
    user_id: String,
    terms_of_service_id: String,
}

impl DeleteCommand {
    pub fn new(user_id: String, terms_of_service_id: String) -> Self {
        Self {
            user_id,
            terms_of_service_id,
        }
    }
}

impl crate::console::commands::CallableTrait for DeleteCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        Runtime::new()?.block_on(async {
            let store = SqlUserTermsOfServiceStore::new(crate::console::commands::connect().await?);

            store
                .delete(&self.user_id, &self.terms_of_service_id)
                .await
                .map_err(|e| {
                    eprintln!("Delete failed: {}", e);
                    e
                })?;
            println!(
                "Removed terms of service {} acceptance for user {}",
                self.terms_of_service_id, self.user_id
            );

            Ok(())
        })
    }
}
