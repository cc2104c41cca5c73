use crate::models::UserTermsOfService;
use crate::store::{SqlUserTermsOfServiceStore, UserTermsOfServiceStore};
use tokio::runtime::Runtime;

pub struct AcceptCommand {
    user_id: String,
    terms_of_service_id: String,
}

impl AcceptCommand {
    pub fn new(user_id: String, terms_of_service_id: String) -> Self {
        Self {
            user_id,
            terms_of_service_id,
        }
    }
}

impl crate::console::commands::CallableTrait for AcceptCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        Runtime::new()?.block_on(async {
            let store = SqlUserTermsOfServiceStore::new(crate::console::commands::connect().await?);

            let item = UserTermsOfService::new(self.user_id.clone(), self.terms_of_service_id.clone());
            let saved = store.save(item).await?;
            println!("{}", serde_json::to_string_pretty(&saved)?);

            Ok(())
        })
    }
}
