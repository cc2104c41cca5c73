use crate::store::{SqlUserTermsOfServiceStore, UserTermsOfServiceStore};
use tokio::runtime::Runtime;

pub struct GetCommand {
    user_id: String,
}

impl GetCommand {
    pub fn new(user_id: String) -> Self {
        Self { user_id }
    }
}

impl crate::console::commands::CallableTrait for GetCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        Runtime::new()?.block_on(async {
            let store = SqlUserTermsOfServiceStore::new(crate::console::commands::connect().await?);

            match store.get_by_user(&self.user_id).await {
                Ok(item) => {
                    println!("{}", serde_json::to_string_pretty(&item)?);
                    Ok(())
                }
                Err(err) if err.is_not_found() => {
                    println!("User {} has not accepted any terms of service", self.user_id);
                    Ok(())
                }
                Err(err) => Err(err.into()),
            }
        })
    }
}
