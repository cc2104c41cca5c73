pub mod migrate;
pub mod ping;
pub mod terms;

pub use migrate::*;
pub use ping::*;
pub use terms::*;

use crate::configuration::get_configuration;
use crate::helpers::db_pools::SqlStore;

/// One console subcommand, ready to run.
pub trait CallableTrait {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// Reads configuration and opens the master and replica pools.
pub(crate) async fn connect() -> Result<SqlStore, Box<dyn std::error::Error>> {
    let settings = get_configuration()?;
    let sql_store = SqlStore::connect(&settings.database).await?;
    Ok(sql_store)
}
