use tokio::runtime::Runtime;

#[derive(Default)]
pub struct MigrateCommand;

impl MigrateCommand {
    pub fn new() -> Self {
        Self
    }
}

impl crate::console::commands::CallableTrait for MigrateCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        Runtime::new()?.block_on(async {
            let sql_store = super::connect().await?;
            sql_store.migrate().await?;
            println!("Migrations applied");
            Ok(())
        })
    }
}
