use tokio::runtime::Runtime;

#[derive(Default)]
pub struct PingCommand;

impl PingCommand {
    pub fn new() -> Self {
        Self
    }
}

impl crate::console::commands::CallableTrait for PingCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        Runtime::new()?.block_on(async {
            let sql_store = super::connect().await?;
            let answered = sql_store.ping().await?;
            println!("{} database connection(s) answered", answered);
            Ok(())
        })
    }
}
