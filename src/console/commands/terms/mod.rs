mod accept;
mod delete;
mod get;

pub use accept::AcceptCommand;
pub use delete::DeleteCommand;
pub use get::GetCommand;
