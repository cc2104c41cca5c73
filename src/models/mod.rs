pub mod id;
mod user_terms_of_service;

pub use user_terms_of_service::*;
