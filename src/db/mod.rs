pub mod user_terms_of_service;
