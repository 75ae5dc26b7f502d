pub mod password_hasher;
pub mod token_provider;
pub mod user_query;
