pub mod auth_provider;
pub mod db;
pub mod object_store;
pub mod session;
