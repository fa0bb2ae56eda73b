pub mod academic_info;
pub mod auth;
pub mod documents;
pub mod employment_info;
pub mod health;
pub mod personal_info;
pub mod review;
pub mod wizard;
