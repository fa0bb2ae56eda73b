pub mod academic_info;
pub mod auth;
pub mod document;
pub mod employment_info;
pub mod personal_info;
pub mod review;
