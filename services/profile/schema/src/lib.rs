//! sea-orm entities owned by the profile service.
//!
//! The wizard's tables are all scoped by the provider-issued account id.
//! There are no foreign keys between them: sections may be saved in any
//! order, so no table can require another's row to exist first.

pub mod academic_info;
pub mod documents;
pub mod employment_experiences;
pub mod profiles;
