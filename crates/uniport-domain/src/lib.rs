//! Domain types for the Uniport profile wizard.
//!
//! This crate contains only pure types and validation rules with no
//! framework or I/O dependencies. Import in `usecase/` and `domain/` layers;
//! never in `infra/` or `handlers/`.

pub mod document;
pub mod education;
pub mod employment;
pub mod forms;
pub mod profile;
pub mod validate;
pub mod wizard;
