//! Entity models and DTOs.
//!
//! Each submodule carries:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A plain `New*` struct with the column values for inserts and updates
//!
//! `aggregate` adds the whole-applicant shapes: the write-side
//! [`aggregate::NewApplicantAggregate`] built from an intake form and the
//! read-side [`aggregate::ApplicantAggregate`] assembled by the fan-in.

pub mod address;
pub mod aggregate;
pub mod applicant;
pub mod child;
pub mod employment;
pub mod parents;
pub mod spouse;
