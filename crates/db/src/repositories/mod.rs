//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod applicant_repo;

pub use applicant_repo::ApplicantRepo;
