//! Domain logic for the applicant registry.
//!
//! Pure types and rules with no I/O: shared type aliases, the domain error
//! enum, the typed intake form with its validation rules, and the
//! employment-type derivation table.

pub mod employment;
pub mod error;
pub mod intake;
pub mod types;
