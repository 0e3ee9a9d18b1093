//! Spouse entity (0:1, written only when a spouse name was submitted).

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use talaan_core::types::DbId;

/// A row from the `applicant_spouse` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Spouse {
    pub applicant_id: DbId,
    pub lspouse: String,
    pub fspouse: String,
    pub mspouse: String,
    pub sfxspouse: String,
    pub sbirth: Option<NaiveDate>,
}

/// Column values for the spouse row.
#[derive(Debug, Clone, Default)]
pub struct NewSpouse {
    pub lspouse: String,
    pub fspouse: String,
    pub mspouse: String,
    pub sfxspouse: String,
    pub sbirth: Option<NaiveDate>,
}
