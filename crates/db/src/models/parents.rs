//! Parents entity (1:1 with the applicant, always written on insert).

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use talaan_core::types::DbId;

/// A row from the `applicant_parents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Parents {
    pub applicant_id: DbId,
    pub lfather: String,
    pub ffather: String,
    pub mfather: String,
    pub sfxfather: String,
    pub fbirth: Option<NaiveDate>,
    pub lmother: String,
    pub fmother: String,
    pub mmother: String,
    pub sfxmother: String,
    pub mbirth: Option<NaiveDate>,
}

/// Column values for the parents row.
#[derive(Debug, Clone, Default)]
pub struct NewParents {
    pub lfather: String,
    pub ffather: String,
    pub mfather: String,
    pub sfxfather: String,
    pub fbirth: Option<NaiveDate>,
    pub lmother: String,
    pub fmother: String,
    pub mmother: String,
    pub sfxmother: String,
    pub mbirth: Option<NaiveDate>,
}
