//! Applicant root entity and listing projections.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use talaan_core::types::{DbId, Timestamp};

/// A row from the `applicants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Applicant {
    pub applicant_id: DbId,
    pub ssnum: String,
    pub lname: String,
    pub fname: String,
    pub mname: String,
    pub sfx: String,
    pub dbirth: Option<NaiveDate>,
    pub sex: String,
    pub cvstatus: String,
    pub cvstatus_other: String,
    pub taxid: String,
    pub nation: String,
    pub religion: String,
    pub pbirth: String,
    pub cphone: String,
    pub email: String,
    pub tphone: String,
    pub printed_name: String,
    pub cert_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Column values for the root row on insert and update.
#[derive(Debug, Clone, Default)]
pub struct NewApplicant {
    pub ssnum: String,
    pub lname: String,
    pub fname: String,
    pub mname: String,
    pub sfx: String,
    pub dbirth: Option<NaiveDate>,
    pub sex: String,
    pub cvstatus: String,
    pub cvstatus_other: String,
    pub taxid: String,
    pub nation: String,
    pub religion: String,
    pub pbirth: String,
    pub cphone: String,
    pub email: String,
    pub tphone: String,
    pub printed_name: String,
    pub cert_date: Option<NaiveDate>,
}

/// Flat listing row, aliased to the legacy table-view columns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicantSummary {
    pub id: DbId,
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub hobby: String,
}

/// Compact directory row joined with the home-address city and province.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicantDirectoryRow {
    pub id: DbId,
    pub fname: String,
    pub lname: String,
    pub ssnum: String,
    pub city: Option<String>,
    pub province: Option<String>,
}
