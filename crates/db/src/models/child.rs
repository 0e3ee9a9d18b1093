//! Child entity (1:many, one row per named child entry).

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use talaan_core::types::DbId;

/// A row from the `applicant_children` table. `child_id` order is
/// insertion order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Child {
    pub child_id: DbId,
    pub applicant_id: DbId,
    pub lname: String,
    pub fname: String,
    pub mname: String,
    pub sfx: String,
    pub dbirth: Option<NaiveDate>,
}

/// Column values for one child row.
#[derive(Debug, Clone, Default)]
pub struct NewChild {
    pub lname: String,
    pub fname: String,
    pub mname: String,
    pub sfx: String,
    pub dbirth: Option<NaiveDate>,
}
