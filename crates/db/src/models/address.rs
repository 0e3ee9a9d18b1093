//! Home address entity (1:1 with the applicant, always written on insert).

use serde::Serialize;
use sqlx::FromRow;
use talaan_core::types::DbId;

/// A row from the `applicant_addresses` table. The nine numbered lines are
/// the form's free-text address boxes: 6 = city, 7 = province, 9 = zip.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Address {
    pub applicant_id: DbId,
    pub address_1: String,
    pub address_2: String,
    pub address_3: String,
    pub address_4: String,
    pub address_5: String,
    pub address_6: String,
    pub address_7: String,
    pub address_8: String,
    pub address_9: String,
    pub same_as_pbirth: bool,
}

/// Column values for the address row.
#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub address_1: String,
    pub address_2: String,
    pub address_3: String,
    pub address_4: String,
    pub address_5: String,
    pub address_6: String,
    pub address_7: String,
    pub address_8: String,
    pub address_9: String,
    pub same_as_pbirth: bool,
}
