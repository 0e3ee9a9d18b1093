//! Employment entity (0:1, written only when a type derives from the form).

use serde::Serialize;
use sqlx::FromRow;
use talaan_core::employment::EmploymentType;
use talaan_core::types::DbId;

/// A row from the `applicant_employment` table. `employment_type` holds one
/// of the legacy labels (`Self-Employed`, `OFW`, `Non-Working Spouse`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employment {
    pub applicant_id: DbId,
    pub employment_type: String,
    pub profession: String,
    pub ystart: String,
    pub mearning: String,
    pub faddress: String,
    pub ofw_monthly_earnings: String,
    pub spouse_ssnum: String,
    pub ffprogram: String,
    pub ffp: String,
}

/// Column values for the employment row. The type is carried as the domain
/// enum and rendered to its label at bind time.
#[derive(Debug, Clone)]
pub struct NewEmployment {
    pub employment_type: EmploymentType,
    pub profession: String,
    pub ystart: String,
    pub mearning: String,
    pub faddress: String,
    pub ofw_monthly_earnings: String,
    pub spouse_ssnum: String,
    pub ffprogram: String,
    pub ffp: String,
}
