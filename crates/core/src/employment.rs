//! Employment classification derived from the intake form.
//!
//! The form never submits an employment type directly. It is derived from
//! which of three trigger fields the applicant filled in, and an applicant
//! with none of them filled simply has no employment record.

use serde::{Deserialize, Serialize};

/// How an applicant is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    SelfEmployed,
    Ofw,
    NonWorkingSpouse,
}

impl EmploymentType {
    /// Derive the classification from the trigger fields.
    ///
    /// Precedence: a profession classifies the applicant as self-employed
    /// even when a foreign address or spouse SS number is also present, and
    /// a foreign address wins over a spouse SS number. All blank derives
    /// `None`.
    pub fn derive(profession: &str, faddress: &str, spouse_ssnum: &str) -> Option<Self> {
        if !profession.trim().is_empty() {
            Some(Self::SelfEmployed)
        } else if !faddress.trim().is_empty() {
            Some(Self::Ofw)
        } else if !spouse_ssnum.trim().is_empty() {
            Some(Self::NonWorkingSpouse)
        } else {
            None
        }
    }

    /// Label persisted in `applicant_employment.employment_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfEmployed => "Self-Employed",
            Self::Ofw => "OFW",
            Self::NonWorkingSpouse => "Non-Working Spouse",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
