//! Applicant intake form: the typed request body and its validation rules.
//!
//! One flat struct carries every submitted field; serde renames preserve the
//! field names the registration form has always posted (`address-1`,
//! `cert-date`, `spouse-ssnum`, ...), so the struct doubles as the mapping
//! from form field names to column values. Validation accumulates every
//! violation into a list of human-readable messages rather than stopping at
//! the first.

use std::sync::OnceLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use validator::ValidateEmail;

/// One entry of the repeated children section of the form.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ChildEntry {
    #[serde(default)]
    pub lname: String,
    #[serde(default)]
    pub fname: String,
    #[serde(default)]
    pub mname: String,
    #[serde(default)]
    pub sfx: String,
    #[serde(default)]
    pub dbirth: String,
}

impl ChildEntry {
    /// An entry is persisted only when at least one name field is filled in.
    pub fn is_named(&self) -> bool {
        !self.lname.trim().is_empty() || !self.fname.trim().is_empty()
    }
}

/// The full multi-section registration form, as submitted.
///
/// Every field arrives as a string (dates included); absent fields default
/// to empty so partial submissions deserialize cleanly.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ApplicantIntake {
    // Personal information
    #[serde(default)]
    pub ssnum: String,
    #[serde(default)]
    pub lname: String,
    #[serde(default)]
    pub fname: String,
    #[serde(default)]
    pub mname: String,
    #[serde(default)]
    pub sfx: String,
    #[serde(default)]
    pub dbirth: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub cvstatus: String,
    #[serde(default)]
    pub cvstatus_other: String,
    #[serde(default)]
    pub taxid: String,
    #[serde(default)]
    pub nation: String,
    #[serde(default)]
    pub religion: String,
    #[serde(default)]
    pub pbirth: String,
    #[serde(default)]
    pub cphone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub tphone: String,
    #[serde(default, rename = "printed-name")]
    pub printed_name: String,
    #[serde(default, rename = "cert-date")]
    pub cert_date: String,

    // Home address
    #[serde(default, rename = "address-1")]
    pub address_1: String,
    #[serde(default, rename = "address-2")]
    pub address_2: String,
    #[serde(default, rename = "address-3")]
    pub address_3: String,
    #[serde(default, rename = "address-4")]
    pub address_4: String,
    #[serde(default, rename = "address-5")]
    pub address_5: String,
    #[serde(default, rename = "address-6")]
    pub address_6: String,
    #[serde(default, rename = "address-7")]
    pub address_7: String,
    #[serde(default, rename = "address-8")]
    pub address_8: String,
    #[serde(default, rename = "address-9")]
    pub address_9: String,
    #[serde(default)]
    pub same_as_pbirth: bool,

    // Parents
    #[serde(default)]
    pub lfather: String,
    #[serde(default)]
    pub ffather: String,
    #[serde(default)]
    pub mfather: String,
    #[serde(default)]
    pub sfxfather: String,
    #[serde(default)]
    pub fbirth: String,
    #[serde(default)]
    pub lmother: String,
    #[serde(default)]
    pub fmother: String,
    #[serde(default)]
    pub mmother: String,
    #[serde(default)]
    pub sfxmother: String,
    #[serde(default)]
    pub mbirth: String,

    // Spouse
    #[serde(default)]
    pub lspouse: String,
    #[serde(default)]
    pub fspouse: String,
    #[serde(default)]
    pub mspouse: String,
    #[serde(default)]
    pub sfxspouse: String,
    #[serde(default)]
    pub sbirth: String,

    // Children
    #[serde(default)]
    pub children: Vec<ChildEntry>,

    // Employment
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub ystart: String,
    #[serde(default)]
    pub mearning: String,
    #[serde(default)]
    pub faddress: String,
    #[serde(default)]
    pub ofw_monthly_earnings: String,
    #[serde(default, rename = "spouse-ssnum")]
    pub spouse_ssnum: String,
    #[serde(default)]
    pub ffprogram: String,
    #[serde(default)]
    pub ffp: String,
}

impl ApplicantIntake {
    /// Trim every free-text field, children included.
    ///
    /// Validation and persistence both assume a trimmed form; call this once
    /// at the request boundary.
    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.ssnum,
            &mut self.lname,
            &mut self.fname,
            &mut self.mname,
            &mut self.sfx,
            &mut self.dbirth,
            &mut self.sex,
            &mut self.cvstatus,
            &mut self.cvstatus_other,
            &mut self.taxid,
            &mut self.nation,
            &mut self.religion,
            &mut self.pbirth,
            &mut self.cphone,
            &mut self.email,
            &mut self.tphone,
            &mut self.printed_name,
            &mut self.cert_date,
            &mut self.address_1,
            &mut self.address_2,
            &mut self.address_3,
            &mut self.address_4,
            &mut self.address_5,
            &mut self.address_6,
            &mut self.address_7,
            &mut self.address_8,
            &mut self.address_9,
            &mut self.lfather,
            &mut self.ffather,
            &mut self.mfather,
            &mut self.sfxfather,
            &mut self.fbirth,
            &mut self.lmother,
            &mut self.fmother,
            &mut self.mmother,
            &mut self.sfxmother,
            &mut self.mbirth,
            &mut self.lspouse,
            &mut self.fspouse,
            &mut self.mspouse,
            &mut self.sfxspouse,
            &mut self.sbirth,
            &mut self.profession,
            &mut self.ystart,
            &mut self.mearning,
            &mut self.faddress,
            &mut self.ofw_monthly_earnings,
            &mut self.spouse_ssnum,
            &mut self.ffprogram,
            &mut self.ffp,
        ] {
            trim_in_place(field);
        }

        for child in &mut self.children {
            trim_in_place(&mut child.lname);
            trim_in_place(&mut child.fname);
            trim_in_place(&mut child.mname);
            trim_in_place(&mut child.sfx);
            trim_in_place(&mut child.dbirth);
        }

        self
    }

    /// A spouse record is written only when a spouse name was given.
    pub fn has_spouse(&self) -> bool {
        !self.lspouse.trim().is_empty() || !self.fspouse.trim().is_empty()
    }

    /// Registration rules. Returns every violation, not just the first;
    /// an empty `Vec` means the form may be persisted.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (value, label) in [
            (&self.ssnum, "SS Number"),
            (&self.lname, "Last Name"),
            (&self.fname, "First Name"),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{label} is required"));
            }
        }

        match self.dbirth.trim() {
            "" => errors.push("Date of Birth is required".to_string()),
            raw => match parse_date(raw) {
                None => errors.push("Date of Birth is not a valid date".to_string()),
                Some(date) if date >= Utc::now().date_naive() => {
                    errors.push("Date of Birth must be in the past".to_string());
                }
                Some(_) => {}
            },
        }

        for (value, label) in [
            (&self.sex, "Sex"),
            (&self.cvstatus, "Civil Status"),
            (&self.nation, "Nationality"),
            (&self.pbirth, "Place of Birth"),
            (&self.address_6, "Address (City)"),
            (&self.address_7, "Address (Province)"),
            (&self.address_9, "Zip Code"),
            (&self.cphone, "Mobile Number"),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{label} is required"));
            }
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !email.validate_email() {
            errors.push("Invalid email format".to_string());
        }

        let cphone = self.cphone.trim();
        if !cphone.is_empty() && !valid_mobile(cphone) {
            errors.push(
                "Invalid phone number format (must be 09XXXXXXXXX or +639XXXXXXXXX)".to_string(),
            );
        }

        errors
    }

    /// Update rules: only format checks, applied to fields that were filled
    /// in. Required-field rules do not apply when amending a record.
    pub fn validate_for_update(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let dbirth = self.dbirth.trim();
        if !dbirth.is_empty() {
            match parse_date(dbirth) {
                None => errors.push("Date of Birth is not a valid date".to_string()),
                Some(date) if date >= Utc::now().date_naive() => {
                    errors.push("Date of Birth must be in the past".to_string());
                }
                Some(_) => {}
            }
        }

        let email = self.email.trim();
        if !email.is_empty() && !email.validate_email() {
            errors.push("Invalid email format".to_string());
        }

        let cphone = self.cphone.trim();
        if !cphone.is_empty() && !valid_mobile(cphone) {
            errors.push(
                "Invalid phone number format (must be 09XXXXXXXXX or +639XXXXXXXXX)".to_string(),
            );
        }

        errors
    }
}

fn trim_in_place(s: &mut String) {
    let t = s.trim().to_string();
    *s = t;
}

/// Parse a submitted date, `YYYY-MM-DD` first with a `MM/DD/YYYY` fallback.
/// Blank or unparseable input yields `None`; persisted dates are always
/// normalized `NaiveDate`s, never raw strings.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

static MOBILE_RE: OnceLock<Regex> = OnceLock::new();

/// Local mobile format: `09XXXXXXXXX` or `+639XXXXXXXXX`. Separator
/// characters (spaces, dashes, dots, parentheses) are stripped before
/// matching; a leading `+` is kept, so a bare `639...` does not pass.
fn valid_mobile(raw: &str) -> bool {
    let re = MOBILE_RE
        .get_or_init(|| Regex::new(r"^(09\d{9}|\+639\d{9})$").expect("mobile pattern compiles"));

    let mut stripped = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        if c.is_ascii_digit() || (c == '+' && i == 0) {
            stripped.push(c);
        }
    }
    re.is_match(&stripped)
}
