//! Whole-applicant aggregate shapes.
//!
//! The write side maps one intake form onto per-table column sets, deciding
//! the fan-out once: which dependents exist, which children are kept, which
//! employment type (if any) derives. The read side mirrors it: one root row
//! plus whatever dependents were found.

use serde::Serialize;
use talaan_core::employment::EmploymentType;
use talaan_core::intake::{parse_date, ApplicantIntake};

use crate::models::address::{Address, NewAddress};
use crate::models::applicant::{Applicant, NewApplicant};
use crate::models::child::{Child, NewChild};
use crate::models::employment::{Employment, NewEmployment};
use crate::models::parents::{NewParents, Parents};
use crate::models::spouse::{NewSpouse, Spouse};

/// The assembled read-side aggregate. Missing dependents are `None`/empty,
/// never errors; the aggregate exists as long as the root row does.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantAggregate {
    pub applicant: Applicant,
    pub address: Option<Address>,
    pub parents: Option<Parents>,
    pub spouse: Option<Spouse>,
    pub children: Vec<Child>,
    pub employment: Option<Employment>,
}

/// The write-side aggregate: root columns plus the dependents that will be
/// written. Address and parents are unconditional; spouse, children, and
/// employment carry their presence conditions already resolved.
#[derive(Debug, Clone)]
pub struct NewApplicantAggregate {
    pub applicant: NewApplicant,
    pub address: NewAddress,
    pub parents: NewParents,
    pub spouse: Option<NewSpouse>,
    pub children: Vec<NewChild>,
    pub employment: Option<NewEmployment>,
}

impl NewApplicantAggregate {
    /// Map a trimmed intake form onto column values.
    ///
    /// Expects [`ApplicantIntake::trimmed`] to have run; no further
    /// normalization happens here beyond date parsing.
    pub fn from_intake(form: &ApplicantIntake) -> Self {
        let applicant = NewApplicant {
            ssnum: form.ssnum.clone(),
            lname: form.lname.clone(),
            fname: form.fname.clone(),
            mname: form.mname.clone(),
            sfx: form.sfx.clone(),
            dbirth: parse_date(&form.dbirth),
            sex: form.sex.clone(),
            cvstatus: form.cvstatus.clone(),
            cvstatus_other: form.cvstatus_other.clone(),
            taxid: form.taxid.clone(),
            nation: form.nation.clone(),
            religion: form.religion.clone(),
            pbirth: form.pbirth.clone(),
            cphone: form.cphone.clone(),
            email: form.email.clone(),
            tphone: form.tphone.clone(),
            printed_name: form.printed_name.clone(),
            cert_date: parse_date(&form.cert_date),
        };

        let address = NewAddress {
            address_1: form.address_1.clone(),
            address_2: form.address_2.clone(),
            address_3: form.address_3.clone(),
            address_4: form.address_4.clone(),
            address_5: form.address_5.clone(),
            address_6: form.address_6.clone(),
            address_7: form.address_7.clone(),
            address_8: form.address_8.clone(),
            address_9: form.address_9.clone(),
            same_as_pbirth: form.same_as_pbirth,
        };

        let parents = NewParents {
            lfather: form.lfather.clone(),
            ffather: form.ffather.clone(),
            mfather: form.mfather.clone(),
            sfxfather: form.sfxfather.clone(),
            fbirth: parse_date(&form.fbirth),
            lmother: form.lmother.clone(),
            fmother: form.fmother.clone(),
            mmother: form.mmother.clone(),
            sfxmother: form.sfxmother.clone(),
            mbirth: parse_date(&form.mbirth),
        };

        let spouse = form.has_spouse().then(|| NewSpouse {
            lspouse: form.lspouse.clone(),
            fspouse: form.fspouse.clone(),
            mspouse: form.mspouse.clone(),
            sfxspouse: form.sfxspouse.clone(),
            sbirth: parse_date(&form.sbirth),
        });

        let children = form
            .children
            .iter()
            .filter(|child| child.is_named())
            .map(|child| NewChild {
                lname: child.lname.clone(),
                fname: child.fname.clone(),
                mname: child.mname.clone(),
                sfx: child.sfx.clone(),
                dbirth: parse_date(&child.dbirth),
            })
            .collect();

        let employment =
            EmploymentType::derive(&form.profession, &form.faddress, &form.spouse_ssnum).map(
                |employment_type| NewEmployment {
                    employment_type,
                    profession: form.profession.clone(),
                    ystart: form.ystart.clone(),
                    mearning: form.mearning.clone(),
                    faddress: form.faddress.clone(),
                    ofw_monthly_earnings: form.ofw_monthly_earnings.clone(),
                    spouse_ssnum: form.spouse_ssnum.clone(),
                    ffprogram: form.ffprogram.clone(),
                    ffp: form.ffp.clone(),
                },
            );

        Self {
            applicant,
            address,
            parents,
            spouse,
            children,
            employment,
        }
    }
}
