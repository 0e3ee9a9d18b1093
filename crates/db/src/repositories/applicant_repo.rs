//! Repository for the applicant aggregate across its six tables.
//!
//! All writes that touch more than one table run inside a single
//! transaction: either the whole aggregate lands, or none of it does.

use sqlx::PgPool;
use talaan_core::types::DbId;

use crate::models::address::{Address, NewAddress};
use crate::models::aggregate::{ApplicantAggregate, NewApplicantAggregate};
use crate::models::applicant::{Applicant, ApplicantDirectoryRow, ApplicantSummary};
use crate::models::child::{Child, NewChild};
use crate::models::employment::{Employment, NewEmployment};
use crate::models::parents::{NewParents, Parents};
use crate::models::spouse::{NewSpouse, Spouse};

/// Column list shared across root-row queries to avoid repetition.
const COLUMNS: &str = "applicant_id, ssnum, lname, fname, mname, sfx, dbirth, sex, cvstatus, \
     cvstatus_other, taxid, nation, religion, pbirth, cphone, email, tphone, printed_name, \
     cert_date, created_at, updated_at";

const ADDRESS_COLUMNS: &str = "applicant_id, address_1, address_2, address_3, address_4, \
     address_5, address_6, address_7, address_8, address_9, same_as_pbirth";

const PARENTS_COLUMNS: &str = "applicant_id, lfather, ffather, mfather, sfxfather, fbirth, \
     lmother, fmother, mmother, sfxmother, mbirth";

const SPOUSE_COLUMNS: &str = "applicant_id, lspouse, fspouse, mspouse, sfxspouse, sbirth";

const CHILD_COLUMNS: &str = "child_id, applicant_id, lname, fname, mname, sfx, dbirth";

const EMPLOYMENT_COLUMNS: &str = "applicant_id, employment_type, profession, ystart, mearning, \
     faddress, ofw_monthly_earnings, spouse_ssnum, ffprogram, ffp";

type Tx<'a> = sqlx::Transaction<'a, sqlx::Postgres>;

/// Provides the transactional fan-out writer and fan-in reader for the
/// applicant aggregate.
pub struct ApplicantRepo;

impl ApplicantRepo {
    /// Insert a full aggregate, returning the created root row.
    ///
    /// Root first (to obtain the generated id), then address and parents
    /// unconditionally, then the conditional dependents. Any failure drops
    /// the transaction and nothing persists.
    pub async fn create(
        pool: &PgPool,
        input: &NewApplicantAggregate,
    ) -> Result<Applicant, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO applicants (ssnum, lname, fname, mname, sfx, dbirth, sex, cvstatus, \
                cvstatus_other, taxid, nation, religion, pbirth, cphone, email, tphone, \
                printed_name, cert_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                $17, $18) \
             RETURNING {COLUMNS}"
        );
        let applicant = sqlx::query_as::<_, Applicant>(&insert_query)
            .bind(&input.applicant.ssnum)
            .bind(&input.applicant.lname)
            .bind(&input.applicant.fname)
            .bind(&input.applicant.mname)
            .bind(&input.applicant.sfx)
            .bind(input.applicant.dbirth)
            .bind(&input.applicant.sex)
            .bind(&input.applicant.cvstatus)
            .bind(&input.applicant.cvstatus_other)
            .bind(&input.applicant.taxid)
            .bind(&input.applicant.nation)
            .bind(&input.applicant.religion)
            .bind(&input.applicant.pbirth)
            .bind(&input.applicant.cphone)
            .bind(&input.applicant.email)
            .bind(&input.applicant.tphone)
            .bind(&input.applicant.printed_name)
            .bind(input.applicant.cert_date)
            .fetch_one(&mut *tx)
            .await?;

        let id = applicant.applicant_id;

        Self::insert_address(&mut tx, id, &input.address).await?;
        Self::insert_parents(&mut tx, id, &input.parents).await?;

        if let Some(spouse) = &input.spouse {
            Self::insert_spouse(&mut tx, id, spouse).await?;
        }

        for child in &input.children {
            Self::insert_child(&mut tx, id, child).await?;
        }

        if let Some(employment) = &input.employment {
            Self::insert_employment(&mut tx, id, employment).await?;
        }

        tx.commit().await?;
        Ok(applicant)
    }

    /// Find a root row by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Applicant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applicants WHERE applicant_id = $1");
        sqlx::query_as::<_, Applicant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an applicant with all dependents assembled.
    ///
    /// Returns `None` only when the root row is missing; absent dependents
    /// surface as `None`/empty in the aggregate. Children come back in
    /// insertion order.
    pub async fn find_aggregate(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ApplicantAggregate>, sqlx::Error> {
        let applicant = match Self::find_by_id(pool, id).await? {
            Some(applicant) => applicant,
            None => return Ok(None),
        };

        let address_query =
            format!("SELECT {ADDRESS_COLUMNS} FROM applicant_addresses WHERE applicant_id = $1");
        let address = sqlx::query_as::<_, Address>(&address_query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let parents_query =
            format!("SELECT {PARENTS_COLUMNS} FROM applicant_parents WHERE applicant_id = $1");
        let parents = sqlx::query_as::<_, Parents>(&parents_query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let spouse_query =
            format!("SELECT {SPOUSE_COLUMNS} FROM applicant_spouse WHERE applicant_id = $1");
        let spouse = sqlx::query_as::<_, Spouse>(&spouse_query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let children_query = format!(
            "SELECT {CHILD_COLUMNS} FROM applicant_children \
             WHERE applicant_id = $1 ORDER BY child_id"
        );
        let children = sqlx::query_as::<_, Child>(&children_query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        let employment_query = format!(
            "SELECT {EMPLOYMENT_COLUMNS} FROM applicant_employment WHERE applicant_id = $1"
        );
        let employment = sqlx::query_as::<_, Employment>(&employment_query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(Some(ApplicantAggregate {
            applicant,
            address,
            parents,
            spouse,
            children,
            employment,
        }))
    }

    /// List every applicant as a flat summary, newest first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ApplicantSummary>, sqlx::Error> {
        sqlx::query_as::<_, ApplicantSummary>(
            "SELECT applicant_id AS id, fname AS first, lname AS last, email, \
                cphone AS phone, nation AS location, religion AS hobby \
             FROM applicants \
             ORDER BY applicant_id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Compact directory listing joined with the home-address city and
    /// province, newest first.
    pub async fn list_directory(pool: &PgPool) -> Result<Vec<ApplicantDirectoryRow>, sqlx::Error> {
        sqlx::query_as::<_, ApplicantDirectoryRow>(
            "SELECT a.applicant_id AS id, a.fname, a.lname, a.ssnum, \
                ad.address_6 AS city, ad.address_7 AS province \
             FROM applicants a \
             LEFT JOIN applicant_addresses ad ON ad.applicant_id = a.applicant_id \
             ORDER BY a.applicant_id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Existence pre-check used before insert to keep one email per record.
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM applicants WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Update an aggregate in place.
    ///
    /// Returns `Ok(false)` without touching anything when the root row does
    /// not exist. Address and parents are always updated; spouse and
    /// employment only when carried by the input. Dependent updates
    /// silently no-op when the dependent row was never written. Children
    /// rows are not part of the update fan-out.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewApplicantAggregate,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE applicants SET \
                ssnum = $2, lname = $3, fname = $4, mname = $5, sfx = $6, dbirth = $7, \
                sex = $8, cvstatus = $9, cvstatus_other = $10, taxid = $11, nation = $12, \
                religion = $13, pbirth = $14, cphone = $15, email = $16, tphone = $17, \
                printed_name = $18, cert_date = $19, updated_at = NOW() \
             WHERE applicant_id = $1",
        )
        .bind(id)
        .bind(&input.applicant.ssnum)
        .bind(&input.applicant.lname)
        .bind(&input.applicant.fname)
        .bind(&input.applicant.mname)
        .bind(&input.applicant.sfx)
        .bind(input.applicant.dbirth)
        .bind(&input.applicant.sex)
        .bind(&input.applicant.cvstatus)
        .bind(&input.applicant.cvstatus_other)
        .bind(&input.applicant.taxid)
        .bind(&input.applicant.nation)
        .bind(&input.applicant.religion)
        .bind(&input.applicant.pbirth)
        .bind(&input.applicant.cphone)
        .bind(&input.applicant.email)
        .bind(&input.applicant.tphone)
        .bind(&input.applicant.printed_name)
        .bind(input.applicant.cert_date)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            "UPDATE applicant_addresses SET \
                address_1 = $2, address_2 = $3, address_3 = $4, address_4 = $5, \
                address_5 = $6, address_6 = $7, address_7 = $8, address_8 = $9, \
                address_9 = $10, same_as_pbirth = $11 \
             WHERE applicant_id = $1",
        )
        .bind(id)
        .bind(&input.address.address_1)
        .bind(&input.address.address_2)
        .bind(&input.address.address_3)
        .bind(&input.address.address_4)
        .bind(&input.address.address_5)
        .bind(&input.address.address_6)
        .bind(&input.address.address_7)
        .bind(&input.address.address_8)
        .bind(&input.address.address_9)
        .bind(input.address.same_as_pbirth)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE applicant_parents SET \
                lfather = $2, ffather = $3, mfather = $4, sfxfather = $5, fbirth = $6, \
                lmother = $7, fmother = $8, mmother = $9, sfxmother = $10, mbirth = $11 \
             WHERE applicant_id = $1",
        )
        .bind(id)
        .bind(&input.parents.lfather)
        .bind(&input.parents.ffather)
        .bind(&input.parents.mfather)
        .bind(&input.parents.sfxfather)
        .bind(input.parents.fbirth)
        .bind(&input.parents.lmother)
        .bind(&input.parents.fmother)
        .bind(&input.parents.mmother)
        .bind(&input.parents.sfxmother)
        .bind(input.parents.mbirth)
        .execute(&mut *tx)
        .await?;

        if let Some(spouse) = &input.spouse {
            sqlx::query(
                "UPDATE applicant_spouse SET \
                    lspouse = $2, fspouse = $3, mspouse = $4, sfxspouse = $5, sbirth = $6 \
                 WHERE applicant_id = $1",
            )
            .bind(id)
            .bind(&spouse.lspouse)
            .bind(&spouse.fspouse)
            .bind(&spouse.mspouse)
            .bind(&spouse.sfxspouse)
            .bind(spouse.sbirth)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(employment) = &input.employment {
            sqlx::query(
                "UPDATE applicant_employment SET \
                    employment_type = $2, profession = $3, ystart = $4, mearning = $5, \
                    faddress = $6, ofw_monthly_earnings = $7, spouse_ssnum = $8, \
                    ffprogram = $9, ffp = $10 \
                 WHERE applicant_id = $1",
            )
            .bind(id)
            .bind(employment.employment_type.as_str())
            .bind(&employment.profession)
            .bind(&employment.ystart)
            .bind(&employment.mearning)
            .bind(&employment.faddress)
            .bind(&employment.ofw_monthly_earnings)
            .bind(&employment.spouse_ssnum)
            .bind(&employment.ffprogram)
            .bind(&employment.ffp)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Delete the whole aggregate in one transaction, dependents first.
    ///
    /// Returns `true` if a root row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for table in [
            "applicant_children",
            "applicant_spouse",
            "applicant_employment",
            "applicant_parents",
            "applicant_addresses",
        ] {
            let query = format!("DELETE FROM {table} WHERE applicant_id = $1");
            sqlx::query(&query).bind(id).execute(&mut *tx).await?;
        }

        let result = sqlx::query("DELETE FROM applicants WHERE applicant_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Internal helpers: dependent inserts within the create transaction
    // -----------------------------------------------------------------------

    async fn insert_address(
        tx: &mut Tx<'_>,
        id: DbId,
        address: &NewAddress,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO applicant_addresses (applicant_id, address_1, address_2, address_3, \
                address_4, address_5, address_6, address_7, address_8, address_9, \
                same_as_pbirth) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(id)
        .bind(&address.address_1)
        .bind(&address.address_2)
        .bind(&address.address_3)
        .bind(&address.address_4)
        .bind(&address.address_5)
        .bind(&address.address_6)
        .bind(&address.address_7)
        .bind(&address.address_8)
        .bind(&address.address_9)
        .bind(address.same_as_pbirth)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn insert_parents(
        tx: &mut Tx<'_>,
        id: DbId,
        parents: &NewParents,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO applicant_parents (applicant_id, lfather, ffather, mfather, \
                sfxfather, fbirth, lmother, fmother, mmother, sfxmother, mbirth) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(id)
        .bind(&parents.lfather)
        .bind(&parents.ffather)
        .bind(&parents.mfather)
        .bind(&parents.sfxfather)
        .bind(parents.fbirth)
        .bind(&parents.lmother)
        .bind(&parents.fmother)
        .bind(&parents.mmother)
        .bind(&parents.sfxmother)
        .bind(parents.mbirth)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn insert_spouse(
        tx: &mut Tx<'_>,
        id: DbId,
        spouse: &NewSpouse,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO applicant_spouse (applicant_id, lspouse, fspouse, mspouse, \
                sfxspouse, sbirth) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(&spouse.lspouse)
        .bind(&spouse.fspouse)
        .bind(&spouse.mspouse)
        .bind(&spouse.sfxspouse)
        .bind(spouse.sbirth)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn insert_child(tx: &mut Tx<'_>, id: DbId, child: &NewChild) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO applicant_children (applicant_id, lname, fname, mname, sfx, dbirth) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(&child.lname)
        .bind(&child.fname)
        .bind(&child.mname)
        .bind(&child.sfx)
        .bind(child.dbirth)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn insert_employment(
        tx: &mut Tx<'_>,
        id: DbId,
        employment: &NewEmployment,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO applicant_employment (applicant_id, employment_type, profession, \
                ystart, mearning, faddress, ofw_monthly_earnings, spouse_ssnum, ffprogram, \
                ffp) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(id)
        .bind(employment.employment_type.as_str())
        .bind(&employment.profession)
        .bind(&employment.ystart)
        .bind(&employment.mearning)
        .bind(&employment.faddress)
        .bind(&employment.ofw_monthly_earnings)
        .bind(&employment.spouse_ssnum)
        .bind(&employment.ffprogram)
        .bind(&employment.ffp)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
