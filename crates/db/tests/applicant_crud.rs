//! Integration tests for the applicant aggregate repository.
//!
//! Exercises the transactional fan-out against a real database:
//! - Minimal create (root + address + parents, nothing conditional)
//! - Conditional dependents (spouse, children, employment derivation)
//! - Rollback of the whole aggregate when a dependent insert fails
//! - Fan-in assembly, listings, update fan-out, cascade delete

use assert_matches::assert_matches;
use sqlx::PgPool;
use talaan_core::employment::EmploymentType;
use talaan_core::intake::{ApplicantIntake, ChildEntry};
use talaan_db::models::aggregate::NewApplicantAggregate;
use talaan_db::repositories::ApplicantRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn base_intake(email: &str) -> ApplicantIntake {
    ApplicantIntake {
        ssnum: "1-2345678-9".to_string(),
        lname: "DOE".to_string(),
        fname: "JOHN".to_string(),
        dbirth: "1990-01-01".to_string(),
        sex: "M".to_string(),
        cvstatus: "Single".to_string(),
        nation: "Filipino".to_string(),
        religion: "Catholic".to_string(),
        pbirth: "Manila".to_string(),
        address_6: "Manila".to_string(),
        address_7: "NCR".to_string(),
        address_9: "1000".to_string(),
        cphone: "09171234567".to_string(),
        email: email.to_string(),
        ..Default::default()
    }
}

fn aggregate_from(intake: &ApplicantIntake) -> NewApplicantAggregate {
    NewApplicantAggregate::from_intake(&intake.clone().trimmed())
}

fn child(lname: &str, fname: &str) -> ChildEntry {
    ChildEntry {
        lname: lname.to_string(),
        fname: fname.to_string(),
        ..Default::default()
    }
}

async fn table_count(pool: &PgPool, table: &str, id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!(
        "SELECT COUNT(*) FROM {table} WHERE applicant_id = $1"
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Test: minimal create writes root + address + parents only
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_minimal_create(pool: PgPool) {
    let applicant = ApplicantRepo::create(&pool, &aggregate_from(&base_intake("john@example.com")))
        .await
        .unwrap();

    assert_eq!(applicant.lname, "DOE");
    assert_eq!(applicant.email, "john@example.com");
    assert_eq!(
        applicant.dbirth,
        chrono::NaiveDate::from_ymd_opt(1990, 1, 1)
    );
    assert!(applicant.cert_date.is_none());

    let id = applicant.applicant_id;
    assert_eq!(table_count(&pool, "applicant_addresses", id).await, 1);
    assert_eq!(table_count(&pool, "applicant_parents", id).await, 1);
    assert_eq!(table_count(&pool, "applicant_spouse", id).await, 0);
    assert_eq!(table_count(&pool, "applicant_children", id).await, 0);
    assert_eq!(table_count(&pool, "applicant_employment", id).await, 0);
}

// ---------------------------------------------------------------------------
// Test: full fan-out with spouse, children, and derived employment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_fan_out_completeness(pool: PgPool) {
    let mut intake = base_intake("maria@example.com");
    intake.lspouse = "SANTOS".to_string();
    intake.fspouse = "JOSE".to_string();
    intake.children = vec![child("DOE", "ANNA"), child("DOE", "BEN")];
    intake.profession = "Carpenter".to_string();

    let applicant = ApplicantRepo::create(&pool, &aggregate_from(&intake))
        .await
        .unwrap();
    let id = applicant.applicant_id;

    let aggregate = ApplicantRepo::find_aggregate(&pool, id)
        .await
        .unwrap()
        .expect("aggregate should exist");

    let spouse = aggregate.spouse.expect("spouse row should exist");
    assert_eq!(spouse.lspouse, "SANTOS");

    assert_eq!(aggregate.children.len(), 2);
    assert_eq!(aggregate.children[0].fname, "ANNA");
    assert_eq!(aggregate.children[1].fname, "BEN");

    let employment = aggregate.employment.expect("employment row should exist");
    assert_eq!(employment.employment_type, "Self-Employed");
    assert_eq!(employment.profession, "Carpenter");
}

// ---------------------------------------------------------------------------
// Test: blank spouse and unnamed child entries produce no rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_fan_out_omission(pool: PgPool) {
    let mut intake = base_intake("solo@example.com");
    intake.children = vec![ChildEntry::default()];

    let applicant = ApplicantRepo::create(&pool, &aggregate_from(&intake))
        .await
        .unwrap();
    let id = applicant.applicant_id;

    assert_eq!(table_count(&pool, "applicant_spouse", id).await, 0);
    assert_eq!(table_count(&pool, "applicant_children", id).await, 0);
    assert_eq!(table_count(&pool, "applicant_employment", id).await, 0);
}

// ---------------------------------------------------------------------------
// Test: profession outranks a foreign address in employment derivation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_employment_precedence(pool: PgPool) {
    let mut intake = base_intake("both@example.com");
    intake.profession = "Fisherman".to_string();
    intake.faddress = "14 Marina Rd, Singapore".to_string();

    let aggregate = aggregate_from(&intake);
    assert_eq!(
        aggregate.employment.as_ref().unwrap().employment_type,
        EmploymentType::SelfEmployed
    );

    let applicant = ApplicantRepo::create(&pool, &aggregate).await.unwrap();

    let stored = ApplicantRepo::find_aggregate(&pool, applicant.applicant_id)
        .await
        .unwrap()
        .unwrap()
        .employment
        .unwrap();
    assert_eq!(stored.employment_type, "Self-Employed");
    assert_eq!(stored.faddress, "14 Marina Rd, Singapore");
}

// ---------------------------------------------------------------------------
// Test: a failing dependent insert rolls back the whole aggregate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_failed_child_insert_rolls_back_root(pool: PgPool) {
    let mut intake = base_intake("rollback@example.com");
    // Exceeds the VARCHAR(100) limit on applicant_children.lname, so the
    // child insert fails after the root and address rows were written.
    intake.children = vec![child(&"X".repeat(120), "TOO-LONG")];

    let result = ApplicantRepo::create(&pool, &aggregate_from(&intake)).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));

    let applicants: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applicants")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(applicants, 0, "root row should have been rolled back");

    for table in [
        "applicant_addresses",
        "applicant_parents",
        "applicant_children",
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "{table} should be empty after rollback");
    }
}

// ---------------------------------------------------------------------------
// Test: reading twice with no writes in between yields identical aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_read_is_idempotent(pool: PgPool) {
    let mut intake = base_intake("twice@example.com");
    intake.children = vec![child("DOE", "ANNA")];

    let applicant = ApplicantRepo::create(&pool, &aggregate_from(&intake))
        .await
        .unwrap();

    let first = ApplicantRepo::find_aggregate(&pool, applicant.applicant_id)
        .await
        .unwrap()
        .unwrap();
    let second = ApplicantRepo::find_aggregate(&pool, applicant.applicant_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Test: missing id reads as None
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_read_missing_returns_none(pool: PgPool) {
    let aggregate = ApplicantRepo::find_aggregate(&pool, 9999).await.unwrap();
    assert!(aggregate.is_none());
}

// ---------------------------------------------------------------------------
// Test: summaries come back newest first with the legacy aliases
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_summaries_newest_first(pool: PgPool) {
    let first = ApplicantRepo::create(&pool, &aggregate_from(&base_intake("a@example.com")))
        .await
        .unwrap();
    let second = ApplicantRepo::create(&pool, &aggregate_from(&base_intake("b@example.com")))
        .await
        .unwrap();

    let summaries = ApplicantRepo::list_summaries(&pool).await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, second.applicant_id);
    assert_eq!(summaries[1].id, first.applicant_id);

    // Aliased projection: nation -> location, religion -> hobby.
    assert_eq!(summaries[0].first, "JOHN");
    assert_eq!(summaries[0].last, "DOE");
    assert_eq!(summaries[0].location, "Filipino");
    assert_eq!(summaries[0].hobby, "Catholic");
    assert_eq!(summaries[0].phone, "09171234567");
}

// ---------------------------------------------------------------------------
// Test: directory listing joins city and province from the address row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_directory_joins_address(pool: PgPool) {
    let mut intake = base_intake("dir@example.com");
    intake.address_6 = "Cebu City".to_string();
    intake.address_7 = "Cebu".to_string();
    ApplicantRepo::create(&pool, &aggregate_from(&intake))
        .await
        .unwrap();

    let rows = ApplicantRepo::list_directory(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].city.as_deref(), Some("Cebu City"));
    assert_eq!(rows[0].province.as_deref(), Some("Cebu"));
    assert_eq!(rows[0].ssnum, "1-2345678-9");
}

// ---------------------------------------------------------------------------
// Test: update fan-out rewrites root and dependents in one transaction
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_fan_out(pool: PgPool) {
    let applicant = ApplicantRepo::create(&pool, &aggregate_from(&base_intake("up@example.com")))
        .await
        .unwrap();
    let id = applicant.applicant_id;

    let mut amended = base_intake("up@example.com");
    amended.lname = "REYES".to_string();
    amended.address_6 = "Davao City".to_string();
    let updated = ApplicantRepo::update(&pool, id, &aggregate_from(&amended))
        .await
        .unwrap();
    assert!(updated);

    let aggregate = ApplicantRepo::find_aggregate(&pool, id).await.unwrap().unwrap();
    assert_eq!(aggregate.applicant.lname, "REYES");
    assert_eq!(aggregate.address.unwrap().address_6, "Davao City");
    // No spouse row existed and none was carried; still no row.
    assert!(aggregate.spouse.is_none());
}

// ---------------------------------------------------------------------------
// Test: update against a missing id changes nothing and reports false
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_id(pool: PgPool) {
    let updated = ApplicantRepo::update(&pool, 424242, &aggregate_from(&base_intake("x@example.com")))
        .await
        .unwrap();
    assert!(!updated);
}

// ---------------------------------------------------------------------------
// Test: updating a never-written spouse row silently no-ops
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_spouse_noop_when_row_absent(pool: PgPool) {
    let applicant = ApplicantRepo::create(&pool, &aggregate_from(&base_intake("noop@example.com")))
        .await
        .unwrap();
    let id = applicant.applicant_id;

    let mut amended = base_intake("noop@example.com");
    amended.lspouse = "SANTOS".to_string();
    let updated = ApplicantRepo::update(&pool, id, &aggregate_from(&amended))
        .await
        .unwrap();
    assert!(updated, "aggregate update should still succeed");

    // The UPDATE matched zero spouse rows; none appears afterwards.
    assert_eq!(table_count(&pool, "applicant_spouse", id).await, 0);
}

// ---------------------------------------------------------------------------
// Test: delete removes the full aggregate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_cascades(pool: PgPool) {
    let mut intake = base_intake("gone@example.com");
    intake.lspouse = "SANTOS".to_string();
    intake.children = vec![child("DOE", "ANNA")];
    intake.spouse_ssnum = "3-4567890-1".to_string();

    let applicant = ApplicantRepo::create(&pool, &aggregate_from(&intake))
        .await
        .unwrap();
    let id = applicant.applicant_id;

    let deleted = ApplicantRepo::delete(&pool, id).await.unwrap();
    assert!(deleted);

    for table in [
        "applicants",
        "applicant_addresses",
        "applicant_parents",
        "applicant_spouse",
        "applicant_children",
        "applicant_employment",
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "{table} should be empty after delete");
    }

    let deleted_again = ApplicantRepo::delete(&pool, id).await.unwrap();
    assert!(!deleted_again);
}

// ---------------------------------------------------------------------------
// Test: email existence pre-check
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_email_exists(pool: PgPool) {
    assert!(!ApplicantRepo::email_exists(&pool, "seen@example.com")
        .await
        .unwrap());

    ApplicantRepo::create(&pool, &aggregate_from(&base_intake("seen@example.com")))
        .await
        .unwrap();

    assert!(ApplicantRepo::email_exists(&pool, "seen@example.com")
        .await
        .unwrap());
    assert!(!ApplicantRepo::email_exists(&pool, "other@example.com")
        .await
        .unwrap());
}
