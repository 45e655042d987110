//! Mutation functional tests for cycleops
//!
//! Moderation mutations against real records are irreversible (user delete
//! especially), so these tests only exercise the `--dry-run` preview path
//! and not-found handling with IDs that cannot exist.

use predicates::prelude::*;

use super::{FunctionalTestContext, NONEXISTENT_ID};

// ============================================================================
// Dry-run Previews
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_verify_dry_run() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "verify", NONEXISTENT_ID, "--dry-run"])
        .success()
        .stdout(predicate::str::contains("Would verify user"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_delete_dry_run() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "delete", NONEXISTENT_ID, "--dry-run"])
        .success()
        .stdout(predicate::str::contains("Would delete user"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_content_approve_dry_run() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["content", "approve", NONEXISTENT_ID, "--dry-run"])
        .success()
        .stdout(predicate::str::contains("Would approve content"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_content_reject_dry_run() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["content", "reject", NONEXISTENT_ID, "--dry-run"])
        .success()
        .stdout(predicate::str::contains("Would reject content"));
}

// ============================================================================
// Not-found Mutations
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_verify_nonexistent_user_fails() {
    let ctx = FunctionalTestContext::new();

    let stderr = ctx.run_failure(&["user", "verify", NONEXISTENT_ID, "--yes"]);
    assert!(
        stderr.contains("not found") || stderr.contains("Not found"),
        "Expected a not-found error, got: {}",
        stderr
    );
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_approve_nonexistent_content_fails() {
    let ctx = FunctionalTestContext::new();

    let stderr = ctx.run_failure(&["content", "approve", NONEXISTENT_ID, "--yes"]);
    assert!(
        stderr.contains("not found") || stderr.contains("Not found"),
        "Expected a not-found error, got: {}",
        stderr
    );
}
