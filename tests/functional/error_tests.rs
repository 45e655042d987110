//! Error scenario functional tests for cycleops
//!
//! These tests verify that cycleops returns appropriate, actionable error
//! messages when operations fail.

use predicates::prelude::*;

use super::{FunctionalTestContext, NONEXISTENT_ID};

// ============================================================================
// Invalid Identifier Errors
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_user_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "get", NONEXISTENT_ID])
        .failure()
        .stderr(predicate::str::contains("not found").or(predicate::str::contains("Not found")));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_initiative_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["initiative", "get", NONEXISTENT_ID])
        .failure()
        .stderr(predicate::str::contains("not found").or(predicate::str::contains("Not found")));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_malformed_user_id_fails() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "get", "not-a-uuid"]).failure();
}

// ============================================================================
// Missing Required Arguments
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_content_list_without_type_fails() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["content", "list"])
        .failure()
        .stderr(predicate::str::contains("--type"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_content_list_rejects_unknown_type() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["content", "list", "--type", "podcast"]).failure();
}
