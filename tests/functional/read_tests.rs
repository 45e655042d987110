//! Read-only functional tests for cycleops
//!
//! These tests verify that read operations work correctly against the real
//! API. They do not modify any data and are safe to run against any
//! environment.

use predicates::prelude::*;

use super::FunctionalTestContext;

// ============================================================================
// Status Command
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_status_shows_session() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["status"])
        .success()
        .stdout(predicate::str::contains("Session Status"));
}

// ============================================================================
// User Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    // May return an empty list, but should succeed
    ctx.run(&["user", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_list_with_limit() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "list", "--limit", "5"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_list_sorted() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "list", "--sort-by", "createdAt", "--sort-dir", "desc"])
        .success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

// ============================================================================
// Initiative Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_initiative_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["initiative", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_initiative_list_enabled_only() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["initiative", "list", "--enabled-only"]).success();
}

// ============================================================================
// Content Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_content_list_news() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["content", "list", "--type", "news"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_content_list_pending_events() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["content", "list", "--type", "event", "--state", "pending"])
        .success();
}

// ============================================================================
// Metrics Command
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_metrics_shows_sections() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["metrics"])
        .success()
        .stdout(predicate::str::contains("Platform"))
        .stdout(predicate::str::contains("Riders"))
        .stdout(predicate::str::contains("Trips"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_metrics_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["metrics", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"platform\""))
        .stdout(predicate::str::contains("\"trips\""));
}
