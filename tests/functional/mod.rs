//! Functional test harness for cycleops
//!
//! Provides a test context and safety guards for running functional tests
//! against a real deployment. Tests are opt-in via the `functional-tests`
//! feature and refuse to touch production without explicit confirmation.

use std::env;
use std::path::PathBuf;
use std::process::Command;

#[allow(deprecated)]
use assert_cmd::cargo::cargo_bin;
#[allow(unused_imports)]
use assert_cmd::prelude::*;

pub mod error_tests;
pub mod mutation_tests;
pub mod read_tests;

// ============================================================================
// Test Configuration
// ============================================================================

/// Production API host (requires explicit confirmation)
const PRODUCTION_API_HOST: &str = "api.cyclerewards.app";

/// An ID that cannot exist server-side, for not-found scenarios
pub const NONEXISTENT_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Warning banner for production API usage
const PRODUCTION_WARNING: &str = r#"
╔══════════════════════════════════════════════════════════════════╗
║  ⚠️  PRODUCTION API WARNING                                       ║
║                                                                   ║
║  You are about to run functional tests against:                   ║
║    https://api.cyclerewards.app (PRODUCTION)                      ║
║                                                                   ║
║  This will make real API calls.                                   ║
║                                                                   ║
║  To proceed, set: CYCLEOPS_FUNCTIONAL_TESTS_CONFIRM=yes           ║
╚══════════════════════════════════════════════════════════════════╝
"#;

// ============================================================================
// FunctionalTestContext
// ============================================================================

/// Context for functional tests providing command execution and safety
/// guards.
///
/// The context respects the following environment variables:
/// - `CYCLEOPS_CONFIG` - Config file for the target deployment
/// - `CYCLEOPS_FUNCTIONAL_TESTS_CONFIRM=yes` - Required for production
pub struct FunctionalTestContext {
    /// Config path forwarded to every command (from CYCLEOPS_CONFIG)
    pub config: Option<String>,
    /// Path to the cycleops binary
    pub binary_path: PathBuf,
}

impl FunctionalTestContext {
    /// Create a new test context with safety checks.
    pub fn new() -> Self {
        let config = env::var("CYCLEOPS_CONFIG").ok();

        Self::check_production_safety(&config);

        Self {
            config,
            binary_path: cargo_bin!("cycleops").to_path_buf(),
        }
    }

    /// Check if targeting production and require confirmation.
    fn check_production_safety(config: &Option<String>) {
        // `cycleops status` reports the resolved API URL
        let mut cmd = Command::new(cargo_bin!("cycleops"));
        cmd.arg("status");
        if let Some(path) = config {
            cmd.args(["--config", path]);
        }

        if let Ok(output) = cmd.output() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if stdout.contains(PRODUCTION_API_HOST) {
                Self::require_production_confirmation();
            }
        }
    }

    /// Panic with warning if production confirmation is not set.
    fn require_production_confirmation() {
        if env::var("CYCLEOPS_FUNCTIONAL_TESTS_CONFIRM").as_deref() != Ok("yes") {
            eprintln!("{}", PRODUCTION_WARNING);
            panic!(
                "Production confirmation required. Set CYCLEOPS_FUNCTIONAL_TESTS_CONFIRM=yes to proceed."
            );
        }
    }

    /// Build a Command with the config path applied.
    ///
    /// This does NOT execute the command - use `run()` for that.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        if let Some(ref path) = self.config {
            cmd.args(["--config", path]);
        }
        cmd.args(args);
        cmd
    }

    /// Execute command and return an assertion object for chaining.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command(args).assert()
    }

    /// Execute command and expect success, returning stdout as String.
    ///
    /// Panics if the command fails (non-zero exit code).
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "Command failed: cycleops {}\nstderr: {}",
                args.join(" "),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Execute command and expect failure, returning stderr as String.
    ///
    /// Panics if the command succeeds.
    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if output.status.success() {
            panic!(
                "Command unexpectedly succeeded: cycleops {}",
                args.join(" ")
            );
        }

        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for FunctionalTestContext {
    fn default() -> Self {
        Self::new()
    }
}
