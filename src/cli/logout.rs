//! Logout command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::session::{CredentialStore, FileCredentialStore};
use crate::config::Config;
use crate::error::Result;

/// Run the logout command: drop both stored tokens.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let store = FileCredentialStore::new(path);

    let had_session = store.load()?.is_some();
    store.clear()?;

    if had_session {
        println!("{} Signed out. Stored tokens removed.", "✓".green());
    } else {
        println!("Not signed in.");
    }

    Ok(())
}
