//! Reset command - wipe the saved input/output pair.

use anyhow::{Context, Result};
use clap::Args;

use debase::storage::{FileStorage, PersistedPair, Storage};

use super::CommandExecutor;

/// Clear the saved session, as if the clear action had run.
#[derive(Args, Debug)]
pub struct ResetCommand {}

impl CommandExecutor for ResetCommand {
    fn execute(&self) -> Result<()> {
        let mut storage =
            FileStorage::in_user_data_dir().context("Could not determine a data directory")?;
        storage.save(&PersistedPair::default());
        println!("Saved session cleared.");
        Ok(())
    }
}
