use anyhow::Result;
use dialoguer::Confirm;

use crate::error::AdminError;

/// Asks the user to confirm a destructive operation before it runs.
///
/// `--yes` bypasses the prompt for non-interactive use. Declining aborts the
/// command with [`AdminError::NotConfirmed`].
pub fn confirm_operation(operation: &str, details: &str, assume_yes: bool) -> Result<()> {
    if assume_yes {
        return Ok(());
    }

    println!("⚠️ About to perform: {}", operation);
    if !details.is_empty() {
        println!("{}", details);
    }

    let confirmed = Confirm::new()
        .with_prompt("Continue?")
        .default(false)
        .interact()?;

    if confirmed {
        Ok(())
    } else {
        Err(AdminError::NotConfirmed.into())
    }
}
