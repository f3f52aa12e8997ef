//! Set, add and remove commands - replace the bounty list

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use blood_token::BountyRegistry;

use crate::app::App;
use crate::style::*;

pub fn run(app: &App, file: Option<&Path>) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let targets = BountyRegistry::parse(&raw)?;
    let count = targets.len();
    app.commit(targets)?;

    print_success(&format!("Bounty list replaced ({} targets)", count));
    Ok(())
}

pub fn add(app: &App, handle: &str, requirement: &str) -> Result<()> {
    let handle = handle.trim();
    if handle.is_empty() {
        bail!("Handle cannot be empty");
    }
    if handle.contains(blood_token::SEPARATOR) {
        bail!("Handle cannot contain '{}'", blood_token::SEPARATOR);
    }

    let requirement = requirement.trim();
    let requirement = (!requirement.is_empty()).then(|| requirement.to_string());

    let mut targets = app.registry.get();
    let replaced = targets.insert(handle, requirement).is_some();
    app.commit(targets)?;

    if replaced {
        print_success(&format!("Updated {}", style_cyan(handle)));
    } else {
        print_success(&format!("Added {}", style_cyan(handle)));
    }
    Ok(())
}

pub fn remove(app: &App, handle: &str) -> Result<()> {
    let mut targets = app.registry.get();

    if targets.remove(handle.trim()).is_none() {
        print_warning(&format!("{} is not on the list", handle));
        return Ok(());
    }
    if targets.is_empty() {
        bail!("Refusing to remove the last target; use `bounty set` to replace the list");
    }

    app.commit(targets)?;
    print_success(&format!("Removed {}", style_cyan(handle)));
    Ok(())
}
