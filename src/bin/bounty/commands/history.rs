//! History command - list saved revisions

use anyhow::{bail, Result};
use blood_token::BountyRevision;

use crate::app::App;
use crate::style::*;

pub fn run(app: &App, limit: usize) -> Result<()> {
    print_header("Saved Bounty Lists");

    let revisions = app.storage.revisions(limit)?;
    if revisions.is_empty() {
        println!();
        println!("No saved lists yet. Use `bounty set` or `bounty edit` to save one.");
        return Ok(());
    }

    for revision in &revisions {
        print_revision(revision);
    }

    Ok(())
}

pub fn show(app: &App, id: i64) -> Result<()> {
    let Some(revision) = app.storage.revision(id)? else {
        bail!("No saved list with id {}", id);
    };

    print_header("Saved Bounty List");
    print_revision(&revision);
    Ok(())
}

fn print_revision(revision: &BountyRevision) {
    println!();
    println!(
        "{} {}  {}",
        style_bold(&format!("#{}", revision.id)),
        style_dim(&revision.saved_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        style_dim(&format!("{} target(s)", revision.entry_count))
    );
    for line in revision.body.lines() {
        println!("  {}", line);
    }
}
