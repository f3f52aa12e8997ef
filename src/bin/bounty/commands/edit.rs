//! Edit command - interactive editing of the bounty list
//!
//! Opens the formatted list in $EDITOR, shows what was parsed and asks
//! before replacing the active list.

use anyhow::Result;
use blood_token::{BountyRegistry, BLOOD_TOKEN_TEMPLATE};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Editor};

use crate::app::App;
use crate::style::print_targets;

const COMMENT_PREFIX: &str = "# ";

fn template_lines() -> impl Iterator<Item = String> {
    BLOOD_TOKEN_TEMPLATE
        .lines()
        .map(|line| format!("{}{}", COMMENT_PREFIX, line))
}

/// Commented template followed by the current list.
fn editor_buffer(current: &str) -> String {
    let mut buffer = String::new();
    for line in template_lines() {
        buffer.push_str(&line);
        buffer.push('\n');
    }
    buffer.push('\n');
    buffer.push_str(current);
    buffer.push('\n');
    buffer
}

/// Drop the template lines written by [`editor_buffer`]; every other line,
/// including handles that start with `#`, is kept.
fn strip_template(edited: &str) -> String {
    let template: Vec<String> = template_lines().collect();
    edited
        .lines()
        .filter(|line| !template.iter().any(|t| t == line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(app: &App) -> Result<()> {
    let buffer = editor_buffer(&app.registry.format(None));

    let edited = match Editor::new().extension(".txt").edit(&buffer)? {
        Some(text) => text,
        None => {
            println!("  {} Edit aborted, list unchanged", style("✗").red());
            return Ok(());
        }
    };

    let body = strip_template(&edited);

    let targets = match BountyRegistry::parse(&body) {
        Ok(targets) => targets,
        Err(e) => {
            println!("  {} {}", style("✗").red(), e);
            return Ok(());
        }
    };

    if targets == app.registry.get() {
        println!("  {}", style("No changes").dim());
        return Ok(());
    }

    println!();
    println!("  {}", style("New Blood Token list").bold());
    println!("  {}", style("─".repeat(40)).dim());
    print_targets(&targets);
    println!();

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("  Replace the active list?")
        .default(true)
        .interact()?;

    if !confirmed {
        println!("  {} Cancelled", style("✗").red());
        return Ok(());
    }

    let count = targets.len();
    app.commit(targets)?;
    println!(
        "  {} Saved {} target(s)",
        style("✓").green(),
        style(count).cyan()
    );
    Ok(())
}
