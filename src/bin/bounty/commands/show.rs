//! Show command - print the current bounty list

use anyhow::Result;
use blood_token::BLOOD_TOKEN_TEMPLATE;

use crate::app::App;
use crate::style::*;

pub fn run(app: &App, json: bool) -> Result<()> {
    let targets = app.registry.get();

    if json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
        return Ok(());
    }

    print_header("Blood Token Targets");
    if targets.is_empty() {
        println!("{}", style_dim("  (no targets)"));
    } else {
        print_targets(&targets);
    }
    println!();
    println!("{} target(s)", style_bold(&targets.len().to_string()));

    Ok(())
}

pub fn template() -> Result<()> {
    println!("{}", BLOOD_TOKEN_TEMPLATE);
    Ok(())
}
