//! Config command - show effective configuration

use anyhow::Result;

use crate::app::App;
use crate::style::*;

pub fn run(app: &App) -> Result<()> {
    print_header("Blood Token Configuration");

    let source = if app.config_path.exists() {
        app.config_path.display().to_string()
    } else {
        format!("{} (not found, using built-in defaults)", app.config_path.display())
    };

    println!();
    println!("Config file:      {}", style_cyan(&source));
    println!("Cache database:   {}", app.db_path.display());
    println!("Log level:        {}", app.config.logging.level);

    println!();
    println!("{}", style_bold("Default targets:"));
    print_targets(&app.config.default_targets());

    Ok(())
}
