//! Terminal styling utilities

use blood_token::BountyList;

pub fn style_cyan(s: &str) -> String {
    format!("\x1b[36m{}\x1b[0m", s)
}

pub fn style_green(s: &str) -> String {
    format!("\x1b[32m{}\x1b[0m", s)
}

pub fn style_red(s: &str) -> String {
    format!("\x1b[31m{}\x1b[0m", s)
}

pub fn style_yellow(s: &str) -> String {
    format!("\x1b[33m{}\x1b[0m", s)
}

pub fn style_dim(s: &str) -> String {
    format!("\x1b[2m{}\x1b[0m", s)
}

pub fn style_bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn print_success(msg: &str) {
    println!("{} {}", style_green("✓"), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", style_red("✗"), msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", style_yellow("⚠"), msg);
}

pub fn print_header(title: &str) {
    println!();
    println!("{}", style_bold(title));
    println!("{}", "─".repeat(title.chars().count()));
}

/// Print a list as an aligned table, handles padded to the longest one.
pub fn print_targets(targets: &BountyList) {
    let width = targets
        .handles()
        .map(|h| h.chars().count())
        .max()
        .unwrap_or(0);

    for entry in targets {
        let requirement = match entry.requirement.as_deref() {
            Some(r) => r.to_string(),
            None => style_dim("any kill"),
        };
        println!(
            "  {}  {}",
            style_cyan(&format!("{:<width$}", entry.handle, width = width)),
            requirement
        );
    }
}
