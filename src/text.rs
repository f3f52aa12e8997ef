//! Line-based bounty list text format
//!
//! ```text
//! <handle> | <requirement>
//! <handle>
//! ```
//!
//! One entry per line. Fields are trimmed, blank lines are ignored and a
//! line without a separator is a handle with no requirement.

use crate::error::{BountyError, BountyResult};
use crate::types::BountyList;

pub const SEPARATOR: char = '|';

/// Line boundaries accepted when parsing, including lone `\r` and the
/// Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Example shown to users when they edit the list.
pub const BLOOD_TOKEN_TEMPLATE: &str = "Bounty List Example Format:\n\
Thunderlake | Must kill with knife\n\
PlayerName2 | Must say \"there can be only one!\" in chat\n\
PlayerName3 | Kill using railgun";

/// Parse user-provided bounty text. Later duplicates overwrite earlier ones.
pub fn parse_bounty_list(raw_text: &str) -> BountyResult<BountyList> {
    let mut parsed = BountyList::new();

    for line in raw_text.split(is_line_break) {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }

        let (handle, requirement) = match stripped.split_once(SEPARATOR) {
            Some((name, requirement)) => {
                let requirement = requirement.trim();
                (
                    name.trim(),
                    (!requirement.is_empty()).then(|| requirement.to_string()),
                )
            }
            None => (stripped, None),
        };

        if handle.is_empty() {
            continue;
        }

        parsed.insert(handle, requirement);
    }

    if parsed.is_empty() {
        return Err(BountyError::NoEntries);
    }

    Ok(parsed)
}

/// Render a list for display or editing.
pub fn format_bounty_targets(targets: &BountyList) -> String {
    targets
        .iter()
        .map(|entry| match entry.requirement.as_deref() {
            Some(requirement) if !requirement.is_empty() => {
                format!("{} {} {}", entry.handle, SEPARATOR, requirement)
            }
            _ => entry.handle.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
