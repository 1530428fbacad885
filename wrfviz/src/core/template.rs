//! Date placeholder substitution for path templates.
//!
//! Output and publish directories are configured as templates with
//! embedded strftime specifiers (e.g. `/www/plots/%Y-%m-%d_%H`) and
//! resolved against the forecast initialization time.

use anyhow::{Result, bail};
use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};

/// Resolve strftime placeholders embedded in `template` using `init_time`.
///
/// Rejects templates containing an invalid specifier instead of panicking
/// inside chrono's `Display` impl.
pub fn sub_date(template: &str, init_time: &NaiveDateTime) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(template).collect();
    if items.contains(&Item::Error) {
        bail!("invalid date placeholder in template '{template}'");
    }
    Ok(init_time.format_with_items(items.into_iter()).to_string())
}
