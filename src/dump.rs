use std::fmt::Write;

use clap::ValueEnum;
use decor::{CaseDamage, DamageElement};
use serde::Serialize;

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum Format {
    Json,
    Idm,
    /// One inline style line per element.
    Css,
}

pub fn elements(
    elts: &[DamageElement],
    format: Format,
) -> anyhow::Result<String> {
    serialize(&elts, elts.iter(), format)
}

pub fn case_damage(
    damage: &CaseDamage,
    format: Format,
) -> anyhow::Result<String> {
    serialize(damage, damage.iter(), format)
}

fn serialize<'a, T: Serialize>(
    value: &T,
    elts: impl Iterator<Item = &'a DamageElement>,
    format: Format,
) -> anyhow::Result<String> {
    let mut ret = match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Idm => idm::to_string(value)?,
        Format::Css => {
            let mut ret = String::new();
            for e in elts {
                writeln!(ret, "{}: {}", e.kind, e.css())?;
            }
            ret
        }
    };

    if !ret.ends_with('\n') {
        ret.push('\n');
    }
    Ok(ret)
}
