//! Settings command implementation

use std::path::Path;

use colored::Colorize;
use conventions_core::{ConventionDefaults, SETTINGS, Setting, SettingKind};
use serde_json::json;

use super::load_defaults;
use crate::error::Result;

/// Print the setting catalog with aliases and effective defaults.
pub fn run_settings(defaults_path: Option<&Path>, json: bool) -> Result<()> {
    let defaults = load_defaults(defaults_path)?;

    if json {
        let entries: Vec<_> = SETTINGS
            .iter()
            .map(|setting| {
                json!({
                    "name": setting.name(),
                    "kind": kind_label(setting.kind),
                    "env": setting.env,
                    "property": setting.property,
                    "required": setting.required,
                    "default": defaults.raw_default(setting.id),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} {} settings:\n", "=>".blue().bold(), SETTINGS.len());
    for setting in SETTINGS {
        print_setting(setting, &defaults);
    }
    Ok(())
}

fn print_setting(setting: &Setting, defaults: &ConventionDefaults) {
    let marker = if setting.required {
        " (required)".yellow().to_string()
    } else {
        String::new()
    };
    println!(
        "  {} {}{}",
        setting.name().cyan().bold(),
        kind_label(setting.kind).dimmed(),
        marker
    );
    if let Some(env) = setting.env {
        println!("    env:      {env}");
    }
    if let Some(property) = setting.property {
        println!("    property: {property}");
    }
    match defaults.raw_default(setting.id) {
        Some(default) if !default.is_empty() => println!("    default:  {default}"),
        Some(_) => println!("    default:  {}", "(empty)".dimmed()),
        None => println!("    default:  {}", "(inferred)".dimmed()),
    }
}

fn kind_label(kind: SettingKind) -> &'static str {
    match kind {
        SettingKind::Boolean => "boolean",
        SettingKind::Integer => "integer",
        SettingKind::Decimal => "decimal",
        SettingKind::Text => "text",
    }
}
