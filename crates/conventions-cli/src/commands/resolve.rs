//! Resolve command implementation

use std::path::Path;

use colored::Colorize;
use conventions_core::{ConventionSet, ValueSource};
use serde_json::Value;

use super::resolve_project;
use crate::cli::ResolveArgs;
use crate::error::Result;

/// Resolve the project's conventions and print them.
pub fn run_resolve(project_dir: &Path, inputs: &ResolveArgs, json: bool) -> Result<()> {
    let (context, set) = resolve_project(project_dir, inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(&set)?)?);
        return Ok(());
    }

    println!(
        "{} Conventions for {}\n",
        "=>".blue().bold(),
        context.project().name.cyan()
    );
    println!(
        "  {:<34} {:<24} {}",
        "SETTING".bold(),
        "VALUE".bold(),
        "SOURCE".bold()
    );
    println!("  {}", "\u{2500}".repeat(70).dimmed());

    for (id, resolved) in set.iter() {
        let value = resolved.value.to_string();
        let value = if value.is_empty() { "-".to_string() } else { value };
        println!(
            "  {:<34} {:<24} {}",
            id.name(),
            value,
            source_label(resolved.source)
        );
    }

    println!();
    print_list("errorprone args", set.errorprone_args());
    print_list("compiler args", set.compiler_args());
    print_list("test jvm args", set.test_jvm_args());
    print_list("excluded tags", set.excluded_tags());
    println!(
        "  {:<22} {}",
        "coverage verification".bold(),
        if set.coverage_verification_enabled() {
            "enabled".green()
        } else {
            "disabled".yellow()
        }
    );

    Ok(())
}

/// The serialized set plus the values derived from it.
fn to_json(set: &ConventionSet) -> Result<Value> {
    let mut value = serde_json::to_value(set)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "nullawayAnnotatedPackages".to_string(),
            Value::from(set.nullaway_annotated_packages()),
        );
        map.insert(
            "coverageVerificationEnabled".to_string(),
            Value::from(set.coverage_verification_enabled()),
        );
    }
    Ok(value)
}

fn source_label(source: ValueSource) -> colored::ColoredString {
    let label = source.to_string();
    match source {
        ValueSource::Override => label.magenta(),
        ValueSource::Environment => label.yellow(),
        ValueSource::Property => label.cyan(),
        ValueSource::Inference => label.green(),
        ValueSource::Default => label.dimmed(),
    }
}

fn print_list(label: &str, values: &[String]) {
    let rendered = if values.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        values.join(" ")
    };
    println!("  {:<22} {}", label.bold(), rendered);
}
