//! `feedform keys <route.json>` – list the form fields of a route.

use anyhow::Result;
use feedform_core::config::FeedformConfig;
use feedform_core::form::FieldKind;

use crate::cli::input::load_model;
use crate::cli::RouteArgs;

pub fn run_keys(cfg: &FeedformConfig, args: &RouteArgs) -> Result<()> {
    let Some(model) = load_model(cfg, args)? else {
        return Ok(());
    };
    let fields = model.fields();
    if fields.is_empty() {
        println!("This feed has no parameters.");
        return Ok(());
    }

    println!("{:<16} {:<9} {:<8} {:<16} {}", "KEY", "REQUIRED", "KIND", "EXAMPLE", "DESCRIPTION");
    for f in fields {
        let kind = match &f.kind {
            FieldKind::Text => "text".to_string(),
            FieldKind::Select(options) => format!("select({})", options.len()),
        };
        println!(
            "{:<16} {:<9} {:<8} {:<16} {}",
            f.key,
            if f.required { "yes" } else { "no" },
            kind,
            f.placeholder.as_deref().unwrap_or("-"),
            f.description.as_deref().unwrap_or("")
        );
        if let Some(default) = &f.default {
            println!("{:<16} default: {}", "", default);
        }
        if let FieldKind::Select(options) = &f.kind {
            for o in options {
                println!("{:<16} - {} ({})", "", o.value, o.label);
            }
        }
    }
    Ok(())
}
