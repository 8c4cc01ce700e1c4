//! `feedform build <route.json> --set k=v ...` – validate and print the feed URL.

use anyhow::{bail, Result};
use feedform_core::config::FeedformConfig;

use crate::cli::input::{fill_session, load_model};
use crate::cli::RouteArgs;

pub fn run_build(cfg: &FeedformConfig, args: &RouteArgs, values: &[(String, String)]) -> Result<()> {
    let Some(model) = load_model(cfg, args)? else {
        return Ok(());
    };
    let session = fill_session(model, values)?;
    if let Err(errors) = session.validate() {
        for e in &errors.0 {
            eprintln!("  {}: {}", e.field, e.message);
        }
        bail!("form is invalid");
    }
    let url = session.model().assemble(session.values())?;
    println!("{url}");
    Ok(())
}
