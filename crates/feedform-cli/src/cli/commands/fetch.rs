//! `feedform fetch <route.json> --set k=v ...` – build the URL and resolve it.

use anyhow::{Context, Result};
use feedform_core::config::FeedformConfig;
use feedform_core::fetch::{CurlFetcher, FeedFetcher};
use feedform_core::form::SubmitError;

use crate::cli::input::{fill_session, load_model};
use crate::cli::RouteArgs;

pub async fn run_fetch(
    cfg: &FeedformConfig,
    args: &RouteArgs,
    values: &[(String, String)],
    instance: Option<&str>,
) -> Result<()> {
    let Some(model) = load_model(cfg, args)? else {
        return Ok(());
    };
    let instance = instance.unwrap_or(&cfg.instance_url);
    let fetcher = CurlFetcher::new(instance, &cfg.fetch_or_default())
        .with_context(|| format!("bad instance url {instance}"))?;

    let mut session = fill_session(model, values)?;
    let url = match session.begin_submit() {
        Ok(url) => url,
        Err(SubmitError::Invalid(errors)) => {
            for e in &errors.0 {
                eprintln!("  {}: {}", e.field, e.message);
            }
            anyhow::bail!("form is invalid");
        }
        Err(err) => return Err(err.into()),
    };

    let result = tokio::task::spawn_blocking(move || fetcher.fetch_feed(&url))
        .await
        .context("fetch task panicked")?;
    let feed = session.settle(result).context("Failed to fetch feed")?;

    println!("Resolved feed: {}", feed.url);
    println!("  source: {}", feed.source_url);
    if let Some(title) = &feed.title {
        println!("  title:  {title}");
    }
    if let Some(id) = &feed.id {
        println!("  id:     {id}");
    }
    Ok(())
}
