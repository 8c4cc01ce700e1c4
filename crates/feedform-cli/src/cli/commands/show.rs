//! `feedform show <route.json>` – heading, credits and description.

use anyhow::Result;
use feedform_core::config::FeedformConfig;

use crate::cli::input::load_model;
use crate::cli::RouteArgs;

pub fn run_show(cfg: &FeedformConfig, args: &RouteArgs) -> Result<()> {
    let Some(model) = load_model(cfg, args)? else {
        return Ok(());
    };
    let route = model.route();
    let name = args.name.as_deref().unwrap_or(model.route_prefix());

    println!("{}", route.title(name));
    println!("{}", model.subtitle());

    let links = route.maintainer_links();
    if !links.is_empty() {
        println!();
        println!("This feed is provided by RSSHub, with credit to:");
        for (m, link) in route.maintainers.iter().zip(&links) {
            println!("  @{m}  {link}");
        }
    }
    if let Some(description) = route.display_description() {
        println!();
        println!("{description}");
    }
    Ok(())
}
