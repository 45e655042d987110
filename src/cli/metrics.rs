//! Analytics snapshot command

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::DetailApi;
use crate::client::models::Metrics;
use crate::error::Result;
use crate::output::json;

/// Run the metrics command
pub async fn show(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let metrics = ctx.client.get_metrics().await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&metrics)?),
        OutputFormat::Table => print_metrics(&metrics),
    }

    Ok(())
}

fn print_metrics(metrics: &Metrics) {
    let platform = &metrics.platform;
    println!("{}", "Platform".bold());
    println!(
        "  Initiatives: {} total, {} ongoing, {} completed",
        platform.total_initiatives, platform.ongoing_initiatives, platform.completed_initiatives
    );
    println!("  Credits earned: {:.1}", platform.total_credits);

    let users = &metrics.users;
    println!();
    println!("{}", "Riders".bold());
    println!("  Total: {}", users.total);
    println!("  Average age: {:.1}", users.average_age);
    println!(
        "  Gender: {} m / {} f / {} x",
        users.gender_count.m, users.gender_count.f, users.gender_count.x
    );
    let ages = &users.age_groups;
    println!("  Age groups:");
    println!("    under 18:  {}", ages.under_18);
    println!("    18 to 24:  {}", ages.from_18_to_25);
    println!("    25 to 29:  {}", ages.from_25_to_30);
    println!("    30 to 39:  {}", ages.from_30_to_40);
    println!("    40 to 59:  {}", ages.from_40_to_60);
    println!("    60 to 74:  {}", ages.from_60_to_75);
    println!("    75 and up: {}", ages.over_75);

    let trips = &metrics.trips;
    println!();
    println!("{}", "Trips".bold());
    println!("  Total: {}", trips.total);
    println!("  Average distance: {:.1} km", trips.average_dist);
    println!("  Average credits: {:.1}", trips.average_credits);
}
