use anyhow::{Context, Result};
use env_logger::Env;
use std::path::PathBuf;

use rehearsal_schedule::core::key_dates::{default_key_dates, Countdown, KeyDateSummary};
use rehearsal_schedule::core::ScheduleStore;
use rehearsal_schedule::transformations::{filter_events, CenterPalette, QueryCriteria};
use rehearsal_schedule::ScheduleConfig;

// Usage: schedule_report [CONFIG]
// Without CONFIG, schedule.toml in the working directory is used if present.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => ScheduleConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ScheduleConfig::load_default().context("Failed to load schedule.toml")?,
    };
    let today = config
        .reference_date()
        .context("Failed to resolve the reference date")?;

    let mut store = ScheduleStore::new();
    let failures = config.build_loader().load_into(&mut store).await;

    println!("Schedule source: {}", store.origin());
    for failure in &failures {
        println!("  skipped {} ({})", failure.source, failure.error);
    }
    println!("Reference date: {}", today);

    let mut palette = CenterPalette::from_schedule(store.schedule());
    let rows = filter_events(store.schedule().events(), &QueryCriteria::upcoming(), &today);
    println!();
    println!("Upcoming sessions ({}):", rows.len());
    for event in &rows {
        println!(
            "  {} {:<11} {:<12} {:<10} {:<9} {} [{}]",
            palette.color_for(&event.center),
            event.date,
            event.time_range,
            event.center,
            event.status,
            event.responsible,
            event.attendees.join(", ")
        );
    }

    let summary = KeyDateSummary::compute(&default_key_dates(), &today);
    println!();
    println!(
        "Key dates: {} confirmed, {} pending",
        summary.confirmed, summary.pending
    );
    if let Some(days) = summary.days_until_performance {
        println!("Days until the performance: {}", days);
    }
    for (key_date, countdown) in &summary.entries {
        let label = match countdown {
            Countdown::DaysRemaining(0) => "today".to_string(),
            Countdown::DaysRemaining(days) => format!("in {} days", days),
            Countdown::DaysAgo(days) => format!("{} days ago", days),
            Countdown::DatePending => "date pending".to_string(),
        };
        println!(
            "  {:<28} {:<11} {:<10} {}",
            key_date.title,
            key_date.date.as_deref().unwrap_or("—"),
            key_date.status,
            label
        );
    }

    Ok(())
}
