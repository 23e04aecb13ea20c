//! `get match-data`: cache-first fetch of raw match records.

use super::common::{load_matches, CommandContext};
use crate::cli::CommonFilters;
use crate::error::Result;

pub async fn handle_match_data(
    filters: CommonFilters,
    refresh: bool,
    clear_db: bool,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let mut ctx = CommandContext::new(verbose)?;

    if clear_db {
        let removed = ctx.db.clear_matches()?;
        if verbose {
            println!("✓ cleared {removed} cached matches");
        }
    }

    let records = load_matches(&mut ctx, &filters, refresh, verbose).await?;

    if records.is_empty() {
        println!("No matches found for the given filters.");
        return Ok(());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!(
        "{:<12} {:<10} {:<28} {:<28} {:>5} {:>10} {:<12}",
        "Date", "Season", "Home", "Away", "Score", "Attend.", "Period"
    );
    for m in &records {
        println!(
            "{:<12} {:<10} {:<28} {:<28} {:>2}-{:<2} {:>10} {:<12}",
            m.date.to_string(),
            m.season.to_string(),
            m.home_team,
            m.away_team,
            m.home_goals,
            m.away_goals,
            m.attendance.map_or("--".to_string(), |a| a.to_string()),
            m.period.to_string(),
        );
    }
    println!("\n{} matches.", records.len());
    Ok(())
}
