//! `get attendance`: crowd sizes per period and their link to home wins.

use super::common::{fmt_num, load_matches, CommandContext};
use crate::cli::CommonFilters;
use crate::error::Result;
use crate::processor::attendance_by_period;

pub async fn handle_attendance(
    filters: CommonFilters,
    refresh: bool,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let mut ctx = CommandContext::new(verbose)?;
    let records = load_matches(&mut ctx, &filters, refresh, verbose).await?;

    if records.is_empty() {
        println!("No matches found for the given filters.");
        return Ok(());
    }

    let stats = attendance_by_period(&records);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "{:<14} {:>8} {:>10} {:>9} {:>9} {:>10} {:>9} {:>9}",
        "Period", "Matches", "Mean", "Min", "Max", "Std dev", "Pearson", "Spearman"
    );
    for s in &stats {
        println!(
            "{:<14} {:>8} {:>10} {:>9} {:>9} {:>10} {:>9} {:>9}",
            s.period.to_string(),
            s.sample_size,
            fmt_num(s.mean),
            s.min.map_or("--".to_string(), |v| v.to_string()),
            s.max.map_or("--".to_string(), |v| v.to_string()),
            fmt_num(s.std_dev),
            fmt_num(s.home_win_correlation),
            fmt_num(s.home_win_rank_correlation),
        );
    }
    println!("\nOnly matches with a reported attendance figure are counted.");
    Ok(())
}
