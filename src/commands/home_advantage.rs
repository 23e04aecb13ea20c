//! `get home-advantage`: the headline per-period comparison.

use super::common::{fmt_num, fmt_pct, load_matches, CommandContext};
use crate::cli::types::GroupBy;
use crate::cli::CommonFilters;
use crate::error::Result;
use crate::processor::{aggregate, home_advantage_by_period};
use serde_json::json;

pub async fn handle_home_advantage(
    filters: CommonFilters,
    group_by: Option<GroupBy>,
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

    let summaries = home_advantage_by_period(&records);
    let breakdown = group_by.map(|dim| aggregate(&records, dim));

    if as_json {
        let payload = json!({
            "summary": summaries,
            "breakdown": breakdown,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "{:<14} {:>8} {:>9} {:>8} {:>9} {:>10} {:>10} {:>10}",
        "Period", "Matches", "Home W%", "Draw%", "Away W%", "Home GPG", "Away GPG", "Advantage"
    );
    for s in &summaries {
        println!(
            "{:<14} {:>8} {:>9} {:>8} {:>9} {:>10} {:>10} {:>10}",
            s.period.to_string(),
            s.total_matches,
            fmt_pct(s.home_win_pct),
            fmt_pct(s.draw_pct),
            fmt_pct(s.away_win_pct),
            fmt_num(s.avg_home_goals),
            fmt_num(s.avg_away_goals),
            fmt_pct(s.home_advantage),
        );
    }

    if let Some(rows) = breakdown {
        println!("\nBy {}:", group_by.unwrap_or(GroupBy::Period));
        println!(
            "{:<28} {:<14} {:>8} {:>9} {:>10}",
            "Group", "Period", "Matches", "Home W%", "Avg GD"
        );
        for row in rows {
            let label = row
                .team
                .clone()
                .or_else(|| row.league.map(|l| l.to_string()))
                .unwrap_or_else(|| "all".to_string());
            println!(
                "{:<28} {:<14} {:>8} {:>9} {:>10}",
                label,
                row.period.to_string(),
                row.sample_size,
                fmt_pct(row.home_win_pct),
                fmt_num(row.avg_goal_diff),
            );
        }
    }
    Ok(())
}
