//! `get team-performance`: one team's home/away record per period.

use super::common::{fmt_num, fmt_pct, load_matches, CommandContext};
use crate::cli::CommonFilters;
use crate::error::Result;
use crate::processor::{team_performance, TeamPerformance};
use serde_json::json;

pub async fn handle_team_performance(
    mut filters: CommonFilters,
    team: String,
    refresh: bool,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    // The requested team also narrows the fetch/query
    filters.team = Some(team.clone());

    let mut ctx = CommandContext::new(verbose)?;
    let records = load_matches(&mut ctx, &filters, refresh, verbose).await?;

    if records.is_empty() {
        println!("No matches found for {team}.");
        return Ok(());
    }

    let (home, away) = team_performance(&records, &team);

    if as_json {
        let payload = json!({
            "team": team,
            "home": home,
            "away": away,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{team} at home:");
    print_side(&home);
    println!("\n{team} away:");
    print_side(&away);
    Ok(())
}

fn print_side(rows: &[TeamPerformance]) {
    println!(
        "{:<14} {:>7} {:>5} {:>6} {:>7} {:>7} {:>5} {:>5} {:>6} {:>7}",
        "Period", "Played", "Won", "Drawn", "Lost", "Win%", "GF", "GA", "PPG", "GD/game"
    );
    for r in rows {
        println!(
            "{:<14} {:>7} {:>5} {:>6} {:>7} {:>7} {:>5} {:>5} {:>6} {:>7}",
            r.period.to_string(),
            r.played,
            r.wins,
            r.draws,
            r.losses,
            fmt_pct(r.win_pct),
            r.goals_for,
            r.goals_against,
            fmt_num(r.points_per_game),
            fmt_num(r.goal_diff_per_game),
        );
    }
}
