//! `get teams`: cached team listing for a league.

use super::common::CommandContext;
use crate::cli::types::League;
use crate::error::Result;
use crate::providers;

pub async fn handle_teams(
    league: League,
    refresh: bool,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let mut ctx = CommandContext::new(verbose)?;

    let mut teams = if refresh {
        Vec::new()
    } else {
        ctx.db.get_teams(league)?
    };

    if teams.is_empty() {
        if verbose {
            println!("Fetching teams for {league}...");
        }
        teams = providers::fetch_teams(&ctx.client, &ctx.config, league).await?;
        teams.sort();
        let added = ctx.db.upsert_teams(&teams, league)?;
        if verbose {
            println!("✓ cached {added} new teams");
        }
    } else if verbose {
        println!("✓ {} teams loaded from cache", teams.len());
    }

    if teams.is_empty() {
        println!("No teams found for {league}.");
        return Ok(());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
        return Ok(());
    }

    println!("{league}:");
    for team in &teams {
        println!("  {team}");
    }
    Ok(())
}
