//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use footy_hfa::{
    cli::{Commands, GetCmd, Hfa},
    commands::{
        attendance::handle_attendance, home_advantage::handle_home_advantage,
        match_data::handle_match_data, team_performance::handle_team_performance,
        teams::handle_teams,
    },
    Result,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Every error surfaces as a user-facing message, never a panic
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let app = Hfa::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::MatchData {
                filters,
                refresh,
                clear_db,
                json,
                verbose,
            } => handle_match_data(filters, refresh, clear_db, json, verbose).await?,

            GetCmd::Teams {
                league,
                refresh,
                json,
                verbose,
            } => handle_teams(league, refresh, json, verbose).await?,

            GetCmd::HomeAdvantage {
                filters,
                group_by,
                refresh,
                json,
                verbose,
            } => handle_home_advantage(filters, group_by, refresh, json, verbose).await?,

            GetCmd::TeamPerformance {
                filters,
                name,
                refresh,
                json,
                verbose,
            } => handle_team_performance(filters, name, refresh, json, verbose).await?,

            GetCmd::Attendance {
                filters,
                refresh,
                json,
                verbose,
            } => handle_attendance(filters, refresh, json, verbose).await?,
        },
    }

    Ok(())
}
