//! `crease summary` - dashboard totals.

use crate::{
    cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager,
};

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let summary = super::stats_service(&global, &config).summary()?;

    if output.is_json() {
        output.json(&summary)?;
        return Ok(());
    }

    output.header("Summary")?;
    output.table(&[
        vec!["Matches".to_owned(), summary.total_matches.to_string()],
        vec!["Completed".to_owned(), summary.completed_matches.to_string()],
        vec!["Runs".to_owned(), summary.total_runs.to_string()],
        vec!["Wickets".to_owned(), summary.total_wickets.to_string()],
        vec!["Highest innings".to_owned(), summary.highest_innings.to_string()],
    ])?;
    Ok(())
}
