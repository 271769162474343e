//! `crease undo` - retract the last delivery of the current innings.

use tracing::instrument;

use crate::{
    cli::{GlobalArgs, MatchArg},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::show::print_scoreboard;

#[instrument(skip_all)]
pub fn execute(
    args: MatchArg,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::scoring_service(&global, &config);
    let (m, ball) = service.undo_last_ball(&args.key)?;

    if output.is_json() {
        output.json(&serde_json::json!({ "undone": ball, "match": m }))?;
        return Ok(());
    }

    output.success(&format!(
        "Removed ball {}.{} ({})",
        ball.over(),
        ball.ball_number(),
        ball.short_label()
    ))?;
    print_scoreboard(&m, &output)
}
