//! `crease assign` - fill the striker, non-striker or bowler slot.

use tracing::instrument;

use crate::{
    cli::{AssignArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{convert_role, player_name, show::print_scoreboard};

#[instrument(skip_all, fields(player = %args.player))]
pub fn execute(
    args: AssignArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let role = convert_role(args.role);
    let service = super::scoring_service(&global, &config);
    let m = service.assign_player(&args.target.key, role, &args.player)?;

    if output.is_json() {
        output.json(&m)?;
        return Ok(());
    }

    let name = m
        .current_innings()
        .and_then(|inn| inn.assigned(role))
        .map_or_else(|| args.player.clone(), |id| player_name(&m, id));
    output.success(&format!("{name} is now the {role}"))?;
    print_scoreboard(&m, &output)
}
