//! `crease ball` - record one delivery.

use tracing::instrument;

use crease_core::domain::{BallOutcome, ExtraType, Role, WicketType};

use crate::{
    cli::{BallArgs, BatterArg, ExtraArg, GlobalArgs, WicketArg},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::show::print_scoreboard;

#[instrument(skip_all, fields(runs = args.runs))]
pub fn execute(
    args: BallArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let outcome = build_outcome(&args);
    let service = super::scoring_service(&global, &config);
    let (m, report) = service.record_ball(&args.target.key, outcome)?;

    if output.is_json() {
        output.json(&serde_json::json!({
            "over_completed": report.over_completed,
            "innings_completed": report.innings_completed,
            "match_completed": report.match_completed,
            "match": m,
        }))?;
        return Ok(());
    }

    print_scoreboard(&m, &output)?;

    if report.match_completed {
        output.info("Match over. See 'crease awards' and 'crease scorecard'.")?;
    } else if report.innings_completed {
        if let Some(target) = m.target() {
            output.info(&format!(
                "Innings complete. Target {target}. Assign the new batters and bowler."
            ))?;
        }
    } else if report.over_completed {
        output.info("End of over. Assign the next bowler.")?;
    }

    Ok(())
}

fn build_outcome(args: &BallArgs) -> BallOutcome {
    let extra = args.extra.map_or(ExtraType::None, convert_extra);
    let outcome = BallOutcome::new(args.runs, extra);
    match args.wicket {
        Some(kind) => outcome
            .with_wicket(convert_wicket(kind))
            .with_player_out(convert_batter(args.out)),
        None => outcome,
    }
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_extra(extra: ExtraArg) -> ExtraType {
    match extra {
        ExtraArg::Wide => ExtraType::Wide,
        ExtraArg::NoBall => ExtraType::NoBall,
        ExtraArg::Bye => ExtraType::Bye,
        ExtraArg::LegBye => ExtraType::LegBye,
    }
}

fn convert_wicket(kind: WicketArg) -> WicketType {
    match kind {
        WicketArg::Bowled => WicketType::Bowled,
        WicketArg::Caught => WicketType::Caught,
        WicketArg::Lbw => WicketType::Lbw,
        WicketArg::RunOut => WicketType::RunOut,
        WicketArg::Stumped => WicketType::Stumped,
        WicketArg::HitWicket => WicketType::HitWicket,
        WicketArg::Retired => WicketType::Retired,
    }
}

fn convert_batter(batter: BatterArg) -> Role {
    match batter {
        BatterArg::Striker => Role::Striker,
        BatterArg::NonStriker => Role::NonStriker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::MatchArg;

    fn args(runs: u32, extra: Option<ExtraArg>, wicket: Option<WicketArg>) -> BallArgs {
        BallArgs {
            runs,
            extra,
            wicket,
            out: BatterArg::Striker,
            target: MatchArg {
                key: "latest".into(),
            },
        }
    }

    #[test]
    fn plain_runs() {
        assert_eq!(build_outcome(&args(4, None, None)), BallOutcome::runs(4));
    }

    #[test]
    fn leg_byes_go_to_extras() {
        let o = build_outcome(&args(2, Some(ExtraArg::LegBye), None));
        assert_eq!(o.bat_runs(), 0);
        assert_eq!(o.extra_runs(), 2);
        assert!(o.is_legal());
    }

    #[test]
    fn wide_is_a_penalty_run() {
        let o = build_outcome(&args(0, Some(ExtraArg::Wide), None));
        assert_eq!(o, BallOutcome::wide());
        assert!(!o.is_legal());
    }

    #[test]
    fn run_out_of_the_non_striker() {
        let mut a = args(1, None, Some(WicketArg::RunOut));
        a.out = BatterArg::NonStriker;
        let o = build_outcome(&a);
        assert_eq!(o.wicket(), Some(WicketType::RunOut));
        assert_eq!(o.player_out(), Role::NonStriker);
        assert!(o.validate().is_ok());
    }
}
