//! Implementation of the `crease new` command.
//!
//! Responsibility: translate CLI arguments into a `MatchSetup`, call the
//! scoring service, and display the fixture. No business logic lives here.

use tracing::{debug, instrument};

use crease_core::{
    application::{MatchSetup, SquadSetup},
    domain::{Match, TossChoice},
};

use crate::{
    cli::{GlobalArgs, NewArgs, TossArg},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `crease new` command.
#[instrument(skip_all, fields(home = %args.home, away = %args.away))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let setup = build_setup(args, &config)?;
    debug!(
        overs = setup.overs,
        balls_per_over = setup.balls_per_over,
        "Match setup resolved"
    );

    let service = super::scoring_service(&global, &config);
    let m = service.start_match(setup)?;

    if output.is_json() {
        output.json(&m)?;
        return Ok(());
    }

    output.success(&format!("Match '{}' created ({})", m.name(), m.id().short()))?;
    show_fixture(&m, &output)?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  crease assign striker <PLAYER>")?;
        output.print("  crease assign non-striker <PLAYER>")?;
        output.print("  crease assign bowler <PLAYER>")?;
    }

    Ok(())
}

// ── Setup construction ────────────────────────────────────────────────────────

fn build_setup(args: NewArgs, config: &AppConfig) -> CliResult<MatchSetup> {
    let home = squad(args.home, args.home_players)?;
    let away = squad(args.away, args.away_players)?;

    Ok(MatchSetup {
        name: args.name.unwrap_or_default(),
        tournament: args.tournament,
        venue: args.venue,
        date: args.date,
        home,
        away,
        overs: args.overs.unwrap_or(config.defaults.overs),
        balls_per_over: args.balls_per_over.unwrap_or(config.defaults.balls_per_over),
        max_wickets: args.max_wickets.or(config.defaults.max_wickets),
        toss: args.toss.zip(args.elect.map(convert_toss)),
    })
}

/// Trims names and drops blanks left by stray commas.
fn squad(name: String, players: Vec<String>) -> CliResult<SquadSetup> {
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(CliError::InvalidInput {
            message: "team name cannot be empty".into(),
            source: None,
        });
    }
    let players = players
        .into_iter()
        .map(|p| p.trim().to_owned())
        .filter(|p| !p.is_empty())
        .collect();
    Ok(SquadSetup { name, players })
}

fn convert_toss(toss: TossArg) -> TossChoice {
    match toss {
        TossArg::Bat => TossChoice::Bat,
        TossArg::Bowl => TossChoice::Bowl,
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_fixture(m: &Match, out: &OutputManager) -> CliResult<()> {
    let settings = m.settings();
    out.header("Fixture")?;
    if let Some(t) = m.tournament_name() {
        out.print(&format!("  Tournament:   {t}"))?;
    }
    if let Some(v) = m.venue() {
        out.print(&format!("  Venue:        {v}"))?;
    }
    out.print(&format!("  Date:         {}", m.date()))?;
    out.print(&format!(
        "  Format:       {} over(s) of {} balls, {} wickets",
        settings.total_overs, settings.balls_per_over, settings.max_wickets
    ))?;
    for team in m.teams() {
        let names: Vec<&str> = team.players().iter().map(|p| p.name.as_str()).collect();
        out.print(&format!("  {:<13} {}", format!("{}:", team.name), names.join(", ")))?;
    }
    if let Some(batting) = m.batting_team() {
        out.print(&format!("  Batting:      {}", batting.name))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> NewArgs {
        NewArgs {
            name: None,
            home: " Lions ".into(),
            home_players: vec!["Asha".into(), " Ben".into(), "".into()],
            away: "Tigers".into(),
            away_players: vec!["Dev".into(), "Eli".into()],
            overs: None,
            balls_per_over: None,
            max_wickets: None,
            tournament: None,
            venue: None,
            date: None,
            toss: None,
            elect: None,
        }
    }

    #[test]
    fn config_defaults_fill_missing_flags() {
        let mut config = AppConfig::default();
        config.defaults.overs = 8;
        config.defaults.max_wickets = Some(3);

        let setup = build_setup(args(), &config).unwrap();
        assert_eq!(setup.overs, 8);
        assert_eq!(setup.balls_per_over, config.defaults.balls_per_over);
        assert_eq!(setup.max_wickets, Some(3));
    }

    #[test]
    fn flags_beat_config() {
        let mut a = args();
        a.overs = Some(3);
        a.toss = Some("Tigers".into());
        a.elect = Some(TossArg::Bowl);

        let setup = build_setup(a, &AppConfig::default()).unwrap();
        assert_eq!(setup.overs, 3);
        assert_eq!(setup.toss, Some(("Tigers".into(), TossChoice::Bowl)));
    }

    #[test]
    fn names_are_trimmed_and_blanks_dropped() {
        let setup = build_setup(args(), &AppConfig::default()).unwrap();
        assert_eq!(setup.home.name, "Lions");
        assert_eq!(setup.home.players, ["Asha", "Ben"]);
    }

    #[test]
    fn blank_team_name_is_invalid_input() {
        let mut a = args();
        a.away = "  ".into();
        assert!(matches!(
            build_setup(a, &AppConfig::default()),
            Err(CliError::InvalidInput { .. })
        ));
    }
}
