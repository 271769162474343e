//! `crease show` - the live scoreboard.
//!
//! [`print_scoreboard`] is shared with `assign`, `ball` and `undo`, which
//! all finish by showing the state they left behind.

use crease_core::domain::{InningsFigures, Match, PlayerId};

use crate::{
    cli::{GlobalArgs, MatchArg},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{innings_line, player_name};

/// Deliveries shown in the "recent" strip.
const RECENT_BALLS: usize = 6;

pub fn execute(
    args: MatchArg,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let m = super::scoring_service(&global, &config).get_match(&args.key)?;
    if output.is_json() {
        output.json(&m)?;
        return Ok(());
    }
    print_scoreboard(&m, &output)
}

pub fn print_scoreboard(m: &Match, out: &OutputManager) -> CliResult<()> {
    let title = match m.tournament_name() {
        Some(t) => format!("{} ({t})", m.name()),
        None => m.name().to_owned(),
    };
    out.header(&title)?;

    for inn in m.innings() {
        out.print(&format!("  {}", innings_line(m, inn)))?;
    }

    if let Some(summary) = m.result_summary() {
        out.success(&summary)?;
        return Ok(());
    }

    let Some(inn) = m.current_innings() else {
        return Ok(());
    };
    let bpo = m.settings().balls_per_over;

    let mut rate = format!("  CRR {:.2}", inn.run_rate(bpo));
    if let (Some(target), Some(need)) = (m.target(), m.required_runs()) {
        rate.push_str(&format!(
            "  Target {target}, need {need} from {} ball(s)",
            m.balls_remaining()
        ));
    }
    out.print(&rate)?;

    out.print(&format!(
        "  {}",
        batter_text(m, inn.current_striker_id(), "striker", true)
    ))?;
    out.print(&format!(
        "  {}",
        batter_text(m, inn.current_non_striker_id(), "non-striker", false)
    ))?;
    out.print(&format!("  {}", bowler_text(m, inn.current_bowler_id())))?;

    let recent = inn.recent(RECENT_BALLS);
    if !recent.is_empty() {
        let labels: Vec<String> = recent.iter().map(|b| b.short_label()).collect();
        out.muted(&format!("  Recent: {}", labels.join(" ")))?;
    }

    let crease_gap =
        inn.current_striker_id().is_none() || inn.current_non_striker_id().is_none();
    if crease_gap {
        if let Some(team) = m.batting_team() {
            let names: Vec<&str> = inn
                .available_batters(team)
                .into_iter()
                .map(|p| p.name.as_str())
                .collect();
            if !names.is_empty() {
                out.muted(&format!("  Yet to bat: {}", names.join(", ")))?;
            }
        }
    }
    if inn.current_bowler_id().is_none() && !inn.balls().is_empty() {
        if let Some(last) = inn.last_bowler_id() {
            out.muted(&format!(
                "  New over: {} cannot bowl it",
                player_name(m, last)
            ))?;
        }
    }

    Ok(())
}

fn batter_text(m: &Match, id: Option<&PlayerId>, role: &str, on_strike: bool) -> String {
    let Some(id) = id else {
        return format!("{role}: (not assigned)");
    };
    let star = if on_strike { "*" } else { "" };
    let figures = m
        .current_innings()
        .map(|inn| InningsFigures::for_player(id, inn))
        .unwrap_or_default();
    format!(
        "{}{star} {} ({})",
        player_name(m, id),
        figures.runs,
        figures.balls_faced
    )
}

fn bowler_text(m: &Match, id: Option<&PlayerId>) -> String {
    let Some(id) = id else {
        return "bowler: (not assigned)".to_owned();
    };
    let figures = m
        .current_innings()
        .map(|inn| InningsFigures::for_player(id, inn))
        .unwrap_or_default();
    format!(
        "{} {}-{}-{}",
        player_name(m, id),
        figures.overs,
        figures.runs_conceded,
        figures.wickets
    )
}
