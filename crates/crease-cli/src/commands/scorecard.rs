//! `crease scorecard` - batting and bowling cards per innings.

use crease_core::domain::Scorecard;

use crate::{
    cli::{GlobalArgs, MatchArg},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: MatchArg,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cards = super::stats_service(&global, &config).scorecards(&args.key)?;

    if output.is_json() {
        output.json(&cards)?;
        return Ok(());
    }

    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            output.print("")?;
        }
        print_card(card, &output)?;
    }
    Ok(())
}

fn print_card(card: &Scorecard, out: &OutputManager) -> CliResult<()> {
    out.header(&format!(
        "{} {}/{} ({} ov){}",
        card.batting_team,
        card.total_runs,
        card.total_wickets,
        card.overs,
        if card.completed { "" } else { " *" }
    ))?;
    out.table(&batting_rows(card))?;

    if !card.did_not_bat.is_empty() {
        out.muted(&format!("  Did not bat: {}", card.did_not_bat.join(", ")))?;
    }
    let e = &card.extras;
    out.print(&format!(
        "  Extras: {} (wd {}, nb {}, b {}, lb {})",
        e.total(),
        e.wides,
        e.no_balls,
        e.byes,
        e.leg_byes
    ))?;

    out.print("")?;
    out.print(&format!("  {} bowling", card.bowling_team))?;
    out.table(&bowling_rows(card))?;
    Ok(())
}

fn batting_rows(card: &Scorecard) -> Vec<Vec<String>> {
    let mut rows = vec![
        ["Batter", "", "R", "B", "4s", "6s", "SR"]
            .map(String::from)
            .to_vec(),
    ];
    for r in &card.batting {
        let status = match (&r.how_out, r.at_crease) {
            (Some(how), _) => how.clone(),
            (None, true) => "not out".to_owned(),
            (None, false) => String::new(),
        };
        rows.push(vec![
            r.name.clone(),
            status,
            r.runs.to_string(),
            r.balls_faced.to_string(),
            r.fours.to_string(),
            r.sixes.to_string(),
            format!("{:.2}", r.strike_rate),
        ]);
    }
    rows
}

fn bowling_rows(card: &Scorecard) -> Vec<Vec<String>> {
    let mut rows = vec![
        ["Bowler", "O", "R", "W", "Econ"]
            .map(String::from)
            .to_vec(),
    ];
    for r in &card.bowling {
        rows.push(vec![
            r.name.clone(),
            r.overs.to_string(),
            r.runs_conceded.to_string(),
            r.wickets.to_string(),
            format!("{:.2}", r.economy),
        ]);
    }
    rows
}
