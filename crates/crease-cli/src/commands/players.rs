//! `crease players` - the roster with career figures rebuilt from history.

use crease_core::domain::Player;

use crate::{
    cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager,
};

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let players = super::stats_service(&global, &config).reconcile_roster()?;

    if output.is_json() {
        output.json(&players)?;
        return Ok(());
    }

    if players.is_empty() {
        output.info("The roster is empty. Players are added by 'crease new'.")?;
        return Ok(());
    }

    output.header("Players")?;
    output.table(&rows(&players))?;
    Ok(())
}

fn rows(players: &[Player]) -> Vec<Vec<String>> {
    let mut rows = vec![
        ["Player", "M", "Runs", "HS", "4s", "6s", "Wkts", "Best", "Rank"]
            .map(String::from)
            .to_vec(),
    ];
    for p in players {
        rows.push(vec![
            p.name.clone(),
            p.matches.to_string(),
            p.runs.to_string(),
            p.highest_score.to_string(),
            p.fours.to_string(),
            p.sixes.to_string(),
            p.wickets.to_string(),
            p.best_bowling.clone().unwrap_or_else(|| "-".into()),
            p.rank.map_or_else(|| "-".into(), |r| r.to_string()),
        ]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unranked_players_show_dashes() {
        let rows = rows(&[Player::new("Asha")]);
        assert_eq!(rows[1][0], "Asha");
        assert_eq!(rows[1][7], "-");
        assert_eq!(rows[1][8], "-");
    }
}
