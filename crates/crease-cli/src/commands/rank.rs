//! `crease rank` - leaderboards across every match.

use crease_core::domain::{RankedPlayer, RankingCategory};

use crate::{
    cli::{CategoryArg, GlobalArgs, RankArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: RankArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let category = convert_category(args.category);
    let mut board = super::stats_service(&global, &config).rankings(category)?;
    if let Some(limit) = args.limit {
        board.truncate(limit);
    }

    if output.is_json() {
        output.json(&board)?;
        return Ok(());
    }

    if board.is_empty() {
        output.info("No players have batted or bowled yet.")?;
        return Ok(());
    }

    let title = match category {
        RankingCategory::Batsman => "Batting rankings",
        RankingCategory::Bowler => "Bowling rankings",
        RankingCategory::AllRounder => "All-rounder rankings",
    };
    output.header(title)?;
    output.table(&rows(category, &board))?;
    output.muted(&format!("  {}", category.describe()))?;
    Ok(())
}

fn convert_category(category: CategoryArg) -> RankingCategory {
    match category {
        CategoryArg::Batsman => RankingCategory::Batsman,
        CategoryArg::Bowler => RankingCategory::Bowler,
        CategoryArg::Allrounder => RankingCategory::AllRounder,
    }
}

fn rows(category: RankingCategory, board: &[RankedPlayer]) -> Vec<Vec<String>> {
    let header: &[&str] = match category {
        RankingCategory::Batsman => &["#", "Player", "M", "Runs", "Balls", "SR", "HS"],
        RankingCategory::Bowler => &["#", "Player", "M", "Wkts", "Overs", "Runs", "Econ", "Best"],
        RankingCategory::AllRounder => &["#", "Player", "M", "Runs", "Wkts", "Index"],
    };
    let mut rows = vec![header.iter().map(|s| (*s).to_owned()).collect()];

    for entry in board {
        let p = &entry.player;
        let mut row = vec![entry.rank.to_string(), p.name.clone(), p.matches.to_string()];
        match category {
            RankingCategory::Batsman => row.extend([
                p.runs.to_string(),
                p.balls_faced.to_string(),
                format!("{:.2}", p.strike_rate()),
                p.highest_score.to_string(),
            ]),
            RankingCategory::Bowler => row.extend([
                p.wickets.to_string(),
                p.overs().to_string(),
                p.runs_conceded.to_string(),
                format!("{:.2}", p.economy()),
                p.best_bowling.map_or_else(|| "-".to_owned(), |b| b.to_string()),
            ]),
            RankingCategory::AllRounder => row.extend([
                p.runs.to_string(),
                p.wickets.to_string(),
                p.combined_index().to_string(),
            ]),
        }
        rows.push(row);
    }
    rows
}
