//! Implementation of the `crease list` command.

use crease_core::domain::{Match, MatchStatus};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::score_line;

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::scoring_service(&global, &config);
    let matches = service.list_matches()?;

    if output.is_json() {
        output.json(&matches)?;
        return Ok(());
    }

    match args.format {
        ListFormat::Table => {
            if matches.is_empty() {
                output.info("No matches yet. Start one with 'crease new'.")?;
                return Ok(());
            }
            output.header("Matches:")?;
            let mut rows = vec![vec![
                "Id".to_owned(),
                "Match".to_owned(),
                "Date".to_owned(),
                "Status".to_owned(),
                "Score".to_owned(),
            ]];
            rows.extend(matches.iter().map(|m| {
                vec![
                    m.id().short().to_owned(),
                    m.name().to_owned(),
                    m.date().to_string(),
                    status_text(m),
                    score_line(m),
                ]
            }));
            output.table(&rows)?;
        }

        // One id per line, for scripting.
        ListFormat::List => {
            for m in &matches {
                output.print(m.id().as_str())?;
            }
        }

        ListFormat::Json => output.json(&matches)?,

        ListFormat::Csv => {
            output.print("id,name,date,status,score")?;
            for m in &matches {
                output.print(&format!(
                    "{},{},{},{},{}",
                    m.id(),
                    csv_field(m.name()),
                    m.date(),
                    m.status(),
                    csv_field(&score_line(m))
                ))?;
            }
        }
    }

    Ok(())
}

fn status_text(m: &Match) -> String {
    match m.status() {
        MatchStatus::Completed => m
            .result_summary()
            .unwrap_or_else(|| MatchStatus::Completed.to_string()),
        other => other.to_string(),
    }
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::fixture;

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("Lions vs Tigers"), "Lions vs Tigers");
        assert_eq!(csv_field("A, B"), "\"A, B\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn live_match_status() {
        assert_eq!(status_text(&fixture()), "live");
    }
}
