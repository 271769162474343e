//! `crease awards` - MVP, most expensive bowler and duck.

use crease_core::domain::PlayerAggregate;

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
    let awards = super::stats_service(&global, &config).awards(&args.key)?;

    if output.is_json() {
        output.json(&awards)?;
        return Ok(());
    }

    let titles = &config.awards;
    output.header("Awards")?;
    output.print(&award_line(&titles.mvp_title, awards.mvp.as_ref(), |p| {
        format!(
            "{} runs, {} wkt(s), index {}",
            p.runs,
            p.wickets,
            p.combined_index()
        )
    }))?;
    output.print(&award_line(
        &titles.most_expensive_title,
        awards.most_expensive.as_ref(),
        |p| format!("{} runs off {} ov", p.runs_conceded, p.overs()),
    ))?;
    output.print(&award_line(&titles.duck_title, awards.duck.as_ref(), |p| {
        format!("0 off {} ball(s)", p.balls_faced)
    }))?;
    Ok(())
}

fn award_line(
    title: &str,
    winner: Option<&PlayerAggregate>,
    detail: impl Fn(&PlayerAggregate) -> String,
) -> String {
    match winner {
        Some(p) => format!("  {title}: {} ({})", p.name, detail(p)),
        None => format!("  {title}: none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crease_core::domain::PlayerId;

    #[test]
    fn award_line_with_and_without_winner() {
        let mut p = PlayerAggregate::new(PlayerId::new("p1"), "Ben");
        p.balls_faced = 8;
        assert_eq!(
            award_line("Duck", Some(&p), |p| format!("0 off {}", p.balls_faced)),
            "  Duck: Ben (0 off 8)"
        );
        assert_eq!(award_line("Duck", None, |_| String::new()), "  Duck: none");
    }
}
