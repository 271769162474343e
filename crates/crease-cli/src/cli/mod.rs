//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crease",
    bin_name = "crease",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3cf} Ball-by-ball cricket scoring",
    long_about = "Crease scores academy cricket matches one delivery at a time \
                  and derives scorecards, rankings and awards from the balls.",
    after_help = "EXAMPLES:\n\
        \x20 crease new --home Lions --home-players Asha,Ben,Cara --away Tigers --away-players Dev,Eli,Finn\n\
        \x20 crease assign striker Asha\n\
        \x20 crease ball 4\n\
        \x20 crease ball --extra wide\n\
        \x20 crease ball --wicket caught\n\
        \x20 crease rank bowler",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a new match between two squads.
    #[command(
        visible_alias = "n",
        about = "Start a new match",
        after_help = "EXAMPLES:\n\
            \x20 crease new --home Lions --home-players Asha,Ben,Cara --away Tigers --away-players Dev,Eli,Finn\n\
            \x20 crease new \"Cup Final\" --home A --home-players a1,a2 --away B --away-players b1,b2 --overs 5 --toss B --elect bowl"
    )]
    New(NewArgs),

    /// List recorded matches.
    #[command(
        visible_alias = "ls",
        about = "List matches, newest first",
        after_help = "EXAMPLES:\n\
            \x20 crease list\n\
            \x20 crease list --format csv"
    )]
    List(ListArgs),

    /// Show the live scoreboard.
    #[command(about = "Show the scoreboard of a match")]
    Show(MatchArg),

    /// Put a player at the crease or in charge of the over.
    #[command(
        about = "Assign striker, non-striker or bowler",
        after_help = "EXAMPLES:\n\
            \x20 crease assign striker Asha\n\
            \x20 crease assign non-striker Ben\n\
            \x20 crease assign bowler Dev --match 3f2a"
    )]
    Assign(AssignArgs),

    /// Record one delivery.
    #[command(
        visible_alias = "b",
        about = "Record a ball",
        after_help = "EXAMPLES:\n\
            \x20 crease ball 4\n\
            \x20 crease ball             # dot ball\n\
            \x20 crease ball --extra wide\n\
            \x20 crease ball 2 --extra no-ball\n\
            \x20 crease ball 1 --extra leg-bye\n\
            \x20 crease ball 1 --wicket run-out --out non-striker"
    )]
    Ball(BallArgs),

    /// Retract the last delivery.
    #[command(about = "Undo the last ball of the current innings")]
    Undo(MatchArg),

    /// Batting and bowling cards for each innings.
    #[command(visible_alias = "card", about = "Show the scorecard of a match")]
    Scorecard(MatchArg),

    /// MVP, most expensive bowler and duck for a finished match.
    #[command(about = "Show match awards")]
    Awards(MatchArg),

    /// Player leaderboards across every match.
    #[command(
        about = "Rank players",
        after_help = "EXAMPLES:\n\
            \x20 crease rank\n\
            \x20 crease rank batsman --limit 5\n\
            \x20 crease rank bowler"
    )]
    Rank(RankArgs),

    /// Headline totals across every match.
    #[command(about = "Show dashboard totals")]
    Summary,

    /// The roster, with career figures rebuilt from the match history.
    #[command(about = "List roster players with career figures")]
    Players,

    /// Initialise a Crease configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crease init           # default location\n\
            \x20 crease init --local   # .crease.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crease completions bash > ~/.local/share/bash-completion/completions/crease\n\
            \x20 crease completions zsh  > ~/.zfunc/_crease\n\
            \x20 crease completions fish > ~/.config/fish/completions/crease.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Crease configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crease config get defaults.overs\n\
            \x20 crease config set defaults.overs 5\n\
            \x20 crease config list"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Which match a command addresses.
#[derive(Debug, Args)]
pub struct MatchArg {
    /// Match id, unique id prefix, or `latest`.
    #[arg(
        short = 'm',
        long = "match",
        value_name = "MATCH",
        default_value = "latest",
        help = "Match id, id prefix, or 'latest'"
    )]
    pub key: String,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `crease new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Match name. Defaults to "<home> vs <away>".
    #[arg(value_name = "NAME", help = "Match name")]
    pub name: Option<String>,

    #[arg(long = "home", value_name = "TEAM", help = "Home team name")]
    pub home: String,

    /// Comma-separated batting order.
    #[arg(
        long = "home-players",
        value_name = "NAMES",
        value_delimiter = ',',
        required = true,
        help = "Home squad, comma-separated"
    )]
    pub home_players: Vec<String>,

    #[arg(long = "away", value_name = "TEAM", help = "Away team name")]
    pub away: String,

    #[arg(
        long = "away-players",
        value_name = "NAMES",
        value_delimiter = ',',
        required = true,
        help = "Away squad, comma-separated"
    )]
    pub away_players: Vec<String>,

    /// Overs per innings. Falls back to `defaults.overs`.
    #[arg(short = 'o', long = "overs", help = "Overs per innings")]
    pub overs: Option<u32>,

    #[arg(long = "balls-per-over", help = "Legal deliveries per over")]
    pub balls_per_over: Option<u32>,

    /// Wickets that end an innings. Defaults to one fewer than the squad.
    #[arg(long = "max-wickets", help = "Wickets that end an innings")]
    pub max_wickets: Option<u32>,

    #[arg(short = 't', long = "tournament", help = "Tournament name")]
    pub tournament: Option<String>,

    #[arg(long = "venue", help = "Ground or venue")]
    pub venue: Option<String>,

    /// Match date (YYYY-MM-DD). Defaults to today.
    #[arg(long = "date", value_name = "DATE", help = "Match date (YYYY-MM-DD)")]
    pub date: Option<NaiveDate>,

    /// Team that won the toss.
    #[arg(long = "toss", value_name = "TEAM", requires = "elect", help = "Toss winner")]
    pub toss: Option<String>,

    #[arg(long = "elect", value_enum, requires = "toss", help = "Toss winner elects to")]
    pub elect: Option<TossArg>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `crease list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── assign ────────────────────────────────────────────────────────────────────

/// Arguments for `crease assign`.
#[derive(Debug, Args)]
pub struct AssignArgs {
    #[arg(value_enum, help = "Role to fill")]
    pub role: RoleArg,

    /// Player name or id.
    #[arg(value_name = "PLAYER", help = "Player name or id")]
    pub player: String,

    #[command(flatten)]
    pub target: MatchArg,
}

// ── ball ──────────────────────────────────────────────────────────────────────

/// Arguments for `crease ball`.
#[derive(Debug, Args)]
pub struct BallArgs {
    /// Runs off the bat, or runs taken for byes and leg-byes.
    #[arg(value_name = "RUNS", default_value_t = 0, help = "Runs scored")]
    pub runs: u32,

    #[arg(short = 'e', long = "extra", value_enum, help = "Extra type")]
    pub extra: Option<ExtraArg>,

    #[arg(short = 'w', long = "wicket", value_enum, help = "Dismissal type")]
    pub wicket: Option<WicketArg>,

    /// Which batter the wicket dismisses.
    #[arg(
        long = "out",
        value_enum,
        requires = "wicket",
        default_value = "striker",
        help = "Batter dismissed"
    )]
    pub out: BatterArg,

    #[command(flatten)]
    pub target: MatchArg,
}

// ── rank ──────────────────────────────────────────────────────────────────────

/// Arguments for `crease rank`.
#[derive(Debug, Args)]
pub struct RankArgs {
    #[arg(value_enum, default_value = "allrounder", help = "Leaderboard")]
    pub category: CategoryArg,

    #[arg(short = 'n', long = "limit", help = "Show only the top N")]
    pub limit: Option<usize>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crease init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.crease.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crease completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crease config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.overs`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum RoleArg {
    Striker,
    NonStriker,
    Bowler,
}

/// The batter a wicket dismisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum BatterArg {
    Striker,
    NonStriker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ExtraArg {
    #[value(alias = "wd")]
    Wide,
    #[value(alias = "nb")]
    NoBall,
    #[value(alias = "b")]
    Bye,
    #[value(alias = "lb")]
    LegBye,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum WicketArg {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CategoryArg {
    #[value(alias = "batting")]
    Batsman,
    #[value(alias = "bowling")]
    Bowler,
    #[value(alias = "all-rounder")]
    Allrounder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TossArg {
    Bat,
    Bowl,
}

// ── tests ─────────────────────────────────────────────────────────────────────
