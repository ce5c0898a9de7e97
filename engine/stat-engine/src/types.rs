use nflverse_fetcher::GameRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Player positions the dashboard supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    /// All selectable positions, in sidebar order
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    /// The ordered stat set shown for this position.
    ///
    /// QBs get the passing game plus their rushing usage, RBs the rushing
    /// game plus receiving work, and receivers (WR/TE) the receiving game.
    pub fn stat_keys(&self) -> &'static [StatKey] {
        use StatKey::*;
        match self {
            Position::QB => &[
                Completions,
                Attempts,
                PassingYards,
                PassingTds,
                Interceptions,
                Carries,
                RushingYards,
                RushingTds,
                FantasyPoints,
                FantasyPointsPpr,
            ],
            Position::RB => &[
                Carries,
                RushingYards,
                RushingTds,
                Receptions,
                Targets,
                ReceivingYards,
                ReceivingTds,
                FantasyPoints,
                FantasyPointsPpr,
            ],
            Position::WR | Position::TE => &[
                Receptions,
                Targets,
                ReceivingYards,
                ReceivingTds,
                ReceivingFumbles,
                FantasyPoints,
                FantasyPointsPpr,
            ],
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Position {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            other => Err(SelectionError::UnknownPosition(other.to_string())),
        }
    }
}

/// The tracked box-score stat columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    Completions,
    Attempts,
    PassingYards,
    PassingTds,
    Interceptions,
    Carries,
    RushingYards,
    RushingTds,
    Receptions,
    Targets,
    ReceivingYards,
    ReceivingTds,
    ReceivingFumbles,
    FantasyPoints,
    FantasyPointsPpr,
}

impl StatKey {
    /// Every tracked stat, in schema order
    pub const ALL: [StatKey; 15] = [
        StatKey::Completions,
        StatKey::Attempts,
        StatKey::PassingYards,
        StatKey::PassingTds,
        StatKey::Interceptions,
        StatKey::Carries,
        StatKey::RushingYards,
        StatKey::RushingTds,
        StatKey::Receptions,
        StatKey::Targets,
        StatKey::ReceivingYards,
        StatKey::ReceivingTds,
        StatKey::ReceivingFumbles,
        StatKey::FantasyPoints,
        StatKey::FantasyPointsPpr,
    ];

    /// The snake_case column name in the source schema
    pub fn name(&self) -> &'static str {
        match self {
            StatKey::Completions => "completions",
            StatKey::Attempts => "attempts",
            StatKey::PassingYards => "passing_yards",
            StatKey::PassingTds => "passing_tds",
            StatKey::Interceptions => "interceptions",
            StatKey::Carries => "carries",
            StatKey::RushingYards => "rushing_yards",
            StatKey::RushingTds => "rushing_tds",
            StatKey::Receptions => "receptions",
            StatKey::Targets => "targets",
            StatKey::ReceivingYards => "receiving_yards",
            StatKey::ReceivingTds => "receiving_tds",
            StatKey::ReceivingFumbles => "receiving_fumbles",
            StatKey::FantasyPoints => "fantasy_points",
            StatKey::FantasyPointsPpr => "fantasy_points_ppr",
        }
    }

    /// Human-readable label for charts and tables
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Completions => "Completions",
            StatKey::Attempts => "Attempts",
            StatKey::PassingYards => "Passing Yards",
            StatKey::PassingTds => "Passing TDs",
            StatKey::Interceptions => "Interceptions",
            StatKey::Carries => "Carries",
            StatKey::RushingYards => "Rushing Yards",
            StatKey::RushingTds => "Rushing TDs",
            StatKey::Receptions => "Receptions",
            StatKey::Targets => "Targets",
            StatKey::ReceivingYards => "Receiving Yards",
            StatKey::ReceivingTds => "Receiving TDs",
            StatKey::ReceivingFumbles => "Receiving Fumbles",
            StatKey::FantasyPoints => "Fantasy Points",
            StatKey::FantasyPointsPpr => "Fantasy Points (PPR)",
        }
    }

    /// Read this stat from a record. `None` means the value was missing
    /// from the source row (or the column from that year's schema).
    pub fn value(&self, record: &GameRecord) -> Option<f64> {
        match self {
            StatKey::Completions => record.completions,
            StatKey::Attempts => record.attempts,
            StatKey::PassingYards => record.passing_yards,
            StatKey::PassingTds => record.passing_tds,
            StatKey::Interceptions => record.interceptions,
            StatKey::Carries => record.carries,
            StatKey::RushingYards => record.rushing_yards,
            StatKey::RushingTds => record.rushing_tds,
            StatKey::Receptions => record.receptions,
            StatKey::Targets => record.targets,
            StatKey::ReceivingYards => record.receiving_yards,
            StatKey::ReceivingTds => record.receiving_tds,
            StatKey::ReceivingFumbles => record.receiving_fumbles,
            StatKey::FantasyPoints => record.fantasy_points,
            StatKey::FantasyPointsPpr => record.fantasy_points_ppr,
        }
    }

    /// Parse a snake_case column name
    pub fn parse(name: &str) -> Option<StatKey> {
        StatKey::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors raised while resolving a position/player selection
#[derive(Debug, Clone, Error)]
pub enum SelectionError {
    /// Position string outside QB/RB/WR/TE
    #[error("Unknown position '{0}' (expected QB, RB, WR or TE)")]
    UnknownPosition(String),

    /// No rows at all for the selected position
    #[error("No players found at position {0}")]
    NoPlayers(Position),

    /// Player name not present at the selected position
    #[error("Player '{player}' not found at position {position}")]
    PlayerNotFound { position: Position, player: String },
}
