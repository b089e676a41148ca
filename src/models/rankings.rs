use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Accumulated cross-map points for one player.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub points: i64,
}

/// How many maps a skin holds the overall fastest time on.
#[derive(Debug, Clone, Serialize)]
pub struct BestSkinTally {
    pub skin: String,
    pub wins: i64,
}

/// The fastest run for one skin on one map, across all players.
#[derive(Debug, Clone, Serialize)]
pub struct MapSkinRecord {
    #[serde(rename = "name")]
    pub skin: String,
    pub username: String,
    #[serde(rename = "time")]
    pub ticks: i64,
    pub time_string: String,
    #[serde(rename = "datetime")]
    pub recorded_at: NaiveDateTime,
}

/// One map's best-per-skin records, fastest first.
#[derive(Debug, Clone, Serialize)]
pub struct MapHighscores {
    pub id: i64,
    pub name: String,
    pub skins: Vec<MapSkinRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScopeQuery {
    pub all_skins: Option<String>,
}
