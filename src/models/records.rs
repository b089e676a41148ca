use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The vanilla characters. Modded skins are excluded from the scoring views
/// unless a request opts in with `all_skins=on`.
pub const BASE_SKINS: &[&str] = &["sonic", "tails", "knuckles", "amy", "fang", "metalsonic"];

pub fn is_base_skin(skin: &str) -> bool {
    BASE_SKINS.contains(&skin)
}

/// One completed run as served by the API. Wire names (`time`, `mapname`,
/// `datetime`) match the columns the highscores site consumes; `time_string`
/// is derived from `time` at read time, not stored.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub username: String,
    pub skin: String,
    pub map_id: i64,
    #[serde(rename = "mapname")]
    pub map_name: String,
    #[serde(rename = "time")]
    pub ticks: i64,
    pub time_string: String,
    #[serde(rename = "datetime")]
    pub recorded_at: NaiveDateTime,
}

/// Query parameters for `/api/search`. The name filters (`username`,
/// `mapname`, `skin`) are fuzzy-resolved against the known universe before
/// they are applied; `map_id` is exact. Checkbox params arrive as `on`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub username: Option<String>,
    pub mapname: Option<String>,
    pub map_id: Option<i64>,
    pub skin: Option<String>,
    pub order: Option<String>,
    pub descending: Option<String>,
    pub limit: Option<i64>,
    pub all_scores: Option<String>,
    pub all_skins: Option<String>,
}
