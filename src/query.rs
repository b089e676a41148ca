use crate::error::AppError;
use crate::models::records::RunRecord;
use std::cmp::Ordering;

/// The recognized filter/order keys, one per column the search view returns.
/// Anything else is rejected with `UnknownColumn` rather than silently
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Username,
    Skin,
    MapId,
    MapName,
    Ticks,
    TimeString,
    RecordedAt,
}

impl Column {
    pub const KEYS: &'static [&'static str] = &[
        "username",
        "skin",
        "map_id",
        "mapname",
        "time",
        "time_string",
        "datetime",
    ];

    pub fn parse(key: &str) -> Result<Self, AppError> {
        match key {
            "username" => Ok(Column::Username),
            "skin" => Ok(Column::Skin),
            "map_id" => Ok(Column::MapId),
            "mapname" => Ok(Column::MapName),
            "time" => Ok(Column::Ticks),
            "time_string" => Ok(Column::TimeString),
            "datetime" => Ok(Column::RecordedAt),
            other => Err(AppError::UnknownColumn(other.to_string())),
        }
    }

    pub fn compare(self, a: &RunRecord, b: &RunRecord) -> Ordering {
        match self {
            Column::Username => a.username.cmp(&b.username),
            Column::Skin => a.skin.cmp(&b.skin),
            Column::MapId => a.map_id.cmp(&b.map_id),
            Column::MapName => a.map_name.cmp(&b.map_name),
            Column::Ticks => a.ticks.cmp(&b.ticks),
            Column::TimeString => a.time_string.cmp(&b.time_string),
            Column::RecordedAt => a.recorded_at.cmp(&b.recorded_at),
        }
    }
}

/// An exact-match predicate. Free-text values are canonicalized through the
/// fuzzy resolver before a filter is built, never inside it.
#[derive(Debug, Clone)]
pub enum Filter {
    Username(String),
    Skin(String),
    MapId(i64),
    MapName(String),
}

impl Filter {
    pub fn matches(&self, record: &RunRecord) -> bool {
        match self {
            Filter::Username(name) => record.username == *name,
            Filter::Skin(skin) => record.skin == *skin,
            Filter::MapId(id) => record.map_id == *id,
            Filter::MapName(name) => record.map_name == *name,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SortKey {
    pub column: Column,
    pub descending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinScope {
    BaseOnly,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupScope {
    BestPerPlayer,
    AllRuns,
}

pub const DEFAULT_LIMIT: i64 = 1000;

#[derive(Debug, Clone)]
pub struct SelectOptions {
    pub filters: Vec<Filter>,
    pub order: Option<SortKey>,
    pub limit: i64,
    pub skin_scope: SkinScope,
    pub dedup_scope: DedupScope,
}

impl Default for SelectOptions {
    fn default() -> Self {
        SelectOptions {
            filters: Vec::new(),
            order: None,
            limit: DEFAULT_LIMIT,
            skin_scope: SkinScope::BaseOnly,
            dedup_scope: DedupScope::BestPerPlayer,
        }
    }
}

impl SelectOptions {
    /// Local validation, checked before any store read.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.limit < 1 {
            return Err(AppError::InvalidLimit(self.limit));
        }
        Ok(())
    }
}

/// Checkbox params arrive as `on` from the site's query strings.
pub fn checkbox_on(value: Option<&str>) -> bool {
    matches!(value, Some("on"))
}
