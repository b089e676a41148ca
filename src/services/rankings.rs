use crate::db::Db;
use crate::error::AppError;
use crate::models::maps::MapEntity;
use crate::models::rankings::{BestSkinTally, LeaderboardEntry, MapHighscores, MapSkinRecord};
use crate::models::records::RunRecord;
use crate::query::{DedupScope, Filter, SelectOptions, SkinScope};
use crate::services::catalog;
use crate::services::records::{best_per_player, fetch_runs, select};
use std::collections::{BTreeMap, HashMap};

/// Placement points per map, fastest first. Anything past 11th scores
/// nothing.
pub const POINTS_CURVE: [i64; 11] = [15, 12, 10, 8, 7, 6, 5, 4, 3, 2, 1];

/// Collapses player bests to the single fastest run per (map, skin) across
/// all players. Same tie rule as the per-player pass: earliest recorded run
/// on equal times.
fn best_per_skin(records: Vec<RunRecord>) -> Vec<RunRecord> {
    let mut best: HashMap<(i64, String), RunRecord> = HashMap::new();
    for record in records {
        let key = (record.map_id, record.skin.clone());
        let replace = match best.get(&key) {
            Some(current) => {
                (record.ticks, record.recorded_at) < (current.ticks, current.recorded_at)
            }
            None => true,
        };
        if replace {
            best.insert(key, record);
        }
    }
    best.into_values().collect()
}

/// The per-map breakdown: for every map with at least one run, the fastest
/// run per skin, fastest first. Maps ordered by id.
pub fn build_map_view(records: Vec<RunRecord>) -> Vec<MapHighscores> {
    let bests = best_per_skin(best_per_player(records));

    let mut maps: BTreeMap<i64, MapHighscores> = BTreeMap::new();
    for record in bests {
        let entry = maps.entry(record.map_id).or_insert_with(|| MapHighscores {
            id: record.map_id,
            name: record.map_name.clone(),
            skins: Vec::new(),
        });
        entry.skins.push(MapSkinRecord {
            skin: record.skin,
            username: record.username,
            ticks: record.ticks,
            time_string: record.time_string,
            recorded_at: record.recorded_at,
        });
    }

    let mut view: Vec<MapHighscores> = maps.into_values().collect();
    for map in &mut view {
        map.skins
            .sort_by(|a, b| a.ticks.cmp(&b.ticks).then_with(|| a.skin.cmp(&b.skin)));
    }
    view
}

fn top_for_map(
    records: &[RunRecord],
    map_id: i64,
    all_skins: bool,
) -> Result<Vec<RunRecord>, AppError> {
    let opts = SelectOptions {
        filters: vec![Filter::MapId(map_id)],
        limit: POINTS_CURVE.len() as i64,
        skin_scope: if all_skins {
            SkinScope::All
        } else {
            SkinScope::BaseOnly
        },
        dedup_scope: DedupScope::BestPerPlayer,
        order: None,
    };
    select(records, &opts)
}

/// Cross-map leaderboard: each map's top eleven award points on the fixed
/// curve, accumulated per player. A map with no qualifying run contributes
/// nothing.
pub fn compute_leaderboard(
    records: &[RunRecord],
    maps: &[MapEntity],
    all_skins: bool,
) -> Result<Vec<LeaderboardEntry>, AppError> {
    let mut points: HashMap<String, i64> = HashMap::new();
    for map in maps {
        for (place, record) in top_for_map(records, map.id, all_skins)?.iter().enumerate() {
            let award = POINTS_CURVE.get(place).copied().unwrap_or(0);
            *points.entry(record.username.clone()).or_insert(0) += award;
        }
    }

    let mut board: Vec<LeaderboardEntry> = points
        .into_iter()
        .map(|(username, points)| LeaderboardEntry { username, points })
        .collect();
    board.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.username.cmp(&b.username)));
    Ok(board)
}

/// Per map, whichever skin holds the overall fastest time takes one win.
pub fn compute_best_skins(
    records: &[RunRecord],
    maps: &[MapEntity],
    all_skins: bool,
) -> Result<Vec<BestSkinTally>, AppError> {
    let mut wins: HashMap<String, i64> = HashMap::new();
    for map in maps {
        if let Some(fastest) = top_for_map(records, map.id, all_skins)?.first() {
            *wins.entry(fastest.skin.clone()).or_insert(0) += 1;
        }
    }

    let mut tally: Vec<BestSkinTally> = wins
        .into_iter()
        .map(|(skin, wins)| BestSkinTally { skin, wins })
        .collect();
    tally.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.skin.cmp(&b.skin)));
    Ok(tally)
}

pub fn map_highscores(db: &Db) -> Result<Vec<MapHighscores>, AppError> {
    Ok(build_map_view(fetch_runs(db)?))
}

pub fn leaderboard(db: &Db, all_skins: bool) -> Result<Vec<LeaderboardEntry>, AppError> {
    let maps = catalog::get_maps(db, true)?;
    let runs = fetch_runs(db)?;
    compute_leaderboard(&runs, &maps, all_skins)
}

pub fn best_skins(db: &Db, all_skins: bool) -> Result<Vec<BestSkinTally>, AppError> {
    let maps = catalog::get_maps(db, true)?;
    let runs = fetch_runs(db)?;
    compute_best_skins(&runs, &maps, all_skins)
}
