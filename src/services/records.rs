use crate::db::Db;
use crate::error::AppError;
use crate::fuzzy;
use crate::models::records::{is_base_skin, RunRecord, SearchQuery};
use crate::query::{
    checkbox_on, Column, DedupScope, Filter, SelectOptions, SkinScope, SortKey,
};
use crate::services::catalog;
use crate::timefmt::{format_ticks, TICRATE};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One joined read over `runs` and `maps`. Every view reduces this candidate
/// set in memory; runs on maps the store does not know stay invisible.
pub fn fetch_runs(db: &Db) -> Result<Vec<RunRecord>, AppError> {
    Ok(db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT r.username, r.skin, r.map_id, m.name, r.ticks, r.recorded_at
             FROM runs r JOIN maps m ON m.id = r.map_id",
        )?;
        let rows = stmt.query_map([], |row| {
            let ticks: i64 = row.get(4)?;
            Ok(RunRecord {
                username: row.get(0)?,
                skin: row.get(1)?,
                map_id: row.get(2)?,
                map_name: row.get(3)?,
                ticks,
                time_string: format_ticks(ticks.max(0) as u64, TICRATE),
                recorded_at: row.get(5)?,
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    })?)
}

/// Collapses raw runs to the single best run per (player, skin, map).
/// Minimum ticks wins; equal times keep the earliest recorded run.
pub fn best_per_player(records: Vec<RunRecord>) -> Vec<RunRecord> {
    let mut best: HashMap<(String, String, i64), RunRecord> = HashMap::new();
    for record in records {
        let key = (record.username.clone(), record.skin.clone(), record.map_id);
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

/// The building block behind every view: dedup to player bests, scope to the
/// base skins, apply the filter conjunction, sort, cap.
///
/// Whatever ordering the caller asks for, equal primary keys always fall back
/// to fastest-first, so results stay internally consistent.
pub fn select(records: &[RunRecord], opts: &SelectOptions) -> Result<Vec<RunRecord>, AppError> {
    opts.validate()?;

    let candidates = match opts.dedup_scope {
        DedupScope::BestPerPlayer => best_per_player(records.to_vec()),
        DedupScope::AllRuns => records.to_vec(),
    };

    let mut results: Vec<RunRecord> = candidates
        .into_iter()
        .filter(|r| opts.skin_scope == SkinScope::All || is_base_skin(&r.skin))
        .filter(|r| opts.filters.iter().all(|f| f.matches(r)))
        .collect();

    results.sort_by(|a, b| {
        let primary = match opts.order {
            Some(key) => {
                let ordering = key.column.compare(a, b);
                if key.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            }
            None => Ordering::Equal,
        };
        primary.then_with(|| a.ticks.cmp(&b.ticks))
    });

    results.truncate(opts.limit as usize);
    Ok(results)
}

/// `/api/search`: canonicalize the free-text filters, then run the selector
/// over the store's runs. Validation happens before the store is touched.
pub fn search(db: &Db, query: &SearchQuery) -> Result<Vec<RunRecord>, AppError> {
    let mut opts = SelectOptions::default();
    if let Some(limit) = query.limit {
        opts.limit = limit;
    }
    if checkbox_on(query.all_scores.as_deref()) {
        opts.dedup_scope = DedupScope::AllRuns;
    }
    if checkbox_on(query.all_skins.as_deref()) {
        opts.skin_scope = SkinScope::All;
    }
    if let Some(key) = &query.order {
        opts.order = Some(SortKey {
            column: Column::parse(key)?,
            descending: query.descending.is_some(),
        });
    }
    opts.validate()?;

    if let Some(username) = &query.username {
        let users = catalog::get_users(db)?;
        opts.filters
            .push(Filter::Username(fuzzy::resolve(username, &users)?.to_string()));
    }
    if let Some(mapname) = &query.mapname {
        let names: Vec<String> = catalog::get_maps(db, false)?
            .into_iter()
            .map(|m| m.name)
            .collect();
        opts.filters
            .push(Filter::MapName(fuzzy::resolve(mapname, &names)?.to_string()));
    }
    if let Some(skin) = &query.skin {
        let skins = catalog::get_skins(db)?;
        opts.filters
            .push(Filter::Skin(fuzzy::resolve(skin, &skins)?.to_string()));
    }
    if let Some(map_id) = query.map_id {
        opts.filters.push(Filter::MapId(map_id));
    }

    let runs = fetch_runs(db)?;
    select(&runs, &opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn run(username: &str, skin: &str, map_id: i64, ticks: i64, day: u32) -> RunRecord {
        let recorded_at = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        RunRecord {
            username: username.to_string(),
            skin: skin.to_string(),
            map_id,
            map_name: format!("Map {}", map_id),
            ticks,
            time_string: format_ticks(ticks as u64, TICRATE),
            recorded_at,
        }
    }

    #[test]
    fn test_dedup_keeps_true_minimum() {
        let records = vec![
            run("alice", "sonic", 1, 4000, 1),
            run("alice", "sonic", 1, 3500, 2),
            run("alice", "sonic", 1, 3700, 3),
        ];
        let best = best_per_player(records);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].ticks, 3500);
    }

    #[test]
    fn test_dedup_tie_keeps_earliest() {
        let records = vec![
            run("alice", "sonic", 1, 3500, 5),
            run("alice", "sonic", 1, 3500, 2),
        ];
        let best = best_per_player(records);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].recorded_at.day(), 2);
    }

    #[test]
    fn test_dedup_is_per_triple() {
        let records = vec![
            run("alice", "sonic", 1, 3500, 1),
            run("alice", "tails", 1, 3600, 1),
            run("alice", "sonic", 2, 3700, 1),
            run("bob", "sonic", 1, 3800, 1),
        ];
        assert_eq!(best_per_player(records).len(), 4);
    }

    #[test]
    fn test_select_orders_by_time_by_default() {
        let records = vec![
            run("alice", "sonic", 1, 3800, 1),
            run("bob", "tails", 1, 3500, 1),
            run("carol", "amy", 1, 3600, 1),
        ];
        let results = select(&records, &SelectOptions::default()).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, ["bob", "carol", "alice"]);
    }

    #[test]
    fn test_custom_order_keeps_time_tiebreak() {
        let records = vec![
            run("alice", "sonic", 1, 3800, 1),
            run("alice", "tails", 2, 3500, 1),
            run("bob", "sonic", 1, 3600, 1),
        ];
        let opts = SelectOptions {
            order: Some(SortKey {
                column: Column::Username,
                descending: false,
            }),
            ..SelectOptions::default()
        };
        let results = select(&records, &opts).unwrap();
        // alice's two runs sort fastest-first within the username group
        assert_eq!(results[0].ticks, 3500);
        assert_eq!(results[1].ticks, 3800);
        assert_eq!(results[2].username, "bob");
    }

    #[test]
    fn test_descending_order() {
        let records = vec![
            run("alice", "sonic", 1, 3800, 1),
            run("bob", "tails", 1, 3500, 1),
        ];
        let opts = SelectOptions {
            order: Some(SortKey {
                column: Column::Ticks,
                descending: true,
            }),
            ..SelectOptions::default()
        };
        let results = select(&records, &opts).unwrap();
        assert_eq!(results[0].ticks, 3800);
    }

    #[test]
    fn test_base_skin_scope() {
        let records = vec![
            run("alice", "sonic", 1, 3800, 1),
            run("bob", "shadow_mod", 1, 3500, 1),
        ];
        let results = select(&records, &SelectOptions::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].skin, "sonic");

        let opts = SelectOptions {
            skin_scope: SkinScope::All,
            ..SelectOptions::default()
        };
        assert_eq!(select(&records, &opts).unwrap().len(), 2);
    }

    #[test]
    fn test_all_runs_scope_skips_dedup() {
        let records = vec![
            run("alice", "sonic", 1, 3500, 1),
            run("alice", "sonic", 1, 3600, 2),
        ];
        let opts = SelectOptions {
            dedup_scope: DedupScope::AllRuns,
            ..SelectOptions::default()
        };
        assert_eq!(select(&records, &opts).unwrap().len(), 2);
    }

    #[test]
    fn test_filters_are_conjunction() {
        let records = vec![
            run("alice", "sonic", 1, 3500, 1),
            run("alice", "sonic", 2, 3600, 1),
            run("bob", "sonic", 1, 3700, 1),
        ];
        let opts = SelectOptions {
            filters: vec![
                Filter::Username("alice".to_string()),
                Filter::MapId(1),
            ],
            ..SelectOptions::default()
        };
        let results = select(&records, &opts).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticks, 3500);
    }

    #[test]
    fn test_limit_truncates() {
        let records = vec![
            run("alice", "sonic", 1, 3500, 1),
            run("bob", "tails", 1, 3600, 1),
            run("carol", "amy", 1, 3700, 1),
        ];
        let opts = SelectOptions {
            limit: 2,
            ..SelectOptions::default()
        };
        assert_eq!(select(&records, &opts).unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_limit_rejected() {
        let records = vec![run("alice", "sonic", 1, 3500, 1)];
        for bad in [0, -5] {
            let opts = SelectOptions {
                limit: bad,
                ..SelectOptions::default()
            };
            assert!(matches!(
                select(&records, &opts),
                Err(AppError::InvalidLimit(limit)) if limit == bad
            ));
        }
    }

    #[test]
    fn test_select_on_empty_input() {
        let results = select(&[], &SelectOptions::default()).unwrap();
        assert!(results.is_empty());
    }
}
