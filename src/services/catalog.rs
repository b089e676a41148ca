use crate::db::Db;
use crate::error::AppError;
use crate::models::maps::MapEntity;
use rusqlite::params;

fn distinct(db: &Db, sql: &str) -> Result<Vec<String>, AppError> {
    Ok(db.with_conn(|conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut values = Vec::new();
        for row in rows {
            values.push(row?);
        }
        Ok(values)
    })?)
}

/// Every player name in the store. Doubles as the fuzzy candidate universe
/// for the `username` filter.
pub fn get_users(db: &Db) -> Result<Vec<String>, AppError> {
    distinct(db, "SELECT DISTINCT username FROM runs ORDER BY username")
}

/// Every skin in the store, modded ones included.
pub fn get_skins(db: &Db) -> Result<Vec<String>, AppError> {
    distinct(db, "SELECT DISTINCT skin FROM runs ORDER BY skin")
}

pub fn get_maps(db: &Db, in_rotation: bool) -> Result<Vec<MapEntity>, AppError> {
    let sql = if in_rotation {
        "SELECT id, name, in_rotation FROM maps WHERE in_rotation = 1 ORDER BY id"
    } else {
        "SELECT id, name, in_rotation FROM maps ORDER BY id"
    };
    Ok(db.with_conn(|conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(MapEntity {
                id: row.get(0)?,
                name: row.get(1)?,
                in_rotation: row.get::<_, i64>(2)? != 0,
            })
        })?;
        let mut maps = Vec::new();
        for row in rows {
            maps.push(row?);
        }
        Ok(maps)
    })?)
}

pub fn get_map(db: &Db, id: i64) -> Result<MapEntity, AppError> {
    let result = db.with_conn(|conn| {
        conn.query_row(
            "SELECT id, name, in_rotation FROM maps WHERE id = ?1",
            params![id],
            |row| {
                Ok(MapEntity {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    in_rotation: row.get::<_, i64>(2)? != 0,
                })
            },
        )
    });

    match result {
        Ok(map) => Ok(map),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            Err(AppError::NotFound(format!("map {}", id)))
        }
        Err(e) => Err(AppError::from(e)),
    }
}
