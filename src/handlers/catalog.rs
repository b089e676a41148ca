use crate::db::Db;
use crate::error::AppError;
use crate::models::docs::{Endpoint, GetParam};
use crate::query::Column;
use crate::services::catalog as service;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

/// Self-describing index of the API, with live value lists where the store
/// can provide them.
pub async fn index(db: web::types::State<Arc<Db>>) -> Result<HttpResponse, AppError> {
    let skins = service::get_skins(&db)?;
    let order_keys: Vec<String> = Column::KEYS.iter().map(|k| k.to_string()).collect();

    let endpoints = vec![
        Endpoint::new("/api/maps", "Return all maps"),
        Endpoint::new("/api/maps/{id}", "Return the specified map"),
        Endpoint::with_params(
            "/api/search",
            "Return highscores ordered by time ascending",
            vec![
                GetParam::new("username", "Search by username (approximate match)"),
                GetParam::new("mapname", "Search by map name (approximate match)"),
                GetParam::new("map_id", "Search by map id"),
                GetParam::with_values("skin", "Search by skin (approximate match)", skins),
                GetParam::new("limit", "Set the maximal number of records to return"),
                GetParam::with_values("order", "Order by any of the returned columns", order_keys),
                GetParam::new("descending", "Set the order direction to descending"),
                GetParam::new(
                    "all_scores",
                    "Set to \"on\" to get all the scores instead of just the best ones",
                ),
                GetParam::new(
                    "all_skins",
                    "Set to \"on\" to get all the skins instead of just the vanilla ones",
                ),
            ],
        ),
        Endpoint::new("/api/skins", "Get the different skins in the database"),
        Endpoint::new("/api/users", "Get the different users in the database"),
        Endpoint::with_params(
            "/api/leaderboard",
            "Get the leaderboard of the best players",
            vec![GetParam::new(
                "all_skins",
                "Set to \"on\" to count scores with any skin instead of just the vanilla ones",
            )],
        ),
        Endpoint::with_params(
            "/api/bestskins",
            "Get the skins with the most best-timed tracks",
            vec![GetParam::new(
                "all_skins",
                "Set to \"on\" to count scores with any skin instead of just the vanilla ones",
            )],
        ),
        Endpoint::new("/api/maphighscores", "Get the highscores divided by map"),
    ];

    Ok(HttpResponse::Ok().json(&serde_json::json!({ "endpoints": endpoints })))
}

pub async fn maps(db: web::types::State<Arc<Db>>) -> Result<HttpResponse, AppError> {
    let maps = service::get_maps(&db, false)?;
    Ok(HttpResponse::Ok().json(&maps))
}

pub async fn map_by_id(
    db: web::types::State<Arc<Db>>,
    path: web::types::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let map = service::get_map(&db, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&map))
}

pub async fn users(db: web::types::State<Arc<Db>>) -> Result<HttpResponse, AppError> {
    let users = service::get_users(&db)?;
    Ok(HttpResponse::Ok().json(&users))
}

pub async fn skins(db: web::types::State<Arc<Db>>) -> Result<HttpResponse, AppError> {
    let skins = service::get_skins(&db)?;
    Ok(HttpResponse::Ok().json(&skins))
}
