use crate::db::Db;
use crate::error::AppError;
use crate::models::rankings::ScopeQuery;
use crate::query::checkbox_on;
use crate::services::rankings as service;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn map_highscores(db: web::types::State<Arc<Db>>) -> Result<HttpResponse, AppError> {
    let view = service::map_highscores(&db)?;
    Ok(HttpResponse::Ok().json(&view))
}

pub async fn leaderboard(
    db: web::types::State<Arc<Db>>,
    query: web::types::Query<ScopeQuery>,
) -> Result<HttpResponse, AppError> {
    let all_skins = checkbox_on(query.all_skins.as_deref());
    let board = service::leaderboard(&db, all_skins)?;
    Ok(HttpResponse::Ok().json(&board))
}

pub async fn best_skins(
    db: web::types::State<Arc<Db>>,
    query: web::types::Query<ScopeQuery>,
) -> Result<HttpResponse, AppError> {
    let all_skins = checkbox_on(query.all_skins.as_deref());
    let tally = service::best_skins(&db, all_skins)?;
    Ok(HttpResponse::Ok().json(&tally))
}
