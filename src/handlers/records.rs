use crate::db::Db;
use crate::error::AppError;
use crate::models::records::SearchQuery;
use crate::services::records as service;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn search(
    db: web::types::State<Arc<Db>>,
    query: web::types::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let records = service::search(&db, &query)?;
    Ok(HttpResponse::Ok().json(&records))
}
