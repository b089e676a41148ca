mod db;
mod error;
mod fuzzy;
mod handlers;
mod models;
mod query;
mod services;
mod timefmt;

use db::Db;
use ntex::web;
use ntex_cors::Cors;
use std::sync::Arc;

#[ntex::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let db_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "highscores.db".into());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let db = Arc::new(Db::open(&db_path).expect("Failed to open database"));

    log::info!("Kart records server starting on {}:{}", host, port);

    web::HttpServer::new(move || {
        web::App::new()
            .state(db.clone())
            .wrap(
                Cors::new()
                    .allowed_origin("*")
                    .allowed_methods(vec!["GET", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type"])
                    .max_age(3600)
                    .finish(),
            )
            // Health check
            .route("/api/health", web::get().to(health))
            // Endpoint index
            .route("/api", web::get().to(handlers::catalog::index))
            .route("/api/", web::get().to(handlers::catalog::index))
            // Catalog
            .route("/api/maps", web::get().to(handlers::catalog::maps))
            .route("/api/maps/{id}", web::get().to(handlers::catalog::map_by_id))
            .route("/api/users", web::get().to(handlers::catalog::users))
            .route("/api/skins", web::get().to(handlers::catalog::skins))
            // Highscore search
            .route("/api/search", web::get().to(handlers::records::search))
            // Rankings
            .route("/api/maphighscores", web::get().to(handlers::rankings::map_highscores))
            .route("/api/leaderboard", web::get().to(handlers::rankings::leaderboard))
            .route("/api/bestskins", web::get().to(handlers::rankings::best_skins))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}

async fn health() -> web::HttpResponse {
    web::HttpResponse::Ok().json(&serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
