use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use airport_feedback::config::AppConfig;
use airport_feedback::db;
use airport_feedback::handlers;
use airport_feedback::models::feedback::{FeedbackStore, MemoryFeedbackStore, PgFeedbackStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    match config.database_url.clone() {
        Some(url) => {
            let pool = db::init_pool(&url, config.db_max_connections)
                .await
                .map_err(std::io::Error::other)?;
            db::run_migrations(&pool).await.map_err(std::io::Error::other)?;
            serve(config, PgFeedbackStore::new(pool)).await
        }
        None => {
            log::warn!("No DATABASE_URL set, keeping feedback in memory (lost on restart)");
            serve(config, MemoryFeedbackStore::new()).await
        }
    }
}

async fn serve<S: FeedbackStore>(config: AppConfig, store: S) -> std::io::Result<()> {
    if config.seed_demo {
        db::seed_demo(&store).await;
    }

    let store = web::Data::new(store);
    let site = web::Data::new(config.site.clone());
    let secret_key = config.session_key.clone();

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(site.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure::<S>)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
