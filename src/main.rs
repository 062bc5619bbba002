use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use taqyeem_backend::auth::middleware::JwtSecret;
use taqyeem_backend::cache::PriceCache;
use taqyeem_backend::create_pool;
use taqyeem_backend::handlers;
use taqyeem_backend::storage::FileStore;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    let db_data = web::Data::new(db);

    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let jwt_data = web::Data::new(JwtSecret(jwt_secret));

    let store = FileStore::from_env();
    let upload_dir = store.local_dir().clone();
    std::fs::create_dir_all(&upload_dir)?;
    let store_data = web::Data::new(store);

    let price_cache = web::Data::new(PriceCache::new());

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(jwt_data.clone())
            .app_data(store_data.clone())
            .app_data(price_cache.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
            // Locally stored uploads (the storage fallback path) are served
            // under the same reference strings that were persisted.
            .service(Files::new("/uploads", upload_dir.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
