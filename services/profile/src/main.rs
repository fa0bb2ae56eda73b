use sea_orm::Database;
use tracing::info;

use uniport_profile::config::ProfileConfig;
use uniport_profile::infra::auth_provider::HttpAuthProvider;
use uniport_profile::infra::object_store::HttpObjectStore;
use uniport_profile::router::build_router;
use uniport_profile::state::AppState;

#[tokio::main]
async fn main() {
    uniport_core::tracing::init_tracing();

    let config = ProfileConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        cookie_domain: config.cookie_domain,
        auth_provider: HttpAuthProvider::new(&config.auth_url, &config.auth_api_key),
        object_store: HttpObjectStore::new(
            &config.storage_url,
            &config.storage_bucket,
            &config.storage_api_key,
        ),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.profile_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("profile service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
