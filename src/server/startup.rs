use dioxus_logger::tracing;
use time::Duration;
use tokio::net::TcpListener;
use tower_sessions::{
    cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer, SessionStore,
};
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::server::{
    config::Config, error::Error, model::app::AppState, router, service::api::ApiClient,
};

/// Applies the cookie settings shared by every session backend
///
/// Cookies are only marked secure in release builds so the front-end works over plain
/// HTTP during development.
pub fn session_layer<S: SessionStore>(store: S) -> SessionManagerLayer<S> {
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Connect to Valkey/Redis for session storage
pub async fn connect_to_session_store(valkey_url: &str) -> Result<RedisStore<Pool>, Error> {
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(RedisStore::new(pool))
}

/// Build the upstream API client and the shared handler state
pub fn build_app_state(config: &Config) -> Result<AppState, Error> {
    let api_client = ApiClient::new(&config.api_url)?;

    Ok(AppState::from(api_client))
}

/// Bind the listener and serve until Ctrl+C or SIGTERM
pub async fn serve(config: Config) -> Result<(), Error> {
    let state = build_app_state(&config)?;
    let app = router::routes().with_state(state);

    let app = match &config.valkey_url {
        Some(valkey_url) => {
            let store = connect_to_session_store(valkey_url).await?;
            tracing::info!("Storing sessions in Valkey");

            app.layer(session_layer(store))
        }
        None => {
            tracing::warn!("VALKEY_URL is not set, sessions are kept in memory and lost on restart");

            app.layer(session_layer(MemoryStore::default()))
        }
    };

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        api_url = %config.api_url,
        "Listening on {}",
        config.bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
