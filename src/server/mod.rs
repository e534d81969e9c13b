use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::{self, AppState};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::store::{ResourceKind, ResourceStore, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Production,
    Development,
}

impl Mode {
    /// Only an explicit development setting turns production behavior off.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_route: String,
    pub item_limit: usize,
    pub enable_frontend: bool,
    pub frontend_dir: PathBuf,
    pub data_dir: PathBuf,
    pub mode: Mode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            api_route: "/api".to_string(),
            item_limit: DEFAULT_PAGE_SIZE,
            enable_frontend: false,
            frontend_dir: PathBuf::from("./frontend/dist"),
            data_dir: PathBuf::from("./datas"),
            mode: Mode::Production,
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load fixtures: {source}")]
    Store {
        #[from]
        source: StoreError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

/// Builds the full application: API under `api_route`, optional static
/// frontend, HTTPS enforcement in production.
pub fn build_app(config: &ServerConfig, store: Arc<ResourceStore>) -> Router {
    let state = Arc::new(AppState {
        store,
        page_size: config.item_limit,
    });
    let mut app = Router::new().nest(&config.api_route, api::router(state));

    if config.enable_frontend {
        let page = Arc::new(config.frontend_dir.join("404.html"));
        let not_found = get(move || not_found_page(page.clone()));
        app = app.route("/404.html", not_found.clone()).fallback_service(
            ServeDir::new(&config.frontend_dir).not_found_service(not_found),
        );
    } else {
        app = app.fallback(|| async { StatusCode::NOT_FOUND });
    }

    if config.mode == Mode::Production {
        app = app.layer(middleware::from_fn(force_https));
    }
    app.layer(TraceLayer::new_for_http())
}

async fn not_found_page(path: Arc<PathBuf>) -> Response {
    match tokio::fs::read_to_string(path.as_ref()).await {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "404 page unavailable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Redirects anything not forwarded as HTTPS to the same host and path over
/// HTTPS.
async fn force_https(request: Request, next: Next) -> Response {
    let forwarded_https = request
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("https"))
        .unwrap_or(false);
    if forwarded_https {
        return next.run(request).await;
    }

    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok());
    match host {
        Some(host) => {
            let location = https_location(host, request.uri());
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        None => (StatusCode::BAD_REQUEST, "missing host header").into_response(),
    }
}

pub fn https_location(host: &str, uri: &Uri) -> String {
    let path = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");
    format!("https://{host}{path}")
}

pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let store = ResourceStore::load_dir(&config.data_dir)?;
    for kind in ResourceKind::ALL {
        info!(resource = kind.route(), count = store.count(kind), "fixture loaded");
    }

    let app = build_app(&config, Arc::new(store));
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        %addr,
        api = %config.api_route,
        mode = config.mode.as_str(),
        frontend = config.enable_frontend,
        "Server started"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServerError::Serve { source })?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
