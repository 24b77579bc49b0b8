use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{error, info};

use tower_http::services::ServeDir;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{log_requests, state::*, ServerConfig};

const INDEX_PAGE: &str = include_str!("../../static/index.html");

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub graphs_ready: bool,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home() -> impl IntoResponse {
    Html(INDEX_PAGE)
}

async fn get_status(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        graphs_ready: state.dashboard.is_ready(),
    };
    Json(stats)
}

async fn get_graphs(State(dashboard): State<GuardedDashboardCache>) -> Response {
    match dashboard.get().await {
        Ok(dashboard) => Json(dashboard.as_ref()).into_response(),
        Err(err) => {
            error!("Could not build the dashboard: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

pub fn make_app(config: ServerConfig, source: GuardedDatasetSource) -> Result<Router> {
    let state = ServerState::new(config.clone(), source);

    let data_routes: Router = Router::new()
        .route("/get_graphs", get(get_graphs))
        .route("/status", get(get_status))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new().route("/", get(home)),
    };

    let app: Router = home_router
        .merge(data_routes)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, source: GuardedDatasetSource) -> Result<()> {
    let port = config.port;
    let app = make_app(config, source)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Could not bind port {}", port))?;
    info!("Serving dashboard on http://127.0.0.1:{}", port);

    Ok(axum::serve(listener, app).await?)
}
