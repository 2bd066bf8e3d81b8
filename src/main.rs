use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use leaderboard_server::leaderboard::handlers::{
    handle_health, handle_leaderboard, handle_search,
};
use leaderboard_server::leaderboard::index::Leaderboard;
use leaderboard_server::simulation::driver::spawn_periodic_updates;
use leaderboard_server::simulation::handlers::handle_simulate_update;
use leaderboard_server::simulation::seed::seed_leaderboard;
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_SEED_COUNT: u32 = 10_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:8080".parse()?;
    let mut seed_count = DEFAULT_SEED_COUNT;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--users" => {
                seed_count = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Starting leaderboard server");

    // 1. Ranked index, seeded with a synthetic population:
    let leaderboard = Arc::new(Leaderboard::new());
    seed_leaderboard(&leaderboard, seed_count).await;

    // 2. HTTP Router:
    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/leaderboard", get(handle_leaderboard))
        .route("/search", get(handle_search))
        .route("/simulate-update", post(handle_simulate_update))
        .layer(Extension(leaderboard.clone()))
        .layer(middleware::from_fn(cors));

    // 3. Spawn the periodic rating perturbation:
    spawn_periodic_updates(leaderboard.clone());

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("   GET  /health");
    tracing::info!("   GET  /leaderboard?page=1&size=100");
    tracing::info!("   GET  /search?username=rahul");
    tracing::info!("   POST /simulate-update");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// All origins are allowed; preflight requests short-circuit before routing.
async fn cors(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}
