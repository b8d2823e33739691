use std::env;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geoquest_api::router::create_router;
use geoquest_api::state::AppState;
use geoquest_core::catalog;
use geoquest_core::config::LayeredConfig;
use geoquest_core::tracker::{QuestTracker, TrackerSettings};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoquest_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = env::var("GEOQUEST_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3001);

    // Optional config file, then environment overrides on top
    let config = match env::var("GEOQUEST_CONFIG") {
        Ok(path) => match LayeredConfig::with_defaults().load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config file {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => LayeredConfig::with_defaults(),
    }
    .load_from_env();

    let quests = match config.quest_file.value.as_ref() {
        Some(path) => match catalog::load_quest_file(path) {
            Ok(quests) => {
                tracing::info!(path = %path.display(), quests = quests.len(), "Loaded quest catalog");
                quests
            }
            Err(e) => {
                tracing::error!("Failed to load quest catalog {}: {}", path.display(), e);
                tracing::error!(
                    "Remediation:\n\
                    1. Check that the file exists and is readable\n\
                    2. Verify it is a GeoJSON FeatureCollection of Point features\n\
                    3. Ensure each feature carries id, name, question, options, and answer"
                );
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("Using built-in quest set (set GEOQUEST_QUEST_FILE for a custom catalog)");
            catalog::builtin_quests()
        }
    };

    let settings = TrackerSettings::from(&config);
    let tracker = match QuestTracker::new(quests, settings) {
        Ok(tracker) => tracker,
        Err(e) => {
            tracing::error!("Quest catalog failed validation: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = port,
        quests = tracker.quests().len(),
        threshold_m = settings.proximity_threshold_m,
        award_points = settings.award_points,
        "Starting GeoQuest API server"
    );

    let state = Arc::new(AppState::new(tracker));

    let frontend_origin =
        env::var("GEOQUEST_FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let cors = CorsLayer::new()
        .allow_origin(frontend_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(TraceLayer::new_for_http()).layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", frontend_origin);

    axum::serve(listener, app).await.unwrap();
}
