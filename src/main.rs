use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use notes_core::{
    config::{page_size_from_env_value, store_kind_from_env_value},
    CoreConfig, NoteService, DEFAULT_NOTE_DATA_DIR,
};

/// Main entry point for the notes server
///
/// Resolves configuration once, opens the configured note store and serves the REST API
/// (with Swagger UI at `/swagger-ui`).
///
/// # Environment Variables
/// - `NOTES_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `NOTES_STORE`: `file` or `memory` (default: "file")
/// - `NOTE_DATA_DIR`: Directory for the file store (default: "note_data")
/// - `NOTES_DEFAULT_PAGE_SIZE`: Page size when a listing omits `size` (default: 10)
///
/// # Errors
/// Returns an error if configuration is invalid, the store cannot be opened, the address
/// cannot be bound, or the server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes_run=info".parse()?)
                .add_directive("notes_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("NOTES_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let note_data_dir = std::env::var("NOTE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_NOTE_DATA_DIR));

    let cfg = CoreConfig::new(
        store_kind_from_env_value(std::env::var("NOTES_STORE").ok())?,
        note_data_dir,
        page_size_from_env_value(std::env::var("NOTES_DEFAULT_PAGE_SIZE").ok())?,
    )?;

    tracing::info!(
        "++ Using {:?} note store (data dir: {})",
        cfg.store_kind(),
        cfg.note_data_dir().display()
    );

    let state = AppState {
        notes: NoteService::new(cfg.open_store()?),
        default_page_size: cfg.default_page_size(),
    };
    let app = api_rest::router(state);

    tracing::info!("++ Starting notes REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
