use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{cors_policy_from_env_value, router};

/// Main entry point for the diagnosis service
///
/// Serves the rule-based diagnosis REST API (`POST /diagnose`, `GET /health`, `GET /`).
///
/// # Environment Variables
/// - `DIAG_REST_ADDR`: server address (default: "0.0.0.0:8000")
/// - `DIAG_ALLOWED_ORIGIN`: CORS origin (default: "http://localhost:3000", `*` for any)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid, or binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("diag_run=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("DIAG_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let cors = cors_policy_from_env_value(std::env::var("DIAG_ALLOWED_ORIGIN").ok())?;

    tracing::info!("++ Starting diagnosis REST API on {}", addr);
    tracing::info!("++ CORS policy: {:?}", cors);

    let app = router(cors);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
