//! Website - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use website::application::use_cases::pages::RenderPageUseCase;
use website::infrastructure::driven_adapters::config::AppConfig;
use website::infrastructure::driven_adapters::template_renderer::FileSystemTemplateRenderer;
use website::infrastructure::driving_adapters::web::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "website=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create template renderer
    let template_renderer = Arc::new(FileSystemTemplateRenderer::new(&config.templates.dir));
    tracing::info!(dir = %template_renderer.dir().display(), "Template renderer created");

    // Create use cases
    let render_page_use_case = Arc::new(RenderPageUseCase::new(template_renderer));

    // Build router
    let app = build_router(AppState::new(render_page_use_case));

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
