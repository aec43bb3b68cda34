// Site Showcase - Preview Server
// Serves composed view-models as JSON for any page and language.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use site_showcase::{
    CertificatesPage, ContentPage, Direction, HttpTransport, Locale, PageComposer, PageKind,
    Rendered, ServicesPage, SiteConfig, TeamPage, Transport,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state
struct AppState<T> {
    composer: PageComposer<T>,
    default_locale: Locale,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn err(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            error: Some(message.into()),
        }
    }
}

/// A rendered page plus the chrome the client needs to lay it out
#[derive(Serialize)]
struct PreviewResponse<V, S> {
    page: PageKind,
    locale: Locale,
    direction: Direction,
    #[serde(flatten)]
    render: site_showcase::PageRender<V, S>,
}

#[derive(Debug, Deserialize)]
struct PreviewQuery {
    lang: Option<String>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/preview/:page?lang=xx - Fetch and compose one page
async fn preview<T: Transport + 'static>(
    State(state): State<Arc<AppState<T>>>,
    Path(page): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    let locale = query
        .lang
        .as_deref()
        .map(Locale::from_code)
        .unwrap_or(state.default_locale);

    match PageKind::parse(&page) {
        Some(PageKind::Services) => respond::<ServicesPage, T>(&state, locale).await,
        Some(PageKind::Certificates) => respond::<CertificatesPage, T>(&state, locale).await,
        Some(PageKind::Team) => respond::<TeamPage, T>(&state, locale).await,
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err((), format!("unknown page: {page}"))),
        )
            .into_response(),
    }
}

async fn respond<P: ContentPage, T: Transport>(state: &AppState<T>, locale: Locale) -> Response {
    let render: Rendered<P> = state.composer.load::<P>(locale).await;
    let failed = matches!(render, site_showcase::PageRender::Failed);

    let body = PreviewResponse {
        page: P::KIND,
        locale,
        direction: locale.direction(),
        render,
    };

    if failed {
        (
            StatusCode::BAD_GATEWAY,
            Json(ApiResponse::err(body, format!("failed to load {}", P::KIND))),
        )
            .into_response()
    } else {
        (StatusCode::OK, Json(ApiResponse::ok(body))).into_response()
    }
}

fn router<T: Transport + 'static>(state: AppState<T>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/preview/:page", get(preview::<T>))
        .with_state(Arc::new(state));

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    site_showcase::init_tracing();

    let config = SiteConfig::from_env();
    let port: u16 = std::env::var("SHOWCASE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4000);

    let state = AppState {
        composer: PageComposer::new(HttpTransport::new(config.api_base_url.clone())),
        default_locale: config.default_locale,
    };

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, api = %config.api_base_url, "preview server running");
    println!("\n🚀 Preview server on http://localhost:{port}");
    println!("   Try: http://localhost:{port}/api/preview/certificates?lang=ar");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, router(state)).await?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
