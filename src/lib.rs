// Site Showcase - Core Library
// Localized entity resolution and derived state for the services,
// certificates, and team pages. Used by the CLI, the preview server, and tests.

pub mod locale;      // Locale Resolver
pub mod temporal;    // Dates, timestamps, injectable clock
pub mod validity;    // Derived state: certificate validity
pub mod image;       // Image URL normalization
pub mod format;      // Localized long-form dates
pub mod entities;    // Wire entities
pub mod fetcher;     // Entity Fetcher
pub mod activation;  // Activation tokens / stale-result discarding
pub mod composer;    // Page Composer
pub mod config;      // Configuration

// Re-export commonly used types
pub use locale::{resolve, Direction, Locale, Localized, LocalizedFields};
pub use temporal::{Clock, FixedClock, SystemClock};
pub use validity::{classify, expiring_soon_horizon, ValidityStatus, ValiditySummary};
pub use image::normalize_image_url;
pub use format::format_long_date;
pub use entities::{CertificateEntity, ServiceEntity, ServiceIcon, TeamMemberEntity};
pub use fetcher::{EntityFetcher, FetchError, FetchState, HttpTransport, RawResponse, Transport};
pub use activation::{Activation, PageSlot};
pub use composer::{
    compose, CertificateView, CertificatesPage, ContentPage, PageComposer, PageKind,
    PageRender, Rendered, RenderContext, ServiceSummary, ServiceView, ServicesPage,
    TeamMemberView, TeamPage, TeamSummary,
};
pub use config::SiteConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the stderr `tracing` subscriber used by the binaries.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
