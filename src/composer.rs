// 🧱 Page Composer
// Fetcher → raw entities → locale resolution + derived state → view-models.
//
// Raw entities stay in the page slot; view-models are rebuilt on every render
// from (entities, locale, today). Switching language needs no refetch and
// certificate validity is never cached.

use crate::activation::PageSlot;
use crate::entities::{CertificateEntity, ServiceEntity, ServiceIcon, TeamMemberEntity};
use crate::fetcher::{EntityFetcher, FetchState, Transport};
use crate::format::format_long_date;
use crate::image::{normalize_image_url, TEAM_FALLBACK_IMAGE};
use crate::locale::Locale;
use crate::temporal::{Clock, SystemClock};
use crate::validity::{ValidityStatus, ValiditySummary};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

// ============================================================================
// RENDER CONTEXT & OUTPUT
// ============================================================================

/// Everything a render depends on besides the entities themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub locale: Locale,
    pub today: NaiveDate,
}

/// What the presentation layer should show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PageRender<V, S> {
    /// Loading affordance
    Loading,

    /// The request itself errored
    Failed,

    /// The request succeeded with zero items
    Empty,

    Ready { items: Vec<V>, summary: S },
}

impl<V, S> PageRender<V, S> {
    pub fn items(&self) -> &[V] {
        match self {
            PageRender::Ready { items, .. } => items,
            _ => &[],
        }
    }

    pub fn summary(&self) -> Option<&S> {
        match self {
            PageRender::Ready { summary, .. } => Some(summary),
            _ => None,
        }
    }
}

pub type Rendered<P> = PageRender<<P as ContentPage>::View, <P as ContentPage>::Summary>;

// ============================================================================
// CONTENT PAGE
// ============================================================================

/// One content type: where it is fetched from and how it becomes view-models.
pub trait ContentPage {
    type Entity: DeserializeOwned + Send + Sync;
    type View: Serialize;
    type Summary: Serialize;

    const KIND: PageKind;
    const ENDPOINT: &'static str;

    /// Whether a failed request renders differently from an empty one
    const DISTINGUISHES_FAILURE: bool = true;

    fn view(entity: &Self::Entity, ctx: &RenderContext) -> Self::View;

    fn summarize(views: &[Self::View], ctx: &RenderContext) -> Self::Summary;
}

/// Map a fetch state to a render.
pub fn compose<P: ContentPage>(state: &FetchState<P::Entity>, ctx: &RenderContext) -> Rendered<P> {
    match state {
        FetchState::Loading => PageRender::Loading,
        FetchState::Failed if P::DISTINGUISHES_FAILURE => PageRender::Failed,
        FetchState::Failed => PageRender::Empty,
        FetchState::Ready(entities) if entities.is_empty() => PageRender::Empty,
        FetchState::Ready(entities) => {
            let items: Vec<P::View> = entities.iter().map(|e| P::view(e, ctx)).collect();
            let summary = P::summarize(&items, ctx);
            PageRender::Ready { items, summary }
        }
    }
}

// ============================================================================
// PAGE KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Services,
    Certificates,
    Team,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Services, PageKind::Certificates, PageKind::Team];

    pub fn parse(name: &str) -> Option<PageKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "services" => Some(PageKind::Services),
            "certificates" => Some(PageKind::Certificates),
            "team" | "about" => Some(PageKind::Team),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Services => "services",
            PageKind::Certificates => "certificates",
            PageKind::Team => "team",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            PageKind::Services => ServicesPage::ENDPOINT,
            PageKind::Certificates => CertificatesPage::ENDPOINT,
            PageKind::Team => TeamPage::ENDPOINT,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SERVICES
// ============================================================================

pub struct ServicesPage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: ServiceIcon,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceSummary {
    pub total: usize,
}

impl ContentPage for ServicesPage {
    type Entity = ServiceEntity;
    type View = ServiceView;
    type Summary = ServiceSummary;

    const KIND: PageKind = PageKind::Services;
    const ENDPOINT: &'static str = "/api/services";

    fn view(service: &ServiceEntity, ctx: &RenderContext) -> ServiceView {
        ServiceView {
            id: service.id.clone(),
            name: service.name(ctx.locale),
            description: service.description(ctx.locale),
            icon: service.icon,
            image_url: normalize_image_url(service.image_url.as_deref()),
        }
    }

    fn summarize(views: &[ServiceView], _ctx: &RenderContext) -> ServiceSummary {
        ServiceSummary { total: views.len() }
    }
}

// ============================================================================
// CERTIFICATES
// ============================================================================

pub struct CertificatesPage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub issued_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub issued_label: String,
    pub expiry_label: String,
    pub status: ValidityStatus,
    pub badge: &'static str,
    pub status_text: &'static str,
    pub tone: &'static str,
}

impl ContentPage for CertificatesPage {
    type Entity = CertificateEntity;
    type View = CertificateView;
    type Summary = ValiditySummary;

    const KIND: PageKind = PageKind::Certificates;
    const ENDPOINT: &'static str = "/api/certificates";

    fn view(cert: &CertificateEntity, ctx: &RenderContext) -> CertificateView {
        let status = cert.validity(ctx.today);

        CertificateView {
            id: cert.id.clone(),
            name: cert.name(ctx.locale),
            description: cert.description(ctx.locale),
            image_url: normalize_image_url(cert.image_url.as_deref()),
            issued_date: cert.issued_date,
            expiry_date: cert.expiry_date,
            issued_label: format_long_date(cert.issued_date, ctx.locale),
            expiry_label: format_long_date(cert.expiry_date, ctx.locale),
            status,
            badge: status.badge_label(ctx.locale),
            status_text: status.status_text(ctx.locale),
            tone: status.tone(),
        }
    }

    // Counts come from the per-item statuses so badges and totals cannot drift.
    fn summarize(views: &[CertificateView], _ctx: &RenderContext) -> ValiditySummary {
        ValiditySummary::from_statuses(views.iter().map(|v| v.status))
    }
}

// ============================================================================
// TEAM
// ============================================================================

pub struct TeamPage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMemberView {
    pub id: String,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub image_url: String,
    pub linkedin_url: Option<String>,
    pub experience_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub total: usize,
    pub combined_experience_years: u32,
}

impl ContentPage for TeamPage {
    type Entity = TeamMemberEntity;
    type View = TeamMemberView;
    type Summary = TeamSummary;

    const KIND: PageKind = PageKind::Team;
    const ENDPOINT: &'static str = "/api/team";

    // The about page hides the team section on failure, same as when empty.
    const DISTINGUISHES_FAILURE: bool = false;

    fn view(member: &TeamMemberEntity, ctx: &RenderContext) -> TeamMemberView {
        TeamMemberView {
            id: member.id.clone(),
            name: member.name(ctx.locale),
            position: member.position(ctx.locale),
            bio: member.bio(ctx.locale),
            email: member.email.clone(),
            phone: member.phone.clone(),
            image_url: normalize_image_url(member.image_url.as_deref())
                .unwrap_or_else(|| TEAM_FALLBACK_IMAGE.to_string()),
            linkedin_url: member
                .linkedin_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            experience_years: member.experience_years,
        }
    }

    fn summarize(views: &[TeamMemberView], _ctx: &RenderContext) -> TeamSummary {
        TeamSummary {
            total: views.len(),
            combined_experience_years: views
                .iter()
                .map(|v| v.experience_years)
                .fold(0u32, u32::saturating_add),
        }
    }
}

// ============================================================================
// COMPOSER
// ============================================================================

/// Drives one fetch per activation and renders with the injected clock.
#[derive(Debug, Clone)]
pub struct PageComposer<T, C = SystemClock> {
    fetcher: EntityFetcher<T>,
    clock: C,
}

impl<T: Transport> PageComposer<T, SystemClock> {
    pub fn new(transport: T) -> Self {
        Self::with_clock(transport, SystemClock)
    }
}

impl<T: Transport, C: Clock> PageComposer<T, C> {
    pub fn with_clock(transport: T, clock: C) -> Self {
        PageComposer {
            fetcher: EntityFetcher::new(transport),
            clock,
        }
    }

    pub fn context(&self, locale: Locale) -> RenderContext {
        RenderContext {
            locale,
            today: self.clock.today(),
        }
    }

    /// Start an activation on `slot` and fetch once.
    ///
    /// Returns `false` if the slot was disposed or re-activated meanwhile and
    /// the result was dropped.
    pub async fn activate<P: ContentPage>(&self, slot: &PageSlot<P::Entity>) -> bool {
        let activation = slot.activate();
        tracing::debug!(page = %P::KIND, activation = activation.generation(), "page activated");

        let state = self.fetcher.fetch_collection::<P::Entity>(P::ENDPOINT).await;
        slot.settle(&activation, state)
    }

    /// Render the slot's current state for `locale`.
    pub fn render<P: ContentPage>(&self, slot: &PageSlot<P::Entity>, locale: Locale) -> Rendered<P> {
        let ctx = self.context(locale);
        slot.with_state(|state| compose::<P>(state, &ctx))
    }

    /// One full activation: fetch, then render.
    pub async fn load<P: ContentPage>(&self, locale: Locale) -> Rendered<P> {
        let slot = PageSlot::new();
        self.activate::<P>(&slot).await;
        self.render::<P>(&slot, locale)
    }
}

// ============================================================================
// TESTS
// ============================================================================
