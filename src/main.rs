use anyhow::Result;
use clap::Parser;
use site_showcase::{
    CertificateView, CertificatesPage, ContentPage, HttpTransport, Locale, PageComposer,
    PageKind, PageRender, Rendered, ServiceSummary, ServiceView, ServicesPage, SiteConfig,
    TeamMemberView, TeamPage, TeamSummary, ValiditySummary,
};
use std::process::ExitCode;

/// Render one content page from the live API
#[derive(Debug, Parser)]
#[command(name = "site-showcase", version, about)]
struct Cli {
    /// Page to render: services, certificates, team
    #[arg(value_parser = parse_page)]
    page: PageKind,

    /// Language code (en, ar, ro); unknown codes fall back to en
    #[arg(short, long)]
    lang: Option<String>,

    /// API origin, overrides SHOWCASE_API_URL
    #[arg(long)]
    api: Option<String>,

    /// Print the rendered view-models as JSON
    #[arg(long)]
    json: bool,
}

fn parse_page(name: &str) -> Result<PageKind, String> {
    PageKind::parse(name).ok_or_else(|| format!("unknown page {name:?} (services, certificates, team)"))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    site_showcase::init_tracing();
    let cli = Cli::parse();

    let config = SiteConfig::from_env()
        .with_api_base_url(cli.api.clone())
        .with_locale(cli.lang.as_deref().map(Locale::from_code));

    tracing::info!(api = %config.api_base_url, locale = %config.default_locale, page = %cli.page, "rendering page");

    let composer = PageComposer::new(HttpTransport::new(config.api_base_url.clone()));
    let locale = config.default_locale;

    let failed = match cli.page {
        PageKind::Services => {
            let render = composer.load::<ServicesPage>(locale).await;
            emit::<ServicesPage>(&render, cli.json, print_services)?
        }
        PageKind::Certificates => {
            let render = composer.load::<CertificatesPage>(locale).await;
            emit::<CertificatesPage>(&render, cli.json, print_certificates)?
        }
        PageKind::Team => {
            let render = composer.load::<TeamPage>(locale).await;
            emit::<TeamPage>(&render, cli.json, print_team)?
        }
    };

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Print a render; returns whether the page failed.
fn emit<P: ContentPage>(
    render: &Rendered<P>,
    json: bool,
    print_ready: fn(&[P::View], &P::Summary),
) -> Result<bool> {
    if json {
        println!("{}", serde_json::to_string_pretty(render)?);
    } else {
        match render {
            PageRender::Loading => println!("⏳ Loading..."),
            PageRender::Failed => eprintln!("❌ Error loading {}", P::KIND),
            PageRender::Empty => println!("📭 No {} available", P::KIND),
            PageRender::Ready { items, summary } => print_ready(items, summary),
        }
    }

    Ok(matches!(render, PageRender::Failed))
}

fn print_services(items: &[ServiceView], summary: &ServiceSummary) {
    println!("🧩 Services ({})", summary.total);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for service in items {
        println!("\n[{}] {}", service.icon.as_str(), service.name);
        println!("   {}", service.description);
        if let Some(image) = &service.image_url {
            println!("   🖼  {}", image);
        }
    }
}

fn print_certificates(items: &[CertificateView], summary: &ValiditySummary) {
    println!("📜 Certificates");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for cert in items {
        println!("\n{} [{}]", cert.name, cert.badge);
        println!("   {}", cert.description);
        println!("   {} → {}", cert.issued_label, cert.expiry_label);
        println!("   {}", cert.status_text);
    }
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "Total: {}   ✅ Valid: {}   ⚠️  Expiring soon: {}   ❌ Expired: {}",
        summary.total, summary.valid, summary.expiring_soon, summary.expired
    );
}

fn print_team(items: &[TeamMemberView], summary: &TeamSummary) {
    println!("👥 Team ({} members, {}+ years combined)", summary.total, summary.combined_experience_years);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for member in items {
        println!("\n{} - {}", member.name, member.position);
        println!("   {}", member.bio);
        println!("   {}+ years · {} · {}", member.experience_years, member.email, member.phone);
        if let Some(linkedin) = &member.linkedin_url {
            println!("   🔗 {}", linkedin);
        }
    }
}
