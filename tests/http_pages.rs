//! End-to-end page loads against a mock content API

use chrono::{Duration, NaiveDate};
use site_showcase::{
    CertificatesPage, EntityFetcher, FetchState, FixedClock, HttpTransport, Locale,
    PageComposer, PageRender, ServiceEntity, ServicesPage, TeamPage, ValidityStatus,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn certificate_json(id: &str, expiry: NaiveDate) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "name_en": "Cert {id}", "name_ar": "شهادة {id}", "name_ro": "Certificat {id}",
            "description_en": "d", "description_ar": "د", "description_ro": "d",
            "image_url": "/images/{id}.png",
            "issued_date": "2022-01-01",
            "expiry_date": "{}T00:00:00.000Z",
            "created_at": "2022-01-01T00:00:00.000Z",
            "updated_at": "2022-01-01T00:00:00.000Z"
        }}"#,
        iso(expiry)
    )
}

#[tokio::test]
async fn test_certificates_page_over_http() {
    let mut server = mockito::Server::new_async().await;

    let body = format!(
        "[{},{},{}]",
        certificate_json("old", today() - Duration::days(1)),
        certificate_json("soon", today() + Duration::days(30)),
        certificate_json("far", today() + Duration::days(400)),
    );

    let mock = server
        .mock("GET", "/api/certificates")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create_async()
        .await;

    let composer = PageComposer::with_clock(HttpTransport::new(server.url()), FixedClock(today()));
    let render = composer.load::<CertificatesPage>(Locale::En).await;

    let badges: Vec<&str> = render.items().iter().map(|c| c.badge).collect();
    assert_eq!(badges, vec!["Expired", "Expiring Soon", "Valid"]);
    assert_eq!(render.items()[0].image_url.as_deref(), Some("/uploads/old.png"));

    let summary = render.summary().unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.valid + summary.expiring_soon + summary.expired, summary.total);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_yields_failed_state() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/services")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let fetcher = EntityFetcher::new(HttpTransport::new(server.url()));
    let state = fetcher.fetch_collection::<ServiceEntity>("/api/services").await;

    assert_eq!(state, FetchState::Failed);
    assert!(state.items().is_empty());
}

#[tokio::test]
async fn test_empty_array_is_ready_and_renders_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/services")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let fetcher = EntityFetcher::new(HttpTransport::new(server.url()));
    let state = fetcher.fetch_collection::<ServiceEntity>("/api/services").await;
    assert_eq!(state, FetchState::Ready(vec![]));

    let composer = PageComposer::new(HttpTransport::new(server.url()));
    assert_eq!(composer.load::<ServicesPage>(Locale::Ro).await, PageRender::Empty);
}

#[tokio::test]
async fn test_malformed_body_yields_failed_state() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/services")
        .with_status(200)
        .with_body(r#"{"services": []}"#)
        .create_async()
        .await;

    let composer = PageComposer::new(HttpTransport::new(server.url()));
    assert_eq!(composer.load::<ServicesPage>(Locale::En).await, PageRender::Failed);
}

#[tokio::test]
async fn test_unreachable_api_yields_failed_state() {
    // Nothing listens on port 9 (discard) in the test environment.
    let fetcher = EntityFetcher::new(HttpTransport::new("http://127.0.0.1:9"));
    let state = fetcher.fetch_collection::<ServiceEntity>("/api/services").await;
    assert_eq!(state, FetchState::Failed);
}

#[tokio::test]
async fn test_team_page_in_romanian() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/team")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "id": 3,
                "name_en": "Mihai", "name_ar": "ميهاي", "name_ro": "Mihai",
                "position_en": "Architect", "position_ar": "مهندس معماري", "position_ro": "Arhitect",
                "bio_en": "Cloud", "bio_ar": "سحابة", "bio_ro": "Cloud RO",
                "email": "mihai@example.com",
                "phone": "+40",
                "image_url": "team/mihai.jpg",
                "linkedin_url": "https://linkedin.com/in/mihai",
                "experience_years": 9,
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }]"#,
        )
        .create_async()
        .await;

    let composer = PageComposer::new(HttpTransport::new(server.url()));
    let render = composer.load::<TeamPage>(Locale::from_code("ro-RO")).await;
    let member = &render.items()[0];

    assert_eq!(member.id, "3");
    assert_eq!(member.position, "Arhitect");
    assert_eq!(member.bio, "Cloud RO");
    assert_eq!(member.image_url, "/team/mihai.jpg");
    assert_eq!(render.summary().unwrap().combined_experience_years, 9);
}

#[tokio::test]
async fn test_validity_is_recomputed_per_render() {
    let mut server = mockito::Server::new_async().await;
    let expiry = today() + Duration::days(100);
    let _mock = server
        .mock("GET", "/api/certificates")
        .with_status(200)
        .with_body(format!("[{}]", certificate_json("x", expiry)))
        .create_async()
        .await;

    let early = PageComposer::with_clock(HttpTransport::new(server.url()), FixedClock(today()));
    let later = PageComposer::with_clock(
        HttpTransport::new(server.url()),
        FixedClock(today() + Duration::days(20)),
    );

    let first = early.load::<CertificatesPage>(Locale::En).await;
    let second = later.load::<CertificatesPage>(Locale::En).await;

    assert_eq!(first.items()[0].status, ValidityStatus::Valid);
    assert_eq!(second.items()[0].status, ValidityStatus::ExpiringSoon);
}
