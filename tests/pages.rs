//! Route-surface tests over a real listener: page content, grid expansion,
//! carousel links, the no-link modal, and not-found handling.

use std::time::Duration;

use arisefolio::config::Config;
use arisefolio::gateway::run_gateway_with_listener;

struct SiteTestServer {
    port: u16,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl SiteTestServer {
    async fn start(config: Config) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral listener should bind");
        let port = listener
            .local_addr()
            .expect("ephemeral listener should expose local address")
            .port();

        let handle = tokio::spawn(async move { run_gateway_with_listener(listener, config).await });

        wait_until_ready(port).await;

        Self { port, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{path}", self.port)
    }
}

impl Drop for SiteTestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn wait_until_ready(port: u16) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("reqwest client should be built");

    for _ in 0..80 {
        let health = client
            .get(format!("http://127.0.0.1:{port}/health"))
            .send()
            .await;
        if let Ok(response) = health
            && response.status().is_success()
        {
            return;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("site server did not become ready on port {port}");
}

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn home_page_renders_all_sections() {
    let server = SiteTestServer::start(Config::default()).await;
    let body = reqwest::get(server.url("/")).await.unwrap();
    assert!(body.status().is_success());
    let html = body.text().await.unwrap();

    for anchor in [
        "id=\"home\"",
        "id=\"about\"",
        "id=\"experience\"",
        "id=\"educations\"",
        "id=\"projects\"",
        "id=\"certificate\"",
        "id=\"skills\"",
        "id=\"contact\"",
    ] {
        assert!(html.contains(anchor), "missing section anchor {anchor}");
    }
    assert!(html.contains("MUHAMMAD FARRAS YASYFA"));
    // Reveal hooks present for the client-side latch.
    assert!(html.contains("class=\"reveal\""));
    assert!(html.contains("reveal.js"));
}

#[tokio::test]
async fn home_page_windows_projects_and_expands() {
    let server = SiteTestServer::start(Config::default()).await;

    let collapsed = reqwest::get(server.url("/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(collapsed.matches("View Details").count(), 6);
    assert!(collapsed.contains("View More Projects"));
    assert!(collapsed.contains("/?projects=all#projects"));

    let expanded = reqwest::get(server.url("/?projects=all"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(expanded.matches("View Details").count() > 6);
    assert!(expanded.contains("View Less"));
    // Collapse link returns to the section anchor.
    assert!(expanded.contains("/#projects"));
}

#[tokio::test]
async fn certificates_window_expands_independently() {
    let server = SiteTestServer::start(Config::default()).await;

    let html = reqwest::get(server.url("/?certificates=all"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    // Projects stay collapsed while certificates expand.
    assert_eq!(html.matches("View Details").count(), 6);
    assert!(html.matches("Inspect Artifact").count() > 3);
    // The projects toggle keeps the certificates expansion.
    assert!(html.contains("/?projects=all&certificates=all#projects"));
}

#[tokio::test]
async fn detail_page_renders_record() {
    let server = SiteTestServer::start(Config::default()).await;
    let response = reqwest::get(server.url("/projects/jobmate-001")).await.unwrap();
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();

    assert!(html.contains("Project: JobMate"));
    assert!(html.contains("Key Features"));
    assert!(html.contains("My Contributions"));
    assert!(html.contains("<strong>Duration:</strong>"));
    assert!(html.contains("Back to Projects"));
}

#[tokio::test]
async fn detail_carousel_wraps_and_marks_position() {
    let server = SiteTestServer::start(Config::default()).await;

    // jobmate-001 has four screenshots; the last one wraps forward to 0.
    let html = reqwest::get(server.url("/projects/jobmate-001?image=3"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("?image=0"));
    assert!(html.contains("dot active"));

    // First image wraps backward to the last.
    let html = reqwest::get(server.url("/projects/jobmate-001"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("?image=3"));
}

#[tokio::test]
async fn single_screenshot_project_has_no_carousel_controls() {
    let server = SiteTestServer::start(Config::default()).await;
    let html = reqwest::get(server.url("/projects/portfolio-010"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!html.contains("carousel-nav"));
    assert!(!html.contains("carousel-dots"));
}

#[tokio::test]
async fn garbage_image_index_falls_back_to_first() {
    let server = SiteTestServer::start(Config::default()).await;
    let response = reqwest::get(server.url("/projects/jobmate-001?image=banana"))
        .await
        .unwrap();
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();
    assert!(html.contains("JobMate1.png"));
}

#[tokio::test]
async fn unknown_project_is_a_terminal_not_found_page() {
    let server = SiteTestServer::start(Config::default()).await;
    let response = reqwest::get(server.url("/projects/z-9")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let html = response.text().await.unwrap();
    assert!(html.contains("Project Not Found"));
    assert!(html.contains("Return to Projects"));
}

#[tokio::test]
async fn unrouted_paths_render_not_found() {
    let server = SiteTestServer::start(Config::default()).await;
    let response = reqwest::get(server.url("/blog")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trailing_slash_redirects_to_canonical_detail_path() {
    let server = SiteTestServer::start(Config::default()).await;
    let response = no_redirect_client()
        .get(server.url("/projects/jobmate-001/"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    let location = response.headers()["location"].to_str().unwrap();
    assert_eq!(location, "/projects/jobmate-001");
}

#[tokio::test]
async fn sentinel_live_link_opens_modal_instead_of_navigating() {
    let server = SiteTestServer::start(Config::default()).await;

    // sustainwise-002 has live_url = "#": its live action must point at the
    // notice query, not at an external destination.
    let html = reqwest::get(server.url("/projects/sustainwise-002"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("/projects/sustainwise-002?notice=no-link"));
    assert!(!html.contains("href=\"#\""));

    let html = reqwest::get(server.url("/projects/sustainwise-002?notice=no-link"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("No Deployment Available"));
    assert!(html.contains("modal-overlay"));
}

#[tokio::test]
async fn real_links_navigate_and_modal_stays_closed() {
    let server = SiteTestServer::start(Config::default()).await;
    let html = reqwest::get(server.url("/projects/jobmate-001"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("https://job-mate-six.vercel.app/"));
    assert!(html.contains("target=\"_blank\""));
    assert!(!html.contains("modal-overlay"));
}

#[tokio::test]
async fn assets_are_served_with_content_types() {
    let server = SiteTestServer::start(Config::default()).await;

    let css = reqwest::get(server.url("/assets/site.css")).await.unwrap();
    assert!(css.status().is_success());
    assert!(
        css.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );

    let js = reqwest::get(server.url("/assets/reveal.js")).await.unwrap();
    assert!(js.status().is_success());
    let body = js.text().await.unwrap();
    assert!(body.contains("IntersectionObserver"));
    assert!(body.contains("unobserve"));
}

#[tokio::test]
async fn health_reports_catalog_counts() {
    let server = SiteTestServer::start(Config::default()).await;
    let body: serde_json::Value = reqwest::get(server.url("/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["projects"].as_u64().unwrap() > 0);
}
