use axum::{
    extract::{Form, Path, Query, State},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Json, Redirect},
};
use serde::Deserialize;

use super::AppState;
use crate::render::pages::{self, HomeOptions, NO_LINK_NOTICE};
use crate::render::{REVEAL_JS, SITE_CSS};
use crate::router::Route;
use crate::view::{ContactMessage, SubmissionStatus};

/// Query surface of the composed page: grid expansion, the no-link notice,
/// and the post-redirect contact status.
#[derive(Debug, Deserialize)]
pub(super) struct HomeQuery {
    projects: Option<String>,
    certificates: Option<String>,
    notice: Option<String>,
    sent: Option<String>,
    form: Option<String>,
}

/// Query surface of the detail page: carousel position and the no-link
/// notice.
#[derive(Debug, Deserialize)]
pub(super) struct DetailQuery {
    image: Option<String>,
    notice: Option<String>,
}

/// GET / — the composed single-page view
pub(super) async fn handle_home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let opts = HomeOptions {
        all_projects: query.projects.as_deref() == Some("all"),
        all_certificates: query.certificates.as_deref() == Some("all"),
        notice: query.notice.as_deref() == Some(NO_LINK_NOTICE),
        status: SubmissionStatus::from_query(query.sent.as_deref()),
        missing_fields: query.form.as_deref() == Some("invalid"),
    };
    let ctx = pages::home(&state.catalog, &state.site, &opts);
    render(&state, "home.html", &ctx, StatusCode::OK)
}

/// GET /projects/{id} — project detail, or the terminal not-found page
pub(super) async fn handle_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> impl IntoResponse {
    let Some(record) = state.catalog.projects.find_by_id(&id) else {
        tracing::info!(%id, "project lookup missed");
        return not_found_page(&state);
    };

    // Anything non-numeric in ?image= just means the first image.
    let image_index = query
        .image
        .as_deref()
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(0);
    let notice = query.notice.as_deref() == Some(NO_LINK_NOTICE);

    let ctx = pages::project(&state.site, record, image_index, notice);
    render(&state, "project.html", &ctx, StatusCode::OK)
}

/// POST /contact — validate locally, then hand off to the mail relay.
/// Always answers with a redirect back to the contact section
/// (post/redirect/get), carrying the outcome in the query string.
pub(super) async fn handle_contact(
    State(state): State<AppState>,
    Form(message): Form<ContactMessage>,
) -> Redirect {
    if !message.is_valid() {
        tracing::info!(
            missing = ?message.missing_fields(),
            "contact submission blocked by validation"
        );
        return Redirect::to("/?form=invalid#contact");
    }

    let status = SubmissionStatus::default().begin();
    let outcome = state.mailer.send(&message).await;
    let status = status.complete(outcome.is_ok());

    match outcome {
        Ok(()) => tracing::info!("contact submission relayed"),
        Err(e) => tracing::error!("contact relay failed: {e}"),
    }

    // `complete` only yields terminal states, so the token is always there.
    let token = status.as_query().unwrap_or("error");
    Redirect::to(&format!("/?sent={token}#contact"))
}

/// GET /health — liveness probe, no secrets leaked
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let body = serde_json::json!({
        "status": "ok",
        "projects": state.catalog.projects.len(),
        "certificates": state.catalog.certificates.len(),
    });
    Json(body)
}

/// GET /assets/site.css
pub(super) async fn handle_site_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

/// GET /assets/reveal.js
pub(super) async fn handle_reveal_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        REVEAL_JS,
    )
}

/// Fallback for every unrouted path. Near-miss page paths (trailing slashes)
/// redirect to their canonical form; everything else gets the not-found page.
pub(super) async fn handle_fallback(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    match Route::parse(uri.path()) {
        Route::Home | Route::ProjectDetail(_) => {
            let canonical = Route::parse(uri.path()).href();
            Redirect::permanent(&canonical).into_response()
        }
        Route::NotFound => {
            tracing::info!(path = %uri.path(), "unrouted path");
            not_found_page(&state).into_response()
        }
    }
}

fn not_found_page(state: &AppState) -> axum::response::Response {
    let ctx = pages::not_found(&state.site);
    render(state, "not_found.html", &ctx, StatusCode::NOT_FOUND)
}

/// Render a template to a full response; template failures become a plain
/// 500 so a broken context never half-renders a page.
fn render(
    state: &AppState,
    template: &str,
    ctx: &tera::Context,
    status: StatusCode,
) -> axum::response::Response {
    match state.renderer.render(template, ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("render failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Something went wrong</h1>".to_owned()),
            )
                .into_response()
        }
    }
}
