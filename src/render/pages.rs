//! Page contexts: everything the templates see, resolved up front.
//!
//! Link intents, carousel positions, window expansion, and form status are
//! all decided here, in Rust, so the templates only branch on booleans and
//! loop over prepared lists.

use chrono::Datelike;
use serde::Serialize;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::{Catalog, CertificateRecord, ProjectRecord};
use crate::router::Route;
use crate::view::{Carousel, NavIntent, SubmissionStatus};

/// Cards shown on the collapsed projects grid.
pub const PROJECT_WINDOW: usize = 6;
/// Cards shown on the collapsed certificates grid.
pub const CERTIFICATE_WINDOW: usize = 3;

/// Thumbnail fallback when a record carries no screenshots.
const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=Placeholder";

/// Modal copy for actions whose destination intentionally does not exist.
const NO_LINK_TITLE: &str = "No Deployment Available";
const NO_LINK_MESSAGE: &str = "Sorry, there is no deployment link for this project.";

/// Query token that opens the no-link modal.
pub const NO_LINK_NOTICE: &str = "no-link";

/// How a resolved action renders: a real anchor or a same-page modal opener.
#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub href: String,
    pub external: bool,
    pub unavailable: bool,
}

impl LinkView {
    /// `modal_href` is the same-page URL that opens the notice modal; it is
    /// used when the record's link field carries the no-link sentinel.
    fn resolve(url: &str, modal_href: &str) -> Self {
        match NavIntent::for_link(url) {
            NavIntent::External(href) => Self {
                href,
                external: true,
                unavailable: false,
            },
            NavIntent::Internal(href) => Self {
                href,
                external: false,
                unavailable: false,
            },
            NavIntent::Unavailable => Self {
                href: modal_href.to_owned(),
                external: false,
                unavailable: true,
            },
        }
    }
}

/// Image paths are opaque; absolute URLs pass through, site-relative paths
/// get the configured asset base prefixed.
fn asset_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_owned()
    } else {
        format!("{base}{path}")
    }
}

#[derive(Debug, Clone, Serialize)]
struct ProjectCard<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    technologies: &'a [String],
    thumbnail: String,
    detail_href: String,
    live: LinkView,
    code: LinkView,
}

impl<'a> ProjectCard<'a> {
    fn from_record(record: &'a ProjectRecord, asset_base: &str) -> Self {
        Self {
            id: &record.id,
            title: &record.title,
            description: &record.description,
            technologies: &record.technologies,
            thumbnail: asset_url(asset_base, record.thumbnail().unwrap_or(PLACEHOLDER_IMAGE)),
            detail_href: Route::ProjectDetail(record.id.clone()).href(),
            live: LinkView::resolve(&record.live_url, &home_modal_href()),
            code: LinkView::resolve(&record.code_url, &home_modal_href()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct CertificateCard<'a> {
    name: &'a str,
    achieved: &'a str,
    valid_until: &'a str,
    preview_image: String,
    credential_id: &'a str,
    url: &'a str,
}

impl<'a> CertificateCard<'a> {
    fn from_record(record: &'a CertificateRecord, asset_base: &str) -> Self {
        Self {
            name: &record.name,
            achieved: &record.achieved,
            valid_until: &record.valid_until,
            preview_image: asset_url(asset_base, &record.preview_image),
            credential_id: &record.credential_id,
            url: &record.url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ModalView {
    title: &'static str,
    message: &'static str,
    close_href: String,
}

/// Inputs the home page varies on, all decoded from the query string.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeOptions {
    pub all_projects: bool,
    pub all_certificates: bool,
    pub notice: bool,
    pub status: SubmissionStatus,
    pub missing_fields: bool,
}

/// Modal-opening URL for actions on the home projects grid.
fn home_modal_href() -> String {
    format!("/?notice={NO_LINK_NOTICE}#projects")
}

/// Home URL carrying the given expansion state, anchored at `fragment`.
/// Used by the show-all/show-less toggles so expanding one grid never
/// collapses the other, and collapse always scrolls back to its anchor.
fn home_href(all_projects: bool, all_certificates: bool, fragment: &str) -> String {
    let mut params: Vec<&str> = Vec::new();
    if all_projects {
        params.push("projects=all");
    }
    if all_certificates {
        params.push("certificates=all");
    }
    if params.is_empty() {
        format!("/{fragment}")
    } else {
        format!("/?{}{fragment}", params.join("&"))
    }
}

pub fn home(catalog: &Catalog, site: &SiteConfig, opts: &HomeOptions) -> Context {
    let mut ctx = Context::new();
    let base = site.asset_base.as_str();
    ctx.insert("brand", &site.brand);
    ctx.insert("hero", &catalog.profile.hero);
    ctx.insert("about", &catalog.profile.about);
    ctx.insert("portrait", &asset_url(base, &catalog.profile.about.portrait));
    ctx.insert("experience", &catalog.profile.experience);
    ctx.insert("education", &catalog.profile.education);
    ctx.insert("skills", &catalog.profile.skills);
    ctx.insert("contact", &catalog.profile.contact);
    ctx.insert("footer_tagline", &catalog.profile.footer_tagline);
    ctx.insert("year", &chrono::Utc::now().year());

    // ── Projects window ──
    let projects = &catalog.projects;
    let shown = if opts.all_projects {
        projects.all()
    } else {
        projects.windowed(PROJECT_WINDOW)
    };
    let cards: Vec<ProjectCard> = shown
        .iter()
        .map(|r| ProjectCard::from_record(r, base))
        .collect();
    ctx.insert("projects", &cards);
    ctx.insert("projects_expanded", &opts.all_projects);
    ctx.insert("projects_toggle", &(projects.len() > PROJECT_WINDOW));
    ctx.insert(
        "projects_toggle_href",
        &home_href(!opts.all_projects, opts.all_certificates, "#projects"),
    );

    // ── Certificates window ──
    let certificates = &catalog.certificates;
    let shown = if opts.all_certificates {
        certificates.all()
    } else {
        certificates.windowed(CERTIFICATE_WINDOW)
    };
    let cards: Vec<CertificateCard> = shown
        .iter()
        .map(|r| CertificateCard::from_record(r, base))
        .collect();
    ctx.insert("certificates", &cards);
    ctx.insert("certificates_expanded", &opts.all_certificates);
    ctx.insert(
        "certificates_toggle",
        &(certificates.len() > CERTIFICATE_WINDOW),
    );
    ctx.insert(
        "certificates_toggle_href",
        &home_href(opts.all_projects, !opts.all_certificates, "#certificate"),
    );

    // ── Contact form state ──
    ctx.insert("form_status", &opts.status.to_string());
    ctx.insert("form_can_submit", &opts.status.can_submit());
    ctx.insert("form_missing_fields", &opts.missing_fields);

    insert_modal(&mut ctx, opts.notice, "/#projects");
    ctx
}

pub fn project(
    site: &SiteConfig,
    record: &ProjectRecord,
    image_index: usize,
    notice: bool,
) -> Context {
    let mut ctx = Context::new();
    let base = site.asset_base.as_str();
    ctx.insert("brand", &site.brand);
    ctx.insert("project", record);
    ctx.insert("rank", &record.rank.to_string());

    let detail_path = Route::ProjectDetail(record.id.clone()).href();
    let modal_href = format!("{detail_path}?notice={NO_LINK_NOTICE}");
    ctx.insert("live", &LinkView::resolve(&record.live_url, &modal_href));
    ctx.insert("code", &LinkView::resolve(&record.code_url, &modal_href));

    match Carousel::new(record.images.len()) {
        Some(carousel) => {
            let carousel = carousel.with_index(image_index);
            ctx.insert("image", &asset_url(base, &record.images[carousel.index()]));
            ctx.insert("image_index", &carousel.index());
            ctx.insert("image_count", &carousel.len());
            ctx.insert("carousel_controls", &carousel.has_controls());
            ctx.insert(
                "prev_href",
                &format!("{detail_path}?image={}", carousel.previous()),
            );
            ctx.insert(
                "next_href",
                &format!("{detail_path}?image={}", carousel.next()),
            );
        }
        None => {
            ctx.insert("image", PLACEHOLDER_IMAGE);
            ctx.insert("image_index", &0);
            ctx.insert("image_count", &0);
            ctx.insert("carousel_controls", &false);
        }
    }

    insert_modal(&mut ctx, notice, &detail_path);
    ctx
}

pub fn not_found(site: &SiteConfig) -> Context {
    let mut ctx = Context::new();
    ctx.insert("brand", &site.brand);
    ctx.insert("modal_open", &false);
    ctx
}

fn insert_modal(ctx: &mut Context, open: bool, close_href: &str) {
    ctx.insert("modal_open", &open);
    if open {
        ctx.insert(
            "modal",
            &ModalView {
                title: NO_LINK_TITLE,
                message: NO_LINK_MESSAGE,
                close_href: close_href.to_owned(),
            },
        );
    }
}
