//! Landing-page content fetcher.
//!
//! One outbound GET with a fixed timeout, then the HTML is distilled to
//! the title, the h1-h3 headings, and the first paragraphs of body text.
//! Every caller treats a fetch failure as "proceed without page content";
//! none of the report flows requires the page strictly.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::error::AdvisorError;

/// Fixed timeout for the page GET.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// User agent sent with page requests.
pub const FETCH_USER_AGENT: &str = "Mozilla/5.0 (compatible; ClarityBot/1.0)";

/// Paragraphs kept after extraction.
const MAX_PARAGRAPHS: usize = 20;

/// Paragraphs shorter than this are boilerplate, not body text.
const MIN_PARAGRAPH_LEN: usize = 20;

/// Distilled page content fed into the analysis prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    pub title: String,
    pub headings: Vec<String>,
    pub paragraphs: Vec<String>,
}

/// Fetch a page and extract its content.
///
/// The caller supplies the client so the timeout and user agent are
/// configured once (see [`crate::service::AdvisorService`]).
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
) -> Result<PageContent, AdvisorError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AdvisorError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let html = response.text().await?;
    Ok(extract_content(&html))
}

/// Whether an element sits inside a container we exclude from extraction.
fn in_excluded_container(element: ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| matches!(a.value().name(), "script" | "style" | "nav" | "footer"))
}

/// Distill raw HTML into [`PageContent`]. Synchronous so the non-`Send`
/// parse state never crosses an await point.
fn extract_content(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("title").expect("static selector");
    let heading_selector = Selector::parse("h1, h2, h3").expect("static selector");
    let paragraph_selector = Selector::parse("p").expect("static selector");

    let headings: Vec<String> = document
        .select(&heading_selector)
        .filter(|el| !in_excluded_container(*el))
        .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    // Document title, falling back to the first h1.
    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| headings.first().cloned())
        .unwrap_or_default();

    let paragraphs: Vec<String> = document
        .select(&paragraph_selector)
        .filter(|el| !in_excluded_container(*el))
        .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .filter(|text| text.len() >= MIN_PARAGRAPH_LEN)
        .take(MAX_PARAGRAPHS)
        .collect();

    PageContent {
        title,
        headings,
        paragraphs,
    }
}
