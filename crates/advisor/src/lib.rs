//! Outbound integrations: landing-page fetching and AI report generation.
//!
//! Provides the content fetcher (one GET with a fixed timeout, HTML
//! distilled to title/headings/paragraphs) and the hosted-model client
//! (prompt templating, single-attempt generation, JSON extraction from the
//! raw model text, typed report parsing).

pub mod client;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod prompt;
pub mod service;

pub use client::{GeminiClient, GeminiConfig};
pub use error::AdvisorError;
pub use fetch::PageContent;
pub use service::AdvisorService;
