//! Boundary to the external video-hosting platform.
//!
//! The pipeline hands a fully composed [`PublishRequest`] plus an opaque
//! media source to a [`VideoPublisher`] and surfaces the outcome unchanged.
//! No retries happen at this boundary; the call is a single best effort.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::publish::PublishDirective;

#[cfg(feature = "server")]
pub mod youtube;

/// Where the media bytes come from. The pipeline never inspects them; the
/// label is used only for keyword derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// An uploaded file on local disk, labelled with the client filename.
    File { path: PathBuf, label: String },
    /// A direct video URL fetched by the publisher.
    Url(String),
}

impl MediaSource {
    /// Label used for keyword derivation.
    pub fn source_label(&self) -> &str {
        match self {
            Self::File { label, .. } => label,
            Self::Url(url) => url,
        }
    }
}

/// Everything the platform needs to list the video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub title: String,
    pub description: String,
    /// Union of tags and hashtags, in that order.
    pub keywords: Vec<String>,
    /// Platform numeric category id.
    pub classification_code: String,
    pub language: String,
    pub directive: PublishDirective,
}

/// External identifier and canonical URL returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub external_id: String,
    pub external_url: String,
}

/// Errors raised at the publish boundary. Surfaced to callers unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// Publisher credentials are not configured.
    #[error("missing publisher credentials: {0}")]
    MissingCredentials(String),
    /// The media source could not be read or fetched.
    #[error("failed to read media source: {0}")]
    Media(String),
    /// The platform rejected or failed the publish call.
    #[error("publish request failed: {0}")]
    Request(String),
    /// The platform response did not include a video id.
    #[error("publish response did not include a video id")]
    MissingVideoId,
}

/// Convenient alias for results returned from publisher implementations.
pub type PublishResult<T> = Result<T, PublishError>;

/// A video-hosting platform the pipeline can publish to.
#[async_trait(?Send)]
pub trait VideoPublisher {
    /// Publishes one video with its metadata and directive.
    async fn publish(
        &self,
        request: &PublishRequest,
        media: &MediaSource,
    ) -> PublishResult<PublishReceipt>;
}
