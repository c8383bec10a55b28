//! The upload form: raw multipart fields parsed into a typed payload plus a
//! media source.

use std::path::PathBuf;

use thiserror::Error;
use validator::ValidateUrl;

#[cfg(feature = "server")]
use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::types::{Category, LanguageCode, Monetization, TypeConstraintError};
use crate::publisher::MediaSource;

/// Raw multipart form submitted by the front end. Field names are the wire
/// contract and stay camelCase.
#[cfg(feature = "server")]
#[derive(MultipartForm)]
pub struct UploadForm {
    #[multipart(rename = "videoFile", limit = "2GB")]
    pub video_file: Option<TempFile>,
    #[multipart(rename = "videoUrl")]
    pub video_url: Option<Text<String>>,
    pub category: Text<String>,
    pub language: Text<String>,
    pub monetization: Text<String>,
    #[multipart(rename = "scheduleTime")]
    pub schedule_time: Option<Text<String>>,
}

/// Validated upload parameters.
///
/// The schedule string stays raw here: its temporal validity is the
/// pipeline's one re-checked input and is judged by the schedule normalizer,
/// not the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFormPayload {
    pub category: Category,
    pub language: LanguageCode,
    pub monetization: Monetization,
    pub schedule_time: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadFormError {
    #[error("Upload form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("A video file or direct video URL is required.")]
    MissingSource,
    #[error("Provide only one video source: upload OR URL.")]
    ConflictingSources,
    #[error("The direct video URL is not a valid URL.")]
    InvalidVideoUrl,
}

impl From<TypeConstraintError> for UploadFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl UploadFormPayload {
    /// Validates the categorical fields and carries the schedule string
    /// through trimmed, mapping blank to absent.
    pub fn new(
        category: &str,
        language: &str,
        monetization: &str,
        schedule_time: Option<&str>,
    ) -> Result<Self, UploadFormError> {
        Ok(Self {
            category: Category::try_from(category)?,
            language: LanguageCode::new(language)?,
            monetization: Monetization::try_from(monetization)?,
            schedule_time: schedule_time
                .map(str::trim)
                .filter(|raw| !raw.is_empty())
                .map(str::to_string),
        })
    }
}

/// Picks exactly one media source from the optional file and URL fields.
pub fn resolve_media_source(
    file: Option<(PathBuf, Option<String>)>,
    url: Option<String>,
) -> Result<MediaSource, UploadFormError> {
    match (file, url.filter(|url| !url.trim().is_empty())) {
        (Some(_), Some(_)) => Err(UploadFormError::ConflictingSources),
        (None, None) => Err(UploadFormError::MissingSource),
        (Some((path, label)), None) => Ok(MediaSource::File {
            path,
            label: label.unwrap_or_default(),
        }),
        (None, Some(url)) => {
            let url = url.trim().to_string();
            if !url.as_str().validate_url() {
                return Err(UploadFormError::InvalidVideoUrl);
            }
            Ok(MediaSource::Url(url))
        }
    }
}

#[cfg(feature = "server")]
impl UploadForm {
    /// Parses the raw fields into a typed payload and a media source.
    ///
    /// Borrows the temp file path only; the form must stay alive until the
    /// publish call finishes so the file is not cleaned up underneath it.
    pub fn parse(&self) -> Result<(UploadFormPayload, MediaSource), UploadFormError> {
        let payload = UploadFormPayload::new(
            &self.category,
            &self.language,
            &self.monetization,
            self.schedule_time.as_ref().map(|text| text.as_str()),
        )?;
        let media = resolve_media_source(
            self.video_file
                .as_ref()
                .map(|file| (file.file.path().to_path_buf(), file.file_name.clone())),
            self.video_url.as_ref().map(|text| text.to_string()),
        )?;
        Ok((payload, media))
    }
}
