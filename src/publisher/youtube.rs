//! YouTube Data API v3 publisher.
//!
//! Uses the resumable upload protocol: an initiation POST carrying the
//! snippet/status metadata returns a session URI in the `Location` header;
//! the media bytes are then PUT to that URI and the response body carries
//! the video id. Credentials are resolved from the environment on every
//! call so a misconfigured deployment fails per request, not at startup.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use serde::{Deserialize, Serialize};

use crate::domain::publish::PublishDirective;

use super::{
    MediaSource, PublishError, PublishReceipt, PublishRequest, PublishResult, VideoPublisher,
};

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const UPLOAD_ENDPOINT: &str = "https://www.googleapis.com/upload/youtube/v3/videos";
const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";
const MEDIA_CONTENT_TYPE: &str = "application/octet-stream";

/// OAuth2 credentials required to call the YouTube Data API v3.
#[derive(Debug, Clone)]
pub struct GoogleCredentials {
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl GoogleCredentials {
    /// Loads credentials from environment variables so secrets never appear
    /// in configuration files.
    pub fn from_env() -> PublishResult<Self> {
        let client_id = std::env::var("GOOGLE_CLIENT_ID").ok();
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET").ok();
        let redirect_uri = std::env::var("GOOGLE_REDIRECT_URI").ok();
        let refresh_token = std::env::var("YOUTUBE_REFRESH_TOKEN").ok();

        // The redirect URI must be configured even though the refresh grant
        // never sends it.
        match (client_id, client_secret, redirect_uri, refresh_token) {
            (Some(client_id), Some(client_secret), Some(_), Some(refresh_token)) => Ok(Self {
                client_id,
                client_secret,
                refresh_token,
            }),
            _ => Err(PublishError::MissingCredentials(
                "Missing Google API credentials in environment variables.".to_string(),
            )),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet<'a> {
    title: &'a str,
    description: &'a str,
    tags: &'a [String],
    category_id: &'a str,
    default_language: &'a str,
    default_audio_language: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatus {
    privacy_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    publish_at: Option<String>,
    self_declared_made_for_kids: bool,
    made_for_kids: bool,
}

#[derive(Serialize)]
struct VideoMetadata<'a> {
    snippet: VideoSnippet<'a>,
    status: VideoStatus,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UploadedVideo {
    id: Option<String>,
}

fn video_status(directive: &PublishDirective) -> VideoStatus {
    VideoStatus {
        privacy_status: directive.visibility.as_str(),
        publish_at: directive.publish_at.map(|instant| instant.to_iso8601()),
        self_declared_made_for_kids: directive.age_restricted,
        made_for_kids: directive.age_restricted,
    }
}

/// Publisher backed by the YouTube Data API v3.
///
/// The underlying `reqwest::Client` is cheap to clone, allowing the
/// publisher to be shared freely between handlers.
#[derive(Debug, Clone)]
pub struct YoutubePublisher {
    http: Client,
}

impl YoutubePublisher {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// Exchanges the refresh token for a short-lived access token.
    async fn access_token(&self, credentials: &GoogleCredentials) -> PublishResult<String> {
        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
                ("refresh_token", credentials.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| PublishError::Request(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(PublishError::Request(format!(
                "token request failed with status {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PublishError::Request(format!("malformed token response: {e}")))?;
        Ok(token.access_token)
    }

    async fn media_bytes(&self, media: &MediaSource) -> PublishResult<Vec<u8>> {
        match media {
            MediaSource::File { path, .. } => std::fs::read(path)
                .map_err(|e| PublishError::Media(format!("{}: {e}", path.display()))),
            MediaSource::Url(url) => {
                let response = self
                    .http
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| PublishError::Media(format!("{url}: {e}")))?;
                if !response.status().is_success() {
                    return Err(PublishError::Media(
                        "Failed to fetch the video from the provided URL.".to_string(),
                    ));
                }
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| PublishError::Media(format!("{url}: {e}")))?;
                Ok(bytes.to_vec())
            }
        }
    }

    /// Starts a resumable upload session, returning the session URI.
    async fn initiate_upload(
        &self,
        token: &str,
        request: &PublishRequest,
        media_length: usize,
    ) -> PublishResult<String> {
        let metadata = VideoMetadata {
            snippet: VideoSnippet {
                title: &request.title,
                description: &request.description,
                tags: &request.keywords,
                category_id: &request.classification_code,
                default_language: &request.language,
                default_audio_language: &request.language,
            },
            status: video_status(&request.directive),
        };

        let response = self
            .http
            .post(UPLOAD_ENDPOINT)
            .query(&[("uploadType", "resumable"), ("part", "snippet,status")])
            .bearer_auth(token)
            .header("X-Upload-Content-Type", MEDIA_CONTENT_TYPE)
            .header("X-Upload-Content-Length", media_length.to_string())
            .json(&metadata)
            .send()
            .await
            .map_err(|e| PublishError::Request(format!("upload initiation failed: {e}")))?;

        if !response.status().is_success() {
            return Err(PublishError::Request(format!(
                "upload initiation failed with status {}",
                response.status()
            )));
        }

        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                PublishError::Request(
                    "no resumable session URI in upload initiation response".to_string(),
                )
            })
    }

    async fn upload_media(&self, session_uri: &str, bytes: Vec<u8>) -> PublishResult<String> {
        let response = self
            .http
            .put(session_uri)
            .header(CONTENT_TYPE, MEDIA_CONTENT_TYPE)
            .body(bytes)
            .send()
            .await
            .map_err(|e| PublishError::Request(format!("media upload failed: {e}")))?;

        if !response.status().is_success() {
            return Err(PublishError::Request(format!(
                "media upload failed with status {}",
                response.status()
            )));
        }

        let video: UploadedVideo = response
            .json()
            .await
            .map_err(|e| PublishError::Request(format!("malformed upload response: {e}")))?;
        video.id.ok_or(PublishError::MissingVideoId)
    }
}

#[async_trait(?Send)]
impl VideoPublisher for YoutubePublisher {
    async fn publish(
        &self,
        request: &PublishRequest,
        media: &MediaSource,
    ) -> PublishResult<PublishReceipt> {
        let credentials = GoogleCredentials::from_env()?;
        let token = self.access_token(&credentials).await?;
        let bytes = self.media_bytes(media).await?;
        let session_uri = self.initiate_upload(token.as_str(), request, bytes.len()).await?;
        let video_id = self.upload_media(&session_uri, bytes).await?;

        Ok(PublishReceipt {
            external_url: format!("{WATCH_URL_BASE}{video_id}"),
            external_id: video_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::publish::{Visibility, resolve_publish_directive};
    use crate::domain::schedule::parse_schedule;
    use crate::domain::types::Monetization;

    #[test]
    fn scheduled_directives_serialize_a_private_status_with_publish_at() {
        let schedule = parse_schedule(Some("2024-06-01T10:00")).unwrap();
        let directive = resolve_publish_directive(Monetization::Enabled, schedule);
        let status = video_status(&directive);
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["privacyStatus"], "private");
        assert_eq!(json["publishAt"], "2024-06-01T10:00:00.000Z");
        assert_eq!(json["madeForKids"], false);
    }

    #[test]
    fn unscheduled_statuses_omit_publish_at() {
        let directive = resolve_publish_directive(Monetization::Limited, None);
        assert_eq!(directive.visibility, Visibility::Unlisted);
        let json = serde_json::to_value(video_status(&directive)).unwrap();
        assert_eq!(json["privacyStatus"], "unlisted");
        assert!(json.get("publishAt").is_none());
    }

    #[test]
    fn disabled_monetization_marks_both_kids_flags() {
        let directive = resolve_publish_directive(Monetization::Disabled, None);
        let json = serde_json::to_value(video_status(&directive)).unwrap();
        assert_eq!(json["selfDeclaredMadeForKids"], true);
        assert_eq!(json["madeForKids"], true);
    }

    #[actix_web::test]
    async fn file_sources_are_read_from_disk() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not really a video").unwrap();

        let publisher = YoutubePublisher::new(Client::new());
        let media = MediaSource::File {
            path: file.path().to_path_buf(),
            label: "clip.mp4".to_string(),
        };
        let bytes = publisher.media_bytes(&media).await.unwrap();
        assert_eq!(bytes, b"not really a video");
    }

    #[actix_web::test]
    async fn missing_files_surface_as_media_errors() {
        let publisher = YoutubePublisher::new(Client::new());
        let media = MediaSource::File {
            path: std::path::PathBuf::from("/nonexistent/clip.mp4"),
            label: "clip.mp4".to_string(),
        };
        assert!(matches!(
            publisher.media_bytes(&media).await,
            Err(PublishError::Media(_))
        ));
    }
}
