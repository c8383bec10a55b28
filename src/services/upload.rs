//! Core business logic for the upload endpoint.
//!
//! The function composes the metadata package and the publish directive,
//! hands both to the publisher, and maps the outcome into the wire summary.
//! All error mapping happens here so that the HTTP route can remain a thin
//! wrapper. Nothing is published unless the whole pipeline succeeded first.

use crate::domain::publish::resolve_publish_directive;
use crate::domain::schedule::parse_schedule;
use crate::domain::seo::{SeoInputs, generate_seo_package};
use crate::domain::templates::template_for_label;
use crate::dto::upload::UploadSummary;
use crate::forms::upload::UploadFormPayload;
use crate::publisher::{MediaSource, PublishRequest, VideoPublisher};

use super::{ServiceError, ServiceResult};

pub async fn process_upload<P>(
    payload: UploadFormPayload,
    media: MediaSource,
    publisher: &P,
) -> ServiceResult<UploadSummary>
where
    P: VideoPublisher,
{
    let schedule = parse_schedule(payload.schedule_time.as_deref())?;

    let seo = generate_seo_package(&SeoInputs {
        source_label: Some(media.source_label()),
        category: payload.category.as_str(),
        language: payload.language.as_str(),
        monetization: payload.monetization.as_str(),
    });
    let directive = resolve_publish_directive(payload.monetization, schedule);
    let template = template_for_label(payload.category.as_str());

    let mut keywords = seo.tags.clone();
    keywords.extend(seo.hashtags.iter().cloned());

    let request = PublishRequest {
        title: seo.title.clone(),
        description: seo.description.clone(),
        keywords,
        classification_code: template.classification_code.to_string(),
        language: payload.language.as_str().to_string(),
        directive,
    };

    let receipt = match publisher.publish(&request, &media).await {
        Ok(receipt) => receipt,
        Err(e) => {
            log::error!("Failed to publish video: {e}");
            return Err(ServiceError::from(e));
        }
    };

    Ok(UploadSummary {
        title: seo.title,
        description: seo.description,
        tags: seo.tags,
        hashtags: seo.hashtags,
        thumbnail_prompt: seo.thumbnail_prompt,
        scheduled_publish_at: request
            .directive
            .publish_at
            .map(|instant| instant.to_iso8601()),
        external_id: receipt.external_id,
        external_url: receipt.external_url,
    })
}
