//! Pure, request-scoped publishing pipeline: keyword extraction, template
//! registry, metadata composition, schedule normalization and the publish
//! directive resolver.

pub mod keywords;
pub mod publish;
pub mod schedule;
pub mod seo;
pub mod templates;
pub mod types;
