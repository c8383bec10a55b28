//! Visibility and timing decisions for the publish collaborator.

use serde::{Deserialize, Serialize};

use crate::domain::schedule::ScheduleInstant;
use crate::domain::types::Monetization;

/// Listing visibility on the hosting platform.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
}

impl Visibility {
    /// String representation used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
        }
    }
}

/// Resolved visibility/timing/audience decision handed to the publish
/// collaborator.
///
/// `publish_at` is present exactly when the caller supplied a schedule, in
/// which case `visibility` is [`Visibility::Private`]. The age-audience flag
/// depends on monetization alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishDirective {
    pub visibility: Visibility,
    pub age_restricted: bool,
    pub publish_at: Option<ScheduleInstant>,
}

/// Combines monetization preference and an optional schedule into a publish
/// directive. Pure; never fails.
pub fn resolve_publish_directive(
    monetization: Monetization,
    schedule: Option<ScheduleInstant>,
) -> PublishDirective {
    let visibility = if schedule.is_some() {
        Visibility::Private
    } else if monetization == Monetization::Limited {
        Visibility::Unlisted
    } else {
        Visibility::Public
    };

    PublishDirective {
        visibility,
        age_restricted: monetization == Monetization::Disabled,
        publish_at: schedule,
    }
}
