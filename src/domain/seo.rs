//! SEO metadata composition.
//!
//! All composers are pure functions over request-scoped inputs; the only
//! state they touch is the static template registry. The description layout
//! (section order, blank lines, fixed labels) is a contract consumed by the
//! publish collaborator and must not drift.

use serde::{Deserialize, Serialize};

use crate::domain::keywords::{
    FOOTER_KEYWORD_CAP, KeywordPhrases, KeywordSet, to_title_case,
};
use crate::domain::templates::{CORE_PLACEHOLDER, CategoryTemplate, template_for_label};

/// Inclusive title length band and the midpoint candidates are scored
/// against.
const TITLE_MIN_LENGTH: usize = 60;
const TITLE_MAX_LENGTH: usize = 70;
const TITLE_TARGET_LENGTH: usize = 65;
/// Keep-length for over-long titles before the ellipsis is appended.
const TITLE_TRUNCATE_LENGTH: usize = 66;
/// Suffix appended to under-length titles.
const TITLE_PAD_SUFFIX: &str = " | 2024 Guide";

/// Maximum number of hashtags derived from the footer keyword list.
const HASHTAG_CAP: usize = 5;

const TIMESTAMP_LINES: [&str; 4] = [
    "00:00 Intro",
    "00:45 Key Insights",
    "02:00 Deep Dive",
    "05:00 Final Thoughts",
];

const CALL_TO_ACTION_LINES: [&str; 2] = [
    "🔔 Subscribe for more: https://youtube.com",
    "👍 Like & comment what you want to see next!",
];

/// Raw inputs to the metadata composers.
///
/// `category` is a label rather than a [`Category`](crate::domain::types::Category)
/// so that unvalidated callers still get the registry's silent fallback.
#[derive(Debug, Clone, Copy)]
pub struct SeoInputs<'a> {
    pub source_label: Option<&'a str>,
    pub category: &'a str,
    pub language: &'a str,
    pub monetization: &'a str,
}

/// Structured SEO metadata package. Immutable after composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoPackage {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub hashtags: Vec<String>,
    pub thumbnail_prompt: String,
}

/// Composes the full metadata package for one upload.
pub fn generate_seo_package(inputs: &SeoInputs<'_>) -> SeoPackage {
    let template = template_for_label(inputs.category);
    let keywords = KeywordSet::from_source_label(inputs.source_label);
    let phrases = KeywordPhrases::from_keywords(&keywords);

    let title = repair_title_length(select_title_candidate(
        template.title_frames,
        &phrases.primary,
    ));

    let focus_lines: Vec<String> = template
        .description_focus
        .iter()
        .map(|line| line.replace(CORE_PLACEHOLDER, &phrases.primary))
        .collect();

    let keyword_list = footer_keywords(&keywords, &phrases.primary, inputs);
    let description = compose_description(&title, &phrases.primary, &focus_lines, &keyword_list);

    let tags = keyword_list.iter().map(to_title_case).collect();
    let hashtags = keyword_list
        .iter()
        .take(HASHTAG_CAP)
        .map(|keyword| {
            let compact: String = keyword.to_lowercase().split_whitespace().collect();
            format!("#{compact}")
        })
        .collect();

    let thumbnail_prompt = compose_thumbnail_prompt(template, &title);

    SeoPackage {
        title,
        description,
        tags,
        hashtags,
        thumbnail_prompt,
    }
}

/// Phase one: substitute the core phrase into every frame and pick the
/// candidate closest to the target length. Ties go to the earlier frame.
fn select_title_candidate(frames: &[&str], core: &str) -> String {
    frames
        .iter()
        .map(|frame| frame.replace(CORE_PLACEHOLDER, core))
        .min_by_key(|candidate| candidate.chars().count().abs_diff(TITLE_TARGET_LENGTH))
        .unwrap_or_else(|| core.to_string())
}

/// Phase two: deterministically repair candidates outside the length band.
///
/// In-band titles pass through untouched. Short titles get the fixed suffix
/// and a hard cut at the band's upper bound; long titles are cut and given a
/// trailing ellipsis. The result is always at most [`TITLE_MAX_LENGTH`]
/// characters, but only the in-band case guarantees the lower bound.
fn repair_title_length(title: String) -> String {
    let length = title.chars().count();
    if (TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&length) {
        return title;
    }
    if length < TITLE_MIN_LENGTH {
        return format!("{title}{TITLE_PAD_SUFFIX}")
            .chars()
            .take(TITLE_MAX_LENGTH)
            .collect();
    }
    let mut truncated: String = title.chars().take(TITLE_TRUNCATE_LENGTH).collect();
    truncated.truncate(truncated.trim_end().len());
    truncated.push('…');
    truncated
}

/// Builds the capped keyword list backing the footer, tags and hashtags.
fn footer_keywords(keywords: &KeywordSet, core: &str, inputs: &SeoInputs<'_>) -> KeywordSet {
    let mut list = KeywordSet::with_cap(FOOTER_KEYWORD_CAP);
    if keywords.is_empty() {
        list.insert("youtube");
        list.insert("video");
        list.insert(inputs.category);
    } else {
        list.extend(keywords.iter());
    }
    list.extend(core.to_lowercase().split(' '));
    list.insert(inputs.language.to_lowercase());
    list.insert(format!("{} video", inputs.category));
    list.insert(format!("best {} tips", inputs.category));
    list.insert(inputs.monetization);
    list
}

fn compose_description(
    title: &str,
    core: &str,
    focus_lines: &[String],
    keywords: &KeywordSet,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("{title} — {core}"));
    lines.push(String::new());
    lines.extend(focus_lines.iter().cloned());
    lines.push(String::new());
    lines.push("Timestamps:".to_string());
    lines.extend(TIMESTAMP_LINES.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines.push("Key Takeaways:".to_string());
    lines.extend(focus_lines.iter().take(2).map(|line| format!("- {line}")));
    lines.push(String::new());
    lines.extend(CALL_TO_ACTION_LINES.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines.push(format!("Keywords: {}", keywords.as_slice().join(", ")));
    lines.join("\n")
}

fn compose_thumbnail_prompt(template: &CategoryTemplate, title: &str) -> String {
    let headline = title.split(':').next().unwrap_or(title);
    format!(
        "Create a high-impact thumbnail featuring {} with the text \"{}\" in bold typography. Style: HDR, ultra sharp, punchy contrast.",
        template.thumbnail_scenes[0], headline
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs<'a>(source_label: Option<&'a str>, category: &'a str) -> SeoInputs<'a> {
        SeoInputs {
            source_label,
            category,
            language: "en",
            monetization: "enabled",
        }
    }

    #[test]
    fn in_band_titles_pass_through_unchanged() {
        let title = "x".repeat(65);
        assert_eq!(repair_title_length(title.clone()), title);
        let lower = "x".repeat(60);
        assert_eq!(repair_title_length(lower.clone()), lower);
        let upper = "x".repeat(70);
        assert_eq!(repair_title_length(upper.clone()), upper);
    }

    #[test]
    fn short_titles_are_padded_with_the_fixed_suffix() {
        let repaired = repair_title_length("Quick Fix: Sourdough".to_string());
        assert_eq!(repaired, "Quick Fix: Sourdough | 2024 Guide");
    }

    #[test]
    fn padded_titles_are_hard_cut_at_the_upper_bound() {
        let title = "y".repeat(59);
        let repaired = repair_title_length(title);
        assert_eq!(repaired.chars().count(), 70);
        assert!(repaired.starts_with(&"y".repeat(59)));
    }

    #[test]
    fn long_titles_are_truncated_with_an_ellipsis() {
        let repaired = repair_title_length("z".repeat(80));
        assert_eq!(repaired.chars().count(), 67);
        assert!(repaired.ends_with('…'));
        assert!(repaired.starts_with(&"z".repeat(66)));
    }

    #[test]
    fn truncation_drops_trailing_whitespace_before_the_ellipsis() {
        let mut title = "w".repeat(65);
        title.push(' ');
        title.push_str(&"w".repeat(14));
        let repaired = repair_title_length(title);
        assert_eq!(repaired, format!("{}…", "w".repeat(65)));
    }

    #[test]
    fn selection_prefers_the_candidate_closest_to_target() {
        let frames = ["{core}", "{core} with a much longer trailing qualifier phrase"];
        let selected = select_title_candidate(&frames, "Rust Async Streams");
        assert_eq!(
            selected,
            "Rust Async Streams with a much longer trailing qualifier phrase"
        );
    }

    #[test]
    fn selection_ties_go_to_the_earlier_frame() {
        let frames = ["A: {core}", "B: {core}"];
        assert_eq!(select_title_candidate(&frames, "Tied"), "A: Tied");
    }

    #[test]
    fn titles_never_exceed_the_upper_bound() {
        let labels = [
            None,
            Some("clip.mp4"),
            Some("a-very-long-label-with-many-many-distinct-descriptive-words-attached-to-it.mov"),
            Some("https://example.com/some/deep/path/to/an/interesting-video.webm"),
        ];
        for label in labels {
            for category in ["tech", "vlog", "shorts", "gaming", "tutorial", "foo"] {
                let package = generate_seo_package(&inputs(label, category));
                assert!(
                    package.title.chars().count() <= 70,
                    "{category}: {}",
                    package.title
                );
            }
        }
    }

    #[test]
    fn empty_label_falls_back_to_the_literal_phrases() {
        let package = generate_seo_package(&inputs(None, "vlog"));
        assert_eq!(
            package.title,
            "YouTube Upload Adventure Unfiltered | 2024 Guide"
        );
        assert!(package.description.starts_with(&format!(
            "{} — YouTube Upload\n",
            package.title
        )));
        assert_eq!(
            package.hashtags,
            vec!["#youtube", "#video", "#vlog", "#upload", "#en"]
        );
        assert_eq!(package.tags[0], "Youtube");
        assert!(package.tags.contains(&"Vlog Video".to_string()));
        assert!(package.tags.contains(&"Best Vlog Tips".to_string()));
    }

    #[test]
    fn description_reproduces_the_fixed_section_layout() {
        let package = generate_seo_package(&inputs(Some("sourdough-starter-guide.mp4"), "tutorial"));
        let lines: Vec<&str> = package.description.lines().collect();

        assert!(lines[0].contains(" — Sourdough Starter Guide"));
        assert_eq!(lines[1], "");
        let timestamps = lines.iter().position(|l| *l == "Timestamps:").unwrap();
        assert_eq!(lines[timestamps + 1], "00:00 Intro");
        assert_eq!(lines[timestamps + 2], "00:45 Key Insights");
        assert_eq!(lines[timestamps + 3], "02:00 Deep Dive");
        assert_eq!(lines[timestamps + 4], "05:00 Final Thoughts");
        let takeaways = lines.iter().position(|l| *l == "Key Takeaways:").unwrap();
        assert!(lines[takeaways + 1].starts_with("- "));
        assert!(lines[takeaways + 2].starts_with("- "));
        assert!(lines.last().unwrap().starts_with("Keywords: "));
        assert!(package.description.contains("🔔 Subscribe for more: https://youtube.com"));
        assert!(package.description.contains("👍 Like & comment what you want to see next!"));
    }

    #[test]
    fn tag_and_hashtag_caps_hold() {
        let label = (0..20).map(|i| format!("kw{i}")).collect::<Vec<_>>().join("-");
        let package = generate_seo_package(&inputs(Some(&label), "tech"));
        assert!(package.tags.len() <= 15);
        assert!(package.hashtags.len() <= 5);
        for hashtag in &package.hashtags {
            assert!(hashtag.starts_with('#'));
            assert!(
                hashtag[1..].chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "{hashtag}"
            );
        }
    }

    #[test]
    fn tags_are_title_cased_in_list_order() {
        let package = generate_seo_package(&inputs(Some("drone footage reel.mp4"), "tech"));
        assert_eq!(&package.tags[..3], ["Drone", "Footage", "Reel"]);
    }

    #[test]
    fn unknown_category_uses_the_fallback_bundle() {
        let package = generate_seo_package(&inputs(Some("mystery clip.mp4"), "foo"));
        // Tech frames mention the category label only through the keyword list.
        assert!(package.tags.contains(&"Foo Video".to_string()));
        assert!(package.description.contains("best foo tips"));
    }

    #[test]
    fn thumbnail_prompt_uses_the_pre_colon_headline() {
        let package = generate_seo_package(&inputs(Some("city night drive.mp4"), "tech"));
        if let Some(headline) = package.title.split(':').next() {
            assert!(package.thumbnail_prompt.contains(&format!("\"{headline}\"")));
        }
        assert!(package
            .thumbnail_prompt
            .ends_with("Style: HDR, ultra sharp, punchy contrast."));
    }

    #[test]
    fn identical_inputs_compose_identical_packages() {
        let first = generate_seo_package(&inputs(Some("weekly sync recap.mp4"), "vlog"));
        let second = generate_seo_package(&inputs(Some("weekly sync recap.mp4"), "vlog"));
        assert_eq!(first, second);
    }
}
