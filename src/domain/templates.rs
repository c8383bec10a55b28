//! Static template bundles backing the metadata composers.
//!
//! One immutable bundle per category; unknown labels resolve to the tech
//! bundle instead of failing. That silent fallback is a deliberate policy:
//! category strings reaching the registry may bypass form validation (e.g.
//! library callers), and metadata generation must still succeed.

use crate::domain::types::Category;

/// Placeholder substituted with the core phrase in title frames and
/// description focus lines.
pub const CORE_PLACEHOLDER: &str = "{core}";

/// Fixed set of text fragments associated with one content category.
///
/// Every sequence holds at least one entry; `classification_code` is the
/// hosting platform's numeric content-category identifier.
#[derive(Debug)]
pub struct CategoryTemplate {
    pub title_frames: &'static [&'static str],
    pub description_focus: &'static [&'static str],
    pub thumbnail_scenes: &'static [&'static str],
    pub classification_code: &'static str,
}

static TECH: CategoryTemplate = CategoryTemplate {
    title_frames: &[
        "Next-Gen {core} Breakdown",
        "Mastering {core} in Minutes",
        "Pro Guide: {core} Explained",
        "{core}: Tips, Tools & Workflows",
    ],
    description_focus: &[
        "Stay ahead with the latest {core} strategies, best practices, and hands-on demos.",
        "We cover must-know updates, performance tweaks, and insider workflows to keep you sharp.",
        "Learn how to deploy, optimize, and scale with a practical walkthrough using real-world examples.",
    ],
    thumbnail_scenes: &[
        "futuristic workstation, neon accents, holographic UI elements",
        "bold tech creator pointing at floating diagrams and schematics",
        "sleek gadget close-up with dramatic lighting and energy trails",
    ],
    classification_code: "28",
};

static VLOG: CategoryTemplate = CategoryTemplate {
    title_frames: &[
        "Day in the Life: {core}",
        "Behind the Scenes: {core}",
        "{core} Adventure Unfiltered",
        "Real Talk: {core} Moments",
    ],
    description_focus: &[
        "Join me as I dive into {core} and share raw, unscripted moments from the journey.",
        "Expect candid highlights, honest reflections, and practical takeaways from today’s experience.",
        "Stay until the end for surprise lessons, personal wins, and what’s coming next.",
    ],
    thumbnail_scenes: &[
        "cinematic cityscape background, creator smiling mid-action",
        "warm lifestyle aesthetic with candid snapshots and polaroids",
        "dynamic travel shot with motion blur and bold text overlays",
    ],
    classification_code: "22",
};

static SHORTS: CategoryTemplate = CategoryTemplate {
    title_frames: &[
        "60s {core} Challenge",
        "{core} in 30 Seconds",
        "Quick Fix: {core}",
        "Rapid Fire Tips: {core}",
    ],
    description_focus: &[
        "A punchy, fast-paced breakdown of {core} packed into bite-sized insights.",
        "Perfect for creators on the move—save this short for quick reference anytime.",
        "Drop a comment with what you want covered next and share with someone who needs this.",
    ],
    thumbnail_scenes: &[
        "bold text overlay with countdown timer vibe, vibrant gradients",
        "creator mid-motion with exaggerated expression and emojis",
        "split-screen comparison before vs after with punchy colors",
    ],
    classification_code: "24",
};

static GAMING: CategoryTemplate = CategoryTemplate {
    title_frames: &[
        "Winning {core} Strategy Revealed",
        "Ultimate {core} Guide",
        "{core} Gameplay Breakdown",
        "Insane {core} Moments You Need to See",
    ],
    description_focus: &[
        "Walk through the key plays, clutch moments, and tactical decisions behind this {core} run.",
        "Get the loadouts, builds, and pro-level moves that helped secure the win.",
        "Drop your favorite moment in the comments and share how you would play it differently.",
    ],
    thumbnail_scenes: &[
        "intense action scene with character in spotlight, motion blur effects",
        "dramatic contrast lighting with bold stat overlays",
        "esports stage energy, neon streaks, triumphant pose",
    ],
    classification_code: "20",
};

static TUTORIAL: CategoryTemplate = CategoryTemplate {
    title_frames: &[
        "Step-by-Step {core} Tutorial",
        "Beginner to Pro: {core}",
        "{core} Complete Walkthrough",
        "Everything You Need to Know About {core}",
    ],
    description_focus: &[
        "A structured, beginner-friendly tutorial covering every step of {core}.",
        "We walk through tools, common mistakes, and expert shortcuts to speed up your progress.",
        "Practice alongside the timestamps and download the resources linked below.",
    ],
    thumbnail_scenes: &[
        "clean layout with numbered steps, bold highlight colors",
        "teacher-style pose in front of whiteboard with diagrams",
        "close-up on hands demonstrating steps with crisp lighting",
    ],
    classification_code: "27",
};

impl Category {
    /// Template bundle for this category.
    pub fn template(self) -> &'static CategoryTemplate {
        match self {
            Category::Tech => &TECH,
            Category::Vlog => &VLOG,
            Category::Shorts => &SHORTS,
            Category::Gaming => &GAMING,
            Category::Tutorial => &TUTORIAL,
        }
    }
}

/// Resolves a raw category label, falling back to the tech bundle for
/// unknown labels.
pub fn template_for_label(label: &str) -> &'static CategoryTemplate {
    Category::try_from(label)
        .map(Category::template)
        .unwrap_or(&TECH)
}
