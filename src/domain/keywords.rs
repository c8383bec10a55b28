//! Keyword extraction from media source labels.
//!
//! A single capped, order-preserving, deduplicated set backs the keyword,
//! tag and hashtag outputs so they can never diverge in content space.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of tokens extracted from a source label.
pub const SOURCE_KEYWORD_CAP: usize = 12;
/// Maximum number of entries in the description footer keyword list.
pub const FOOTER_KEYWORD_CAP: usize = 15;

/// Literal phrase substituted into templates when no keywords survive.
pub const FALLBACK_CORE_PHRASE: &str = "YouTube Upload";

static URL_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://").expect("valid scheme regex"));
static FILE_EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[a-zA-Z0-9]+$").expect("valid extension regex"));

/// Ordered set of unique tokens with a fixed capacity.
///
/// Insertion order is first-occurrence order; inserts past the cap and
/// duplicate or empty tokens are silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    entries: Vec<String>,
    cap: usize,
}

impl KeywordSet {
    /// Creates an empty set holding at most `cap` entries.
    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Inserts a token, returning whether it was kept.
    pub fn insert<S: Into<String>>(&mut self, token: S) -> bool {
        let token = token.into();
        if token.is_empty()
            || self.entries.len() >= self.cap
            || self.entries.iter().any(|existing| *existing == token)
        {
            return false;
        }
        self.entries.push(token);
        true
    }

    /// Inserts every token from `iter`, preserving first-seen order.
    pub fn extend<I, S>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in iter {
            self.insert(token);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Borrow the entries as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Consume the set returning the ordered entries.
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }

    /// Extracts keywords from a filename or URL.
    ///
    /// URL schemes, hyphens, underscores and a single trailing file extension
    /// are stripped; every other non-alphanumeric character becomes a space.
    /// Tokens are lowercased, deduplicated in first-seen order and capped at
    /// [`SOURCE_KEYWORD_CAP`]. Never fails; blank input yields an empty set.
    pub fn from_source_label(source: Option<&str>) -> Self {
        let mut keywords = Self::with_cap(SOURCE_KEYWORD_CAP);
        let Some(source) = source else {
            return keywords;
        };

        let cleaned = URL_SCHEME_RE.replace_all(source, " ");
        let cleaned = cleaned.replace(['-', '_'], " ");
        let cleaned = FILE_EXTENSION_RE.replace(&cleaned, "");
        let cleaned: String = cleaned
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c.is_whitespace() {
                    c.to_ascii_lowercase()
                } else {
                    ' '
                }
            })
            .collect();

        keywords.extend(cleaned.split_whitespace());
        keywords
    }
}

/// Core phrases derived from leading keywords, substituted into template
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordPhrases {
    /// Title-Case join of the first three keywords, or
    /// [`FALLBACK_CORE_PHRASE`] when the set is empty.
    pub primary: String,
    /// Title-Case join of keywords four through six, when present.
    pub secondary: Option<String>,
}

impl KeywordPhrases {
    pub fn from_keywords(keywords: &KeywordSet) -> Self {
        if keywords.is_empty() {
            return Self {
                primary: FALLBACK_CORE_PHRASE.to_string(),
                secondary: None,
            };
        }
        let phrase = |skip: usize| {
            let joined = keywords
                .iter()
                .skip(skip)
                .take(3)
                .collect::<Vec<_>>()
                .join(" ");
            to_title_case(&joined)
        };
        let secondary = phrase(3);
        Self {
            primary: phrase(0),
            secondary: (!secondary.is_empty()).then_some(secondary),
        }
    }
}

/// Uppercases the first character of each space-separated word.
pub fn to_title_case(input: &str) -> String {
    input
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
