//! news.rs: the immutable article record produced by the feed parser.
//!
//! All text fields are non-null by construction; empty strings are fine.
//! `published_at` is unix seconds, 0 when the feed gave no usable date.

use serde::{Deserialize, Serialize};

/// Shown until full-article fetching exists (the loader never fetches it).
pub const FULL_TEXT_PLACEHOLDER: &str = "Full text is unavailable now.";

/// Used when an item carries no `<link>`.
pub const LINK_PLACEHOLDER: &str = "Link is unavailable now.";

/// Fallback illustration when an item has no enclosure image.
pub const DEFAULT_IMAGE_URL: &str =
    "http://scoopak.com/wp-content/uploads/2013/06/free-hd-natural-wallpapers-download-for-pc.jpg";

/// One parsed article. Created by the parser (or hand-built in tests),
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub title: String,
    pub short_description: String,
    pub full_text: String,
    pub link: String,
    pub image_url: String,
    /// Foreign reference by name; grouping matches this against
    /// `Category::name` exactly.
    pub category_name: String,
    /// Unix seconds; 0 when the pubDate was absent or unparsable.
    pub published_at: u64,
}

impl News {
    /// Convenience constructor for test/demo paths: everything the feed
    /// would not supply is filled with the placeholders.
    pub fn with_placeholders(
        title: impl Into<String>,
        short_description: impl Into<String>,
        category_name: impl Into<String>,
        published_at: u64,
    ) -> Self {
        Self {
            title: title.into(),
            short_description: short_description.into(),
            full_text: FULL_TEXT_PLACEHOLDER.to_string(),
            link: LINK_PLACEHOLDER.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            category_name: category_name.into(),
            published_at,
        }
    }
}
