//! # Feed ingestion
//! Fetch an RSS document and map it to a flat, document-ordered list of
//! [`News`]. All-or-nothing: any transport or parse failure yields a
//! [`FeedError`] and no partial items. Retries and caching are the
//! caller's concern.

pub mod http;
pub mod types;

use quick_xml::de::from_str;
use serde::Deserialize;
use time::{format_description::well_known::Rfc2822, OffsetDateTime, UtcOffset};

use crate::error::FeedError;
use crate::feed::types::FeedSource;
use crate::news::{News, DEFAULT_IMAGE_URL, FULL_TEXT_PLACEHOLDER, LINK_PLACEHOLDER};

pub use http::HttpFeedSource;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
    enclosure: Option<Enclosure>,
}

#[derive(Debug, Deserialize)]
struct Enclosure {
    #[serde(rename = "@url")]
    url: Option<String>,
}

fn parse_rfc2822_to_unix(ts: &str) -> u64 {
    OffsetDateTime::parse(ts, &Rfc2822)
        .ok()
        .map(|dt| dt.to_offset(UtcOffset::UTC).unix_timestamp())
        .and_then(|x| u64::try_from(x).ok())
        .unwrap_or(0)
}

/// Decode HTML entities, strip tags, collapse whitespace. Feed titles
/// and descriptions routinely arrive with CDATA-wrapped markup.
pub fn clean_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

// Named entities that are not XML-predefined break the deserializer,
// so rewrite the usual suspects before parsing.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}

/// Map an RSS document to news records, one per `<item>`, in document
/// order. `default_category` fills `category_name` on every record;
/// categorization itself is the caller's decision.
pub fn parse_feed(xml: &str, default_category: &str) -> Result<Vec<News>, FeedError> {
    let xml_clean = scrub_html_entities_for_xml(xml);
    let rss: Rss = from_str(&xml_clean).map_err(|e| FeedError::Parse(e.to_string()))?;

    let mut out = Vec::with_capacity(rss.channel.item.len());
    for it in rss.channel.item {
        let link = match it.link.as_deref().map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => LINK_PLACEHOLDER.to_string(),
        };
        let image_url = it
            .enclosure
            .and_then(|e| e.url)
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        out.push(News {
            title: clean_text(it.title.as_deref().unwrap_or_default()),
            short_description: clean_text(it.description.as_deref().unwrap_or_default()),
            full_text: FULL_TEXT_PLACEHOLDER.to_string(),
            link,
            image_url,
            category_name: default_category.to_string(),
            published_at: it
                .pub_date
                .as_deref()
                .map(parse_rfc2822_to_unix)
                .unwrap_or(0),
        });
    }

    Ok(out)
}

/// Fetch-then-parse over a [`FeedSource`]. One synchronous-looking call
/// from the caller's point of view; returns once, success or failure.
pub struct FeedLoader {
    source: Box<dyn FeedSource>,
    default_category: String,
}

impl FeedLoader {
    pub fn new(source: Box<dyn FeedSource>, default_category: impl Into<String>) -> Self {
        Self {
            source,
            default_category: default_category.into(),
        }
    }

    /// HTTP loader with an overall request timeout.
    pub fn from_url(
        url: impl Into<String>,
        timeout: std::time::Duration,
        default_category: impl Into<String>,
    ) -> Result<Self, FeedError> {
        Ok(Self::new(
            Box::new(HttpFeedSource::new(url, timeout)?),
            default_category,
        ))
    }

    pub async fn load(&self) -> Result<Vec<News>, FeedError> {
        let doc = self.source.fetch_document().await?;

        let t0 = std::time::Instant::now();
        let news = parse_feed(&doc, &self.default_category)?;
        let ms = t0.elapsed().as_secs_f64() * 1_000.0;

        tracing::debug!(
            source = self.source.name(),
            count = news.len(),
            parse_ms = ms,
            "feed loaded"
        );
        Ok(news)
    }
}
