// tests/feed_load.rs
use async_trait::async_trait;
use endless_news::feed::types::FeedSource;
use endless_news::feed::FeedLoader;
use endless_news::FeedError;
use std::fs;

struct FixtureSource(String);

#[async_trait]
impl FeedSource for FixtureSource {
    async fn fetch_document(&self) -> Result<String, FeedError> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &str {
        "fixture"
    }
}

struct FailingSource;

#[async_trait]
impl FeedSource for FailingSource {
    async fn fetch_document(&self) -> Result<String, FeedError> {
        Err(FeedError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }
    fn name(&self) -> &str {
        "failing"
    }
}

#[tokio::test]
async fn load_runs_fetch_then_parse() {
    let xml = fs::read_to_string("tests/fixtures/vesti_rss.xml").expect("fixture");
    let loader = FeedLoader::new(Box::new(FixtureSource(xml)), "Вести");

    let news = loader.load().await.expect("ok");
    assert_eq!(news.len(), 3);
    assert!(news.iter().all(|n| n.category_name == "Вести"));
}

#[tokio::test]
async fn transport_failure_surfaces_and_yields_nothing() {
    let loader = FeedLoader::new(Box::new(FailingSource), "");
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, FeedError::Status(s) if s.as_u16() == 503));
}

#[tokio::test]
async fn malformed_body_surfaces_as_parse_error() {
    let loader = FeedLoader::new(
        Box::new(FixtureSource("<rss><channel><item>".to_string())),
        "",
    );
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, FeedError::Parse(_)), "got {err:?}");
}
