//! Demo that fetches the configured feed once and prints what arrived.

use endless_news::config;
use endless_news::feed::FeedLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cfg = config::load_default()?;
    let loader =
        FeedLoader::from_url(&cfg.feed_url, cfg.request_timeout(), &cfg.default_category)?;

    let news = loader.load().await?;
    println!("News count: {}", news.len());
    for n in news.iter().take(10) {
        println!("  {}  {}", n.published_at, n.title);
    }

    println!("feed-demo done");
    Ok(())
}
