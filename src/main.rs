use anyhow::{Context, Result};
use sdg16_news_feed::{config::Config, fetcher::ArticleFetcher, page};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so the rendered page can go to stdout)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sdg16_news_feed=info".parse()?),
        )
        .init();

    info!("Starting news feed render");

    let config = Config::from_env()?;
    let fetcher = ArticleFetcher::from_config(&config);

    let mut document = page::host_page();
    let rendered = page::initialize(&mut document, &fetcher).await?;

    if config.show_hindi {
        info!("Switching summaries to Hindi");
        let toggle = document.require_element_by_id(page::TOGGLE_ID)?;
        document.dispatch_change(toggle, true);
    }

    let html = document.to_html();
    match &config.feed_output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write feed to {}", path))?;
            info!("Wrote {} cards to {}", rendered, path);
        }
        None => print!("{}", html),
    }

    Ok(())
}
