mod output;
mod pipeline;

use std::path::PathBuf;

use airpulse_core::AppConfig;
use airpulse_sentiment::{classify_comment, GeminiClient};
use airpulse_twitter::TwitterClient;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "airpulse")]
#[command(about = "Sentiment of replies to airport brand mentions on Twitter/X")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch mentions, classify their replies and write the CSV (default)
    Run {
        /// Search query for mentions (overrides TWITTER_QUERY)
        #[arg(long)]
        query: Option<String>,

        /// Mentions to fetch; raised to at least 10 (overrides MAX_MENTIONS_TO_FETCH)
        #[arg(long)]
        max_mentions: Option<u32>,

        /// Replies to fetch per mention; raised to at least 10 (overrides MAX_COMMENTS_PER_MENTION)
        #[arg(long)]
        max_comments: Option<u32>,

        /// Output CSV path (overrides AIRPULSE_OUTPUT_PATH)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Classify a single piece of text and print its sentiment label
    Classify {
        /// Text to classify
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = airpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Run {
            query,
            max_mentions,
            max_comments,
            output,
        }) => {
            let config = config.with_overrides(query, max_mentions, max_comments, output);
            run(&config).await
        }
        None => run(&config).await,
        Some(Commands::Classify { text }) => classify(&config, &text).await,
    }
}

async fn run(config: &AppConfig) -> anyhow::Result<()> {
    tracing::info!(?config, "starting mention sentiment analysis");

    let twitter = TwitterClient::with_base_url(
        &config.twitter_bearer_token,
        config.request_timeout_secs,
        &config.twitter_base_url,
    )?;
    let gemini = build_gemini(config)?;

    let report = pipeline::run_pipeline(&twitter, &gemini, config, std::io::stdout()).await;
    println!("{}", report.summary());
    Ok(())
}

async fn classify(config: &AppConfig, text: &str) -> anyhow::Result<()> {
    let gemini = build_gemini(config)?;
    let label = classify_comment(&gemini, "cli", text).await;
    println!("{label}");
    Ok(())
}

fn build_gemini(config: &AppConfig) -> anyhow::Result<GeminiClient> {
    let client = GeminiClient::with_base_url(
        &config.gemini_api_key,
        &config.gemini_model,
        config.request_timeout_secs,
        &config.gemini_base_url,
    )?;
    tracing::info!(model = client.model(), "gemini classifier initialized");
    Ok(client)
}

#[cfg(test)]
mod tests;
