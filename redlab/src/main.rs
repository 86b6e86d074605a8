use anyhow::{anyhow, Context, Result};
use clap::Parser;

use redlab::once::{self, OutputFormat};
use redlab::settings::Settings;
use redlab::{logging, App};
use redlab_api::{Client, PostQuery};

#[derive(Parser)]
#[command(name = "redlab")]
#[command(version)]
#[command(about = "Terminal client for the redlab posts API")]
struct Cli {
    /// Run one flow and print the result instead of starting the TUI
    #[arg(long)]
    once: bool,

    /// Output format in --once mode
    #[arg(long, default_value = "json", value_parser = ["json", "jsonl"])]
    output: String,

    /// Subreddit to fetch posts from
    #[arg(long, default_value = "technology")]
    subreddit: String,

    /// Maximum number of posts to request
    #[arg(long, default_value_t = 5)]
    limit: u32,

    /// Server URL, overriding configuration
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::new().context("failed to load configuration")?;
    let settings = Settings {
        server_url: cli.server_url.unwrap_or(settings.server_url),
    };
    settings.validate().map_err(|e| anyhow!(e))?;

    let api_client = Client::builder()
        .base_url(&settings.server_url)
        .build()
        .context("failed to build API client")?;
    let query = PostQuery::new(cli.subreddit, cli.limit);

    if cli.once {
        logging::init_stderr_logging();
        let format = match cli.output.as_str() {
            "jsonl" => OutputFormat::Jsonl,
            _ => OutputFormat::Json,
        };
        match once::run_once(&api_client, &query, format).await {
            Ok(rendered) => {
                if !rendered.is_empty() {
                    println!("{rendered}");
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    App::new(api_client, query).run().await
}
