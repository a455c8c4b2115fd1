use anyhow::Result;
use clap::Parser;
use web_fetch::{fetch_content, validate_url, FetchError, DEFAULT_TIMEOUT};

/// Fetch and extract clean content from a URL via the Jina Reader API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to fetch and extract content from
    #[arg(short, long)]
    url: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT)]
    timeout: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Reject bad input before any network traffic
    if !validate_url(&cli.url) {
        return Err(FetchError::InvalidUrl(cli.url).into());
    }

    // The body is the program output; stdout carries nothing else
    let body = fetch_content(&cli.url, cli.timeout)?;
    println!("{}", body);

    Ok(())
}
