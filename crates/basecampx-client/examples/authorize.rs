//! Walks through the whole flow: authorize, exchange the code, pick the
//! Basecamp Next account and list its projects.
//!
//! ```text
//! cargo run -p basecampx-client --example authorize -- \
//!     --client-id ID --client-secret SECRET \
//!     --redirect-uri https://example.com/callback \
//!     --user-agent "MyApp (me@example.com)"
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use basecampx_client::BasecampClient;
use basecampx_oauth::{Authorizer, Credentials};
use clap::Parser;

/// Authorize against Basecamp and list projects.
#[derive(Parser)]
#[command(name = "authorize")]
struct Cli {
    #[arg(long)]
    client_id: String,

    #[arg(long)]
    client_secret: String,

    #[arg(long)]
    redirect_uri: String,

    /// Application name and contact, sent as User-Agent
    #[arg(long)]
    user_agent: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "basecampx_client=debug,basecampx_oauth=debug,info"
    } else {
        "basecampx_client=info,basecampx_oauth=info,warn"
    };
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let authorizer = Authorizer::new(Credentials::new(
        cli.client_id,
        cli.client_secret,
        cli.redirect_uri,
    ));

    println!("Open this URL in your browser:");
    println!();
    println!("  {}", authorizer.authorize_url());
    println!();
    print!("code> ");
    std::io::stdout().flush()?;

    let mut code = String::new();
    std::io::stdin().read_line(&mut code)?;
    let code = code.trim();
    if code.is_empty() {
        println!("No code provided, aborting.");
        return Ok(());
    }

    let token = authorizer
        .access_token(code)
        .await
        .context("token exchange failed")?;

    let launchpad = BasecampClient::new(&token.access_token, &cli.user_agent, None)?;
    let accounts = launchpad.accounts().await?;
    let account = accounts
        .iter()
        .find(|a| a.product == "bcx")
        .context("no Basecamp Next account for this user")?;
    println!("Account: {} ({})", account.name, account.id);

    let client = BasecampClient::new(&token.access_token, &cli.user_agent, Some(account.id))?;
    let projects = client.projects().list().await?;
    for project in projects.as_array().into_iter().flatten() {
        println!("  {:>10}  {}", project["id"], project["name"].as_str().unwrap_or(""));
    }

    Ok(())
}
