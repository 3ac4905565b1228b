use anyhow::Result;
use clap::Parser;
use ngwaf_sites::api::client::NgwafClient;
use ngwaf_sites::output::csv::write_sites_csv;
use std::path::PathBuf;

/// ngwaf-sites - List NG WAF Sites
///
/// Enumerates every site registered under a Signal Sciences NG WAF corp,
/// prints them, and writes them to a CSV file.
///
/// Credentials and the corp name can be passed as flags or through the
/// NGWAF_USER_EMAIL, NGWAF_TOKEN and CORP_NAME environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// NG WAF user email
    #[arg(long, env = "NGWAF_USER_EMAIL", value_name = "EMAIL")]
    ngwaf_user_email: String,

    /// NG WAF API token
    #[arg(long, env = "NGWAF_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    ngwaf_token: String,

    /// Corporation name
    #[arg(long, env = "CORP_NAME", value_name = "CORP")]
    corp_name: String,

    /// Path to output CSV file
    #[arg(long, value_name = "PATH", default_value = "sites.csv")]
    csv_file: PathBuf,

    /// NG WAF API URL (defaults to https://dashboard.signalsciences.net/api/v0)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let client = NgwafClient::new(
        reqwest::Client::new(),
        cli.api_url,
        &cli.ngwaf_user_email,
        &cli.ngwaf_token,
    );

    let sites = client.list_all_sites(&cli.corp_name).await?;

    if sites.is_empty() {
        println!("No sites found.");
        return Ok(());
    }

    println!("Total sites retrieved: {}", sites.len());
    for site in &sites {
        println!("Name: {}, Display Name: {}", site.name, site.display_name);
    }

    write_sites_csv(&cli.csv_file, &sites)?;
    println!("Site names written to {}", cli.csv_file.display());

    Ok(())
}
