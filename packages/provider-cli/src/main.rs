//! Provider directory search from the terminal.
//!
//! ```bash
//! providers search --city Austin --state TX
//! providers --api-url http://localhost:8000 health
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use provider_search::{
    ApiConfig, ProviderClient, SearchFailure, SearchField, SearchForm, SearchQuery, API_URL_ENV,
};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser)]
#[command(name = "providers")]
#[command(about = "Search the healthcare provider directory")]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides PROVIDER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one provider search and print the results
    Search(SearchArgs),

    /// Check that the backend is up
    Health,
}

/// Same seven filters as the web form. Blank values are ignored.
#[derive(Args, Debug, Default)]
struct SearchArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    organization_name: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    /// Specialty / taxonomy label
    #[arg(long)]
    taxonomy: Option<String>,
}

impl SearchArgs {
    fn into_form(self) -> SearchForm {
        let mut form = SearchForm::default();
        let values = [
            (SearchField::FirstName, self.first_name),
            (SearchField::LastName, self.last_name),
            (SearchField::OrganizationName, self.organization_name),
            (SearchField::City, self.city),
            (SearchField::State, self.state),
            (SearchField::PostalCode, self.postal_code),
            (SearchField::Taxonomy, self.taxonomy),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set(field, value);
            }
        }
        form
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ApiConfig::from_env_or(cli.api_url.as_deref());
    tracing::debug!(
        api_url = config.base_url(),
        env = API_URL_ENV,
        "Resolved API configuration"
    );
    let client = ProviderClient::new(config);

    match cli.command {
        Commands::Search(args) => search(&client, args.into_form()).await,
        Commands::Health => health(&client).await,
    }
}

async fn search(client: &ProviderClient, form: SearchForm) -> Result<()> {
    let mut query = SearchQuery::new();
    let filter = form.submit();
    let ticket = query.start(&filter);

    if let Some(view) = query.results_view() {
        println!("{}", render::results(&view).dimmed());
    }

    let outcome = client
        .search_providers(&filter)
        .await
        .map(|response| response.providers)
        .map_err(SearchFailure::from);
    query.complete(ticket, outcome);

    if let Some(failure) = query.failure() {
        bail!("{}", failure.message());
    }

    if let Some(view) = query.results_view() {
        println!("{}", render::results(&view));
    }
    Ok(())
}

async fn health(client: &ProviderClient) -> Result<()> {
    let status = client
        .health_check()
        .await
        .with_context(|| format!("Health check against {} failed", client.config().base_url()))?;

    if status.is_ok() {
        println!("{} {}", "✓".green(), status.status);
        Ok(())
    } else {
        println!("{} {}", "✗".red(), status.status);
        bail!("backend reported status {:?}", status.status)
    }
}
