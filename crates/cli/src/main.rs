use anyhow::{anyhow, Result};
use apphub_cli::{execute, Cli, CommandContext, Config, Language};
use apphub_core::{ApplicationService, AuthService};
use apphub_store::Store;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing; default to WARN so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let lang = match &cli.lang {
        Some(value) => {
            Language::parse(value).ok_or_else(|| anyhow!("Unsupported language: {value}"))?
        }
        None => Language::parse(&config.ui.language).unwrap_or_default(),
    };

    tracing::info!("AppReferenceHub starting...");
    tracing::info!("Catalog: {}", config.storage.catalog_path.display());
    tracing::info!("Language: {}", lang.as_str());

    // Create parent directory for the catalog if it doesn't exist
    if let Some(parent) = config.storage.catalog_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Initialize the catalog store and seed it on first use
    let store = Store::open(&config.storage.catalog_path);
    store.initialize()?;

    let service = ApplicationService::new(store);
    let auth = AuthService::new(
        &config.storage.session_path,
        &config.admin.email,
        &config.admin.password,
    );

    let ctx = CommandContext {
        service,
        auth,
        lang,
    };
    let output = execute(&ctx, cli.command)?;
    println!("{output}");

    Ok(())
}
