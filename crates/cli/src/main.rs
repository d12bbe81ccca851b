use clap::{Parser, Subcommand};

use opds_shelf_core::config::{config_path, load_config, settings_from_config};
use opds_shelf_core::feed::FeedPayload;
use opds_shelf_core::normalize::normalize;
use opds_shelf_core::render::render;
use opds_shelf_core::settings::{FeedKind, PluginSettings};
use opds_shelf_core::view::BookView;

#[derive(Parser)]
#[command(name = "opds-shelf")]
#[command(about = "Render OPDS book feeds as e-ink widget markup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a feed document to widget markup
    Render {
        /// Feed document (OPDS Atom XML or JSON)
        #[arg(required = true)]
        input: String,

        /// Plugin settings as a custom-fields JSON file
        #[arg(long)]
        settings: Option<String>,

        /// Catalog base URL, no trailing slash (overrides settings/config)
        #[arg(long)]
        server_url: Option<String>,

        /// Shelf to label the page with (hot, new, discover)
        #[arg(long)]
        feed_kind: Option<String>,
    },

    /// Show the normalized book views for a feed document
    Books {
        /// Feed document (OPDS Atom XML or JSON)
        #[arg(required = true)]
        input: String,

        /// Plugin settings as a custom-fields JSON file
        #[arg(long)]
        settings: Option<String>,

        /// Catalog base URL, no trailing slash (overrides settings/config)
        #[arg(long)]
        server_url: Option<String>,

        /// Shelf to label the page with (hot, new, discover)
        #[arg(long)]
        feed_kind: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let result = match &cli.command {
        Commands::Render {
            input,
            settings,
            server_url,
            feed_kind,
        } => run_render(
            input,
            settings.as_deref(),
            server_url.as_deref(),
            feed_kind.as_deref(),
            cli.json,
        ),
        Commands::Books {
            input,
            settings,
            server_url,
            feed_kind,
        } => run_books(
            input,
            settings.as_deref(),
            server_url.as_deref(),
            feed_kind.as_deref(),
            cli.json,
        ),
        Commands::Config { action } => run_config(action, cli.json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Settings precedence: custom-fields file if given, else the config file,
/// then individual flag overrides on top.
fn resolve_settings(
    settings_file: Option<&str>,
    server_url: Option<&str>,
    feed_kind: Option<&str>,
) -> Result<PluginSettings, Box<dyn std::error::Error + Send + Sync>> {
    let mut settings = match settings_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            PluginSettings::from_custom_fields(&content)?
        }
        None => settings_from_config(&load_config()),
    };
    if let Some(url) = server_url {
        settings.server_url = url.to_string();
    }
    if let Some(kind) = feed_kind {
        settings.feed = FeedKind::parse(kind);
    }
    Ok(settings)
}

fn load_payload(input: &str) -> Result<FeedPayload, Box<dyn std::error::Error + Send + Sync>> {
    let content = std::fs::read_to_string(input)
        .map_err(|e| format!("Input file not found or unreadable: {}: {}", input, e))?;
    Ok(FeedPayload::from_str_detect(&content)?)
}

fn run_render(
    input: &str,
    settings_file: Option<&str>,
    server_url: Option<&str>,
    feed_kind: Option<&str>,
    json: bool,
) -> CliResult {
    let settings = resolve_settings(settings_file, server_url, feed_kind)?;
    let payload = load_payload(input)?;
    let markup = render(&payload, &settings);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "markup": markup }))?
        );
    } else {
        print!("{}", markup);
    }
    Ok(())
}

fn run_books(
    input: &str,
    settings_file: Option<&str>,
    server_url: Option<&str>,
    feed_kind: Option<&str>,
    json: bool,
) -> CliResult {
    let settings = resolve_settings(settings_file, server_url, feed_kind)?;
    let payload = load_payload(input)?;
    let books: Vec<BookView> = normalize(&payload)
        .into_iter()
        .map(|entry| opds_shelf_core::format::format(entry, &settings))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else {
        for book in &books {
            println!(
                "{} | {} | {}",
                book.title,
                book.author_line,
                book.cover.url().unwrap_or("(no cover)")
            );
        }
    }
    Ok(())
}

fn run_config(action: &ConfigAction, json: bool) -> CliResult {
    match action {
        ConfigAction::Show => {
            let cfg = load_config();
            if json {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else {
                match config_path() {
                    Some(p) => println!("Config path: {}", p.display()),
                    None => println!("Config path: (no config directory)"),
                }
                println!("{}", toml::to_string_pretty(&cfg)?);
            }
        }
    }
    Ok(())
}
