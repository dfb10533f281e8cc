use clap::{Parser, builder::styling};
use eyre::Result;
use owo_colors::OwoColorize;
use product_importer::cli::{import_products, load_database_url, load_env_file};
use std::path::PathBuf;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Import products from a CSV file into the product store
#[derive(Parser)]
#[command(name = "product-import", version, styles = STYLES)]
struct Cli {
    /// Path to import file
    file: PathBuf,

    /// Database URL to import into, overrides DATABASE_URL
    #[arg(long)]
    database: Option<String>,

    /// The dotenv file to source configuration from [default: .env, if present]
    #[arg(short, long)]
    env: Option<PathBuf>,

    /// More verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    load_env_file(cli.env.as_deref())?;

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    let title = "Product Import";
    println!();
    println!("{}", title.bright_white().bold());
    println!("{}", "=".repeat(title.len()).bright_white());
    println!();

    let database_url = load_database_url(cli.database.as_deref());
    log::info!(
        "Importing {} into {}",
        cli.file.display().bright_black(),
        database_url.bright_black()
    );

    import_products(&cli.file, &database_url).await?;

    println!();
    println!(
        "{}",
        " [OK] Successfully imported products. ".black().on_green()
    );
    println!();

    Ok(())
}
