//! quickdeliver - QuickDeliver storefront in the terminal and the browser

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quickdeliver_core::preferences::default_data_dir;
use quickdeliver_core::search::RatingThreshold;
use quickdeliver_core::{
    catalog, compute_totals, Cart, DeliveryTier, Preferences, StoreFilter, Storefront,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "quickdeliver",
    version,
    about = "QuickDeliver storefront - terminal UI, web server and catalog CLI",
    long_about = "Browse stores, fill a cart, check out and track orders against a mock catalog.\n\
                  \n\
                  Examples:\n\
                    quickdeliver                          # Run TUI (default)\n\
                    quickdeliver --screen cart            # Start the TUI on the cart\n\
                    quickdeliver web --port 3000          # Serve API + frontend if built\n\
                    quickdeliver stores --min-rating 4.8  # List stores\n\
                    quickdeliver search pizza             # Search stores\n\
                    quickdeliver quote --express          # Price the demo cart\n\
                    quickdeliver orders --json            # Order history as JSON\n\
                  \n\
                  Environment Variables:\n\
                    QUICKDELIVER_DATA_DIR                 # Preferences and log location\n\
                    QUICKDELIVER_NO_COLOR                 # Disable colors\n\
                    QUICKDELIVER_LOG                      # Log filter (e.g. debug)\n\
                    QUICKDELIVER_PORT                     # Web server port"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Initial TUI screen (unknown ids fall back to home)
    #[arg(long, global = true)]
    screen: Option<String>,

    /// Disable colors in the TUI and tables
    #[arg(long, global = true, env = "QUICKDELIVER_NO_COLOR")]
    no_color: bool,

    /// Directory for preferences and logs (default: <config dir>/quickdeliver)
    #[arg(long, global = true, env = "QUICKDELIVER_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the terminal storefront (default)
    Tui,
    /// Run the web server
    Web {
        /// Port for web server
        #[arg(long, env = "QUICKDELIVER_PORT", default_value = "3000")]
        port: u16,
        /// Trunk build to serve
        #[arg(long, default_value = "crates/quickdeliver-web/dist")]
        static_dir: PathBuf,
    },
    /// List stores
    Stores {
        /// Category filter, e.g. Groceries
        #[arg(long, short = 'c')]
        category: Option<String>,
        /// Minimum rating, e.g. 4.5 or 4.5+
        #[arg(long, short = 'r')]
        min_rating: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search stores by name or category
    Search {
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Price the demo cart
    Quote {
        /// Use express delivery instead of the saved default tier
        #[arg(long)]
        express: bool,
        /// Discount in dollars, e.g. 2.50
        #[arg(long, default_value = "0")]
        discount: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show order history
    Orders {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir().context("Could not determine data directory")?,
    };
    let mode = cli.mode.unwrap_or(Mode::Tui);
    init_logging(matches!(mode, Mode::Tui), &data_dir)?;

    let no_color = cli.no_color;

    match mode {
        Mode::Tui => run_tui(data_dir, cli.screen, no_color).await?,
        Mode::Web { port, static_dir } => quickdeliver_web::run(port, Some(static_dir)).await?,
        Mode::Stores {
            category,
            min_rating,
            json,
        } => run_stores(category, min_rating, json, no_color)?,
        Mode::Search { query, json } => run_search(query, json, no_color)?,
        Mode::Quote {
            express,
            discount,
            json,
        } => run_quote(&data_dir, express, &discount, json, no_color)?,
        Mode::Orders { json } => {
            println!("{}", cli::format_order_table(catalog::orders(), json, no_color));
        }
    }

    Ok(())
}

/// Log to `<data_dir>/quickdeliver.log` under the TUI, stderr otherwise
fn init_logging(to_file: bool, data_dir: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_env("QUICKDELIVER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if to_file {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;
        let path = data_dir.join("quickdeliver.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

async fn run_tui(data_dir: PathBuf, screen: Option<String>, no_color: bool) -> Result<()> {
    let preferences = Preferences::load(&data_dir);
    let mut storefront = Storefront::with_preferences(preferences);
    if let Some(id) = screen {
        storefront.transition_to(&id, None);
    }
    info!(data_dir = %data_dir.display(), "starting tui");

    tokio::task::spawn_blocking(move || quickdeliver_tui::run(storefront, Some(data_dir), no_color))
        .await
        .context("TUI task panicked")?
}

fn run_stores(
    category: Option<String>,
    min_rating: Option<String>,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let mut filter = StoreFilter::default();
    filter.category = category;
    if let Some(min) = min_rating {
        filter.min_rating = min
            .parse::<RatingThreshold>()
            .map_err(cli::CliError::from)?;
    }

    println!("{}", cli::format_store_table(&filter.run(), json, no_color));
    Ok(())
}

fn run_search(query: String, json: bool, no_color: bool) -> Result<()> {
    let results = StoreFilter::with_query(query.as_str()).run();

    if results.is_empty() {
        return Err(cli::CliError::NoResults {
            query,
            scanned: catalog::stores().len(),
        }
        .into());
    }

    println!("{}", cli::format_store_table(&results, json, no_color));

    if !json {
        eprintln!("\n{} results from {} stores", results.len(), catalog::stores().len());
    }
    Ok(())
}

fn run_quote(data_dir: &Path, express: bool, discount: &str, json: bool, no_color: bool) -> Result<()> {
    let tier = if express {
        DeliveryTier::Express
    } else {
        Preferences::load(data_dir).default_tier
    };
    let discount = cli::parse_discount(discount)?;

    let cart = Cart::demo();
    let totals = compute_totals(cart.items(), tier, discount);
    println!("{}", cli::format_quote(cart.items(), &totals, json, no_color));
    Ok(())
}
