//! # Vela POS Terminal Front End
//!
//! Drives one checkout transaction against the demo catalog.
//!
//! ## Usage
//!
//! ```bash
//! # Default demo order: Alice ($2500.00) buys 1 Laptop + 2 Smartphones
//! vela-pos
//!
//! # Pick the order and the wallet
//! vela-pos --customer Bob --balance 150.00 --add Book:2 --add Cheese
//!
//! # Structured output instead of the register tape
//! vela-pos --json
//!
//! # See what is on the shelves
//! vela-pos --list
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (RUST_LOG override, default INFO)
//! 2. Seed the in-memory demo catalog
//! 3. Build customer and cart from arguments
//! 4. Run the checkout through vela-core
//! 5. Render the receipt (or JSON) - all formatting happens HERE,
//!    the core only returns structured data

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vela_core::{Cart, CheckoutProcessor, Customer, Money, PricingEngine};

mod demo;
mod render;

/// The default demo order: the classic "Alice buys a laptop and two
/// smartphones" transaction.
const DEFAULT_ORDER: &[&str] = &["Laptop:1", "Smartphone:2"];

#[derive(Parser)]
#[command(name = "vela-pos")]
#[command(author, version, about = "Vela POS - checkout demo")]
struct Cli {
    /// Customer name
    #[arg(long, default_value = "Alice")]
    customer: String,

    /// Opening balance in dollars (e.g. 2500 or 2500.50)
    #[arg(long, default_value = "2500.00")]
    balance: String,

    /// Item to add as NAME or NAME:QTY; repeatable.
    /// Defaults to the demo order when omitted.
    #[arg(long = "add", value_name = "NAME[:QTY]")]
    add: Vec<String>,

    /// Flat shipping fee per shippable unit, in dollars
    #[arg(long, value_name = "DOLLARS")]
    shipping_fee: Option<String>,

    /// Print the catalog and exit
    #[arg(long)]
    list: bool,

    /// Emit the structured receipt as JSON instead of the register tape
    #[arg(long)]
    json: bool,
}

fn main() {
    // Initialize tracing: RUST_LOG overrides, default INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("checkout failed: {e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = demo::demo_catalog()?;

    if cli.list {
        print!("{}", render::render_catalog(&catalog));
        return Ok(());
    }

    let balance = parse_money(&cli.balance)?;
    let mut customer = Customer::new(cli.customer.as_str(), balance)?;
    info!(customer = %customer.name(), balance = %customer.balance(), "customer ready");

    let order: Vec<String> = if cli.add.is_empty() {
        DEFAULT_ORDER.iter().map(|s| s.to_string()).collect()
    } else {
        cli.add.clone()
    };

    let mut cart = Cart::new();
    for spec in &order {
        let (name, quantity) = parse_add_spec(spec)?;
        cart.add(&catalog, &name, quantity)?;
        info!(product = %name, quantity, "added to cart");
    }

    let pricing = match &cli.shipping_fee {
        Some(fee) => PricingEngine::with_flat_fee(parse_money(fee)?),
        None => PricingEngine::new(),
    };

    let receipt = CheckoutProcessor::with_pricing(pricing).process(
        &mut catalog,
        &mut customer,
        &cart,
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        print!("{}", render::render_receipt(&receipt));
    }

    Ok(())
}

/// Parses a dollar amount like `2000`, `2000.5`, or `$19.99` into Money.
fn parse_money(input: &str) -> Result<Money, String> {
    let input = input.trim().trim_start_matches('$');
    let (major, minor) = match input.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (input, ""),
    };

    let major: i64 = major
        .parse()
        .map_err(|_| format!("invalid amount: {input}"))?;
    if major < 0 {
        return Err(format!("amount must not be negative: {input}"));
    }

    if !minor.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("invalid amount: {input}"));
    }
    let minor: i64 = match minor.len() {
        0 => 0,
        1 => minor.parse::<i64>().map_err(|_| format!("invalid amount: {input}"))? * 10,
        2 => minor.parse().map_err(|_| format!("invalid amount: {input}"))?,
        _ => return Err(format!("at most two decimal places: {input}")),
    };

    Ok(Money::from_major_minor(major, minor))
}

/// Parses an `--add` spec: `NAME` (quantity 1) or `NAME:QTY`.
fn parse_add_spec(spec: &str) -> Result<(String, i64), String> {
    match spec.rsplit_once(':') {
        Some((name, qty)) => {
            let quantity: i64 = qty
                .trim()
                .parse()
                .map_err(|_| format!("invalid quantity in '{spec}'"))?;
            Ok((name.trim().to_string(), quantity))
        }
        None => Ok((spec.trim().to_string(), 1)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
