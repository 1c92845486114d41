//! Cart Totals Example
//!
//! Loads a cart from a YAML file and prints its lines and totals.
//!
//! Use `-c` to choose the cart file
//! Use `-d` and `-t` to override the discount and tax rates from the file
//!
//! Run with: `cargo run --example cart_totals -- -c demos/carts/groceries.yml`
//!
//! Set `RUST_LOG=cart_pricing=trace` to see how each line was taxed.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use serde::Deserialize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use tracing_subscriber::EnvFilter;

use cart_pricing::prelude::*;

/// Arguments for the cart totals example
#[derive(Debug, Parser)]
struct Args {
    /// YAML file describing the cart
    #[clap(short, long, default_value = "demos/carts/groceries.yml")]
    cart: PathBuf,

    /// Cart discount in percent points
    #[clap(short, long)]
    discount: Option<Decimal>,

    /// Tax rate in percent points
    #[clap(short, long)]
    tax: Option<Decimal>,
}

/// Cart file layout
#[derive(Debug, Deserialize)]
struct CartFile {
    #[serde(default)]
    rates: CartRates,
    items: Vec<CartItem>,
}

/// Cart Totals Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let contents = fs::read_to_string(&args.cart)
        .with_context(|| format!("failed to read cart {}", args.cart.display()))?;

    let cart: CartFile = serde_norway::from_str(&contents)?;

    let rates = CartRates::new(
        args.discount.unwrap_or(cart.rates.discount_percent),
        args.tax.unwrap_or(cart.rates.tax_rate),
    );

    let totals = rates.totals(&cart.items)?;

    println!("{}", lines_table(&cart.items)?);
    println!("{}", totals_table(&rates, &totals));

    Ok(())
}

fn lines_table(items: &[CartItem]) -> Result<String> {
    let mut builder = Builder::default();

    builder.push_record(["", "Price", "Quantity", "Line Total", "Tax Exempt"]);

    for (index, item) in items.iter().enumerate() {
        builder.push_record([
            (index + 1).to_string(),
            item.price().to_string(),
            item.quantity().to_string(),
            item.line_total()?.to_string(),
            if item.is_tax_exempt() { "yes" } else { "no" }.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..4), Alignment::right());

    Ok(table.to_string())
}

fn totals_table(rates: &CartRates, totals: &CartTotals) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Subtotal".to_string(), totals.subtotal().to_string()]);
    builder.push_record([
        format!("Discount ({}%)", rates.discount_percent),
        format!("-{}", totals.discount()),
    ]);
    builder.push_record([
        format!("Tax ({}%)", rates.tax_rate),
        totals.tax().to_string(),
    ]);
    builder.push_record(["Total".to_string(), totals.total().to_string()]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..2), Alignment::right());

    table.to_string()
}
