use clap::Parser;
use std::path::PathBuf;

use billing_desk::application::dto::OutputFormat;
use billing_desk::billing::domain::{BillId, CustomerId};

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

fn parse_bill_id(s: &str) -> Result<BillId, String> {
    BillId::parse(s).map_err(|e| e.to_string())
}

fn parse_customer_id(s: &str) -> Result<CustomerId, String> {
    CustomerId::parse(s).map_err(|e| e.to_string())
}

/// Browse customers, products and bills of a billing back end
#[derive(Parser, Debug)]
#[command(name = "billing-desk")]
#[command(version)]
#[command(
    about = "Browse customers, products and bills of a billing back end",
    long_about = None
)]
pub struct Args {
    /// Route to open: /customers, /products or /bills/<customerId>
    #[arg(value_name = "PATH", default_value = "/")]
    pub path: String,

    /// API base host (overrides the config file)
    #[arg(short = 'H', long, value_name = "URL")]
    pub host: Option<String>,

    /// Output format: json or markdown (default: markdown)
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (default: ./billing-desk.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fetch one full bill instead of opening a route
    #[arg(long, value_name = "ID", value_parser = parse_bill_id, conflicts_with = "open_bills")]
    pub bill: Option<BillId>,

    /// Load the customer list, then open the bills of this customer
    #[arg(long, value_name = "CUSTOMER_ID", value_parser = parse_customer_id)]
    pub open_bills: Option<CustomerId>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
