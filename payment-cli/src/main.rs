//! Payment CLI
//!
//! Command-line interface for the Payment Charge API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use payment_client::PaymentClient;
use payment_types::{CreditCard, Money};

#[derive(Parser)]
#[command(name = "payment")]
#[command(author, version, about = "Payment Charge API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payment API
    #[arg(
        long,
        env = "PAYMENT_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authorize a charge
    Charge {
        /// Card number
        #[arg(long)]
        number: String,
        /// Expiration month (1-12)
        #[arg(long)]
        month: u32,
        /// Expiration year
        #[arg(long)]
        year: i32,
        /// Whole currency units
        #[arg(long)]
        units: i64,
        /// Billionths of a unit
        #[arg(long, default_value_t = 0)]
        nanos: i32,
        /// ISO 4217 currency code
        #[arg(long, default_value = "USD")]
        currency: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = PaymentClient::new(&cli.api_url);

    match cli.command {
        Commands::Charge {
            number,
            month,
            year,
            units,
            nanos,
            currency,
        } => {
            let credit_card = CreditCard {
                number,
                expiration_month: month,
                expiration_year: year,
            };
            let amount = Money::new(units, nanos, currency);

            match client.charge(credit_card, amount).await {
                Ok(resp) => println!("Charge authorized: transaction {}", resp.transaction_id),
                Err(err) => {
                    eprintln!("Charge failed: {err}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Health => {
            let healthy = client.health().await?;
            println!("API healthy: {healthy}");
        }
    }

    Ok(())
}
