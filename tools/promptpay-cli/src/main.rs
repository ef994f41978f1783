//! PromptPay Command Line Tool
//!
//! Provides commands for working with bill-payment QR payloads:
//! - generate: Assemble a payload from merchant/transaction fields
//! - checksum: Compute the CRC-16/CCITT-FALSE of a literal string
//! - classify: Classify a recipient identifier

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use promptpay_core::validate_amount;
use promptpay_emv::{checksum_hex, classify_recipient, recipient_field, BillPayment};

#[derive(Parser)]
#[command(name = "promptpay")]
#[command(version)]
#[command(about = "PromptPay QR tool - generate, checksum, and classify payload data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a bill-payment QR payload
    #[command(about = "Assemble a bill-payment QR payload string")]
    Generate {
        /// Biller identifier (tax ID + suffix)
        #[arg(long)]
        biller_id: String,

        /// Merchant display name
        #[arg(long)]
        merchant_name: String,

        /// First reference (invoice number, customer code, ...)
        #[arg(long, default_value = "")]
        reference1: String,

        /// Second reference
        #[arg(long, default_value = "")]
        reference2: String,

        /// Transaction amount in baht
        #[arg(long)]
        amount: f64,

        /// Emit a one-time (dynamic) code instead of a reusable one
        #[arg(long)]
        onetime: bool,
    },

    /// Compute a payload checksum
    #[command(about = "Compute the CRC-16/CCITT-FALSE of a string, as 4 hex digits")]
    Checksum {
        /// The text to checksum
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Classify a recipient identifier
    #[command(about = "Classify a recipient identifier and show its encoded field")]
    Classify {
        /// The raw identifier (phone, national ID, e-wallet, account)
        #[arg(value_name = "ID")]
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            biller_id,
            merchant_name,
            reference1,
            reference2,
            amount,
            onetime,
        } => handle_generate(biller_id, merchant_name, reference1, reference2, amount, onetime),
        Commands::Checksum { text } => handle_checksum(&text),
        Commands::Classify { id } => handle_classify(&id),
    }
}

fn handle_generate(
    biller_id: String,
    merchant_name: String,
    reference1: String,
    reference2: String,
    amount: f64,
    onetime: bool,
) -> Result<()> {
    validate_amount(amount).with_context(|| format!("Amount {amount} rejected"))?;

    let payload = BillPayment {
        biller_id,
        merchant_name,
        reference1,
        reference2,
        amount,
        onetime,
    }
    .encode()
    .with_context(|| "Failed to assemble payload")?;

    println!("{}", payload);

    Ok(())
}

fn handle_checksum(text: &str) -> Result<()> {
    println!("{}", checksum_hex(text));

    Ok(())
}

fn handle_classify(id: &str) -> Result<()> {
    let kind = classify_recipient(id);
    let encoded = recipient_field(id)
        .encode()
        .with_context(|| "Failed to encode identifier field")?;

    println!("{:?}", kind);
    println!("{}", encoded);

    Ok(())
}
