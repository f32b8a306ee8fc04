#![forbid(unsafe_code)]
//! Builds a ledger from command-line payloads and prints it.

use clap::Parser;
use colored::*;
use hashledger::config::{load_config, DEFAULT_CONFIG_PATH};
use hashledger::crypto::hash_to_hex;
use hashledger::transaction::{transactions_to_string, Transaction};
use hashledger::Blockchain;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Transaction payload; each value becomes its own block
    #[arg(long = "tx", value_name = "PAYLOAD")]
    transactions: Vec<String>,
    /// Print the chain as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Re-derive every hash after building the chain
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .init();

    let mut chain = config.build_chain();
    for payload in &cli.transactions {
        chain.add_block(vec![Transaction::new(payload.as_str())])?;
    }
    info!("Chain built with {} blocks", chain.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(chain.blocks())?);
    } else {
        print_chain(&chain);
    }

    if cli.verify {
        chain.verify()?;
        println!("{}", "✅ Chain verified".bright_green());
    }

    Ok(())
}

fn print_chain(chain: &Blockchain) {
    println!("{}", "hashledger".bright_cyan().bold());
    println!("{}", "----------".bright_cyan());
    for (height, block) in chain.iter().enumerate() {
        println!();
        println!("{} {}", "Block".bright_green().underline(), height);
        println!(
            "  Previous hash: {}",
            hash_to_hex(block.prev_block_hash()).bright_white()
        );
        println!(
            "  Transactions:  {}",
            transactions_to_string(block.transactions())
        );
        println!("  Hash:          {}", block.hash_str().yellow());
    }
}
