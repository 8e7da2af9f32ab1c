//! WIREPROOF — Demo CLI
//!
//! Runs one or all of the three verification scenarios. Each scenario uses
//! real WIREPROOF components (schema sets, catalog loading, both verifier
//! strategies) against small example messages.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- person
//!   cargo run -p demo -- tree
//!   cargo run -p demo -- compare

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod scenarios;

// ── CLI definition ────────────────────────────────────────────────────────────

/// WIREPROOF — schema-driven message verification demo.
///
/// Each subcommand runs one or all of the verification scenarios,
/// demonstrating required-field, enum-domain, and nested-message checks
/// under both verifier strategies.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "WIREPROOF message verification demo",
    long_about = "Runs WIREPROOF demo scenarios showing required-field presence,\n\
                  enum-domain membership, recursive nested-message checks, and\n\
                  the equivalence of the reflective and specialized strategies."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: Person schema, reflective strategy (missing fields, bad enums).
    Person,
    /// Scenario 2: Self-recursive Node schema, specialized strategy.
    Tree,
    /// Scenario 3: TOML catalog, both strategies side by side.
    Compare,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::Person => scenarios::person::run_scenario(),
        Command::Tree => scenarios::tree::run_scenario(),
        Command::Compare => scenarios::compare::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> wireproof_contracts::error::WireproofResult<()> {
    scenarios::person::run_scenario()?;
    scenarios::tree::run_scenario()?;
    scenarios::compare::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("WIREPROOF — Schema-Driven Message Verifier");
    println!("Demo Scenarios");
    println!("==========================================");
    println!();
    println!("Verification checks per message, in field declaration order:");
    println!("  [1] Required fields must be present (message fields: present and non-empty)");
    println!("  [2] Enum fields must hold a declared integer id");
    println!("  [3] Nested message fields are verified recursively");
    println!("  First violation wins; a valid message reports no reason at all.");
    println!();
}
