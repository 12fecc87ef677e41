//! Command-line front end for the signature and avalanche demonstrations.
//!
//! A thin presentation layer: every number printed here comes from the
//! library, this file only parses flags and lays the results out.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cryptolab::session::{VerificationKind, VerificationOutcome};
use cryptolab::{AvalancheReport, Error, SigningSession, bytes_to_hex, hex_to_bits, run_avalanche};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Digital signature and hash avalanche demonstrations.
#[derive(Parser)]
#[command(name = "cryptolab", version, about)]
struct Cli {
    /// Output in JSON format (machine-readable).
    #[arg(long, global = true)]
    json: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SHA-256 digest of INPUT as hex and as bits.
    Digest { input: String },

    /// Digest INPUT and five one-character or one-bit mutations of it.
    Avalanche { input: String },

    /// Generate a P-256 key pair, sign MESSAGE, verify it, then tamper.
    Sign {
        message: String,

        /// Verify the signature against this message instead.
        #[arg(long)]
        tamper_message: Option<String>,

        /// Verify the message against this hex signature instead.
        #[arg(long)]
        tamper_signature: Option<String>,

        /// Verify the message against the signature with this bit flipped (0-511).
        #[arg(long)]
        flip_bit: Option<usize>,
    },
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DigestReport {
    input: String,
    hex: String,
    bits: String,
}

#[derive(Serialize)]
struct Check {
    kind: VerificationKind,
    detail: String,
    /// `None` when the input could not be interpreted as a signature.
    valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Check {
    fn from_result(
        kind: VerificationKind,
        detail: String,
        result: Result<VerificationOutcome, Error>,
    ) -> Result<Self, Error> {
        match result {
            Ok(outcome) => Ok(Self {
                kind,
                detail,
                valid: Some(outcome.valid),
                error: None,
            }),
            Err(e @ Error::MalformedSignature { .. }) => Ok(Self {
                kind,
                detail,
                valid: None,
                error: Some(e.to_string()),
            }),
            Err(e) => Err(e),
        }
    }
}

#[derive(Serialize)]
struct SignReport {
    public_key: String,
    fingerprint: String,
    message: String,
    signature: String,
    checks: Vec<Check>,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dispatch(cli.command, cli.json) {
        if cli.json {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        } else {
            eprintln!("error: {e}");
        }
        std::process::exit(1);
    }
}

fn dispatch(command: Commands, json: bool) -> Result<(), Error> {
    match command {
        Commands::Digest { input } => {
            let digest = cryptolab::hash::sha256(input.as_bytes());
            let hex = bytes_to_hex(&digest);
            let bits = hex_to_bits(&hex)?;
            print_digest(&DigestReport { input, hex, bits }, json);
        }
        Commands::Avalanche { input } => {
            let report = run_avalanche(&input)?;
            print_avalanche(&report, json);
        }
        Commands::Sign {
            message,
            tamper_message,
            tamper_signature,
            flip_bit,
        } => {
            let report = run_signing(message, tamper_message, tamper_signature, flip_bit)?;
            print_signing(&report, json);
        }
    }

    Ok(())
}

fn run_signing(
    message: String,
    tamper_message: Option<String>,
    tamper_signature: Option<String>,
    flip_bit: Option<usize>,
) -> Result<SignReport, Error> {
    let mut session = SigningSession::new();

    let public_key = *session.generate_keys()?;
    let signature = session.sign(&message)?;

    let mut checks = vec![Check::from_result(
        VerificationKind::Original,
        "signed message".to_string(),
        session.verify(),
    )?];

    if let Some(tampered) = tamper_message {
        let result = session.verify_tampered_message(&tampered);
        checks.push(Check::from_result(
            VerificationKind::TamperedMessage,
            format!("message {tampered:?}"),
            result,
        )?);
    }

    if let Some(index) = flip_bit {
        let flipped = signature.with_bit_flipped(index);
        let result = session.verify_tampered_signature(&flipped.to_hex());
        checks.push(Check::from_result(
            VerificationKind::TamperedSignature,
            format!("signature bit {index} flipped"),
            result,
        )?);
    }

    if let Some(text) = tamper_signature {
        let result = session.verify_tampered_signature(&text);
        checks.push(Check::from_result(
            VerificationKind::TamperedSignature,
            format!("signature {text}"),
            result,
        )?);
    }

    Ok(SignReport {
        public_key: public_key.to_hex(),
        fingerprint: public_key.fingerprint(),
        message,
        signature: signature.to_hex(),
        checks,
    })
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("{{\"error\":\"json serialization failed: {e}\"}}"),
    }
}

fn print_digest(report: &DigestReport, json: bool) {
    if json {
        return print_json(report);
    }

    println!("input:  {:?}", report.input);
    println!("sha256: {}", report.hex);
    println!("bits:   {}", report.bits);
}

fn print_avalanche(report: &AvalancheReport, json: bool) {
    if json {
        return print_json(report);
    }

    println!("input: {:?}", report.input);
    println!();
    println!("{:<28} {:<64} {:>8} {:>7}", "variant", "sha256", "bits", "%");

    for row in &report.rows {
        let (distance, percentage) = match row.comparison {
            Some(c) => (c.distance.to_string(), format!("{:.1}", c.percentage)),
            None => ("n/a".to_string(), "n/a".to_string()),
        };

        println!(
            "{:<28} {:<64} {:>8} {:>7}",
            row.result.name(),
            row.result.hex,
            distance,
            percentage
        );
    }

    if let Some(mean) = report.mean_distance() {
        println!();
        println!("mean distance: {mean:.1} of 256 bits (ideal 128)");
    }
}

fn print_signing(report: &SignReport, json: bool) {
    if json {
        return print_json(report);
    }

    println!("public key:  {}", report.public_key);
    println!("fingerprint: {}", report.fingerprint);
    println!("message:     {:?}", report.message);
    println!("signature:   {}", report.signature);
    println!();

    for check in &report.checks {
        let verdict = match (check.valid, &check.error) {
            (Some(true), _) => "VALID".to_string(),
            (Some(false), _) => "INVALID".to_string(),
            (None, Some(e)) => format!("ERROR ({e})"),
            (None, None) => "ERROR".to_string(),
        };
        println!("{:<40} {}", check.detail, verdict);
    }
}
