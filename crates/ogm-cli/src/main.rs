//! `ogm` — command-line front end for Belgian structured bank-transfer
//! messages (OGM/VCS).
//!
//! Three subcommands over the `ogm-models` crate:
//!
//! - `generate` — format a message for a given (or random) number.
//! - `validate` — grammar and checksum check; exits non-zero when invalid.
//! - `inspect`  — decode the number and checksum embedded in a message.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use ogm_models::{mod97, Circumfix, StructuredMessage, TransferMessage};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "ogm")]
#[command(about = "Generate and validate Belgian structured bank-transfer messages")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a structured message (random number when omitted).
    Generate {
        /// Communication number in [1, 9999999999].
        number: Option<u64>,

        /// Bracketing symbol, `+` or `*`.
        #[arg(long, default_value = "+")]
        circumfix: Circumfix,

        /// Emit a JSON object instead of the bare message.
        #[arg(long)]
        json: bool,
    },

    /// Check the format and checksum of a structured message.
    Validate {
        /// The formatted message, e.g. "+++090/9337/55493+++".
        message: String,

        /// Emit a JSON object instead of "valid"/"invalid".
        #[arg(long)]
        json: bool,
    },

    /// Decode the number and checksum embedded in a structured message.
    Inspect {
        /// The formatted message, e.g. "+++090/9337/55493+++".
        message: String,

        /// Emit a JSON object instead of a line-per-field report.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct GenerateOutput {
    number: u64,
    checksum: u8,
    message: String,
}

#[derive(Serialize)]
struct ValidateOutput {
    message: String,
    valid: bool,
}

#[derive(Serialize)]
struct InspectOutput {
    message: String,
    number: u64,
    checksum: u8,
    expected_checksum: u8,
    valid: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Generate {
            number,
            circumfix,
            json,
        } => {
            println!("{}", run_generate(number, circumfix, json)?);
        }
        Command::Validate { message, json } => {
            let (output, valid) = run_validate(&message, json)?;
            println!("{output}");
            if !valid {
                std::process::exit(1);
            }
        }
        Command::Inspect { message, json } => {
            println!("{}", run_inspect(&message, json)?);
        }
    }
    Ok(())
}

fn run_generate(number: Option<u64>, circumfix: Circumfix, json: bool) -> Result<String> {
    let mut message = match number {
        Some(number) => TransferMessage::new(number)?,
        None => TransferMessage::random(),
    };
    let text = message.generate(circumfix);
    if json {
        let output = GenerateOutput {
            number: message.number(),
            checksum: message.checksum(),
            message: text.as_str().to_string(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(text.to_string())
    }
}

fn run_validate(message: &str, json: bool) -> Result<(String, bool)> {
    let parsed: StructuredMessage = message.parse()?;
    let valid = parsed.is_checksum_valid();
    let output = if json {
        serde_json::to_string_pretty(&ValidateOutput {
            message: message.to_string(),
            valid,
        })?
    } else if valid {
        "valid".to_string()
    } else {
        "invalid".to_string()
    };
    Ok((output, valid))
}

fn run_inspect(message: &str, json: bool) -> Result<String> {
    let parsed: StructuredMessage = message.parse()?;
    let Some((number, checksum)) = parsed.digits() else {
        // Unreachable through the grammar, but fail loud rather than panic.
        bail!("the structured message does not embed a 12-digit payload");
    };
    let expected_checksum = mod97(number);
    let valid = checksum == expected_checksum;
    if json {
        let output = InspectOutput {
            message: message.to_string(),
            number,
            checksum,
            expected_checksum,
            valid,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(format!(
            "number:   {number}\nchecksum: {checksum}\nexpected: {expected_checksum}\nvalid:    {valid}",
        ))
    }
}
