//! Command-line front end for the rotorcrypt engine.
//!
//! With a message argument, prints the stepping transform of the message.
//! Without one, prompts for a line and demonstrates static mode: encrypt
//! with the fast rotor, decrypt, and report whether the round trip
//! matched. Invalid input exits with status 1.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use rotorcrypt::{Direction, RotorCryptError, RotorMachine};

#[derive(Parser)]
#[command(name = "rotorcrypt", about = "Educational rotor cipher")]
struct Args {
    /// Message to transform (uppercase letters only). Prompts
    /// interactively when omitted.
    message: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let machine = match RotorMachine::new() {
        Ok(machine) => machine,
        Err(err) => {
            eprintln!("rotorcrypt: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = match args.message {
        Some(message) => run_stepping(&machine, &message),
        None => run_interactive(&machine),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rotorcrypt: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Argument mode: print the stepping transform of the message.
fn run_stepping(machine: &RotorMachine, message: &str) -> Result<(), RotorCryptError> {
    let output = machine.transform_stepping(message)?;
    println!("{}", output);
    Ok(())
}

/// Interactive mode: static encrypt/decrypt round trip with the fast rotor.
fn run_interactive(machine: &RotorMachine) -> Result<(), RotorCryptError> {
    print!("Enter a string to encrypt (uppercase letters only): ");
    io::stdout().flush().ok();

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        input.clear();
    }
    let input = input.trim_end_matches(['\n', '\r']);

    let rotor = machine.table().fast();
    let encrypted = machine.transform_static(input, rotor, Direction::Encrypt)?;
    let decrypted = machine.transform_static(&encrypted, rotor, Direction::Decrypt)?;

    println!("Encrypted: {}", encrypted);
    println!("Decrypted: {}", decrypted);

    if decrypted == input {
        println!("Decryption successful!");
    } else {
        println!("Decryption failed!");
    }

    Ok(())
}
