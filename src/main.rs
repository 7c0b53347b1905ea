//! Noise Machine - streams white or brown noise to the default output device
//!
//! Entry point: parses the command line, starts the audio engine, then parks
//! the main thread until SIGINT/SIGTERM. Teardown runs on the main thread
//! after the shutdown flag is observed, never in the signal handler itself.

use anyhow::{Context, Result};
use noise_machine::{AudioEngine, NoiseColor, NoiseGenerator};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("noise_machine=info".parse().unwrap()),
        )
        .init();

    let color = parse_args();

    // The handler runs on ctrlc's own thread: it only flips the flag and
    // wakes the main thread. All engine teardown stays out of it.
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    let main_thread = thread::current();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
        main_thread.unpark();
    })
    .context("failed to install signal handler")?;

    let mut engine = AudioEngine::new();
    engine
        .start(NoiseGenerator::new(color))
        .context("failed to start audio output")?;

    println!("Streaming {} noise. Press Ctrl+C to stop.", color);

    // park() can wake spuriously, so the flag stays authoritative.
    while running.load(Ordering::SeqCst) {
        thread::park();
    }

    info!("Shutdown signal received");
    engine.stop();
    println!("Done.");

    Ok(())
}

/// Parse command line arguments into a noise color
///
/// Exits the process directly for `--help`/`--version` (status 0) and for
/// any parse failure (usage text, status 1).
fn parse_args() -> NoiseColor {
    let args: Vec<String> = std::env::args().collect();
    let mut color = NoiseColor::Brown;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--version" | "-v" => {
                println!("noise-machine {}", noise_machine::VERSION);
                process::exit(0);
            }
            "--generator" | "-g" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --generator requires a value");
                    print_help();
                    process::exit(1);
                }
                color = match args[i + 1].parse() {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        print_help();
                        process::exit(1);
                    }
                };
                i += 2;
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                process::exit(1);
            }
        }
    }

    color
}

fn print_help() {
    println!("Usage: noise-machine [OPTIONS]");
    println!();
    println!("Generates noise and streams it to the default audio output.");
    println!();
    println!("Options:");
    println!("  -g, --generator NAME  Choose a generator: brown, white (default: brown)");
    println!("  -v, --version         Show version");
    println!("  -h, --help            Show this help");
    println!();
    println!("Examples:");
    println!("  noise-machine");
    println!("  noise-machine -g white");
}
