//! Cbridge - Safe C Interop Demonstration
//!
//! CLI entry point for running the demonstration sequence and exercising
//! the dynamic half of the boundary.

use anyhow::{Context, Result};
use cbridge::demo;
use cbridge::loader::{library_filename, DynamicLibrary};
use cbridge::marshal::NativeString;
use cbridge::signature::library_api;
use clap::{Parser, Subcommand};
use std::io;
use std::path::Path;

#[derive(Parser)]
#[command(name = "cbridge")]
#[command(version)]
#[command(about = "Safe C interop demonstration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Call a routine from a shared library at run time
    Call {
        /// Library path, or bare name mapped to the platform filename
        #[arg(short, long)]
        library: String,

        /// Symbol to resolve and call
        #[arg(short, long)]
        symbol: String,

        /// Message to marshal and pass; omit for a no-argument routine
        #[arg(short, long)]
        message: Option<String>,
    },

    /// List the typed native call surface
    List,

    /// Run the demonstration sequence (default)
    Run,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let stdout = io::stdout();
            demo::run(&mut stdout.lock()).context("demonstration sequence failed")?;
        }

        Commands::List => {
            for sig in library_api() {
                println!("{}", sig);
            }
        }

        Commands::Call {
            library,
            symbol,
            message,
        } => {
            let path = resolve_library_arg(&library);
            let lib = DynamicLibrary::open(&path)
                .with_context(|| format!("failed to open '{}'", path))?;

            match message {
                Some(text) => {
                    let native = NativeString::new(&text)?;
                    lib.call_print(&symbol, &native)?;
                }
                None => lib.call_plain(&symbol)?,
            }
            cbridge::flush_native_output();
        }
    }

    Ok(())
}

/// Map a bare library name to its platform filename; pass paths through.
fn resolve_library_arg(library: &str) -> String {
    let looks_like_path = library.contains(std::path::MAIN_SEPARATOR)
        || Path::new(library).extension().is_some();

    if looks_like_path {
        library.to_string()
    } else {
        library_filename(library)
    }
}
