//! anchor-pin CLI
//!
//! Usage:
//!   anchor-pin [OPTIONS] [FILE]
//!
//! Options:
//!   -r, --relations  Print the active relations before the frames
//!   -v, --verbose    Log solver activity to stderr (repeat for more)
//!   -h, --help       Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use anchor_pin::{Document, DocumentError};

#[derive(Parser)]
#[command(name = "anchor-pin")]
#[command(about = "Solve a TOML scene of pinned views and print their frames")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Print the active relations before the frames
    #[arg(short, long)]
    relations: bool,

    /// Log solver activity to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "anchor_pin=debug",
        _ => "anchor_pin=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let document = match Document::from_str(&source) {
        Ok(document) => document,
        Err(e @ DocumentError::Parse { .. }) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let scene = match document.build() {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.relations {
        for relation in scene.relations() {
            println!("{}", relation.describe(&scene));
        }
        println!();
    }

    match scene.solve() {
        Ok(frames) => print!("{}", frames),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"anchor-pin - solve a scene of pinned views

USAGE:
    anchor-pin [OPTIONS] [FILE]
    cat scene.toml | anchor-pin

OPTIONS:
    -r, --relations    Print the active relations before the frames
    -v, --verbose      Log solver activity (-vv for trace)
    -h, --help         Print help

QUICK START:
    [canvas]
    width = 390.0
    height = 844.0
    safe_area = {{ top = 47.0, bottom = 34.0 }}

    [[view]]
    name = "card"

    [[rule]]
    view = "card"
    safe_area = true
    ops = [{{ op = "pin_all", inset = 16.0 }}]

Each view is printed as 'name x=.. y=.. w=.. h=..'."#
    );
}
