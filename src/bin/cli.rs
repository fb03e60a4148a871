//! TextDB CLI
//!
//! One-shot commands against a text database file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use textdb::config::DEFAULT_PATH;
use textdb::{Config, RecordStore, Result, TextDbError};
use tracing_subscriber::{fmt, EnvFilter};

/// Sample records written by `seed`
const SAMPLE_RECORDS: [&str; 5] = [
    "This is the first item in the database.\nIt can span several lines.",
    "The second item is a short piece of text.",
    "Third item.\n\nWith an extra blank line in the middle.",
    "And here is a fourth, somewhat longer item to give the list a bit more body. \
     It is useful for checking how previews and search behave.",
    "The fifth and last sample item.",
];

/// TextDB CLI
#[derive(Parser, Debug)]
#[command(name = "textdb-cli")]
#[command(about = "Command-line access to a text database")]
#[command(version)]
struct Args {
    /// Database file
    #[arg(short, long, default_value = DEFAULT_PATH)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all items with a one-line preview
    List,

    /// Print the text of an item
    Get {
        /// Item index
        key: usize,
    },

    /// Append an item
    Add {
        /// Item text
        text: String,
    },

    /// Insert an item at a position, shifting later items down
    Insert {
        /// Target position (1 to N+1)
        key: usize,

        /// Item text
        text: String,
    },

    /// Replace the text of an item
    Update {
        /// Item index
        key: usize,

        /// New text
        text: String,
    },

    /// Delete an item and renumber the rest
    Delete {
        /// Item index
        key: usize,
    },

    /// Move an item to a new position
    Move {
        /// Item to move
        source: usize,

        /// New position (1 to N)
        dest: usize,
    },

    /// Find items whose text contains TERM or whose index starts with TERM
    Search {
        /// Search term (case-insensitive)
        term: String,
    },

    /// Write a new database with sample items, overwriting the file
    Seed,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,textdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        if e.is_precondition() {
            tracing::warn!("{}", e);
        } else {
            tracing::error!("{}", e);
        }
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

/// Exit status for a failed command: 2 for a bad index, 1 otherwise
fn exit_code(err: &TextDbError) -> i32 {
    if err.is_precondition() {
        2
    } else {
        1
    }
}

fn run(args: Args) -> Result<()> {
    let create_new = matches!(args.command, Commands::Seed);
    let config = Config::builder()
        .path(&args.file)
        .create_new(create_new)
        .build();
    let mut store = RecordStore::open(config)?;

    match args.command {
        Commands::List => {
            for (key, body) in store.iter() {
                println!("{:>3}: {}", key, preview(body));
            }
        }
        Commands::Get { key } => match store.get(key) {
            Some(body) => println!("{}", body),
            None => println!("No text found for index {}.", key),
        },
        Commands::Add { text } => {
            let key = store.append(text)?;
            store.save()?;
            println!("Added item {} ({} items).", key, store.len());
        }
        Commands::Insert { key, text } => {
            store.insert_at(key, text)?;
            store.save()?;
            println!("Inserted item {} ({} items).", key, store.len());
        }
        Commands::Update { key, text } => {
            store.update(key, text)?;
            store.save()?;
            println!("Updated item {}.", key);
        }
        Commands::Delete { key } => {
            store.delete(key)?;
            store.save()?;
            println!("Deleted item {} ({} items left).", key, store.len());
        }
        Commands::Move { source, dest } => {
            store.move_record(source, dest)?;
            store.save()?;
            println!("Moved item {} to position {}.", source, dest);
        }
        Commands::Search { term } => {
            for (key, body) in store.search(&term) {
                println!("{:>3}: {}", key, preview(body));
            }
        }
        Commands::Seed => {
            for text in SAMPLE_RECORDS {
                store.append(text)?;
            }
            store.save()?;
            println!(
                "Created database '{}' with {} items.",
                store.path().display(),
                store.len()
            );
        }
    }

    Ok(())
}

/// Single-line view of a body
fn preview(body: &str) -> String {
    body.replace('\n', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_bad_index() {
        assert_eq!(exit_code(&TextDbError::NotFound { key: 4 }), 2);
        assert_eq!(
            exit_code(&TextDbError::OutOfRange { key: 9, min: 1, max: 3 }),
            2
        );
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        assert_eq!(exit_code(&TextDbError::InvalidInput("x".into())), 1);
        assert_eq!(exit_code(&TextDbError::Config("x".into())), 1);
    }

    #[test]
    fn test_preview_flattens_lines() {
        assert_eq!(preview("one\ntwo\n"), "one two");
    }
}
