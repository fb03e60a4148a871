//! TextDB Interactive Editor
//!
//! Menu-driven editor for a text database file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use textdb::command::{self, Command, MENU};
use textdb::config::DEFAULT_PATH;
use textdb::{Config, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// TextDB Editor
#[derive(Parser, Debug)]
#[command(name = "textdb")]
#[command(about = "Interactive editor for text databases")]
#[command(version)]
struct Args {
    /// Database file to open
    #[arg(default_value = DEFAULT_PATH)]
    path: PathBuf,

    /// Start a new, empty database (overwrites the file on first save)
    #[arg(short, long)]
    create: bool,
}

/// Outcome of handling one prompt
enum Flow {
    Continue,
    Stop,
}

struct Editor<R, W> {
    store: RecordStore,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Editor<R, W> {
    fn new(store: RecordStore, input: R, out: W) -> Self {
        Self { store, input, out }
    }

    fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", MENU)?;

        loop {
            let prompt = if self.store.is_empty() {
                "\nDatabase is empty. Choose [n]ew to add an item: ".to_string()
            } else {
                format!("\nChoose an option or a number (1-{}): ", self.store.len())
            };

            let Some(line) = self.prompt(&prompt)? else {
                // EOF behaves like quit
                self.quit()?;
                return Ok(());
            };

            let flow = match Command::parse(&line) {
                Ok(cmd) => self.handle(cmd)?,
                Err(e) => {
                    writeln!(self.out, "{}", e)?;
                    Flow::Continue
                }
            };
            if let Flow::Stop = flow {
                return Ok(());
            }
        }
    }

    fn handle(&mut self, cmd: Command) -> io::Result<Flow> {
        match cmd {
            Command::Show { key } => self.show(key)?,
            Command::New => self.new_item()?,
            Command::Edit => self.edit_item()?,
            Command::Delete => self.delete_item()?,
            Command::Move => self.move_item()?,
            Command::Save => {
                self.save()?;
            }
            Command::Help => writeln!(self.out, "\n{}", MENU)?,
            Command::Quit => return self.quit(),
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Command Handlers
    // =========================================================================

    fn show(&mut self, key: usize) -> io::Result<()> {
        match self.store.get(key) {
            Some(body) => {
                writeln!(self.out, "\n--- Text for index {} ---", key)?;
                writeln!(self.out, "{}", body)?;
                writeln!(self.out, "--- End of text for index {} ---", key)
            }
            None => writeln!(self.out, "No text found for index {}.", key),
        }
    }

    fn new_item(&mut self) -> io::Result<()> {
        let body = self.read_multiline("Enter the new text. Finish with an empty line.")?;
        if body.is_empty() {
            return Ok(());
        }
        match self.store.append(body) {
            Ok(key) => {
                writeln!(self.out, "Text added as item {} (not saved yet).", key)?;
                writeln!(self.out, "Total number of items: {}", self.store.len())
            }
            Err(e) => writeln!(self.out, "Error: {}", e),
        }
    }

    fn edit_item(&mut self) -> io::Result<()> {
        let Some(key) = self.ask_position("Index to edit")? else {
            return Ok(());
        };
        if let Some(current) = self.store.get(key) {
            writeln!(self.out, "\n--- Current text for index {} ---\n{}\n--- End of current text ---", key, current)?;
        }

        let body = self.read_multiline("\nEnter the new text. Finish with an empty line.")?;
        if body.is_empty() {
            return Ok(());
        }
        match self.store.update(key, body) {
            Ok(()) => writeln!(self.out, "Text for index {} changed (not saved yet).", key),
            Err(e) => writeln!(self.out, "Error: {}", e),
        }
    }

    fn delete_item(&mut self) -> io::Result<()> {
        let Some(key) = self.ask_position("Index to delete")? else {
            return Ok(());
        };
        if let Some(body) = self.store.get(key) {
            writeln!(self.out, "\n--- Text for index {} ---\n{}\n--- End of text ---", key, body)?;
        }

        if !self.confirm(&format!("Are you sure you want to delete item {}? (y/n): ", key))? {
            return writeln!(self.out, "Deletion of item {} cancelled.", key);
        }
        match self.store.delete(key) {
            Ok(_) => {
                writeln!(self.out, "Item {} deleted (not saved yet).", key)?;
                writeln!(self.out, "Total number of items: {}", self.store.len())
            }
            Err(e) => writeln!(self.out, "Error: {}", e),
        }
    }

    fn move_item(&mut self) -> io::Result<()> {
        let Some(source) = self.ask_position("Item to move")? else {
            return Ok(());
        };
        let Some(dest) = self.ask_position(&format!("New position for item {}", source))? else {
            return Ok(());
        };
        match self.store.move_record(source, dest) {
            Ok(()) => writeln!(
                self.out,
                "Item {} moved to position {} (not saved yet).",
                source, dest
            ),
            Err(e) => writeln!(self.out, "Error: {}", e),
        }
    }

    fn save(&mut self) -> io::Result<bool> {
        match self.store.save() {
            Ok(()) => {
                writeln!(self.out, "Database saved to '{}'.", self.store.path().display())?;
                Ok(true)
            }
            Err(e) => {
                writeln!(
                    self.out,
                    "Error: could not save the database to '{}': {}",
                    self.store.path().display(),
                    e
                )?;
                Ok(false)
            }
        }
    }

    /// Offer to save unsaved changes; stays in the editor if saving fails
    fn quit(&mut self) -> io::Result<Flow> {
        if self.store.is_dirty()
            && self.confirm("There are unsaved changes. Save before quitting? (y/n): ")?
            && !self.save()?
        {
            return Ok(Flow::Continue);
        }
        Ok(Flow::Stop)
    }

    // =========================================================================
    // Input Helpers
    // =========================================================================

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        prompt(&mut self.input, &mut self.out, text)
    }

    fn ask_position(&mut self, label: &str) -> io::Result<Option<usize>> {
        let max = self.store.len();
        if max == 0 {
            writeln!(self.out, "Database is empty.")?;
            return Ok(None);
        }
        let Some(line) = self.prompt(&format!("{} (1-{}): ", label, max))? else {
            return Ok(None);
        };
        match command::parse_position(&line, max) {
            Ok(key) => Ok(Some(key)),
            Err(e) => {
                writeln!(self.out, "Error: {}", e)?;
                Ok(None)
            }
        }
    }

    fn confirm(&mut self, text: &str) -> io::Result<bool> {
        confirm(&mut self.input, &mut self.out, text)
    }

    /// Read lines until an empty line or EOF
    fn read_multiline(&mut self, text: &str) -> io::Result<String> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut lines = Vec::new();
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                break;
            }
            lines.push(line.to_string());
        }
        Ok(lines.join("\n"))
    }
}

// =============================================================================
// Prompt Functions
// =============================================================================

/// Print `text` and read one line; None on EOF
fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask until the answer is yes or no; EOF counts as no
fn confirm(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> io::Result<bool> {
    loop {
        let Some(line) = prompt(input, out, text)? else {
            return Ok(false);
        };
        match command::parse_confirmation(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(out, "Invalid input. Enter 'y' or 'n'.")?,
        }
    }
}

fn main() {
    // Logs go to stderr and stay quiet by default so prompts are readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if args.create && args.path.exists() {
        println!("Warning: file '{}' already exists.", args.path.display());
        match confirm(&mut input, &mut out, "Overwrite it with an empty database? (y/n): ") {
            Ok(true) => {}
            Ok(false) => {
                println!("Operation cancelled.");
                return;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let config = Config::builder()
        .path(&args.path)
        .create_new(args.create)
        .build();

    let store = match RecordStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut editor = Editor::new(store, input, out);
    if let Err(e) = editor.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
