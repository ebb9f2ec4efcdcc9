use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "journal", bin_name = "journal", version)]
#[command(about = "A plain-text journal for the command line", long_about = None)]
pub struct Cli {
    /// Directory holding the journal's entries and index
    #[arg(short, long, env = "JOURNAL_DIR", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Numbered choices of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewEntry,
    List,
    View,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::NewEntry,
            MenuChoice::List,
            MenuChoice::View,
            MenuChoice::Delete,
            MenuChoice::Exit,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::NewEntry => "1",
            MenuChoice::List => "2",
            MenuChoice::View => "3",
            MenuChoice::Delete => "4",
            MenuChoice::Exit => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::NewEntry => "New entry",
            MenuChoice::List => "List entries",
            MenuChoice::View => "View entry",
            MenuChoice::Delete => "Delete entry",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::all().iter().copied().find(|c| c.key() == input)
    }
}
