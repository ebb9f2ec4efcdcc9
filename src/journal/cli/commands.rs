use super::print::{print_entries, print_error, print_full_entries, print_menu, print_messages};
use super::prompt::{ask, read_body};
use super::setup::{Cli, MenuChoice};
use clap::Parser;
use journal::api::{CmdMessage, JournalApi};
use journal::config::JournalConfig;
use journal::error::{JournalError, Result};
use journal::init::initialize;
use journal::model::join_body;
use journal::store::JournalStore;
use std::io::{self, BufRead, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let ctx = initialize(cli.dir.as_deref())?;
    log::info!("journal at {}", ctx.dir.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), ctx.api, ctx.config);
    session.run()?;
    Ok(())
}

/// One interactive run of the menu loop.
///
/// Operation failures are printed and the loop carries on; only I/O errors on
/// the terminal itself end the session early.
pub(super) struct Session<R, W, S: JournalStore> {
    input: R,
    out: W,
    api: JournalApi<S>,
    config: JournalConfig,
}

impl<R: BufRead, W: Write, S: JournalStore> Session<R, W, S> {
    pub(super) fn new(input: R, out: W, api: JournalApi<S>, config: JournalConfig) -> Self {
        Self {
            input,
            out,
            api,
            config,
        }
    }

    pub(super) fn run(&mut self) -> io::Result<()> {
        loop {
            print_menu(&mut self.out)?;
            let choice = match ask(&mut self.input, &mut self.out, "> ")? {
                Some(choice) => choice,
                None => {
                    writeln!(self.out)?;
                    break;
                }
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::NewEntry) => self.handle_create()?,
                Some(MenuChoice::List) => self.handle_list()?,
                Some(MenuChoice::View) => self.handle_view()?,
                Some(MenuChoice::Delete) => self.handle_delete()?,
                Some(MenuChoice::Exit) => break,
                None => print_messages(&mut self.out, &[CmdMessage::error("Not a valid option.")])?,
            }
        }
        writeln!(self.out, "Goodbye.")?;
        self.out.flush()
    }

    fn handle_create(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- New entry ---")?;
        let title = ask(&mut self.input, &mut self.out, "Title: ")?.unwrap_or_default();
        if title.trim().is_empty() {
            return print_error(&mut self.out, &JournalError::EmptyTitle);
        }

        writeln!(
            self.out,
            "Write your entry. End with a single line containing only '{}'.",
            self.config.end_marker
        )?;
        let lines = read_body(&mut self.input, &self.config)?;

        match self.api.create_entry(&title, &join_body(&lines)) {
            Ok(result) => {
                writeln!(self.out)?;
                print_messages(&mut self.out, &result.messages)
            }
            Err(e) => print_error(&mut self.out, &e),
        }
    }

    fn handle_list(&mut self) -> io::Result<()> {
        let result = self.api.list_entries();
        print_entries(&mut self.out, &result.listed_entries)
    }

    fn handle_view(&mut self) -> io::Result<()> {
        let Some(selection) = self.select("No entries to view.", "view")? else {
            return Ok(());
        };
        match self.api.view_entry(&selection) {
            Ok(result) => {
                print_full_entries(&mut self.out, &result.viewed_entries)?;
                print_messages(&mut self.out, &result.messages)
            }
            Err(e) => print_error(&mut self.out, &e),
        }
    }

    fn handle_delete(&mut self) -> io::Result<()> {
        let Some(selection) = self.select("No entries to delete.", "delete")? else {
            return Ok(());
        };
        match self.api.delete_entry(&selection) {
            Ok(result) => print_messages(&mut self.out, &result.messages),
            Err(e) => print_error(&mut self.out, &e),
        }
    }

    /// List entries and ask which one to act on. `None` when there is nothing
    /// to choose from.
    fn select(&mut self, empty_message: &str, verb: &str) -> io::Result<Option<String>> {
        let listing = self.api.list_entries();
        if listing.listed_entries.is_empty() {
            writeln!(self.out)?;
            print_messages(&mut self.out, &[CmdMessage::info(empty_message)])?;
            return Ok(None);
        }

        print_entries(&mut self.out, &listing.listed_entries)?;
        let prompt = format!("\nWhich entry number to {}? ", verb);
        let answer = ask(&mut self.input, &mut self.out, &prompt)?;
        Ok(Some(answer.unwrap_or_default()))
    }
}
