//! Line-oriented host around a `TodoStore`.
//!
//! Text mode reads shell commands (`add`, `list`, `show`, `toggle`, `rm`,
//! `quit`); JSON mode reads one `Request` per line and answers with one
//! `Response` per line. Failed commands are reported and the loop goes on.

use colored::Colorize;
use eyre::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use todor::payload::{Request, Response};
use todor::{Clock, IdGenerator, Item, TodoError, TodoStore};

use crate::cli::{ShellCommand, ShellLine};

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, I: IdGenerator, C: Clock> {
    store: &'a mut TodoStore<I, C>,
    prompt: String,
    json: bool,
    failures: usize,
}

impl<'a, I: IdGenerator, C: Clock> Shell<'a, I, C> {
    pub fn new(store: &'a mut TodoStore<I, C>, prompt: impl Into<String>, json: bool) -> Self {
        Self {
            store,
            prompt: prompt.into(),
            json,
            failures: 0,
        }
    }

    /// Run until EOF or `quit`. Returns the number of commands that failed.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<usize> {
        let mut lines = input.lines();
        loop {
            self.print_prompt(&mut out)?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input line")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            debug!("Shell input: {}", line);
            let flow = if self.json {
                self.handle_json(line, &mut out)?
            } else {
                self.handle_text(line, &mut out)?
            };
            if flow == Flow::Quit {
                break;
            }
        }

        info!("Shell finished with {} failed command(s)", self.failures);
        Ok(self.failures)
    }

    fn print_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.json || self.prompt.is_empty() {
            return Ok(());
        }
        write!(out, "{}", self.prompt)?;
        out.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn handle_json<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        if matches!(line, "quit" | "exit") {
            return Ok(Flow::Quit);
        }
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => self.store.dispatch(request),
            Err(e) => Response::Error {
                kind: "bad_request".to_string(),
                message: e.to_string(),
            },
        };
        if response.is_error() {
            self.failures += 1;
        }
        writeln!(out, "{}", serde_json::to_string(&response)?)?;
        Ok(Flow::Continue)
    }

    fn handle_text<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match ShellLine::parse_line(line) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // clap reports `help` as an "error"; only real parse failures count
                if e.use_stderr() {
                    self.failures += 1;
                }
                write!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            ShellCommand::Add { content } => {
                let item = self.store.create(content.join(" "));
                writeln!(out, "{} {}", "created".green(), item.id)?;
            }
            ShellCommand::List => {
                if self.store.is_empty() {
                    writeln!(out, "{}", "no items".dimmed())?;
                }
                for item in self.store.list() {
                    writeln!(out, "{}", render_item(item))?;
                }
            }
            ShellCommand::Show { id } => match self.store.find(&id) {
                Some(item) => {
                    writeln!(out, "{}", render_item(item))?;
                    writeln!(out, "  created {}  updated {}", item.created_at, item.updated_at)?;
                }
                None => writeln!(out, "{}", format!("no item with id {}", id).as_str().dimmed())?,
            },
            ShellCommand::Toggle { id } => match self.store.toggle(&id) {
                Ok(()) => writeln!(out, "{} {}", "toggled".green(), id)?,
                Err(e) => self.report(out, &e)?,
            },
            ShellCommand::Rm { id } => match self.store.remove(&id) {
                Ok(()) => writeln!(out, "{} {}", "removed".green(), id)?,
                Err(e) => self.report(out, &e)?,
            },
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn report<W: Write>(&mut self, out: &mut W, err: &TodoError) -> Result<()> {
        self.failures += 1;
        writeln!(out, "{} {}", "error:".red().bold(), err)?;
        Ok(())
    }
}

fn render_item(item: &Item) -> String {
    let mark = if item.completed { "[x]".green() } else { "[ ]".normal() };
    format!("{} {}  {}", mark, item.id.cyan(), item.content)
}
