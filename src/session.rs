//! Interactive menu: manual entry, file import, exit.
//!
//! Each menu pick builds a fresh [`RecordStore`], analyzes it and prints the
//! report. Nothing carries over between cycles.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{error, info};

use crate::analyzers::aggregate::analyze;
use crate::config::GradingConfig;
use crate::error::ImportError;
use crate::importer::import_path;
use crate::output::{render_json, render_report};
use crate::records::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Manual,
    Import,
    Exit,
}

impl MenuChoice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::Manual),
            "2" => Some(MenuChoice::Import),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: GradingConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: GradingConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "===== GRADEBOOK ANALYZER =====")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1. Enter Scores Manually")?;
            writeln!(self.output, "2. Import Scores from CSV File")?;
            writeln!(self.output, "3. Exit Program")?;

            let Some(line) = self.prompt("Enter your choice (1-3): ")? else {
                break;
            };

            let store = match MenuChoice::parse(&line) {
                Some(MenuChoice::Manual) => match self.manual_entry()? {
                    Some(store) => store,
                    None => break,
                },
                Some(MenuChoice::Import) => {
                    let Some(path) = self.prompt("Enter CSV filename: ")? else {
                        break;
                    };
                    self.import(path.trim())?
                }
                Some(MenuChoice::Exit) => break,
                None => {
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    continue;
                }
            };

            if store.is_empty() {
                continue;
            }

            info!(students = store.len(), "Analyzing scores");
            let analysis = analyze(&store, &self.config);
            write!(self.output, "\n{}", render_report(&analysis))?;
        }

        writeln!(self.output, "\nExiting GradeBook Analyzer. Goodbye!")?;
        Ok(())
    }

    /// Collects students one by one. Returns `None` if input ends early.
    fn manual_entry(&mut self) -> io::Result<Option<RecordStore>> {
        let Some(count) = self.prompt_parsed("Enter number of students: ", |s| {
            s.parse::<usize>().ok()
        })?
        else {
            return Ok(None);
        };

        let mut store = RecordStore::new();
        for i in 1..=count {
            let Some(name) = self.prompt_parsed(&format!("Enter name of student {i}: "), |s| {
                (!s.is_empty()).then(|| s.to_string())
            })?
            else {
                return Ok(None);
            };

            let Some(score) = self.prompt_parsed(&format!("Enter score of {name}: "), |s| {
                s.parse::<f64>().ok().filter(|v| v.is_finite())
            })?
            else {
                return Ok(None);
            };

            match store.insert(&name, score) {
                Ok(Some(_)) => writeln!(self.output, "Replaced earlier score for {name}.")?,
                Ok(None) => {}
                Err(e) => writeln!(self.output, "{e}. Skipping.")?,
            }
        }
        Ok(Some(store))
    }

    fn import(&mut self, path: &str) -> io::Result<RecordStore> {
        load_and_report(&mut self.output, Path::new(path))
    }

    /// Re-prompts until `parse` accepts the trimmed line. `None` on end of input.
    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse(line.trim()) {
                Some(v) => return Ok(Some(v)),
                None => writeln!(self.output, "Invalid input, please try again.")?,
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Imports `path`, telling the user about skipped rows and load failures.
///
/// Import failures are recovered here: the user sees a message and the
/// returned store is empty.
pub fn load_and_report<W: Write>(output: &mut W, path: &Path) -> io::Result<RecordStore> {
    match import_path(path) {
        Ok(import) => {
            for m in &import.malformed {
                writeln!(output, "{m}. Skipping.")?;
            }
            if import.store.is_empty() {
                writeln!(output, "No valid records found in file.")?;
            } else {
                writeln!(
                    output,
                    "\nSuccessfully loaded {} records from '{}'.",
                    import.store.len(),
                    path.display()
                )?;
            }
            Ok(import.store)
        }
        Err(e @ ImportError::SourceNotFound { .. }) => {
            error!(error = %e, "Import failed");
            writeln!(output, "File not found. Please check the file name.")?;
            Ok(RecordStore::new())
        }
        Err(e) => {
            error!(error = %e, "Import failed");
            writeln!(output, "Could not read file: {e}")?;
            Ok(RecordStore::new())
        }
    }
}

/// One non-interactive cycle over `path`: import, analyze, print the report.
///
/// An empty or missing source prints a message and produces no report.
pub fn import_command<W: Write>(
    mut output: W,
    path: &Path,
    config: &GradingConfig,
    json: bool,
) -> anyhow::Result<()> {
    let store = load_and_report(&mut output, path)?;
    if store.is_empty() {
        return Ok(());
    }

    let analysis = analyze(&store, config);
    let rendered = if json {
        render_json(&analysis)?
    } else {
        render_report(&analysis)
    };
    writeln!(output, "{rendered}")?;
    info!(students = analysis.stats.count, "Report written");
    Ok(())
}
