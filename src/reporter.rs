use anyhow::Result;
use std::io::Write;

use crate::display;
use crate::events::Event;

/// Usage text shown when no action can be dispatched.
pub const USAGE: &str = "\
Example Usage
rosty [action] [options]
actions:
\tadd\t[ip] [host]\tAdd an entry in the file
\tget\tReturns the content of the host file
\tdel\t[index]\tDelete an entry from the host file, prompting for the index if none is given";

/// Reporter renders events as human text or JSON lines.
pub struct Reporter<W: Write> {
    out: W,
    json_mode: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, json_mode: bool) -> Self {
        Self { out, json_mode }
    }

    pub fn record(&mut self, event: Event) -> Result<()> {
        if self.json_mode {
            serde_json::to_writer(&mut self.out, &event)?;
            writeln!(self.out)?;
            return Ok(());
        }
        match &event {
            Event::EntryListed { index, line } => {
                writeln!(self.out, "{}", display::format_entry(*index, line))?
            }
            Event::EntryAdded { .. } => writeln!(self.out, "Entry added successfully")?,
            Event::EntryDeleted { .. } => writeln!(self.out, "Entry deleted successfully")?,
            Event::BackupCreated { .. } => {}
            Event::BackupFailed { error } | Event::Failed { error } => {
                writeln!(self.out, "ERROR:")?;
                writeln!(self.out, "{}", error)?;
            }
        }
        Ok(())
    }

    /// Print the usage text, in either mode.
    pub fn usage(&mut self) -> Result<()> {
        writeln!(self.out, "{}", USAGE)?;
        Ok(())
    }

    /// Print the delete prompt header, before the listing.
    pub fn prompt_header(&mut self) -> Result<()> {
        if !self.json_mode {
            writeln!(self.out, "Pick an entry to delete")?;
        }
        Ok(())
    }

    /// Print the `-> ` prompt and flush so it shows before input is read.
    pub fn prompt(&mut self) -> Result<()> {
        if !self.json_mode {
            write!(self.out, "-> ")?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
