use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::args::{self, Action, Invocation, Operands};
use crate::backup::{self, BackupOutcome};
use crate::cli::Cli;
use crate::display;
use crate::error::HostsError;
use crate::events::Event;
use crate::exit_codes::exit;
use crate::prompt;
use crate::reporter::Reporter;
use crate::store::{HostsFile, Line};

/// Handle one invocation: parse the tokens, back up the hosts file and
/// dispatch to the requested action.
///
/// `input` feeds the delete prompt and `output` receives everything the user
/// sees. Returns the process exit code; an `Err` means the hosts file could
/// not be loaded at all.
pub fn run<R: BufRead, W: Write>(cli: Cli, mut input: R, output: W) -> Result<i32> {
    let mut reporter = Reporter::new(output, cli.json);
    let hosts = HostsFile::new(cli.hosts_file);
    let invocation = args::parse(cli.tokens.as_slice());

    let exit_code = dispatch(&hosts, invocation, &mut input, &mut reporter)?;
    reporter.flush()?;
    Ok(exit_code)
}

fn dispatch<R: BufRead, W: Write>(
    hosts: &HostsFile,
    invocation: Invocation,
    input: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<i32> {
    if invocation == Invocation::Empty {
        reporter.usage()?;
        return Ok(exit::MISSING_ACTION);
    }

    make_backup(hosts, reporter)?;

    match invocation {
        Invocation::Recognized { action: Action::Get, .. } => get(hosts, reporter),
        Invocation::Recognized { action: Action::Add, operands } => add(hosts, operands, reporter),
        Invocation::Recognized { action: Action::Del, operands } => {
            del(hosts, operands, input, reporter)
        }
        Invocation::Unrecognized { .. } | Invocation::Empty => {
            reporter.usage()?;
            Ok(exit::SUCCESS)
        }
    }
}

/// Back up the hosts file if no backup exists yet. A failed copy is
/// reported and the run goes on.
fn make_backup<W: Write>(hosts: &HostsFile, reporter: &mut Reporter<W>) -> Result<()> {
    match backup::ensure(hosts) {
        Ok(BackupOutcome::Created { path, bytes }) => {
            reporter.record(Event::BackupCreated { path, bytes })
        }
        Ok(BackupOutcome::Present(_)) => Ok(()),
        Err(err) => {
            let error = describe(err);
            tracing::warn!(%error, "backup failed, continuing without one");
            reporter.record(Event::BackupFailed { error })
        }
    }
}

/// List every non-empty line with its index.
pub fn get<W: Write>(hosts: &HostsFile, reporter: &mut Reporter<W>) -> Result<i32> {
    let lines = hosts.load().context("failed to load hosts file")?;
    list(&lines, reporter)?;
    Ok(exit::SUCCESS)
}

/// Append `<ip> <host>` to the hosts file.
pub fn add<W: Write>(
    hosts: &HostsFile,
    operands: Operands,
    reporter: &mut Reporter<W>,
) -> Result<i32> {
    let appended = match operands {
        Operands::Entry { ip, host } => {
            let line = format!("{} {}", ip, host);
            hosts.append(&line).map(|()| line)
        }
        Operands::None | Operands::Index(_) => Err(HostsError::MissingOperands {
            action: Action::Add,
            expected: "<ip> <host>",
        }),
    };

    match appended {
        Ok(line) => {
            reporter.record(Event::EntryAdded { line })?;
            Ok(exit::SUCCESS)
        }
        Err(err) => fail(reporter, err),
    }
}

/// Remove one line by index, asking for it on `input` unless an index
/// operand was given.
pub fn del<R: BufRead, W: Write>(
    hosts: &HostsFile,
    operands: Operands,
    input: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<i32> {
    let lines = hosts.load().context("failed to load hosts file")?;

    let index = match operands {
        Operands::Index(raw) => prompt::scan_index(&raw),
        Operands::None | Operands::Entry { .. } => {
            reporter.prompt_header()?;
            list(&lines, reporter)?;
            reporter.prompt()?;
            match prompt::read_index(input) {
                Ok(index) => index,
                Err(err) => return fail(reporter, err),
            }
        }
    };

    match hosts.rewrite_without(&lines, prompt::to_position(index)) {
        Ok(removed) => {
            if removed.is_none() {
                tracing::warn!(index, "index matched no line, nothing removed");
            }
            let removed = removed.map(|line| String::from_utf8_lossy(&line).into_owned());
            reporter.record(Event::EntryDeleted { index, removed })?;
            Ok(exit::SUCCESS)
        }
        Err(err) => fail(reporter, err),
    }
}

fn list<W: Write>(lines: &[Line], reporter: &mut Reporter<W>) -> Result<()> {
    for (index, line) in display::visible_entries(lines) {
        reporter.record(Event::EntryListed { index, line: line.into_owned() })?;
    }
    Ok(())
}

/// Report an operational failure and turn it into an exit code. Fatal
/// errors are passed up instead.
fn fail<W: Write>(reporter: &mut Reporter<W>, err: HostsError) -> Result<i32> {
    if err.is_fatal() {
        return Err(err.into());
    }
    let error = describe(err);
    tracing::error!(%error, "operation failed");
    reporter.record(Event::Failed { error })?;
    Ok(exit::OPERATIONAL_FAILURE)
}

/// The error with each of its causes, `outer: inner`.
fn describe(err: HostsError) -> String {
    format!("{:#}", anyhow::Error::new(err))
}
