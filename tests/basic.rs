use anyhow::Result;
use std::fs;
use tempfile::tempdir;

use rosty::args::{self, Action, Invocation, Operands};
use rosty::store::HostsFile;

#[test]
fn test_load_indexes_match_raw_positions() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("hosts");
    fs::write(&path, "# comment\n127.0.0.1 localhost\n\n::1 localhost\n")?;

    let lines = HostsFile::new(&path).load()?;
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], b"127.0.0.1 localhost");
    assert!(lines[2].is_empty());
    assert!(lines[4].is_empty());
    Ok(())
}

#[test]
fn test_parse_from_cli_tokens() {
    let tokens = vec!["add".to_string(), "fe80::1".to_string(), "router".to_string()];
    match args::parse(&tokens) {
        Invocation::Recognized { action: Action::Add, operands: Operands::Entry { ip, host } } => {
            assert_eq!(ip, "fe80::1");
            assert_eq!(host, "router");
        }
        other => panic!("unexpected invocation: {:?}", other),
    }
}
