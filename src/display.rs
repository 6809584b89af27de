use std::borrow::Cow;

use crate::store::Line;

/// Lines worth showing, paired with their position in the file.
///
/// Empty lines are skipped but still consume an index, so the numbers shown
/// are the ones `del` expects. Bytes that are not UTF-8 are shown as U+FFFD.
pub fn visible_entries(lines: &[Line]) -> impl Iterator<Item = (usize, Cow<'_, str>)> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| (index, String::from_utf8_lossy(line)))
}

/// Human rendering of one listed entry.
pub fn format_entry(index: usize, line: &str) -> String {
    format!("{} -> {}", index, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<Line> {
        raw.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_gaps_keep_their_index() {
        let lines = lines(&["a", "", "b"]);
        let shown: Vec<String> = visible_entries(&lines)
            .map(|(i, line)| format_entry(i, &line))
            .collect();
        assert_eq!(shown, vec!["0 -> a", "2 -> b"]);
    }

    #[test]
    fn test_trailing_entry_is_hidden() {
        let lines = lines(&["127.0.0.1 localhost", ""]);
        assert_eq!(visible_entries(&lines).count(), 1);
    }

    #[test]
    fn test_whitespace_only_lines_are_shown() {
        let lines = lines(&[" "]);
        let shown: Vec<(usize, String)> =
            visible_entries(&lines).map(|(i, line)| (i, line.into_owned())).collect();
        assert_eq!(shown, vec![(0, " ".to_string())]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let lines = vec![b"# caf\xe9".to_vec()];
        let (index, line) = visible_entries(&lines).next().unwrap();
        assert_eq!(index, 0);
        assert_eq!(line, "# caf\u{FFFD}");
    }
}
