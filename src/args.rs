//! Permissive parsing of the positional tokens.
//!
//! Nothing here ever fails: an unknown action or an unexpected number of
//! operands is carried forward and handled by whoever dispatches on it.

use std::fmt;

/// One of the supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append an `<ip> <host>` line.
    Add,
    /// List the indexed lines.
    Get,
    /// Remove one line by index.
    Del,
}

impl Action {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "add" => Some(Action::Add),
            "get" => Some(Action::Get),
            "del" => Some(Action::Del),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Add => "add",
            Action::Get => "get",
            Action::Del => "del",
        };
        f.write_str(name)
    }
}

/// Operands following the action token, selected by token count alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operands {
    /// One token or four and more.
    None,
    /// Exactly two tokens: the second is a line index, unparsed.
    Index(String),
    /// Exactly three tokens: address and name of a new entry.
    Entry { ip: String, host: String },
}

/// Outcome of parsing the raw tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No tokens were given at all.
    Empty,
    /// The first token named a known action.
    Recognized { action: Action, operands: Operands },
    /// The first token was not an action.
    Unrecognized { operands: Operands },
}

impl Invocation {
    /// The recognized action, if any.
    pub fn action(&self) -> Option<Action> {
        match self {
            Invocation::Recognized { action, .. } => Some(*action),
            _ => None,
        }
    }
}

/// Parse the tokens that follow the program name.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Invocation {
    let Some(first) = tokens.first() else {
        return Invocation::Empty;
    };

    let operands = match tokens {
        [_, index] => Operands::Index(index.as_ref().to_string()),
        [_, ip, host] => Operands::Entry {
            ip: ip.as_ref().to_string(),
            host: host.as_ref().to_string(),
        },
        _ => Operands::None,
    };

    let invocation = match Action::from_token(first.as_ref()) {
        Some(action) => Invocation::Recognized { action, operands },
        None => Invocation::Unrecognized { operands },
    };
    tracing::debug!(count = tokens.len(), ?invocation, "parsed arguments");
    invocation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let tokens: [&str; 0] = [];
        assert_eq!(parse(&tokens), Invocation::Empty);
    }

    #[test]
    fn test_action_alone() {
        assert_eq!(
            parse(&["get"]),
            Invocation::Recognized { action: Action::Get, operands: Operands::None }
        );
    }

    #[test]
    fn test_two_tokens_give_index() {
        assert_eq!(
            parse(&["del", "4"]),
            Invocation::Recognized {
                action: Action::Del,
                operands: Operands::Index("4".into()),
            }
        );
    }

    #[test]
    fn test_three_tokens_give_entry() {
        assert_eq!(
            parse(&["add", "127.0.0.1", "app.local"]),
            Invocation::Recognized {
                action: Action::Add,
                operands: Operands::Entry { ip: "127.0.0.1".into(), host: "app.local".into() },
            }
        );
    }

    #[test]
    fn test_operand_count_is_not_checked_against_action() {
        // `get` with an entry and `add` with an index are both accepted.
        assert_eq!(parse(&["get", "a", "b"]).action(), Some(Action::Get));
        assert_eq!(
            parse(&["add", "1"]),
            Invocation::Recognized { action: Action::Add, operands: Operands::Index("1".into()) }
        );
    }

    #[test]
    fn test_four_or_more_tokens_drop_operands() {
        assert_eq!(
            parse(&["add", "1.1.1.1", "one", "extra"]),
            Invocation::Recognized { action: Action::Add, operands: Operands::None }
        );
    }

    #[test]
    fn test_unknown_action_is_silent() {
        assert_eq!(parse(&["foo"]), Invocation::Unrecognized { operands: Operands::None });
        assert_eq!(
            parse(&["ADD", "x"]),
            Invocation::Unrecognized { operands: Operands::Index("x".into()) }
        );
        assert_eq!(parse(&["foo"]).action(), None);
    }
}
