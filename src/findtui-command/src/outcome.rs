//! Result of an interactive session.

use serde::{Deserialize, Serialize};

/// How a command-building session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "command", rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The user left without accepting a command.
    Cancelled,
    /// The user accepted this command line.
    Confirmed(String),
}

impl SessionOutcome {
    /// The accepted command, if any.
    pub fn command(&self) -> Option<&str> {
        match self {
            SessionOutcome::Cancelled => None,
            SessionOutcome::Confirmed(cmd) => Some(cmd),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, SessionOutcome::Confirmed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let done = SessionOutcome::Confirmed("find .".into());
        assert!(done.is_confirmed());
        assert_eq!(done.command(), Some("find ."));
        assert_eq!(SessionOutcome::Cancelled.command(), None);
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_string(&SessionOutcome::Confirmed("find .".into())).unwrap();
        assert_eq!(json, r#"{"status":"confirmed","command":"find ."}"#);
        let json = serde_json::to_string(&SessionOutcome::Cancelled).unwrap();
        assert_eq!(json, r#"{"status":"cancelled"}"#);
    }
}
