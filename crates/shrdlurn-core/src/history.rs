use serde::{Deserialize, Serialize};

use crate::block::Block;

/// How the player resolved a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepKind {
    Accept,
    Reject,
    Other(String),
}

impl StepKind {
    pub fn as_str(&self) -> &str {
        match self {
            StepKind::Accept => "accept",
            StepKind::Reject => "reject",
            StepKind::Other(s) => s,
        }
    }
}

impl From<String> for StepKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "accept" => StepKind::Accept,
            "reject" => StepKind::Reject,
            _ => StepKind::Other(s),
        }
    }
}

impl From<StepKind> for String {
    fn from(kind: StepKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One entry of the command history, oldest first in a history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "stepN")]
    pub step_n: u32,
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub query: String,
    /// Board state after this step, when the game kept it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Vec<Block>>,
}

impl HistoryEntry {
    pub fn new(step_n: u32, kind: StepKind, query: &str) -> Self {
        Self {
            step_n,
            kind,
            query: query.to_string(),
            state: None,
        }
    }

    pub fn with_state(mut self, state: Vec<Block>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn is_accepted(&self) -> bool {
        self.kind == StepKind::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_json() {
        let entries: Vec<HistoryEntry> = serde_json::from_str(
            r#"[{"stepN":1,"type":"accept","query":"a"},{"stepN":2,"type":"define","query":"b"}]"#,
        )
        .unwrap();
        assert!(entries[0].is_accepted());
        assert_eq!(entries[1].kind, StepKind::Other("define".to_string()));
        assert!(entries[1].state.is_none());

        let json = serde_json::to_string(&entries[0]).unwrap();
        assert_eq!(json, r#"{"stepN":1,"type":"accept","query":"a"}"#);
    }
}
