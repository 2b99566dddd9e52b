use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammar category the parser attributed a run of tokens to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverageCategory {
    ActionSeq,
    Action,
    CondSeq,
    Cond,
    NumberSeq,
    Number,
    Color,
    Keyword,
    Unknown,
    Other(String),
}

impl CoverageCategory {
    pub fn parse(s: &str) -> Self {
        match s {
            "$ActionSeq" => CoverageCategory::ActionSeq,
            "$Action" => CoverageCategory::Action,
            "$CondSeq" => CoverageCategory::CondSeq,
            "$Cond" => CoverageCategory::Cond,
            "$NumberSeq" => CoverageCategory::NumberSeq,
            "$Number" => CoverageCategory::Number,
            "$Color" => CoverageCategory::Color,
            "$Keyword" => CoverageCategory::Keyword,
            "$UNK" => CoverageCategory::Unknown,
            other => CoverageCategory::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CoverageCategory::ActionSeq => "$ActionSeq",
            CoverageCategory::Action => "$Action",
            CoverageCategory::CondSeq => "$CondSeq",
            CoverageCategory::Cond => "$Cond",
            CoverageCategory::NumberSeq => "$NumberSeq",
            CoverageCategory::Number => "$Number",
            CoverageCategory::Color => "$Color",
            CoverageCategory::Keyword => "$Keyword",
            CoverageCategory::Unknown => "$UNK",
            CoverageCategory::Other(s) => s,
        }
    }
}

impl fmt::Display for CoverageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parser annotation: a category followed by the tokens it covered.
///
/// On the wire this is a flat array, `["$Action", "add", "red"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CoverageSpan {
    pub category: CoverageCategory,
    pub tokens: Vec<String>,
}

impl CoverageSpan {
    pub fn new(category: &str, tokens: &[&str]) -> Self {
        Self {
            category: CoverageCategory::parse(category),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for CoverageSpan {
    type Error = String;

    fn try_from(mut raw: Vec<String>) -> Result<Self, Self::Error> {
        if raw.is_empty() {
            return Err("coverage span has no category".to_string());
        }
        let category = CoverageCategory::parse(&raw.remove(0));
        Ok(Self {
            category,
            tokens: raw,
        })
    }
}

impl From<CoverageSpan> for Vec<String> {
    fn from(span: CoverageSpan) -> Self {
        let mut raw = Vec::with_capacity(span.tokens.len() + 1);
        raw.push(span.category.as_str().to_string());
        raw.extend(span.tokens);
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_from_json_array() {
        let spans: Vec<CoverageSpan> =
            serde_json::from_str(r#"[["$Action","add","red"],["$UNK","blorp"],["$Foo"]]"#)
                .unwrap();
        assert_eq!(spans[0], CoverageSpan::new("$Action", &["add", "red"]));
        assert_eq!(spans[1].category, CoverageCategory::Unknown);
        assert_eq!(spans[2].category, CoverageCategory::Other("$Foo".to_string()));
        assert!(spans[2].tokens.is_empty());
    }

    #[test]
    fn test_empty_span_is_rejected() {
        assert!(serde_json::from_str::<CoverageSpan>("[]").is_err());
    }
}
