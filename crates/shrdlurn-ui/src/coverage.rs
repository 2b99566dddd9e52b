//! Colouring of parser coverage spans for the define dialog.

use shrdlurn_core::{CoverageCategory, CoverageSpan};

/// How well the parser understood a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Parsed into an action, condition or number.
    Good,
    /// A colour or keyword literal.
    Literal,
    /// Not understood.
    Bad,
}

pub fn tone_for(category: &CoverageCategory) -> Tone {
    match category {
        CoverageCategory::ActionSeq
        | CoverageCategory::Action
        | CoverageCategory::CondSeq
        | CoverageCategory::Cond
        | CoverageCategory::NumberSeq
        | CoverageCategory::Number => Tone::Good,
        CoverageCategory::Color | CoverageCategory::Keyword => Tone::Literal,
        CoverageCategory::Unknown | CoverageCategory::Other(_) => Tone::Bad,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub tone: Tone,
    /// Tokens of the span, each followed by a single space.
    pub text: String,
}

pub fn categorize(spans: &[CoverageSpan]) -> Vec<Highlight> {
    spans
        .iter()
        .map(|span| Highlight {
            tone: tone_for(&span.category),
            text: span.tokens.iter().map(|t| format!("{t} ")).collect(),
        })
        .collect()
}

fn open_tag(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => "<span class='color-good'>",
        Tone::Literal => "<span style='color:blue;'>",
        Tone::Bad => "<span style='color:red;'>",
    }
}

pub fn highlight_markup(highlights: &[Highlight]) -> String {
    let mut out = String::new();
    for h in highlights {
        out.push_str(open_tag(h.tone));
        out.push_str(&html_escape::encode_text(&h.text));
        out.push_str("</span>");
    }
    out
}

/// `categorize` followed by `highlight_markup`.
pub fn intel_highlight(spans: &[CoverageSpan]) -> String {
    highlight_markup(&categorize(spans))
}
