//! Issue and suggestion records exchanged with the host.

use serde::{Deserialize, Serialize};

/// Category of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Spelling,
    Grammar,
    Tone,
    Clarity,
}

/// Provenance of an issue: synchronous on-device analysis or the
/// asynchronous external-model tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Local,
    Ai,
}

/// Half-open byte span into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A single finding against a span of the source text.
///
/// `position` is valid against the text the issue was produced from, at
/// the moment of production; re-deriving after edits is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub kind: IssueKind,
    pub tier: Tier,
    pub label: String,
    pub original: String,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
    pub explanation: String,
    pub position: Span,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Display label for an issue of the given kind and tier.
pub fn issue_label(kind: IssueKind, tier: Tier) -> String {
    let base = match kind {
        IssueKind::Spelling => "Spelling",
        IssueKind::Grammar => "Grammar",
        IssueKind::Tone => "Tone",
        IssueKind::Clarity => "Clarity",
    };
    match tier {
        Tier::Local => base.to_string(),
        Tier::Ai => format!("{} (AI)", base),
    }
}

/// A correction candidate with its combined suggestion score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub word: String,
    pub score: f64,
}

/// Result of the single-word check path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCheck {
    pub misspelled: bool,
    pub suggestions: Vec<ScoredCandidate>,
}

impl WordCheck {
    /// A word the checker has no complaint about.
    pub fn clean() -> Self {
        Self {
            misspelled: false,
            suggestions: Vec::new(),
        }
    }
}
