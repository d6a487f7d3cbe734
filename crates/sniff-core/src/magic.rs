//! Content sniffing ("magic") rule trees and their evaluation.
//!
//! Evaluation is a pure function of `(sample, rule)`: every node computes
//! its own absolute offsets from the start of the sample, children re-read
//! the same sample independently, and nothing is mutated. Out-of-range
//! offsets and literals longer than the sample are a negative match, never
//! an error.

/// Where a rule's literal must be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOffset {
    /// The literal starts exactly at this byte offset.
    At(usize),
    /// The literal starts anywhere in `start..=end`, i.e. it is searched
    /// for inside the window `start .. end + literal.len()`.
    Within { start: usize, end: usize },
}

/// One node of a magic rule tree.
///
/// A node matches when its own literal test passes and, if `children` is
/// non-empty, at least one child matches too. Sibling nodes at any level
/// are a disjunction; a child list is the conjunctive refinement
/// "own literal AND (child A OR child B OR ...)".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRule {
    offset: MatchOffset,
    value: Vec<u8>,
    children: Vec<MatchRule>,
}

impl MatchRule {
    /// Rule matching `value` exactly at byte `offset`.
    pub fn at(offset: usize, value: impl Into<Vec<u8>>) -> Self {
        Self {
            offset: MatchOffset::At(offset),
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Rule matching `value` starting anywhere in `start..=end`.
    pub fn within(start: usize, end: usize, value: impl Into<Vec<u8>>) -> Self {
        Self {
            offset: MatchOffset::Within { start, end },
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Adds a conjunctive refinement: the rule now also requires at least
    /// one of `children` to match.
    pub fn and_any(mut self, children: impl IntoIterator<Item = MatchRule>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn offset(&self) -> MatchOffset {
        self.offset
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn children(&self) -> &[MatchRule] {
        &self.children
    }

    /// Evaluates this rule tree against a byte sample.
    pub fn matches(&self, sample: &[u8]) -> bool {
        let own = match self.offset {
            MatchOffset::At(offset) => {
                let end = offset.saturating_add(self.value.len());
                sample.get(offset..end) == Some(self.value.as_slice())
            }
            MatchOffset::Within { start, end } => {
                let window_end = end.saturating_add(self.value.len()).min(sample.len());
                match sample.get(start..window_end) {
                    Some(window) if window.len() >= self.value.len() && !self.value.is_empty() => {
                        window
                            .windows(self.value.len())
                            .any(|candidate| candidate == self.value.as_slice())
                    }
                    _ => false,
                }
            }
        };
        own && (self.children.is_empty()
            || self.children.iter().any(|child| child.matches(sample)))
    }

    /// The furthest byte past the start of the sample this rule tree can
    /// inspect. Drives how large a prefix readers must supply.
    pub(crate) fn extent(&self) -> usize {
        let own = match self.offset {
            MatchOffset::At(offset) => offset.saturating_add(self.value.len()),
            MatchOffset::Within { end, .. } => end.saturating_add(self.value.len()),
        };
        self.children
            .iter()
            .map(MatchRule::extent)
            .fold(own, usize::max)
    }
}

/// True if any rule in a top-level alternative list matches.
pub(crate) fn any_matches(sample: &[u8], rules: &[MatchRule]) -> bool {
    rules.iter().any(|rule| rule.matches(sample))
}
