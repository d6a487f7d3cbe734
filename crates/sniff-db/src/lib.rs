//! Built-in media type and magic tables for sniff.
//!
//! This crate provides the record definitions used by sniff-core to populate
//! a default type registry: one entry per canonical media type (extensions,
//! parents, aliases, comment) and a priority-ordered list of content-sniffing
//! rules ("magic").
//!
//! # Usage
//!
//! ```
//! use sniff_db::TYPES;
//!
//! for def in TYPES {
//!     println!("{} ({} extensions)", def.name, def.extensions.len());
//! }
//! ```
//!
//! The table content is a curated subset of the freedesktop.org
//! shared-mime-info vocabulary, decoded offline into these static records.
//! `MAGIC` is ordered highest priority first; the hand-maintained OOXML
//! range probes sit at the front because the upstream vocabulary cannot
//! express them (the ranges are larger than it accepts).

mod table;

pub use table::{MAGIC, TYPES};

/// One canonical media type with its file extensions, immediate parents,
/// alternate names, and human-readable comment.
///
/// `extensions` order is meaningful: when two types claim the same
/// extension, the first registration wins, so extensions listed earlier in
/// the table take effect earlier.
#[derive(Debug, Clone, Copy)]
pub struct TypeDef {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub parents: &'static [&'static str],
    pub aliases: &'static [&'static str],
    pub comment: Option<&'static str>,
}

/// A prioritized magic block: all top-level match alternatives for one type.
///
/// A block matches when any one of its `matches` alternatives matches.
#[derive(Debug, Clone, Copy)]
pub struct MagicEntry {
    pub mime_type: &'static str,
    pub matches: &'static [Match],
}

/// One node of a magic rule tree.
///
/// The literal `value` must appear exactly at byte offset `start` when
/// `start == end`, or anywhere within `start..end + value.len()` otherwise.
/// A non-empty `children` list is a conjunctive refinement: the node only
/// matches if at least one child also matches against the same sample.
#[derive(Debug, Clone, Copy)]
pub struct Match {
    pub start: u32,
    pub end: u32,
    pub value: &'static [u8],
    pub children: &'static [Match],
}

/// Returns the total number of built-in type definitions.
pub fn type_count() -> usize {
    TYPES.len()
}

/// Returns the total number of built-in magic blocks.
pub fn magic_count() -> usize {
    MAGIC.len()
}

/// Looks up a built-in type definition by canonical name.
pub fn get_type(name: &str) -> Option<&'static TypeDef> {
    TYPES.iter().find(|def| def.name == name)
}
