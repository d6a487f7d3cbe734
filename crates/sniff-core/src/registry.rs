//! The type registry: every known name, the extension index, and the
//! priority-ordered magic rule list.

use std::collections::HashMap;
use std::sync::Arc;

use crate::magic::MatchRule;

/// One canonical media type as stored in the registry.
///
/// Records are immutable once registered. Alias names are extra keys in the
/// registry pointing at the same record, so looking up an alias yields the
/// record of its canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    name: String,
    extensions: Vec<String>,
    parents: Vec<String>,
    aliases: Vec<String>,
    comment: Option<String>,
}

impl TypeRecord {
    /// The canonical name (`media/subtype`, lowercase).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File extensions in registration order (first claim on an extension
    /// wins in the extension index).
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Immediate declared parents. An empty list means the type implicitly
    /// inherits from `application/octet-stream` (unless it is that type).
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Alternate names resolving to this record.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Human-readable description, if any.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Builder-style definition handed to [`TypeDb::add`].
///
/// ```
/// use sniff_core::{MatchRule, TypeDb, TypeDef};
///
/// let mut db = TypeDb::new();
/// db.add(
///     TypeDef::new("application/x-test")
///         .extensions(["tst"])
///         .parents(["application/xml"])
///         .comment("test type")
///         .rule(MatchRule::at(0, *b"TEST")),
/// );
/// assert!(db.contains("application/x-test"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeDef {
    pub(crate) name: String,
    pub(crate) extensions: Vec<String>,
    pub(crate) parents: Vec<String>,
    pub(crate) aliases: Vec<String>,
    pub(crate) comment: Option<String>,
    pub(crate) magic: Vec<MatchRule>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    pub fn parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents.extend(parents.into_iter().map(Into::into));
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Adds one top-level magic alternative.
    pub fn rule(mut self, rule: MatchRule) -> Self {
        self.magic.push(rule);
        self
    }

    /// Adds several top-level magic alternatives.
    pub fn magic(mut self, rules: impl IntoIterator<Item = MatchRule>) -> Self {
        self.magic.extend(rules);
        self
    }
}

/// One prioritized magic block: a type name and its top-level alternatives.
#[derive(Debug, Clone)]
pub(crate) struct MagicBlock {
    pub(crate) name: String,
    pub(crate) rules: Vec<MatchRule>,
}

/// The owned registry context: the type map, the extension index, and the
/// magic rule list.
///
/// A `TypeDb` is built once (usually via [`TypeDb::with_defaults`]) and then
/// queried; `add`/`remove` exist for setup and test code. Nothing here is
/// process-global: tests construct an isolated instance each, and hosts that
/// mutate a shared instance concurrently must serialize access themselves.
#[derive(Debug, Clone)]
pub struct TypeDb {
    /// Every known name (canonical or alias) to its record. Alias keys
    /// share the canonical record via `Arc`.
    types: HashMap<String, Arc<TypeRecord>>,
    /// Extension to canonical type name, first registration wins.
    extensions: HashMap<String, String>,
    /// Magic blocks, highest priority first. `add` prepends, so custom
    /// rules outrank the built-in table.
    magic: Vec<MagicBlock>,
    /// Longest prefix any registered rule can inspect.
    max_magic_extent: usize,
}

impl TypeDb {
    /// Creates an empty registry with no known types.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            extensions: HashMap::new(),
            magic: Vec::new(),
            max_magic_extent: 0,
        }
    }

    /// Creates a registry populated from the built-in [`sniff_db`] tables.
    pub fn with_defaults() -> Self {
        let mut db = Self::new();
        for def in sniff_db::TYPES {
            db.insert_record(
                def.name.to_string(),
                def.extensions.iter().map(|e| e.to_string()).collect(),
                def.parents.iter().map(|p| p.to_string()).collect(),
                def.aliases.iter().map(|a| a.to_string()).collect(),
                def.comment.map(str::to_string),
            );
        }
        // Table order is the built-in priority order; append to keep it.
        for entry in sniff_db::MAGIC {
            let rules: Vec<MatchRule> = entry.matches.iter().map(convert_match).collect();
            db.track_extent(&rules);
            db.magic.push(MagicBlock {
                name: entry.mime_type.to_string(),
                rules,
            });
        }
        db
    }

    /// Registers (or replaces) a type.
    ///
    /// The name is lowercased and trimmed. Aliases become additional lookup
    /// keys for the same record. Extensions are claimed first-registered-wins:
    /// an extension already mapped to another type keeps its existing
    /// mapping. Magic rules, if any, are prepended so they outrank everything
    /// registered earlier. Registration always succeeds; re-registering a
    /// name simply replaces its record.
    pub fn add(&mut self, def: TypeDef) {
        let name = fold_name(&def.name);
        if name.is_empty() {
            return;
        }
        let extensions: Vec<String> = def.extensions.iter().map(|e| fold_extension(e)).collect();
        let aliases: Vec<String> = def.aliases.iter().map(|a| fold_name(a)).collect();
        let parents: Vec<String> = def.parents.iter().map(|p| fold_name(p)).collect();
        self.insert_record(name.clone(), extensions, parents, aliases, def.comment);
        if !def.magic.is_empty() {
            self.track_extent(&def.magic);
            self.magic.insert(
                0,
                MagicBlock {
                    name,
                    rules: def.magic,
                },
            );
        }
    }

    /// Removes a type: its record, its alias keys, its extension-index
    /// entries, and its magic rules. Unknown names are a no-op.
    pub fn remove(&mut self, name: impl AsRef<str>) {
        let name = fold_name(name.as_ref());
        self.types
            .retain(|_, record| record.name != name);
        self.extensions.retain(|_, mapped| *mapped != name);
        self.magic.retain(|block| block.name != name);
        self.max_magic_extent = self
            .magic
            .iter()
            .flat_map(|block| block.rules.iter())
            .map(MatchRule::extent)
            .max()
            .unwrap_or(0);
    }

    /// Looks up the record for a canonical name or alias (case-folded).
    pub fn get(&self, name: impl AsRef<str>) -> Option<&TypeRecord> {
        self.types.get(&fold_name(name.as_ref())).map(Arc::as_ref)
    }

    /// True if the name (canonical or alias) is registered.
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.types.contains_key(&fold_name(name.as_ref()))
    }

    /// Number of canonical types (aliases not counted).
    pub fn type_count(&self) -> usize {
        self.types
            .iter()
            .filter(|(key, record)| **key == record.name)
            .count()
    }

    /// Number of registered magic blocks.
    pub fn magic_count(&self) -> usize {
        self.magic.len()
    }

    pub(crate) fn record(&self, folded: &str) -> Option<&Arc<TypeRecord>> {
        self.types.get(folded)
    }

    pub(crate) fn extension_target(&self, folded: &str) -> Option<&str> {
        self.extensions.get(folded).map(String::as_str)
    }

    pub(crate) fn magic_blocks(&self) -> &[MagicBlock] {
        &self.magic
    }

    pub(crate) fn max_magic_extent(&self) -> usize {
        self.max_magic_extent
    }

    fn insert_record(
        &mut self,
        name: String,
        extensions: Vec<String>,
        parents: Vec<String>,
        aliases: Vec<String>,
        comment: Option<String>,
    ) {
        let record = Arc::new(TypeRecord {
            name: name.clone(),
            extensions: extensions.clone(),
            parents,
            aliases: aliases.clone(),
            comment,
        });
        for alias in &aliases {
            if !alias.is_empty() {
                self.types.insert(alias.clone(), Arc::clone(&record));
            }
        }
        self.types.insert(name.clone(), record);
        for ext in extensions {
            if !ext.is_empty() {
                // First registration wins; later claims are ignored.
                self.extensions.entry(ext).or_insert_with(|| name.clone());
            }
        }
    }

    fn track_extent(&mut self, rules: &[MatchRule]) {
        for rule in rules {
            self.max_magic_extent = self.max_magic_extent.max(rule.extent());
        }
    }
}

impl Default for TypeDb {
    fn default() -> Self {
        Self::with_defaults()
    }
}

pub(crate) fn fold_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

pub(crate) fn fold_extension(ext: &str) -> String {
    let ext = ext.trim().strip_prefix('.').unwrap_or(ext.trim());
    ext.to_ascii_lowercase()
}

fn convert_match(m: &sniff_db::Match) -> MatchRule {
    let rule = if m.start == m.end {
        MatchRule::at(m.start as usize, m.value)
    } else {
        MatchRule::within(m.start as usize, m.end as usize, m.value)
    };
    rule.and_any(m.children.iter().map(convert_match))
}
