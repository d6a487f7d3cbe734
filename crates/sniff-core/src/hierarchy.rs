//! Hierarchy and alias resolution over the registry.
//!
//! All queries here are total except [`TypeDb::canonical`]: comparing or
//! walking an unknown name degrades to `false`/empty instead of erroring,
//! since callers routinely probe arbitrary strings.

use std::collections::HashSet;

use crate::error::{SniffError, SniffResult};
use crate::media_type::{MediaType, OCTET_STREAM};
use crate::registry::{TypeDb, fold_name};

impl TypeDb {
    /// Resolves a name (canonical or alias, case-folded) to its canonical
    /// type. The one strict lookup: unknown names are an error.
    pub fn canonical(&self, name: impl AsRef<str>) -> SniffResult<MediaType> {
        let folded = fold_name(MediaType::new(name).essence());
        match self.record(&folded) {
            Some(record) => Ok(MediaType::new(record.name())),
            None => Err(SniffError::UnknownType(folded)),
        }
    }

    /// The alternate names of a type; empty for unknown names or types
    /// without aliases.
    pub fn aliases(&self, name: impl AsRef<str>) -> Vec<MediaType> {
        self.get(name)
            .map(|record| record.aliases().iter().map(MediaType::new).collect())
            .unwrap_or_default()
    }

    /// True if the spelled name resolves to a record under a different
    /// canonical name.
    pub fn is_alias(&self, name: impl AsRef<str>) -> bool {
        let folded = fold_name(MediaType::new(name).essence());
        self.record(&folded)
            .is_some_and(|record| record.name() != folded)
    }

    /// The human-readable comment of a type, if registered and present.
    pub fn comment(&self, name: impl AsRef<str>) -> Option<String> {
        self.get(name)
            .and_then(|record| record.comment().map(str::to_string))
    }

    /// The registered file extensions of a type; empty for unknown names.
    pub fn extensions(&self, name: impl AsRef<str>) -> Vec<String> {
        self.get(name)
            .map(|record| record.extensions().to_vec())
            .unwrap_or_default()
    }

    /// The immediate parents of a type.
    ///
    /// A type with no declared parents gets the single synthesized parent
    /// `application/octet-stream`, unless it is that type itself. This
    /// guarantees every type except the universal fallback has at least one
    /// ancestor. Unknown names follow the same rule, so they still sit
    /// under the universal fallback.
    pub fn parents(&self, name: impl AsRef<str>) -> Vec<MediaType> {
        let essence = fold_name(MediaType::new(name).essence());
        let declared: Vec<MediaType> = self
            .record(&essence)
            .map(|record| record.parents().iter().map(MediaType::new).collect())
            .unwrap_or_default();
        if declared.is_empty() && essence != OCTET_STREAM {
            return vec![MediaType::octet_stream()];
        }
        declared
    }

    /// The full inheritance lineage: the type itself first, then every
    /// ancestor, deduplicated by canonical name.
    ///
    /// Tolerates diamond-shaped parent graphs (a shared grandparent appears
    /// once) and breaks cycles introduced through `add`, so it always
    /// terminates.
    pub fn lineage(&self, name: impl AsRef<str>) -> Vec<MediaType> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        self.walk_lineage(MediaType::new(name).essence(), &mut out, &mut seen);
        out
    }

    fn walk_lineage(&self, essence: &str, out: &mut Vec<MediaType>, seen: &mut HashSet<String>) {
        let folded = fold_name(essence);
        // Dedup on the canonical spelling so an alias and its canonical
        // name count as one node.
        let key = self
            .record(&folded)
            .map(|record| record.name().to_string())
            .unwrap_or(folded);
        if !seen.insert(key.clone()) {
            return;
        }
        out.push(MediaType::new(&key));
        for parent in self.parents(&key) {
            self.walk_lineage(parent.essence(), out, seen);
        }
    }

    /// True if `child` has `ancestor` in its lineage (including itself).
    /// False, never an error, when either side is unknown.
    pub fn is_descendant(&self, child: impl AsRef<str>, ancestor: impl AsRef<str>) -> bool {
        let (Ok(child), Ok(ancestor)) = (self.canonical(child), self.canonical(ancestor)) else {
            return false;
        };
        self.lineage(&child).contains(&ancestor)
    }

    /// True if `parent` is an *immediate* parent of `child` (direct edge
    /// only, including the synthesized octet-stream parent). For the
    /// transitive check use [`is_descendant`](TypeDb::is_descendant).
    pub fn is_child(&self, child: impl AsRef<str>, parent: impl AsRef<str>) -> bool {
        let (Ok(child), Ok(parent)) = (self.canonical(child), self.canonical(parent)) else {
            return false;
        };
        self.parents(&child)
            .iter()
            .any(|declared| self.canonical(declared).map(|c| c == parent).unwrap_or(*declared == parent))
    }

    /// Registry-aware equality: an exact case-insensitive essence match
    /// short-circuits true; otherwise both sides are canonicalized and
    /// compared, which makes an alias equal to its canonical name. Unknown
    /// names only ever equal their own spelling.
    pub fn same_type(&self, a: &MediaType, b: &MediaType) -> bool {
        if a == b {
            return true;
        }
        match (self.canonical(a), self.canonical(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeDef;

    fn hierarchy_db() -> TypeDb {
        let mut db = TypeDb::new();
        db.add(TypeDef::new("application/octet-stream"));
        db.add(TypeDef::new("text/plain"));
        db.add(TypeDef::new("text/html").parents(["text/plain"]));
        db.add(TypeDef::new("text/x-csrc").parents(["text/plain"]));
        db.add(TypeDef::new("text/x-java").parents(["text/x-csrc"]));
        db.add(
            TypeDef::new("application/xml")
                .parents(["text/plain"])
                .aliases(["text/xml"]),
        );
        db.add(TypeDef::new("application/xhtml+xml").parents(["application/xml", "text/html"]));
        db
    }

    // ---- canonical ----

    #[test]
    fn canonical_returns_own_name() {
        let db = hierarchy_db();
        assert_eq!(db.canonical("text/html").unwrap(), "text/html");
    }

    #[test]
    fn canonical_resolves_aliases() {
        let db = hierarchy_db();
        assert_eq!(db.canonical("text/xml").unwrap(), "application/xml");
    }

    #[test]
    fn canonical_case_folds() {
        let db = hierarchy_db();
        assert_eq!(db.canonical("TEXT/HTML; charset=utf-8").unwrap(), "text/html");
    }

    #[test]
    fn canonical_unknown_is_an_error() {
        let db = hierarchy_db();
        assert_eq!(
            db.canonical("application/x-missing"),
            Err(SniffError::UnknownType("application/x-missing".to_string()))
        );
    }

    // ---- aliases ----

    #[test]
    fn aliases_of_canonical_name() {
        let db = hierarchy_db();
        assert_eq!(db.aliases("application/xml"), vec![MediaType::new("text/xml")]);
    }

    #[test]
    fn aliases_empty_for_unknown() {
        let db = hierarchy_db();
        assert!(db.aliases("application/x-missing").is_empty());
    }

    #[test]
    fn is_alias_distinguishes_spellings() {
        let db = hierarchy_db();
        assert!(db.is_alias("text/xml"));
        assert!(!db.is_alias("application/xml"));
        assert!(!db.is_alias("application/x-missing"));
    }

    // ---- parents ----

    #[test]
    fn parents_returns_declared_list() {
        let db = hierarchy_db();
        assert_eq!(db.parents("text/html"), vec![MediaType::text_plain()]);
    }

    #[test]
    fn parents_synthesizes_octet_stream() {
        let db = hierarchy_db();
        assert_eq!(db.parents("text/plain"), vec![MediaType::octet_stream()]);
    }

    #[test]
    fn octet_stream_has_no_parents() {
        let db = hierarchy_db();
        assert!(db.parents("application/octet-stream").is_empty());
    }

    #[test]
    fn unknown_types_sit_under_octet_stream() {
        let db = hierarchy_db();
        assert_eq!(
            db.parents("application/x-missing"),
            vec![MediaType::octet_stream()]
        );
    }

    // ---- lineage ----

    #[test]
    fn lineage_is_self_first() {
        let db = hierarchy_db();
        let lineage = db.lineage("text/html");
        assert_eq!(
            lineage,
            vec![
                MediaType::new("text/html"),
                MediaType::text_plain(),
                MediaType::octet_stream(),
            ]
        );
    }

    #[test]
    fn lineage_contains_self_exactly_once() {
        let db = hierarchy_db();
        for name in ["text/html", "text/x-java", "application/xhtml+xml"] {
            let lineage = db.lineage(name);
            let hits = lineage.iter().filter(|t| *t == &MediaType::new(name)).count();
            assert_eq!(hits, 1, "{} should appear exactly once", name);
        }
    }

    #[test]
    fn lineage_deduplicates_diamonds() {
        // xhtml+xml reaches text/plain via application/xml and via text/html.
        let db = hierarchy_db();
        let lineage = db.lineage("application/xhtml+xml");
        let plains = lineage.iter().filter(|t| **t == "text/plain").count();
        assert_eq!(plains, 1);
        let octets = lineage.iter().filter(|t| **t == OCTET_STREAM).count();
        assert_eq!(octets, 1);
    }

    #[test]
    fn lineage_terminates_on_cycles() {
        let mut db = TypeDb::new();
        db.add(TypeDef::new("application/x-a").parents(["application/x-b"]));
        db.add(TypeDef::new("application/x-b").parents(["application/x-a"]));
        let lineage = db.lineage("application/x-a");
        assert_eq!(lineage.len(), 2, "each cycle member appears once: {:?}", lineage);
    }

    #[test]
    fn lineage_of_alias_starts_at_canonical() {
        let db = hierarchy_db();
        let lineage = db.lineage("text/xml");
        assert_eq!(lineage[0], "application/xml");
    }

    #[test]
    fn lineage_of_unknown_is_self_plus_fallback() {
        let db = hierarchy_db();
        assert_eq!(
            db.lineage("application/x-missing"),
            vec![
                MediaType::new("application/x-missing"),
                MediaType::octet_stream(),
            ]
        );
    }

    // ---- descendant / child ----

    #[test]
    fn is_descendant_is_transitive() {
        let db = hierarchy_db();
        assert!(db.is_descendant("text/html", "text/plain"));
        assert!(db.is_descendant("text/x-java", "text/plain"));
        assert!(db.is_descendant("text/x-java", "application/octet-stream"));
    }

    #[test]
    fn is_descendant_includes_self() {
        let db = hierarchy_db();
        assert!(db.is_descendant("text/plain", "text/plain"));
    }

    #[test]
    fn is_descendant_false_for_unknown_sides() {
        let db = hierarchy_db();
        assert!(!db.is_descendant("application/x-missing", "text/plain"));
        assert!(!db.is_descendant("text/html", "application/x-missing"));
    }

    #[test]
    fn is_child_is_direct_only() {
        let db = hierarchy_db();
        assert!(db.is_child("text/x-java", "text/x-csrc"));
        assert!(!db.is_child("text/x-java", "text/plain"));
        assert!(db.is_descendant("text/x-java", "text/plain"));
    }

    #[test]
    fn is_child_sees_synthesized_parent() {
        let db = hierarchy_db();
        assert!(db.is_child("text/plain", "application/octet-stream"));
    }

    #[test]
    fn is_child_accepts_alias_spellings() {
        let db = hierarchy_db();
        assert!(db.is_child("application/xhtml+xml", "text/xml"));
    }

    // ---- same_type ----

    #[test]
    fn same_type_short_circuits_on_essence() {
        let db = hierarchy_db();
        assert!(db.same_type(
            &MediaType::new("TEXT/HTML"),
            &MediaType::new("text/html; charset=utf-8")
        ));
    }

    #[test]
    fn same_type_folds_aliases() {
        let db = hierarchy_db();
        assert!(db.same_type(&MediaType::new("text/xml"), &MediaType::new("application/xml")));
    }

    #[test]
    fn same_type_false_for_garbage() {
        let db = hierarchy_db();
        assert!(!db.same_type(&MediaType::new("not a type"), &MediaType::new("text/html")));
        assert!(db.same_type(&MediaType::new("not a type"), &MediaType::new("NOT A TYPE")));
    }

    // ---- comment / extensions ----

    #[test]
    fn comment_and_extensions_lookups() {
        let mut db = hierarchy_db();
        db.add(
            TypeDef::new("application/x-doc")
                .extensions(["doc1", "doc2"])
                .comment("documented"),
        );
        assert_eq!(db.comment("application/x-doc").as_deref(), Some("documented"));
        assert_eq!(db.extensions("application/x-doc"), ["doc1", "doc2"]);
        assert_eq!(db.comment("application/x-missing"), None);
        assert!(db.extensions("application/x-missing").is_empty());
    }
}
