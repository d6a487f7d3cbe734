//! # sniff-core
//!
//! Content type detection engine.
//!
//! Identifies the media type of a byte stream or file name with two
//! independent strategies, composed with a type hierarchy derived from the
//! freedesktop.org shared-mime-info vocabulary:
//!
//! - extension lookup ([`TypeDb::by_extension`], [`TypeDb::by_path`])
//! - binary signature ("magic") matching ([`TypeDb::by_magic`],
//!   [`TypeDb::all_by_magic`], and the `_reader` variants)
//!
//! Results are [`MediaType`] handles that can be queried further through
//! the registry: canonical names, aliases, parents, full lineage, and
//! text/image/audio/video/binary predicates.
//!
//! ```
//! use sniff_core::{Fallback, TypeDb};
//!
//! let db = TypeDb::with_defaults();
//!
//! let by_name = db.by_path("index.html", Fallback::None).unwrap();
//! assert_eq!(by_name, "text/html");
//!
//! let by_content = db.by_magic(b"\x89PNG\r\n\x1a\n...", Fallback::None).unwrap();
//! assert_eq!(by_content, "image/png");
//!
//! assert!(db.is_descendant("text/html", "text/plain"));
//! ```
//!
//! The registry is an owned value, not process state: construct one
//! [`TypeDb`] (usually [`TypeDb::with_defaults`]), share it read-only, and
//! reserve [`TypeDb::add`]/[`TypeDb::remove`] for single-threaded setup.

pub mod error;
pub mod hierarchy;
pub mod lookup;
pub mod magic;
pub mod media_type;
pub mod registry;

pub use error::{SniffError, SniffResult};
pub use lookup::{Fallback, is_binary_data};
pub use magic::{MatchOffset, MatchRule};
pub use media_type::{MediaType, OCTET_STREAM, TEXT_PLAIN};
pub use registry::{TypeDb, TypeDef, TypeRecord};
