//! Lookup entry points: by extension, by path, and by content sniffing.

use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::magic::any_matches;
use crate::media_type::{MediaType, TEXT_PLAIN};
use crate::registry::{TypeDb, fold_extension};

/// How many bytes of the input the binary heuristic inspects.
const HEURISTIC_SAMPLE_LEN: usize = 100;

/// What to return when a lookup finds nothing.
///
/// The closed replacement for a "false / type / true" default parameter:
///
/// - [`Fallback::None`]: the lookup result stays absent.
/// - [`Fallback::To`]: the given type is returned verbatim.
/// - [`Fallback::Guess`]: `application/octet-stream` or `text/plain` is
///   synthesized based on [`is_binary_data`] over the same input the lookup
///   saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fallback {
    #[default]
    None,
    To(MediaType),
    Guess,
}

impl From<MediaType> for Fallback {
    fn from(value: MediaType) -> Self {
        Fallback::To(value)
    }
}

impl From<&str> for Fallback {
    fn from(value: &str) -> Self {
        Fallback::To(MediaType::new(value))
    }
}

impl Fallback {
    /// Applies the coercion policy against the input the lookup inspected.
    fn coerce(self, sample: &[u8]) -> Option<MediaType> {
        match self {
            Fallback::None => None,
            Fallback::To(media_type) => Some(media_type),
            Fallback::Guess => Some(if is_binary_data(truncate(sample)) {
                MediaType::octet_stream()
            } else {
                MediaType::text_plain()
            }),
        }
    }
}

fn truncate(sample: &[u8]) -> &[u8] {
    &sample[..sample.len().min(HEURISTIC_SAMPLE_LEN)]
}

/// Classifies a short byte sample as binary-looking.
///
/// A sample is binary if it is empty, or if it contains any control byte
/// outside the ordinary whitespace set (tab, newline, vertical tab, form
/// feed, carriage return). This is a heuristic, not authoritative.
pub fn is_binary_data(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return true;
    }
    sample
        .iter()
        .any(|&byte| matches!(byte, 0x00..=0x08 | 0x0e..=0x1f | 0x7f))
}

impl TypeDb {
    /// Looks up a type by file extension. The extension is lowercased and
    /// may carry one leading dot. On a miss the `fallback` policy applies;
    /// for [`Fallback::Guess`] the heuristic runs over the extension text
    /// itself, the only input a bare extension lookup has.
    pub fn by_extension(&self, ext: impl AsRef<str>, fallback: Fallback) -> Option<MediaType> {
        let folded = fold_extension(ext.as_ref());
        match self.extension_target(&folded) {
            Some(name) => Some(MediaType::new(name)),
            None => fallback.coerce(folded.as_bytes()),
        }
    }

    /// Looks up a type by the extension of a path's final segment. A path
    /// whose final segment has no extension (a dot in a directory segment
    /// does not count) yields no extension and goes straight to `fallback`.
    pub fn by_path(&self, path: impl AsRef<Path>, fallback: Fallback) -> Option<MediaType> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.by_extension(ext, fallback),
            None => fallback.coerce(path.to_string_lossy().as_bytes()),
        }
    }

    /// Sniffs the type of an in-memory buffer: the highest-priority magic
    /// rule that matches wins. On no match the `fallback` policy applies to
    /// the same bytes.
    pub fn by_magic(&self, content: impl AsRef<[u8]>, fallback: Fallback) -> Option<MediaType> {
        let sample = content.as_ref();
        match self.find_first(sample) {
            Some(name) => Some(MediaType::new(name)),
            None => fallback.coerce(sample),
        }
    }

    /// Sniffs every matching type of an in-memory buffer, highest priority
    /// first. When nothing matches and `fallback` coerces to a value, that
    /// single value is returned so the result is never empty when a
    /// fallback was requested.
    pub fn all_by_magic(&self, content: impl AsRef<[u8]>, fallback: Fallback) -> Vec<MediaType> {
        let sample = content.as_ref();
        let mut out: Vec<MediaType> = self.find_all(sample).map(MediaType::new).collect();
        if out.is_empty() {
            out.extend(fallback.coerce(sample));
        }
        out
    }

    /// [`by_magic`](TypeDb::by_magic) over a seekable source.
    ///
    /// Reads a bounded prefix (large enough for every registered rule and
    /// the heuristic) from the start of the source and restores the
    /// caller's stream position afterwards, so subsequent reads by another
    /// consumer are unaffected.
    pub fn by_magic_reader<R: Read + Seek>(
        &self,
        reader: &mut R,
        fallback: Fallback,
    ) -> io::Result<Option<MediaType>> {
        let sample = self.read_prefix(reader)?;
        Ok(self.by_magic(&sample, fallback))
    }

    /// [`all_by_magic`](TypeDb::all_by_magic) over a seekable source.
    pub fn all_by_magic_reader<R: Read + Seek>(
        &self,
        reader: &mut R,
        fallback: Fallback,
    ) -> io::Result<Vec<MediaType>> {
        let sample = self.read_prefix(reader)?;
        Ok(self.all_by_magic(&sample, fallback))
    }

    fn read_prefix<R: Read + Seek>(&self, reader: &mut R) -> io::Result<Vec<u8>> {
        let limit = self.max_magic_extent().max(HEURISTIC_SAMPLE_LEN) as u64;
        let position = reader.stream_position()?;
        reader.seek(SeekFrom::Start(0))?;
        let mut sample = Vec::with_capacity(limit as usize);
        let read_result = reader.take(limit).read_to_end(&mut sample);
        // Put the cursor back even if the read failed partway.
        reader.seek(SeekFrom::Start(position))?;
        read_result?;
        Ok(sample)
    }

    fn find_first(&self, sample: &[u8]) -> Option<&str> {
        self.magic_blocks()
            .iter()
            .find(|block| any_matches(sample, &block.rules))
            .map(|block| block.name.as_str())
    }

    fn find_all<'a>(&'a self, sample: &'a [u8]) -> impl Iterator<Item = &'a str> {
        self.magic_blocks()
            .iter()
            .filter(move |block| any_matches(sample, &block.rules))
            .map(|block| block.name.as_str())
    }

    // ---- Type predicates ----

    /// True for `text/*` types and for descendants of `text/plain` in any
    /// media family (e.g. `application/xml`).
    pub fn is_text(&self, name: impl AsRef<str>) -> bool {
        MediaType::new(&name).media() == "text" || self.is_descendant(name, TEXT_PLAIN)
    }

    /// True for `image/*` types.
    pub fn is_image(&self, name: impl AsRef<str>) -> bool {
        MediaType::new(name).media() == "image"
    }

    /// True for `audio/*` types.
    pub fn is_audio(&self, name: impl AsRef<str>) -> bool {
        MediaType::new(name).media() == "audio"
    }

    /// True for `video/*` types.
    pub fn is_video(&self, name: impl AsRef<str>) -> bool {
        MediaType::new(name).media() == "video"
    }

    /// True if the type's lineage does not include `text/plain`. Unknown
    /// types inherit only from `application/octet-stream`, so they count
    /// as binary.
    pub fn is_binary(&self, name: impl AsRef<str>) -> bool {
        !self.lineage(name).iter().any(|t| *t == TEXT_PLAIN)
    }
}
