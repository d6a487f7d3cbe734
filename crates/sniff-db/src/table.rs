//! The built-in type and magic tables.
//!
//! Decoded offline from the freedesktop.org shared-mime-info vocabulary and
//! checked in as static records. Keep entries sorted the way the generator
//! emits them: `TYPES` grouped by media type, `MAGIC` highest priority
//! first. The OOXML range probes at the head of `MAGIC` are hand-maintained
//! and must stay ahead of the generic zip probe.

use crate::{MagicEntry, Match, TypeDef};

const fn at(offset: u32, value: &'static [u8]) -> Match {
    Match { start: offset, end: offset, value, children: &[] }
}

const fn within(start: u32, end: u32, value: &'static [u8]) -> Match {
    Match { start, end, value, children: &[] }
}

const fn at_with(offset: u32, value: &'static [u8], children: &'static [Match]) -> Match {
    Match { start: offset, end: offset, value, children }
}

pub static TYPES: &[TypeDef] = &[
    // application/*
    TypeDef {
        name: "application/octet-stream",
        extensions: &["bin"],
        parents: &[],
        aliases: &[],
        comment: Some("unknown"),
    },
    TypeDef {
        name: "application/xml",
        extensions: &["xml", "xsl", "xslt", "xbl"],
        parents: &["text/plain"],
        aliases: &["text/xml"],
        comment: Some("XML document"),
    },
    TypeDef {
        name: "application/xhtml+xml",
        extensions: &["xhtml"],
        parents: &["application/xml", "text/html"],
        aliases: &[],
        comment: Some("XHTML page"),
    },
    TypeDef {
        name: "application/json",
        extensions: &["json"],
        parents: &["text/javascript"],
        aliases: &[],
        comment: Some("JSON document"),
    },
    TypeDef {
        name: "application/x-ruby",
        extensions: &["rb"],
        parents: &["application/x-executable", "text/plain"],
        aliases: &[],
        comment: Some("Ruby script"),
    },
    TypeDef {
        name: "application/x-shellscript",
        extensions: &["sh"],
        parents: &["text/plain"],
        aliases: &["text/x-sh"],
        comment: Some("shell script"),
    },
    TypeDef {
        name: "application/x-executable",
        extensions: &[],
        parents: &[],
        aliases: &[],
        comment: Some("executable"),
    },
    TypeDef {
        name: "application/x-ms-dos-executable",
        extensions: &["exe", "dll"],
        parents: &[],
        aliases: &[],
        comment: Some("DOS/Windows executable"),
    },
    TypeDef {
        name: "application/pdf",
        extensions: &["pdf"],
        parents: &[],
        aliases: &["application/x-pdf"],
        comment: Some("PDF document"),
    },
    TypeDef {
        name: "application/postscript",
        extensions: &["ps", "eps"],
        parents: &[],
        aliases: &[],
        comment: Some("PS document"),
    },
    TypeDef {
        name: "application/rtf",
        extensions: &["rtf"],
        parents: &["text/plain"],
        aliases: &["text/rtf"],
        comment: Some("RTF document"),
    },
    TypeDef {
        name: "application/zip",
        extensions: &["zip"],
        parents: &[],
        aliases: &["application/x-zip", "application/x-zip-compressed"],
        comment: Some("Zip archive"),
    },
    TypeDef {
        name: "application/gzip",
        extensions: &["gz"],
        parents: &[],
        aliases: &["application/x-gzip"],
        comment: Some("Gzip archive"),
    },
    TypeDef {
        name: "application/x-bzip",
        extensions: &["bz", "bz2"],
        parents: &[],
        aliases: &["application/x-bzip2"],
        comment: Some("Bzip archive"),
    },
    TypeDef {
        name: "application/x-xz",
        extensions: &["xz"],
        parents: &[],
        aliases: &[],
        comment: Some("XZ archive"),
    },
    TypeDef {
        name: "application/x-7z-compressed",
        extensions: &["7z"],
        parents: &[],
        aliases: &[],
        comment: Some("7-zip archive"),
    },
    TypeDef {
        name: "application/vnd.rar",
        extensions: &["rar"],
        parents: &[],
        aliases: &["application/x-rar", "application/x-rar-compressed"],
        comment: Some("RAR archive"),
    },
    TypeDef {
        name: "application/x-tar",
        extensions: &["tar"],
        parents: &[],
        aliases: &[],
        comment: Some("Tar archive"),
    },
    TypeDef {
        name: "application/vnd.sqlite3",
        extensions: &["sqlite3"],
        parents: &[],
        aliases: &["application/x-sqlite3"],
        comment: Some("SQLite3 database"),
    },
    TypeDef {
        name: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        extensions: &["docx"],
        parents: &["application/zip"],
        aliases: &[],
        comment: Some("Word document"),
    },
    TypeDef {
        name: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        extensions: &["xlsx"],
        parents: &["application/zip"],
        aliases: &[],
        comment: Some("Excel spreadsheet"),
    },
    TypeDef {
        name: "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        extensions: &["pptx"],
        parents: &["application/zip"],
        aliases: &[],
        comment: Some("PowerPoint presentation"),
    },
    TypeDef {
        name: "application/vnd.oasis.opendocument.text",
        extensions: &["odt"],
        parents: &["application/zip"],
        aliases: &[],
        comment: Some("ODT document"),
    },
    TypeDef {
        name: "application/ogg",
        extensions: &["ogg", "ogx"],
        parents: &[],
        aliases: &["application/x-ogg"],
        comment: Some("Ogg multimedia file"),
    },
    // audio/*
    TypeDef {
        name: "audio/mpeg",
        extensions: &["mp3", "mpga"],
        parents: &[],
        aliases: &["audio/mp3"],
        comment: Some("MP3 audio"),
    },
    TypeDef {
        name: "audio/flac",
        extensions: &["flac"],
        parents: &[],
        aliases: &["audio/x-flac"],
        comment: Some("FLAC audio"),
    },
    TypeDef {
        name: "audio/x-wav",
        extensions: &["wav"],
        parents: &[],
        aliases: &["audio/wav", "audio/vnd.wave"],
        comment: Some("WAV audio"),
    },
    TypeDef {
        name: "audio/midi",
        extensions: &["mid", "midi"],
        parents: &[],
        aliases: &["audio/x-midi"],
        comment: Some("MIDI audio"),
    },
    TypeDef {
        name: "audio/ogg",
        extensions: &["oga", "opus"],
        parents: &["application/ogg"],
        aliases: &[],
        comment: Some("Ogg audio"),
    },
    // image/*
    TypeDef {
        name: "image/png",
        extensions: &["png"],
        parents: &[],
        aliases: &[],
        comment: Some("PNG image"),
    },
    TypeDef {
        name: "image/jpeg",
        extensions: &["jpg", "jpeg", "jpe"],
        parents: &[],
        aliases: &[],
        comment: Some("JPEG image"),
    },
    TypeDef {
        name: "image/gif",
        extensions: &["gif"],
        parents: &[],
        aliases: &[],
        comment: Some("GIF image"),
    },
    TypeDef {
        name: "image/bmp",
        extensions: &["bmp"],
        parents: &[],
        aliases: &["image/x-bmp", "image/x-ms-bmp"],
        comment: Some("Windows BMP image"),
    },
    TypeDef {
        name: "image/tiff",
        extensions: &["tif", "tiff"],
        parents: &[],
        aliases: &[],
        comment: Some("TIFF image"),
    },
    TypeDef {
        name: "image/webp",
        extensions: &["webp"],
        parents: &[],
        aliases: &[],
        comment: Some("WebP image"),
    },
    TypeDef {
        name: "image/svg+xml",
        extensions: &["svg"],
        parents: &["application/xml"],
        aliases: &[],
        comment: Some("SVG image"),
    },
    TypeDef {
        name: "image/vnd.microsoft.icon",
        extensions: &["ico"],
        parents: &[],
        aliases: &["image/x-icon"],
        comment: Some("Windows icon"),
    },
    // text/*
    TypeDef {
        name: "text/plain",
        extensions: &["txt", "text", "asc"],
        parents: &[],
        aliases: &[],
        comment: Some("plain text document"),
    },
    TypeDef {
        name: "text/html",
        extensions: &["htm", "html"],
        parents: &["text/plain"],
        aliases: &[],
        comment: Some("HTML document"),
    },
    TypeDef {
        name: "text/css",
        extensions: &["css"],
        parents: &["text/plain"],
        aliases: &[],
        comment: Some("CSS stylesheet"),
    },
    TypeDef {
        name: "text/csv",
        extensions: &["csv"],
        parents: &["text/plain"],
        aliases: &[],
        comment: Some("CSV document"),
    },
    TypeDef {
        name: "text/x-csrc",
        extensions: &["c"],
        parents: &["text/plain"],
        aliases: &[],
        comment: Some("C source code"),
    },
    TypeDef {
        name: "text/x-java",
        extensions: &["java"],
        parents: &["text/x-csrc"],
        aliases: &[],
        comment: Some("Java source code"),
    },
    TypeDef {
        name: "text/x-python",
        extensions: &["py", "pyi"],
        parents: &["text/plain"],
        aliases: &[],
        comment: Some("Python script"),
    },
    TypeDef {
        name: "text/javascript",
        extensions: &["js", "mjs"],
        parents: &["text/x-csrc"],
        aliases: &["application/javascript", "application/x-javascript"],
        comment: Some("JavaScript program"),
    },
    // video/*
    TypeDef {
        name: "video/mp4",
        extensions: &["mp4", "m4v"],
        parents: &[],
        aliases: &[],
        comment: Some("MPEG-4 video"),
    },
    TypeDef {
        name: "video/x-matroska",
        extensions: &["mkv"],
        parents: &[],
        aliases: &[],
        comment: Some("Matroska video"),
    },
    TypeDef {
        name: "video/webm",
        extensions: &["webm"],
        parents: &["video/x-matroska"],
        aliases: &[],
        comment: Some("WebM video"),
    },
    TypeDef {
        name: "video/x-msvideo",
        extensions: &["avi"],
        parents: &[],
        aliases: &["video/avi", "video/msvideo", "video/x-avi"],
        comment: Some("AVI video"),
    },
    TypeDef {
        name: "video/ogg",
        extensions: &["ogv"],
        parents: &["application/ogg"],
        aliases: &[],
        comment: Some("Ogg video"),
    },
];

pub static MAGIC: &[MagicEntry] = &[
    // Hand-maintained OOXML member-name probes. The container is plain zip;
    // the distinguishing member path sits somewhere in the first ~2000 bytes.
    MagicEntry {
        mime_type: "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        matches: &[within(0, 2000, b"ppt/")],
    },
    MagicEntry {
        mime_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        matches: &[within(0, 2000, b"xl/")],
    },
    MagicEntry {
        mime_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        matches: &[within(0, 2000, b"word/")],
    },
    MagicEntry {
        mime_type: "application/vnd.oasis.opendocument.text",
        matches: &[at(30, b"mimetypeapplication/vnd.oasis.opendocument.text")],
    },
    MagicEntry {
        mime_type: "image/png",
        matches: &[at(0, b"\x89PNG\r\n\x1a\n")],
    },
    MagicEntry {
        mime_type: "image/gif",
        matches: &[at(0, b"GIF87a"), at(0, b"GIF89a")],
    },
    MagicEntry {
        mime_type: "image/jpeg",
        matches: &[at(0, b"\xff\xd8\xff")],
    },
    MagicEntry {
        mime_type: "image/webp",
        matches: &[at_with(0, b"RIFF", &[at(8, b"WEBP")])],
    },
    MagicEntry {
        mime_type: "image/tiff",
        matches: &[at(0, b"MM\x00\x2a"), at(0, b"II\x2a\x00")],
    },
    MagicEntry {
        mime_type: "image/bmp",
        matches: &[at(0, b"BM")],
    },
    MagicEntry {
        mime_type: "image/vnd.microsoft.icon",
        matches: &[at(0, b"\x00\x00\x01\x00")],
    },
    MagicEntry {
        mime_type: "image/svg+xml",
        matches: &[within(0, 256, b"<svg")],
    },
    MagicEntry {
        mime_type: "application/pdf",
        matches: &[within(0, 1024, b"%PDF-")],
    },
    MagicEntry {
        mime_type: "application/postscript",
        matches: &[at(0, b"%!PS-Adobe-")],
    },
    MagicEntry {
        mime_type: "application/rtf",
        matches: &[at(0, b"{\\rtf")],
    },
    MagicEntry {
        mime_type: "application/xml",
        matches: &[at(0, b"<?xml")],
    },
    MagicEntry {
        mime_type: "text/html",
        matches: &[
            within(0, 256, b"<!DOCTYPE html"),
            within(0, 256, b"<!DOCTYPE HTML"),
            within(0, 256, b"<html"),
            within(0, 256, b"<HTML"),
        ],
    },
    MagicEntry {
        mime_type: "application/zip",
        matches: &[at(0, b"PK\x03\x04")],
    },
    MagicEntry {
        mime_type: "application/gzip",
        matches: &[at(0, b"\x1f\x8b")],
    },
    MagicEntry {
        mime_type: "application/x-bzip",
        matches: &[at(0, b"BZh")],
    },
    MagicEntry {
        mime_type: "application/x-xz",
        matches: &[at(0, b"\xfd7zXZ\x00")],
    },
    MagicEntry {
        mime_type: "application/x-7z-compressed",
        matches: &[at(0, b"7z\xbc\xaf\x27\x1c")],
    },
    MagicEntry {
        mime_type: "application/vnd.rar",
        matches: &[at(0, b"Rar!\x1a\x07")],
    },
    MagicEntry {
        mime_type: "application/x-tar",
        matches: &[at(257, b"ustar")],
    },
    MagicEntry {
        mime_type: "application/vnd.sqlite3",
        matches: &[at(0, b"SQLite format 3")],
    },
    MagicEntry {
        mime_type: "application/x-executable",
        matches: &[at(0, b"\x7fELF")],
    },
    MagicEntry {
        mime_type: "application/x-ms-dos-executable",
        matches: &[at(0, b"MZ")],
    },
    MagicEntry {
        mime_type: "audio/flac",
        matches: &[at(0, b"fLaC")],
    },
    MagicEntry {
        mime_type: "audio/midi",
        matches: &[at(0, b"MThd")],
    },
    MagicEntry {
        mime_type: "audio/mpeg",
        matches: &[at(0, b"ID3"), at(0, b"\xff\xfb")],
    },
    MagicEntry {
        mime_type: "audio/x-wav",
        matches: &[at_with(0, b"RIFF", &[at(8, b"WAVE")])],
    },
    MagicEntry {
        mime_type: "video/x-msvideo",
        matches: &[at_with(0, b"RIFF", &[at(8, b"AVI ")])],
    },
    // Specific Ogg codecs outrank the generic container.
    MagicEntry {
        mime_type: "video/ogg",
        matches: &[at_with(0, b"OggS", &[within(28, 100, b"theora")])],
    },
    MagicEntry {
        mime_type: "audio/ogg",
        matches: &[
            at_with(0, b"OggS", &[within(28, 100, b"vorbis")]),
            at_with(0, b"OggS", &[within(28, 100, b"OpusHead")]),
            at_with(0, b"OggS", &[within(28, 100, b"FLAC")]),
        ],
    },
    MagicEntry {
        mime_type: "application/ogg",
        matches: &[at(0, b"OggS")],
    },
    MagicEntry {
        mime_type: "video/mp4",
        matches: &[at(4, b"ftypisom"), at(4, b"ftypmp42"), at(4, b"ftypM4V ")],
    },
    // WebM before the generic Matroska probe.
    MagicEntry {
        mime_type: "video/webm",
        matches: &[at_with(0, b"\x1a\x45\xdf\xa3", &[within(4, 64, b"webm")])],
    },
    MagicEntry {
        mime_type: "video/x-matroska",
        matches: &[at_with(0, b"\x1a\x45\xdf\xa3", &[within(4, 64, b"matroska")])],
    },
];
