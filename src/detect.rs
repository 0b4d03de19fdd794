//! File-type sniffing for package inputs and embedded media.

use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Zip,
    Xml,
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    Jbig2,
    Unknown,
}

impl FileKind {
    pub fn mime_type(self) -> &'static str {
        match self {
            FileKind::Zip => "application/zip",
            FileKind::Xml => "application/xml",
            FileKind::Png => "image/png",
            FileKind::Jpeg => "image/jpeg",
            FileKind::Gif => "image/gif",
            FileKind::Bmp => "image/bmp",
            FileKind::Tiff => "image/tiff",
            FileKind::Jbig2 => "image/jbig2",
            FileKind::Unknown => "application/octet-stream",
        }
    }
}

const JBIG2_MAGIC: &[u8] = &[0x97, 0x4a, 0x42, 0x32, 0x0d, 0x0a, 0x1a, 0x0a];

/// Classify by content.
pub fn sniff(bytes: &[u8]) -> FileKind {
    if bytes.starts_with(JBIG2_MAGIC) {
        return FileKind::Jbig2;
    }
    if let Some(kind) = infer::get(bytes) {
        match kind.mime_type() {
            "application/zip" => return FileKind::Zip,
            "image/png" => return FileKind::Png,
            "image/jpeg" => return FileKind::Jpeg,
            "image/gif" => return FileKind::Gif,
            "image/bmp" => return FileKind::Bmp,
            "image/tiff" => return FileKind::Tiff,
            "text/xml" | "application/xml" => return FileKind::Xml,
            other => log::debug!("Unhandled sniffed type {other}"),
        }
    }
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(64)]);
    if head.trim_start_matches('\u{feff}').trim_start().starts_with('<') {
        return FileKind::Xml;
    }
    FileKind::Unknown
}

/// Classify by a declared format name or file extension.
pub fn kind_from_name(name: &str) -> FileKind {
    match name.trim().to_ascii_lowercase().as_str() {
        "png" => FileKind::Png,
        "jpg" | "jpeg" | "jpe" => FileKind::Jpeg,
        "gif" => FileKind::Gif,
        "bmp" | "dib" => FileKind::Bmp,
        "tif" | "tiff" => FileKind::Tiff,
        "jb2" | "jbig2" | "gbig2" | "ccitt" => FileKind::Jbig2,
        "ofd" | "zip" => FileKind::Zip,
        "xml" => FileKind::Xml,
        _ => FileKind::Unknown,
    }
}

/// Declared `Format` attribute first, then the file extension, then content.
pub fn image_kind(bytes: &[u8], format: Option<&str>, path: Option<&str>) -> FileKind {
    let declared = format.map(kind_from_name).unwrap_or(FileKind::Unknown);
    if declared != FileKind::Unknown {
        return declared;
    }
    let by_ext = path
        .and_then(|p| Path::new(p).extension())
        .and_then(|e| e.to_str())
        .map(kind_from_name)
        .unwrap_or(FileKind::Unknown);
    if by_ext != FileKind::Unknown {
        return by_ext;
    }
    sniff(bytes)
}
