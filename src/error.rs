use std::fmt;

/// Which layer of the pipeline raised an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorDomain {
    Fetch,
    Xml,
    Magic,
    Ofd,
}

impl ErrorDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorDomain::Fetch => "fetch",
            ErrorDomain::Xml => "xml",
            ErrorDomain::Magic => "MAGIC",
            ErrorDomain::Ofd => "ofd",
        }
    }
}

#[derive(Debug)]
pub enum Error {
    MissingArgument(String),
    Unsupported(String),
    NotFound(String),
    InvalidOfd(String),
    /// A mandatory wrapper element (Annotations, TemplatePage, Res, ...) is malformed.
    Structure { part: &'static str, reason: String },
    Asn1 { offset: usize, reason: String },
    MalformedSeal(String),
    Mount(String),
    Fetch(String),
    Zip(zip::result::ZipError),
    Xml(roxmltree::Error),
    Image(image::ImageError),
    Io(std::io::Error),
}

impl Error {
    /// Numeric code shared with the browser-facing API: 400, 403, 404, 500 or 9999.
    pub fn code(&self) -> u16 {
        match self {
            Error::MissingArgument(_) => 400,
            Error::Unsupported(_) => 403,
            Error::NotFound(_) => 404,
            Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound => 404,
            Error::Structure { .. } => 9999,
            Error::InvalidOfd(_)
            | Error::Asn1 { .. }
            | Error::MalformedSeal(_)
            | Error::Mount(_)
            | Error::Fetch(_)
            | Error::Zip(_)
            | Error::Xml(_)
            | Error::Image(_)
            | Error::Io(_) => 500,
        }
    }

    pub fn domain(&self) -> ErrorDomain {
        match self {
            Error::Fetch(_) => ErrorDomain::Fetch,
            Error::Xml(_) => ErrorDomain::Xml,
            Error::Unsupported(_) => ErrorDomain::Magic,
            _ => ErrorDomain::Ofd,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingArgument(what) => write!(f, "missing argument: {what}"),
            Error::Unsupported(reason) => write!(f, "unsupported input: {reason}"),
            Error::NotFound(what) => write!(f, "not found: {what}"),
            Error::InvalidOfd(reason) => write!(f, "not a valid OFD file: {reason}"),
            Error::Structure { part, reason } => write!(f, "malformed {part}: {reason}"),
            Error::Asn1 { offset, reason } => write!(f, "ASN.1 error at offset {offset}: {reason}"),
            Error::MalformedSeal(reason) => write!(f, "malformed seal: {reason}"),
            Error::Mount(reason) => write!(f, "mount error: {reason}"),
            Error::Fetch(reason) => write!(f, "fetch error: {reason}"),
            Error::Zip(e) => write!(f, "ZIP error: {e}"),
            Error::Xml(e) => write!(f, "XML error: {e}"),
            Error::Image(e) => write!(f, "image error: {e}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Zip(e)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
