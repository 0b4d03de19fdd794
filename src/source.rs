use std::path::PathBuf;

use crate::error::Error;

/// Where a document comes from.
#[derive(Clone, Debug)]
pub enum Source {
    Path(PathBuf),
    Bytes(Vec<u8>),
    Url(String),
}

impl Source {
    /// `http://` and `https://` arguments are URLs, anything else a path.
    pub fn from_arg(arg: &str) -> Source {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Source::Url(arg.to_string())
        } else {
            Source::Path(PathBuf::from(arg))
        }
    }

    pub fn load(&self) -> Result<Vec<u8>, Error> {
        match self {
            Source::Path(path) => {
                if path.as_os_str().is_empty() {
                    return Err(Error::MissingArgument("file".into()));
                }
                if !path.exists() {
                    return Err(Error::NotFound(path.display().to_string()));
                }
                if !path.is_file() {
                    return Err(Error::Unsupported(format!("not a file: {}", path.display())));
                }
                std::fs::read(path).map_err(Error::Io)
            }
            Source::Bytes(bytes) if bytes.is_empty() => Err(Error::MissingArgument("file".into())),
            Source::Bytes(bytes) => Ok(bytes.clone()),
            Source::Url(url) if url.trim().is_empty() => Err(Error::MissingArgument("url".into())),
            Source::Url(url) => fetch(url),
        }
    }
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<Vec<u8>, Error> {
    log::debug!("Fetching {url}");
    let response = reqwest::blocking::get(url).map_err(|e| Error::Fetch(e.to_string()))?;
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(Error::NotFound(url.to_string()));
    }
    let response = response
        .error_for_status()
        .map_err(|e| Error::Fetch(e.to_string()))?;
    let bytes = response.bytes().map_err(|e| Error::Fetch(e.to_string()))?;
    Ok(bytes.to_vec())
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> Result<Vec<u8>, Error> {
    Err(Error::Unsupported(format!(
        "cannot load {url}: built without the fetch feature"
    )))
}
