use serde::de;

use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a config from reader.
pub fn parse_reader<R: io::Read, T: de::DeserializeOwned>(r: &mut R) -> Result<T, ParseError> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    Ok(toml::from_slice(&buf)?)
}

pub fn parse_str<T: de::DeserializeOwned>(s: &str) -> Result<T, ParseError> {
    Ok(toml::from_str(s)?)
}

/// Parse a config from file.
pub fn parse_file<T: de::DeserializeOwned>(name: impl AsRef<Path>) -> Result<T, ParseError> {
    let mut f = fs::File::open(name)?;
    parse_reader(&mut f)
}

/// Parse the file at `name`, or deserialize an empty document when no name
/// is given so that every field falls back to its serde default.
pub fn parse<T: de::DeserializeOwned>(name: Option<&str>) -> Result<T, ParseError> {
    match name {
        Some(name) => parse_file(name),
        None => parse_str(""),
    }
}

#[derive(Debug)]
pub enum ParseError {
    IO(io::Error),
    Deserialize(toml::de::Error),
}

impl error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::IO(e) => write!(f, "{}", e),
            ParseError::Deserialize(e) => write!(f, "{}", e),
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(error: io::Error) -> ParseError {
        ParseError::IO(error)
    }
}

impl From<toml::de::Error> for ParseError {
    fn from(error: toml::de::Error) -> ParseError {
        ParseError::Deserialize(error)
    }
}
