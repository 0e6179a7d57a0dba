use std::fmt;

pub mod catalog;
pub mod detail;
pub mod versions;

#[derive(Debug)]
pub enum ParsingError {
    InvalidType(String),
    EmptyVersionList,
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::InvalidType(field) => write!(f, "Unexpected type for field: {}", field),
            ParsingError::EmptyVersionList => write!(f, "Version endpoint returned an empty list"),
        }
    }
}
