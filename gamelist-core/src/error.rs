use std::path::PathBuf;

/// Errors that can occur while reading, editing, or writing a gamelist.
#[derive(Debug, thiserror::Error)]
pub enum GamelistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File {} does not exist!", .0.display())]
    NotFound(PathBuf),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Invalid gamelist: {0}")]
    InvalidDocument(String),

    #[error("hide-rating should be a value between 0 and 1, got {0}")]
    InvalidThreshold(f32),

    #[error("No hide criteria given: {0}")]
    NoCriteria(String),
}

impl GamelistError {
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }

    pub fn no_criteria(msg: impl Into<String>) -> Self {
        Self::NoCriteria(msg.into())
    }
}
