//! Error types for the converter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Input metadata file could not be read.
    #[error("Failed to read metadata file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// A collection without bio samples reached filename generation.
    #[error("Collection '{context}' has no bio samples to generate filenames for")]
    MissingBioSample { context: String },
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;
