use std::path::PathBuf;

use super::Region;

/// Failures of a single recognize invocation or of settings persistence.
///
/// Users only ever hear a generic error; the variant is for the log.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("no focused object with a visible screen region")]
    NoTarget,

    #[error("failed to capture region {region}: {reason}")]
    Capture { region: Region, reason: String },

    #[error("failed to write temporary image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("OCR engine {} failed: {reason}", .exe.display())]
    Recognition { exe: PathBuf, reason: String },

    #[error("OCR engine produced no text")]
    EmptyResult,

    #[error("failed to write settings to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
