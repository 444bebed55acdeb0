use std::path::PathBuf;

use image::ImageFormat;
use tempfile::TempPath;

use super::{run_engine, ScratchPaths};
use crate::capture::ScreenGrabber;
use crate::common::OcrError;
use crate::host::AccessibilityHost;
use crate::settings::LanguageSelection;

pub const RESULT_TITLE: &str = "OCR Result";

/// Runs the locate, capture, encode, recognize and read steps for one
/// command invocation.
///
/// Both scratch files are owned by `TempPath` guards for the duration of
/// the call, so they are gone afterwards whichever step failed. Removing
/// an already missing file is not an error.
#[derive(Debug, Clone)]
pub struct Recognizer {
    exe: PathBuf,
    scratch: ScratchPaths,
}

impl Recognizer {
    pub fn new(exe: impl Into<PathBuf>, scratch: ScratchPaths) -> Self {
        Self {
            exe: exe.into(),
            scratch,
        }
    }

    pub fn exe(&self) -> &std::path::Path {
        &self.exe
    }

    pub fn scratch(&self) -> &ScratchPaths {
        &self.scratch
    }

    pub async fn recognize(
        &self,
        host: &dyn AccessibilityHost,
        grabber: &dyn ScreenGrabber,
        selection: &LanguageSelection,
    ) -> Result<String, OcrError> {
        let region = host
            .focused_region()
            .filter(|region| !region.is_empty())
            .ok_or(OcrError::NoTarget)?;
        log::debug!("Recognizing region {}", region);

        let image = grabber.grab(&region)?;

        // guard the output before the engine can create it, and drop any
        // leftover from an earlier run so it cannot be read back as ours
        let text_file = TempPath::from_path(self.scratch.text());
        let _ = tokio::fs::remove_file(&text_file).await;
        {
            let image_path = self.scratch.image();
            let image_file = TempPath::from_path(&image_path);
            image
                .save_with_format(&image_file, ImageFormat::Png)
                .map_err(|source| OcrError::Encode {
                    path: image_path.clone(),
                    source,
                })?;

            host.announce("Running OCR");
            run_engine(&self.exe, &image_file, self.scratch.output_base(), selection).await?;
        }

        let text = match tokio::fs::read_to_string(&text_file).await {
            Ok(contents) => contents.trim().to_string(),
            Err(e) => {
                log::debug!("No OCR output at {}: {}", text_file.display(), e);
                String::new()
            }
        };
        drop(text_file);

        if text.is_empty() {
            return Err(OcrError::EmptyResult);
        }
        log::info!("Recognized {} chars", text.chars().count());
        Ok(text)
    }
}

/// Tells the user how the invocation went. Every failure sounds the same;
/// the reason only goes to the log.
pub fn present(host: &dyn AccessibilityHost, result: &Result<String, OcrError>) {
    match result {
        Ok(text) => {
            host.announce("Done");
            if let Err(e) = host.browseable_message(text, RESULT_TITLE) {
                log::warn!("Could not show OCR result, reading it instead: {:#}", e);
                host.announce(text);
            }
        }
        Err(e) => {
            log::error!("OCR failed: {}", e);
            host.announce("Error");
        }
    }
}
