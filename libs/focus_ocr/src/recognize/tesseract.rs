use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::common::OcrError;
use crate::settings::LanguageSelection;

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// `<exe> <image> <output-base> -l <lang[+lang]>`, with no console window.
pub fn engine_command(
    exe: &Path,
    image: &Path,
    output_base: &Path,
    selection: &LanguageSelection,
) -> Command {
    let mut command = Command::new(exe);
    command
        .arg(image)
        .arg(output_base)
        .arg("-l")
        .arg(selection.lang_arg())
        .stdin(Stdio::null());

    #[cfg(target_os = "windows")]
    command.creation_flags(CREATE_NO_WINDOW);

    command
}

/// Runs the engine to completion. There is no timeout and no retry.
pub async fn run_engine(
    exe: &Path,
    image: &Path,
    output_base: &Path,
    selection: &LanguageSelection,
) -> Result<(), OcrError> {
    let fail = |reason: String| OcrError::Recognition {
        exe: exe.to_path_buf(),
        reason,
    };

    log::debug!(
        "Running {} {} {} -l {}",
        exe.display(),
        image.display(),
        output_base.display(),
        selection.lang_arg()
    );
    let output = engine_command(exe, image, output_base, selection)
        .output()
        .await
        .map_err(|e| fail(format!("could not start: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(fail(format!("{}: {}", output.status, stderr.trim())));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_engine_arguments() {
        let command = engine_command(
            Path::new("tesseract"),
            Path::new("/tmp/focus_ocr.png"),
            Path::new("/tmp/focus_ocr"),
            &LanguageSelection::new("eng", "rus"),
        );
        let args: Vec<_> = command
            .as_std()
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, vec!["/tmp/focus_ocr.png", "/tmp/focus_ocr", "-l", "eng+rus"]);
    }

    #[tokio::test]
    async fn missing_engine_is_a_recognition_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_engine(
            &dir.path().join("no-such-tesseract"),
            &dir.path().join("in.png"),
            &dir.path().join("out"),
            &LanguageSelection::new("eng", "eng"),
        )
        .await;
        assert!(matches!(result, Err(OcrError::Recognition { .. })));
    }
}
