use std::path::{Path, PathBuf};

/// Where the bundled engine lives below an install root:
/// `<root>/tesseract/tesseract[.exe]` and `<root>/tesseract/tessdata`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineLayout {
    pub exe: PathBuf,
    pub tessdata_dir: PathBuf,
}

impl EngineLayout {
    pub fn from_root(root: &Path) -> Self {
        let engine_dir = root.join("tesseract");
        Self {
            exe: engine_dir.join(format!("tesseract{}", std::env::consts::EXE_SUFFIX)),
            tessdata_dir: engine_dir.join("tessdata"),
        }
    }

    /// Layout rooted at `root`, or next to the running executable.
    pub fn resolve(root: Option<&Path>) -> anyhow::Result<Self> {
        match root {
            Some(root) => Ok(Self::from_root(root)),
            None => {
                let exe = std::env::current_exe()?;
                let dir = exe
                    .parent()
                    .ok_or_else(|| anyhow::anyhow!("{} has no parent directory", exe.display()))?;
                Ok(Self::from_root(dir))
            }
        }
    }
}

/// Fixed pair of scratch files shared by every invocation. The engine
/// appends `.txt` to the output base itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchPaths {
    base: PathBuf,
}

impl Default for ScratchPaths {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("focus_ocr"))
    }
}

impl ScratchPaths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn output_base(&self) -> &Path {
        &self.base
    }

    pub fn image(&self) -> PathBuf {
        self.base.with_extension("png")
    }

    pub fn text(&self) -> PathBuf {
        self.base.with_extension("txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_lives_under_tesseract_dir() {
        let layout = EngineLayout::from_root(Path::new("/opt/focus-ocr"));
        assert!(layout.exe.starts_with("/opt/focus-ocr/tesseract"));
        assert_eq!(layout.tessdata_dir, Path::new("/opt/focus-ocr/tesseract/tessdata"));
    }

    #[test]
    fn scratch_files_share_the_output_base() {
        let scratch = ScratchPaths::new("/tmp/focus_ocr");
        assert_eq!(scratch.image(), Path::new("/tmp/focus_ocr.png"));
        assert_eq!(scratch.text(), Path::new("/tmp/focus_ocr.txt"));
        assert_eq!(scratch.output_base(), Path::new("/tmp/focus_ocr"));
    }
}
