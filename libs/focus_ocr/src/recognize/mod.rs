mod pipeline;
mod tesseract;
mod types;

pub use pipeline::{present, Recognizer, RESULT_TITLE};
pub use tesseract::{engine_command, run_engine};
pub use types::{EngineLayout, ScratchPaths};
