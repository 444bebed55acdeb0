mod errors;
mod types;

pub use errors::OcrError;
pub use types::Region;
