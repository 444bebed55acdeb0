mod types;
mod utils;

pub use types::ScreenGrabber;
pub use utils::{clip_to_bounds, XcapGrabber};
