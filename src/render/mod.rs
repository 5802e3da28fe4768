//! Rendering module for reassembling a partitioned document into output.

mod detector;
mod flashforge;
mod json;
mod options;
mod result;

pub use detector::SpaghettiDetector;
pub use flashforge::{to_flashforge, to_flashforge_with_stats, FlashForgeRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::RestructureStats;
