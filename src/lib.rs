//! lvforge: converts raster images into LVGL image assets.
//!
//! The library surface exists for the binary and the integration tests;
//! the codec itself lives in the `lvimg-codec` crate.

pub mod convert;
pub mod decode;
pub mod error;
pub mod manifest;
pub mod quantize;

pub use convert::{run_job, ConvertJob, Emit};
pub use error::ConvertError;
pub use manifest::Manifest;
