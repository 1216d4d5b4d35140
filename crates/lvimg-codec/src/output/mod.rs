//! Serializers for the packed buffer: C source arrays and binary blobs.
//!
//! Both renderers consume the same [`EncodedImage`](crate::EncodedImage)
//! and must stay numerically consistent with each other (size fields,
//! format codes, bit layouts).

mod binary;
mod c_array;

pub use binary::BinHeader;
pub use c_array::sanitize_identifier;
