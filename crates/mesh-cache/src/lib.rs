//! Binary cache for parsed OBJ meshes.
//!
//! A cache file is a zip archive holding five named entries, one per mesh
//! field. The numeric fields are `.npy` arrays, so the archive opens as an
//! `.npz` in numpy; faces use an opaque serde encoding since their corners
//! may omit indices.

pub mod errors;
pub mod fields;
pub mod load;
pub mod loader;
pub mod options;
pub mod save;

pub use errors::{CacheError, FormatError, LoaderError};
pub use fields::{Field, FORMAT_TAG, FORMAT_VERSION};
pub use load::{load_cache, read_cache};
pub use loader::load_or_parse;
pub use options::{CacheOptions, Compression};
pub use save::{save_cache, write_cache};
