pub mod corner;
pub mod mesh;

pub use corner::*;
pub use mesh::*;
