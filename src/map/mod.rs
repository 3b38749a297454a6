pub mod projection;
pub mod tiles;
pub mod viewport;

pub use projection::{MapFrame, TILE_SIZE};
pub use tiles::TileProvider;
pub use viewport::Viewport;
