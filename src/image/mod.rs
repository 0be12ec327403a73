pub mod accumulator;
pub mod io;
pub mod traits;

pub use self::accumulator::{AccumulatorImage, OwnedAccumulator, BYTES_PER_CELL};
pub use self::traits::AccumulatorView;
