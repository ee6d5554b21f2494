//! Mock 实现

pub mod bridge;
pub mod path;
pub mod volume;

pub use bridge::MockBridgeOps;
pub use path::{MockOpener, MockResolver};
pub use volume::MockVolume;
