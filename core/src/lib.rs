pub mod polygon;
pub mod quantize;
pub mod render;
pub mod scope;
pub mod shade;
pub mod signal;

pub use polygon::PolygonGroup;
pub use quantize::{Snap, SnapPolicy};
pub use render::{DrawCommand, FrameRenderer, Style};
pub use rgb_int::Rgba32;
pub use scope::Scope;
pub use shade::Shader;
pub use signal::RandomWalk;
