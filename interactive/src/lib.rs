pub mod draw;
pub mod window;

pub use window::{App, Window};
