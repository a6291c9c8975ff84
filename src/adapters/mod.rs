// Adapters layer: concrete implementations of the domain ports.

pub mod renderer;

pub use renderer::{NullRenderer, TextRenderer};
