mod parallax;

pub use parallax::{parallax_plugin, PointerTarget};
