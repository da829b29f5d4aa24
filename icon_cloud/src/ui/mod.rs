mod intro;
mod tooltip;

pub use intro::{intro_plugin, HeroCopy};
pub use tooltip::tooltip_plugin;
