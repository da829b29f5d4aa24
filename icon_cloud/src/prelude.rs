//! Minimal prelude for embedding the backdrop in another app.

pub use crate::catalog::{IconDescriptor, CATALOG};
pub use crate::config::{icon_cdn_base, offline_mode};
pub use crate::data::{init_offline_channel, init_texture_channel, FetcherConfig, TexturePayload};
pub use crate::sdk::BackdropBuilder;
