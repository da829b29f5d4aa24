mod channel;
pub mod http;
mod model;

use crossbeam_channel::Receiver;
use url::Url;

use crate::catalog::IconDescriptor;

pub use channel::{init_offline_channel, init_texture_channel, TextureChannel};
pub use model::TexturePayload;

/// Configuration for spawning a texture fetcher.
pub struct FetcherConfig {
    pub cdn_base: Url,
    pub catalog: &'static [IconDescriptor],
}

/// Interface for texture sources feeding the sprite factory.
pub trait TextureFetcher: Send + 'static {
    fn spawn(config: FetcherConfig) -> Receiver<TexturePayload>;
}
