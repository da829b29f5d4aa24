use crate::catalog::IconDescriptor;
use crate::data::http::HttpFetcher;
use crate::data::model::TexturePayload;
use crate::data::{FetcherConfig, TextureFetcher};

use crossbeam_channel::Receiver;

/// Bevy resource holding the channel from the texture fetcher thread.
/// Systems drain this in ingest_textures.
#[derive(bevy::prelude::Resource)]
pub struct TextureChannel(pub Receiver<TexturePayload>);

/// Create a texture channel and spawn the HTTP fetcher on a dedicated thread.
pub fn init_texture_channel(config: FetcherConfig) -> TextureChannel {
    TextureChannel(HttpFetcher::spawn(config))
}

const OFFLINE_TILE_EDGE: u32 = 128;
const OFFLINE_PACING: std::time::Duration = std::time::Duration::from_millis(25);

/// Create a texture channel that synthesizes one tile per catalog entry with
/// no network at all. Payloads are paced so ingestion resembles a real fetch.
pub fn init_offline_channel(catalog: &'static [IconDescriptor]) -> TextureChannel {
    let (tx, rx) = crossbeam_channel::bounded(64);

    std::thread::spawn(move || {
        for (index, icon) in catalog.iter().enumerate() {
            if tx.send(offline_tile(*icon, index)).is_err() {
                return;
            }
            std::thread::sleep(OFFLINE_PACING);
        }
    });

    TextureChannel(rx)
}

/// A solid tinted disc whose hue walks around the catalog, so offline runs
/// still show distinguishable sprites.
fn offline_tile(icon: IconDescriptor, index: usize) -> TexturePayload {
    let edge = OFFLINE_TILE_EDGE;
    let (r, g, b) = tint_for_index(index);
    let center = edge as i64 / 2;
    let radius = (edge as i64 * 45) / 128;
    let radius_sq = radius * radius;

    let mut rgba = vec![0u8; (edge * edge * 4) as usize];
    for y in 0..edge as i64 {
        for x in 0..edge as i64 {
            let dx = x - center;
            let dy = y - center;
            if dx * dx + dy * dy <= radius_sq {
                let at = ((y * edge as i64 + x) * 4) as usize;
                rgba[at] = r;
                rgba[at + 1] = g;
                rgba[at + 2] = b;
                rgba[at + 3] = 255;
            }
        }
    }

    TexturePayload {
        icon,
        width: edge,
        height: edge,
        rgba,
        fallback: false,
    }
}

fn tint_for_index(index: usize) -> (u8, u8, u8) {
    // Cheap hue walk: rotate through six saturated anchors.
    const ANCHORS: [(u8, u8, u8); 6] = [
        (0, 212, 255),
        (139, 85, 255),
        (255, 112, 166),
        (255, 196, 0),
        (88, 255, 160),
        (255, 255, 255),
    ];
    ANCHORS[index % ANCHORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use std::time::Duration;

    #[test]
    fn offline_channel_delivers_one_payload_per_entry() {
        let channel = init_offline_channel(CATALOG);

        let mut received = Vec::new();
        for _ in 0..CATALOG.len() {
            let payload = channel
                .0
                .recv_timeout(Duration::from_secs(5))
                .expect("expected an offline payload");
            received.push(payload);
        }

        assert_eq!(received.len(), CATALOG.len());
        for (payload, icon) in received.iter().zip(CATALOG) {
            assert_eq!(payload.icon, *icon);
            assert!(!payload.fallback);
            assert_eq!(
                payload.rgba.len(),
                (payload.width * payload.height * 4) as usize
            );
        }

        // Catalog exhausted: channel closes.
        assert!(channel.0.recv_timeout(Duration::from_secs(1)).is_err());
    }

    #[test]
    fn offline_tiles_have_an_opaque_center() {
        let payload = offline_tile(CATALOG[0], 0);
        let edge = payload.width as usize;
        let center = (edge / 2 * edge + edge / 2) * 4;
        assert_eq!(payload.rgba[center + 3], 255);
        assert_eq!(payload.rgba[3], 0);
    }
}
