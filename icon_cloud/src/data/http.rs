//! HTTP texture fetcher: dedicated thread + reqwest → TexturePayload.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};

use crate::catalog::IconDescriptor;
use crate::data::model::TexturePayload;
use crate::data::{FetcherConfig, TextureFetcher};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_TILE_EDGE: u32 = 512;

pub(crate) const FALLBACK_EDGE: u32 = 256;
pub(crate) const FALLBACK_RADIUS: u32 = 90;

/// Decoded RGBA image as it comes off the wire, before any payload policy.
pub(crate) struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Error during fetch or decode. One shot, no retries.
#[derive(Debug)]
pub(crate) struct FetchError {
    message: String,
}

impl FetchError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Network-backed texture source. One GET per catalog entry.
pub struct HttpFetcher;

impl TextureFetcher for HttpFetcher {
    fn spawn(config: FetcherConfig) -> Receiver<TexturePayload> {
        let (tx, rx) = crossbeam_channel::bounded(64);
        thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(err) => {
                    eprintln!("nimbus: failed to build tokio runtime: {err}");
                    return;
                }
            };
            rt.block_on(fetch_loop(config, tx));
        });
        rx
    }
}

async fn fetch_loop(config: FetcherConfig, tx: Sender<TexturePayload>) {
    let client = match reqwest::Client::builder()
        .user_agent(concat!("nimbus/", env!("CARGO_PKG_VERSION")))
        .timeout(FETCH_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            eprintln!("nimbus: failed to build http client: {err}");
            return;
        }
    };

    for icon in config.catalog {
        let url = icon.image_url(&config.cdn_base);
        let payload = resolve(*icon, fetch_icon(&client, &url).await);
        if tx.send(payload).is_err() {
            // Receiver dropped: the app is gone, stop fetching.
            return;
        }
    }
}

async fn fetch_icon(client: &reqwest::Client, url: &str) -> Result<DecodedImage, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| FetchError::new(format!("request failed: {err}")))?;

    if !response.status().is_success() {
        return Err(FetchError::new(format!("status {}", response.status())));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|err| FetchError::new(format!("failed to read body: {err}")))?;

    decode(&bytes)
}

fn decode(bytes: &[u8]) -> Result<DecodedImage, FetchError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|err| FetchError::new(format!("decode failed: {err}")))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    // Icons are small; cap anything oversized before it hits the GPU.
    if width > MAX_TILE_EDGE {
        let ratio = MAX_TILE_EDGE as f32 / width as f32;
        let new_height = ((height as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            MAX_TILE_EDGE,
            new_height,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        return Ok(DecodedImage {
            width: rw,
            height: rh,
            rgba: resized.into_raw(),
        });
    }

    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Single resolution point for fetch outcomes: success keeps the decoded
/// pixels, failure logs and substitutes the procedural disc. Either way a
/// payload goes out, so the catalog-size invariant holds downstream.
pub(crate) fn resolve(
    icon: IconDescriptor,
    result: Result<DecodedImage, FetchError>,
) -> TexturePayload {
    match result {
        Ok(decoded) => TexturePayload {
            icon,
            width: decoded.width,
            height: decoded.height,
            rgba: decoded.rgba,
            fallback: false,
        },
        Err(err) => {
            eprintln!("nimbus: icon {} failed to load: {err}", icon.id);
            let disc = fallback_tile();
            TexturePayload {
                icon,
                width: disc.width,
                height: disc.height,
                rgba: disc.rgba,
                fallback: true,
            }
        }
    }
}

/// Procedural placeholder: a plain white disc on a transparent tile.
pub(crate) fn fallback_tile() -> DecodedImage {
    let mut tile = image::RgbaImage::new(FALLBACK_EDGE, FALLBACK_EDGE);
    let center = FALLBACK_EDGE as i64 / 2;
    let radius_sq = (FALLBACK_RADIUS as i64) * (FALLBACK_RADIUS as i64);
    for (x, y, pixel) in tile.enumerate_pixels_mut() {
        let dx = x as i64 - center;
        let dy = y as i64 - center;
        if dx * dx + dy * dy <= radius_sq {
            *pixel = image::Rgba([255, 255, 255, 255]);
        }
    }
    DecodedImage {
        width: FALLBACK_EDGE,
        height: FALLBACK_EDGE,
        rgba: tile.into_raw(),
    }
}
