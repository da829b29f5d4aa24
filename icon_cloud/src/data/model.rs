// Transport-agnostic texture payloads. reqwest/image specifics stay in
// http.rs; conversion happens there.

use crate::catalog::IconDescriptor;

/// Decoded RGBA pixels for one catalog entry, ready to become a GPU texture.
/// `fallback` marks payloads whose fetch failed and were substituted with the
/// procedural placeholder.
#[derive(Clone, Debug)]
pub struct TexturePayload {
    pub icon: IconDescriptor,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub fallback: bool,
}
