//! Icon cloud — animated 3D backdrop of floating icon billboards.
//!
//! Library root: catalog, texture pipeline, scene, and config modules.

mod camera;
pub mod catalog;
pub mod config;
pub mod data;
mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use camera::{parallax_plugin, PointerTarget};
pub use catalog::{IconDescriptor, CATALOG};
pub use data::{init_offline_channel, init_texture_channel, FetcherConfig, TexturePayload};
pub use scene::{
    animation_plugin, ingest_textures, setup_scene, spawn_particle_field, still_capture_plugin,
    Centerpiece, CloudSettings, IconSprite, ParticleField, SkyShell, SpriteCloud, SpriteMotion,
    SpriteRegistry, StillCapture,
};
pub use sdk::BackdropBuilder;
pub use ui::{intro_plugin, tooltip_plugin, HeroCopy};
