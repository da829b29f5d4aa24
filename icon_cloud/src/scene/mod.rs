pub(crate) mod animation;
pub(crate) mod backdrop;
pub(crate) mod materials;
pub(crate) mod particles;
mod screenshot;
pub(crate) mod sprites;

pub use animation::animation_plugin;
pub use backdrop::{setup_scene, Centerpiece, SkyShell};
pub use particles::{spawn_particle_field, ParticleField};
pub use screenshot::{still_capture_plugin, StillCapture};
pub use sprites::{
    ingest_textures, CloudSettings, IconSprite, SpriteCloud, SpriteMotion, SpriteRegistry,
};
