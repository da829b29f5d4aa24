//! Shared material and texture helpers for the backdrop.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, Face, TextureDimension, TextureFormat};

/// Wrap decoded RGBA pixels into a GPU-ready texture asset.
pub(crate) fn image_tile(width: u32, height: u32, rgba: Vec<u8>) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        rgba,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// One material per sprite: opacity twinkles independently even when the
/// texture is shared across a cloud.
pub(crate) fn sprite_material(
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(texture),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}

/// Inside-out shell: front faces culled so only the interior is visible.
pub(crate) fn sky_material(materials: &mut Assets<StandardMaterial>) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgba(0.016, 0.063, 0.141, 0.95),
        unlit: true,
        double_sided: true,
        cull_mode: Some(Face::Front),
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}

pub(crate) fn centerpiece_material(
    materials: &mut Assets<StandardMaterial>,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgba(0.059, 0.169, 0.227, 0.9),
        emissive: LinearRgba::rgb(0.039, 0.247, 0.357),
        metallic: 0.6,
        perceptual_roughness: 0.35,
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}

pub(crate) fn particle_material(
    materials: &mut Assets<StandardMaterial>,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.12),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}
