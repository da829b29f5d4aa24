//! Sprite factory: ingest_textures system, cloud settings, sprite components.

use bevy::prelude::*;
use rand::prelude::*;

use crate::data::{TextureChannel, TexturePayload};
use crate::scene::materials;

const SPRITE_ASPECT: f32 = 1.6;
const VERTICAL_SQUASH: f32 = 0.6;
const SHELL_INNER: f32 = 0.35;
const SHELL_SPAN: f32 = 0.85;
const SPEED_RANGE: std::ops::Range<f32> = 0.2..1.0;
const BOB_RANGE: std::ops::Range<f32> = 0.3..1.3;
const SPIN_HALF_RANGE: f32 = 0.2;

const INGEST_BUDGET_PER_FRAME: usize = 4;

/// Marker for the group entity every icon sprite is parented to; the drift
/// animation rotates this as a whole.
#[derive(Component)]
pub struct SpriteCloud;

/// Identity and hover extent of one billboard.
#[derive(Component)]
pub struct IconSprite {
    pub id: &'static str,
    pub label: &'static str,
    pub half_extent: f32,
}

/// Per-sprite motion parameters. Written once at spawn, read every frame.
/// The displayed position is always `base_position` plus a bounded offset;
/// the base itself never moves.
#[derive(Component, Clone, Debug)]
pub struct SpriteMotion {
    pub base_position: Vec3,
    pub speed: f32,
    pub bob_amplitude: f32,
    pub spin_rate: f32,
    pub phase: f32,
}

/// Append-only index of spawned sprites. Phases are claimed monotonically,
/// so two sprites never share a desynchronization offset.
#[derive(Resource, Default)]
pub struct SpriteRegistry {
    pub entities: Vec<Entity>,
    next_phase: u32,
}

impl SpriteRegistry {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn claim_phase(&mut self) -> f32 {
        let phase = self.next_phase as f32;
        self.next_phase += 1;
        phase
    }
}

/// Tunables for cloud density and sprite sizing.
#[derive(Resource, Clone, Debug)]
pub struct CloudSettings {
    pub cluster_radius: f32,
    pub sprites_per_icon: usize,
    pub icon_min: f32,
    pub icon_max: f32,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            cluster_radius: 18.0,
            sprites_per_icon: 2,
            icon_min: 1.0,
            icon_max: 2.6,
        }
    }
}

/// Drains the texture channel (budgeted per frame) and grows the cloud.
#[allow(clippy::too_many_arguments)]
pub fn ingest_textures(
    mut commands: Commands,
    channel: Res<TextureChannel>,
    settings: Res<CloudSettings>,
    clouds: Query<Entity, With<SpriteCloud>>,
    mut registry: ResMut<SpriteRegistry>,
    mut images: ResMut<Assets<Image>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Ok(cloud) = clouds.get_single() else {
        return;
    };

    let mut received = 0usize;
    while received < INGEST_BUDGET_PER_FRAME {
        match channel.0.try_recv() {
            Ok(payload) => {
                spawn_icon_sprites(
                    &mut commands,
                    cloud,
                    payload,
                    &settings,
                    &mut registry,
                    &mut images,
                    &mut materials_res,
                    &mut meshes,
                );
                received += 1;
            }
            Err(_) => break,
        }
    }
}

/// One texture fans out into `sprites_per_icon` billboards with independent
/// placement and motion, all sharing the texture but owning their materials.
#[allow(clippy::too_many_arguments)]
fn spawn_icon_sprites(
    commands: &mut Commands,
    cloud: Entity,
    payload: TexturePayload,
    settings: &CloudSettings,
    registry: &mut SpriteRegistry,
    images: &mut Assets<Image>,
    materials_res: &mut Assets<StandardMaterial>,
    meshes: &mut Assets<Mesh>,
) {
    let TexturePayload {
        icon,
        width,
        height,
        rgba,
        ..
    } = payload;
    let texture = images.add(materials::image_tile(width, height, rgba));

    let mut rng = rand::thread_rng();
    for _ in 0..settings.sprites_per_icon {
        let scale = rng.gen_range(settings.icon_min..settings.icon_max);
        let base_position = sample_shell_position(&mut rng, settings.cluster_radius);
        let motion = SpriteMotion {
            base_position,
            speed: rng.gen_range(SPEED_RANGE),
            bob_amplitude: rng.gen_range(BOB_RANGE),
            spin_rate: rng.gen_range(-SPIN_HALF_RANGE..SPIN_HALF_RANGE),
            phase: registry.claim_phase(),
        };

        let entity = commands
            .spawn((
                IconSprite {
                    id: icon.id,
                    label: icon.label,
                    half_extent: 0.5 * scale * SPRITE_ASPECT,
                },
                motion,
                Mesh3d(meshes.add(Rectangle::new(scale * SPRITE_ASPECT, scale))),
                MeshMaterial3d(materials::sprite_material(materials_res, texture.clone())),
                Transform::from_translation(base_position),
                Visibility::default(),
            ))
            .set_parent(cloud)
            .id();

        registry.entities.push(entity);
    }
}

/// Uniform over sphere angles, radius biased toward the outer shell, vertical
/// extent compressed so the cloud reads as a band rather than a ball.
pub(crate) fn sample_shell_position(rng: &mut impl Rng, cluster_radius: f32) -> Vec3 {
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let theta = std::f32::consts::TAU * rng.gen::<f32>();
    let radius = cluster_radius * (SHELL_INNER + SHELL_SPAN * rng.gen::<f32>());

    Vec3::new(
        phi.sin() * theta.cos() * radius,
        phi.cos() * radius * VERTICAL_SQUASH,
        phi.sin() * theta.sin() * radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_positions_stay_in_the_configured_band() {
        let mut rng = rand::thread_rng();
        let radius = CloudSettings::default().cluster_radius;
        let inner = radius * SHELL_INNER;
        let outer = radius * (SHELL_INNER + SHELL_SPAN);

        for _ in 0..1000 {
            let p = sample_shell_position(&mut rng, radius);
            // Undo the vertical squash to recover the sampled shell radius.
            let unsquashed = Vec3::new(p.x, p.y / VERTICAL_SQUASH, p.z);
            let r = unsquashed.length();
            assert!(r >= inner - 1e-3, "radius {r} below inner bound {inner}");
            assert!(r <= outer + 1e-3, "radius {r} above outer bound {outer}");
            assert!(p.y.abs() <= outer * VERTICAL_SQUASH + 1e-3);
        }
    }

    #[test]
    fn phases_are_claimed_monotonically() {
        let mut registry = SpriteRegistry::default();
        assert_eq!(registry.claim_phase(), 0.0);
        assert_eq!(registry.claim_phase(), 1.0);
        assert_eq!(registry.claim_phase(), 2.0);
    }
}
