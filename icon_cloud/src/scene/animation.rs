//! Per-frame motion: cloud drift, sprite bob/twinkle/roll, centerpiece spin.
//! Camera parallax lives in `camera::parallax`.

use bevy::prelude::*;

use crate::scene::backdrop::Centerpiece;
use crate::scene::sprites::{IconSprite, SpriteCloud, SpriteMotion};

const DRIFT_YAW_FREQ: f32 = 0.06;
const DRIFT_YAW_AMP: f32 = 0.08;
const DRIFT_PITCH_FREQ: f32 = 0.03;
const DRIFT_PITCH_AMP: f32 = 0.02;

const SWAY_X_FREQ_SCALE: f32 = 0.3;
const SWAY_X_PHASE_SCALE: f32 = 0.7;
const SWAY_Z_FREQ_SCALE: f32 = 0.25;
const SWAY_Z_PHASE_SCALE: f32 = 0.4;
const SWAY_AMPLITUDE: f32 = 0.25;

const TWINKLE_BASE: f32 = 0.85;
const TWINKLE_DEPTH: f32 = 0.12;
const OPACITY_MIN: f32 = 0.35;
const OPACITY_MAX: f32 = 1.0;

const ROLL_SCALE: f32 = 0.6;

const CENTERPIECE_YAW_RATE: f32 = 0.15;
const CENTERPIECE_PITCH_RATE: f32 = 0.072;

pub fn animation_plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            drift_cloud_system,
            animate_sprites_system,
            spin_centerpiece_system,
        ),
    );
}

/// Low-frequency sway of the whole group, so the cloud reads as drifting.
fn drift_cloud_system(time: Res<Time>, mut clouds: Query<&mut Transform, With<SpriteCloud>>) {
    let t = time.elapsed_secs();
    let yaw = (t * DRIFT_YAW_FREQ).sin() * DRIFT_YAW_AMP;
    let pitch = (t * DRIFT_PITCH_FREQ).sin() * DRIFT_PITCH_AMP;
    for mut transform in &mut clouds {
        transform.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
    }
}

/// Bounded offset from the sprite's base position at elapsed time `t`.
/// Each axis has its own frequency and phase scaling, so sprites sharing an
/// icon still desynchronize.
pub(crate) fn sprite_offset(t: f32, motion: &SpriteMotion) -> Vec3 {
    let bob = (t * motion.speed + motion.phase).sin() * motion.bob_amplitude;
    let sway_x = (t * motion.speed * SWAY_X_FREQ_SCALE + motion.phase * SWAY_X_PHASE_SCALE).sin()
        * SWAY_AMPLITUDE;
    let sway_z = (t * motion.speed * SWAY_Z_FREQ_SCALE + motion.phase * SWAY_Z_PHASE_SCALE).cos()
        * SWAY_AMPLITUDE;
    Vec3::new(sway_x, bob, sway_z)
}

/// Twinkle, clamped to the visible band.
pub(crate) fn sprite_opacity(t: f32, motion: &SpriteMotion) -> f32 {
    (TWINKLE_BASE + (t * motion.speed + motion.phase).sin() * TWINKLE_DEPTH)
        .clamp(OPACITY_MIN, OPACITY_MAX)
}

/// Repositions every sprite from its motion parameters, re-faces it toward
/// the camera, rolls it in-plane, and twinkles its material.
#[allow(clippy::type_complexity)]
fn animate_sprites_system(
    time: Res<Time>,
    cameras: Query<&Transform, (With<Camera3d>, Without<IconSprite>, Without<SpriteCloud>)>,
    clouds: Query<&Transform, (With<SpriteCloud>, Without<IconSprite>, Without<Camera3d>)>,
    mut sprites: Query<
        (&SpriteMotion, &mut Transform, &MeshMaterial3d<StandardMaterial>),
        With<IconSprite>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(camera_transform) = cameras.get_single() else {
        return;
    };
    let Ok(cloud_transform) = clouds.get_single() else {
        return;
    };
    let t = time.elapsed_secs();

    // Billboard target expressed in the (rotating) cloud group's space.
    let local_camera = cloud_transform.rotation.inverse()
        * (camera_transform.translation - cloud_transform.translation);

    for (motion, mut transform, material) in &mut sprites {
        transform.translation = motion.base_position + sprite_offset(t, motion);
        transform.look_at(local_camera, Vec3::Y);
        transform.rotate_local_z(t * motion.spin_rate * ROLL_SCALE);

        if let Some(mat) = materials.get_mut(&material.0) {
            mat.base_color.set_alpha(sprite_opacity(t, motion));
        }
    }
}

/// Continuous slow tumble on two axes, frame-rate independent.
fn spin_centerpiece_system(
    time: Res<Time>,
    mut centerpieces: Query<&mut Transform, With<Centerpiece>>,
) {
    let dt = time.delta_secs();
    for mut transform in &mut centerpieces {
        transform.rotate_y(CENTERPIECE_YAW_RATE * dt);
        transform.rotate_x(CENTERPIECE_PITCH_RATE * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion(speed: f32, bob: f32, phase: f32) -> SpriteMotion {
        SpriteMotion {
            base_position: Vec3::new(3.0, -1.0, 7.0),
            speed,
            bob_amplitude: bob,
            spin_rate: 0.1,
            phase,
        }
    }

    #[test]
    fn offsets_stay_within_amplitude_bounds() {
        let samples = [
            motion(0.2, 0.3, 0.0),
            motion(1.0, 1.3, 5.0),
            motion(0.63, 0.8, 11.0),
        ];
        for m in &samples {
            for step in 0..2000 {
                let t = step as f32 * 0.05;
                let offset = sprite_offset(t, m);
                assert!(offset.y.abs() <= m.bob_amplitude + 1e-5);
                assert!(offset.x.abs() <= SWAY_AMPLITUDE + 1e-5);
                assert!(offset.z.abs() <= SWAY_AMPLITUDE + 1e-5);
            }
        }
    }

    #[test]
    fn opacity_stays_in_the_visible_band() {
        let m = motion(0.9, 1.0, 2.0);
        for step in 0..2000 {
            let t = step as f32 * 0.05;
            let opacity = sprite_opacity(t, &m);
            assert!((OPACITY_MIN..=OPACITY_MAX).contains(&opacity));
        }
    }

    #[test]
    fn phase_desynchronizes_identical_parameters() {
        let a = motion(0.5, 1.0, 0.0);
        let b = motion(0.5, 1.0, 1.0);
        let t = 1.7;
        assert_ne!(sprite_offset(t, &a), sprite_offset(t, &b));
    }

    #[test]
    fn displayed_position_is_base_plus_offset() {
        let m = motion(0.4, 0.6, 3.0);
        let t = 12.25;
        let displayed = m.base_position + sprite_offset(t, &m);
        assert!((displayed - m.base_position).length() <= m.bob_amplitude + 2.0 * SWAY_AMPLITUDE);
    }
}
