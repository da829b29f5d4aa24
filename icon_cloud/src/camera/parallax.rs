//! Pointer-parallax camera: glides toward a pointer-derived offset, always
//! aimed at the scene origin.

use bevy::prelude::*;
use bevy::window::CursorMoved;

const CAMERA_DISTANCE: f32 = 18.0;
const TARGET_X_SPAN: f32 = 6.0;
const TARGET_Y_SPAN: f32 = 3.0;

// Fraction of the remaining distance closed per reference tick.
const SMOOTHING: f32 = 0.03;
const REFERENCE_HZ: f32 = 60.0;

/// Last-known pointer position in normalized device coordinates, shared by
/// the glide below and anything else that wants pointer context.
#[derive(Resource, Default)]
pub struct PointerTarget {
    pub ndc: Vec2,
}

pub fn parallax_plugin(app: &mut App) {
    app.init_resource::<PointerTarget>()
        .add_systems(Update, (track_pointer_system, glide_camera_system).chain());
}

fn track_pointer_system(
    mut moves: EventReader<CursorMoved>,
    windows: Query<&Window>,
    mut target: ResMut<PointerTarget>,
) {
    let Some(event) = moves.read().last() else {
        return;
    };
    let Ok(window) = windows.get(event.window) else {
        return;
    };
    target.ndc = Vec2::new(
        (event.position.x / window.width()) * 2.0 - 1.0,
        (event.position.y / window.height()) * 2.0 - 1.0,
    );
}

fn glide_camera_system(
    time: Res<Time>,
    target: Res<PointerTarget>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let goal = Vec3::new(
        target.ndc.x * TARGET_X_SPAN,
        -target.ndc.y * TARGET_Y_SPAN,
        CAMERA_DISTANCE,
    );
    let alpha = smoothing_alpha(time.delta_secs());
    for mut transform in &mut cameras {
        transform.translation = approach(transform.translation, goal, alpha);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}

/// Fraction of the remaining distance to close this tick. Stays strictly
/// below 1 for any dt, so the glide converges without overshoot.
pub(crate) fn smoothing_alpha(dt: f32) -> f32 {
    1.0 - (1.0 - SMOOTHING).powf(dt * REFERENCE_HZ)
}

pub(crate) fn approach(current: Vec3, goal: Vec3, alpha: f32) -> Vec3 {
    current + (goal - current) * alpha
}
