//! Hover tooltip: names the sprite under the pointer.
//!
//! Uses manual ray-box intersection instead of Bevy's mesh picking to avoid
//! input absorption conflicts with bevy_egui.

use bevy::prelude::*;
use bevy::window::CursorMoved;
use bevy_egui::{egui, EguiContexts};

use crate::scene::sprites::IconSprite;

const TOOLTIP_OFFSET: f32 = 14.0;

/// Last hover query result. Recomputed on pointer movement, drawn every
/// frame so the tooltip persists while the pointer rests on a sprite.
#[derive(Resource, Default)]
pub struct HoverState {
    cursor: Vec2,
    hit: Option<&'static str>,
}

pub fn tooltip_plugin(app: &mut App) {
    app.init_resource::<HoverState>()
        .add_systems(Update, (hover_raycast_system, tooltip_panel_system).chain());
}

fn hover_raycast_system(
    mut moves: EventReader<CursorMoved>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    sprites: Query<(&GlobalTransform, &IconSprite)>,
    mut hover: ResMut<HoverState>,
) {
    let Some(event) = moves.read().last() else {
        return;
    };
    hover.cursor = event.position;
    hover.hit = None;

    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, event.position) else {
        return;
    };

    let origin = ray.origin;
    let direction: Vec3 = *ray.direction;

    let mut best: Option<(f32, &'static str)> = None;
    for (transform, sprite) in &sprites {
        if let Some(distance) =
            ray_sprite_test(origin, direction, transform.translation(), sprite.half_extent)
        {
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, sprite.label));
            }
        }
    }

    hover.hit = best.map(|(_, label)| label);
}

fn tooltip_panel_system(mut contexts: EguiContexts, hover: Res<HoverState>) {
    let Some(label) = hover.hit else {
        return;
    };

    let pos = egui::pos2(
        hover.cursor.x + TOOLTIP_OFFSET,
        hover.cursor.y + TOOLTIP_OFFSET,
    );
    egui::Area::new(egui::Id::new("icon-tooltip"))
        .fixed_pos(pos)
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(8, 10, 18, 204))
                .stroke(egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgba_premultiplied(0, 53, 64, 31),
                ))
                .inner_margin(egui::Margin::symmetric(10, 6))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(label)
                            .size(13.0)
                            .color(egui::Color32::from_rgb(223, 247, 255)),
                    );
                });
        });
}

/// Billboards always face the camera, so a box of the sprite's half-width
/// around its center stands in for the facing quad.
pub(crate) fn ray_sprite_test(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    half_extent: f32,
) -> Option<f32> {
    let half = Vec3::splat(half_extent);
    ray_box_intersect(origin, direction, center - half, center + half)
}

fn ray_box_intersect(origin: Vec3, dir: Vec3, box_min: Vec3, box_max: Vec3) -> Option<f32> {
    let inv_dir = 1.0 / dir;
    let t1 = (box_min - origin) * inv_dir;
    let t2 = (box_max - origin) * inv_dir;
    let t_min = t1.min(t2);
    let t_max = t1.max(t2);
    let t_enter = t_min.x.max(t_min.y).max(t_min.z);
    let t_exit = t_max.x.min(t_max.y).min(t_max.z);
    if t_enter <= t_exit && t_exit > 0.0 {
        Some(t_enter.max(0.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMERA: Vec3 = Vec3::new(0.0, 0.0, 18.0);

    #[test]
    fn ray_straight_at_a_sprite_hits_it() {
        let hit = ray_sprite_test(CAMERA, Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert!(hit.is_some());
        let distance = hit.unwrap();
        assert!((distance - 17.0).abs() < 1e-4);
    }

    #[test]
    fn ray_misses_a_sprite_off_to_the_side() {
        let hit = ray_sprite_test(CAMERA, Vec3::NEG_Z, Vec3::new(5.0, 0.0, 0.0), 1.0);
        assert!(hit.is_none());
    }

    #[test]
    fn nearest_of_two_overlapping_sprites_wins() {
        let near = ray_sprite_test(CAMERA, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap();
        let far = ray_sprite_test(CAMERA, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -5.0), 1.0).unwrap();
        assert!(near < far);
    }

    #[test]
    fn sprite_behind_the_camera_is_not_hit() {
        let hit = ray_sprite_test(CAMERA, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 25.0), 1.0);
        assert!(hit.is_none());
    }
}
