//! Hero overlay with one-shot entrance easing: each block slides up and
//! fades in on its own delay, cubic-out.

use bevy::math::curve::{Curve, EaseFunction, EasingCurve};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

const HERO_X: f32 = 28.0;
const HERO_Y: f32 = 28.0;
const BLOCK_GAP: f32 = 8.0;
const PANEL_STAGGER: f32 = 0.06;

struct Entrance {
    rise: f32,
    duration: f32,
    delay: f32,
}

const AVATAR_ENTRANCE: Entrance = Entrance { rise: 28.0, duration: 0.9, delay: 0.0 };
const TITLE_ENTRANCE: Entrance = Entrance { rise: 18.0, duration: 0.9, delay: 0.08 };
const ROLE_ENTRANCE: Entrance = Entrance { rise: 12.0, duration: 0.8, delay: 0.16 };
const PANEL_ENTRANCE: Entrance = Entrance { rise: 16.0, duration: 0.5, delay: 0.28 };

/// Overlay copy; override through the builder to brand the backdrop.
#[derive(Resource, Clone)]
pub struct HeroCopy {
    pub title: String,
    pub role: String,
    pub panels: Vec<String>,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            title: "Nimbus".to_string(),
            role: "Floating icon backdrop".to_string(),
            panels: vec![
                "Hover an icon to name it".to_string(),
                "Move the pointer to look around".to_string(),
            ],
        }
    }
}

pub fn intro_plugin(app: &mut App) {
    app.init_resource::<HeroCopy>()
        .add_systems(Update, hero_overlay_system);
}

fn hero_overlay_system(mut contexts: EguiContexts, time: Res<Time>, copy: Res<HeroCopy>) {
    let t = time.elapsed_secs();
    let ctx = contexts.ctx_mut();

    let mut cursor_y = HERO_Y;

    cursor_y = hero_block(ctx, "hero-avatar", t, &AVATAR_ENTRANCE, cursor_y, |ui| {
        ui.label(egui::RichText::new("\u{25C9}").size(34.0).color(accent()));
    });

    cursor_y = hero_block(ctx, "hero-title", t, &TITLE_ENTRANCE, cursor_y, |ui| {
        ui.label(
            egui::RichText::new(&copy.title)
                .size(26.0)
                .color(egui::Color32::from_rgb(223, 247, 255)),
        );
    });

    cursor_y = hero_block(ctx, "hero-role", t, &ROLE_ENTRANCE, cursor_y, |ui| {
        ui.label(
            egui::RichText::new(&copy.role)
                .size(14.0)
                .color(egui::Color32::from_rgb(140, 170, 190)),
        );
    });

    for (index, panel) in copy.panels.iter().enumerate() {
        let entrance = Entrance {
            delay: PANEL_ENTRANCE.delay + index as f32 * PANEL_STAGGER,
            ..PANEL_ENTRANCE
        };
        let id = format!("hero-panel-{index}");
        cursor_y = hero_block(ctx, &id, t, &entrance, cursor_y, |ui| {
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(8, 10, 18, 160))
                .inner_margin(egui::Margin::symmetric(10, 6))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(panel)
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 205, 220)),
                    );
                });
        });
    }
}

/// Draws one block at its eased offset/opacity and returns the next
/// baseline y.
fn hero_block(
    ctx: &egui::Context,
    id: &str,
    t: f32,
    entrance: &Entrance,
    baseline_y: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> f32 {
    let progress = entrance_progress(t, entrance.delay, entrance.duration);
    let pos = egui::pos2(HERO_X, baseline_y + entrance.rise * (1.0 - progress));

    let response = egui::Area::new(egui::Id::new(id))
        .fixed_pos(pos)
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_opacity(progress);
            add_contents(ui);
        });

    baseline_y + response.response.rect.height() + BLOCK_GAP
}

/// Cubic-out progress in [0, 1]; 0 before `delay`, 1 after `delay + duration`.
pub(crate) fn entrance_progress(t: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    let raw = ((t - delay) / duration).clamp(0.0, 1.0);
    EasingCurve::new(0.0, 1.0, EaseFunction::CubicOut).sample_clamped(raw)
}

fn accent() -> egui::Color32 {
    egui::Color32::from_rgb(0, 212, 255)
}
