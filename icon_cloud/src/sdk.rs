//! SDK entry points and builder for composing the backdrop app.

use std::path::PathBuf;

use bevy::pbr::wireframe::WireframePlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::camera::parallax_plugin;
use crate::catalog::CATALOG;
use crate::config;
use crate::data::{init_offline_channel, init_texture_channel, FetcherConfig, TextureChannel};
use crate::scene::{
    animation_plugin, ingest_textures, setup_scene, spawn_particle_field, still_capture_plugin,
    CloudSettings, StillCapture,
};
use crate::ui::{intro_plugin, tooltip_plugin, HeroCopy};

const CAPTURE_WARMUP_FRAMES: u32 = 180;

/// Builder for constructing a backdrop app with customizable pieces.
pub struct BackdropBuilder {
    channel: Option<TextureChannel>,
    settings: CloudSettings,
    hero: HeroCopy,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_parallax: bool,
    enable_tooltip: bool,
    enable_intro: bool,
    enable_particles: bool,
    capture_path: Option<PathBuf>,
}

impl Default for BackdropBuilder {
    fn default() -> Self {
        Self {
            channel: None,
            settings: CloudSettings::default(),
            hero: HeroCopy::default(),
            window_title: "Nimbus".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.016, 0.063, 0.141),
            enable_parallax: true,
            enable_tooltip: true,
            enable_intro: true,
            enable_particles: true,
            capture_path: None,
        }
    }
}

impl BackdropBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit texture channel instead of the env-selected source.
    pub fn channel(mut self, channel: TextureChannel) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Synthesize textures locally, regardless of `NIMBUS_OFFLINE`.
    pub fn offline(mut self) -> Self {
        self.channel = Some(init_offline_channel(CATALOG));
        self
    }

    pub fn settings(mut self, settings: CloudSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn hero_title(mut self, title: impl Into<String>) -> Self {
        self.hero.title = title.into();
        self
    }

    pub fn hero_role(mut self, role: impl Into<String>) -> Self {
        self.hero.role = role.into();
        self
    }

    pub fn disable_parallax(mut self) -> Self {
        self.enable_parallax = false;
        self
    }

    pub fn disable_tooltip(mut self) -> Self {
        self.enable_tooltip = false;
        self
    }

    pub fn disable_intro(mut self) -> Self {
        self.enable_intro = false;
        self
    }

    pub fn disable_particles(mut self) -> Self {
        self.enable_particles = false;
        self
    }

    /// Capture one frame to `path` after warm-up, then exit.
    pub fn capture_still(mut self, path: impl Into<PathBuf>) -> Self {
        self.capture_path = Some(path.into());
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let _ = dotenvy::dotenv();

        let channel = self.channel.unwrap_or_else(|| {
            if config::offline_mode() {
                init_offline_channel(CATALOG)
            } else {
                init_texture_channel(FetcherConfig {
                    cdn_base: config::icon_cdn_base(),
                    catalog: CATALOG,
                })
            }
        });

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(WireframePlugin)
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(channel)
        .insert_resource(self.settings)
        .add_systems(Startup, setup_scene)
        .add_systems(Update, ingest_textures)
        .add_plugins(animation_plugin);

        if self.enable_particles {
            app.add_systems(Startup, spawn_particle_field);
        }
        if self.enable_parallax {
            app.add_plugins(parallax_plugin);
        }
        if self.enable_tooltip || self.enable_intro {
            app.add_plugins(EguiPlugin);
        }
        if self.enable_tooltip {
            app.add_plugins(tooltip_plugin);
        }
        if self.enable_intro {
            app.insert_resource(self.hero);
            app.add_plugins(intro_plugin);
        }
        if let Some(path) = self.capture_path {
            app.insert_resource(StillCapture::new(path, CAPTURE_WARMUP_FRAMES));
            app.add_plugins(still_capture_plugin);
        }

        app
    }
}
