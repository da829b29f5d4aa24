//! Still capture: waits for the cloud to populate, grabs one frame to disk,
//! then exits.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

/// Resource controlling one-shot capture. Counts down warm-up frames so the
/// fetcher has time to populate the cloud, takes a screenshot, then exits.
#[derive(Resource)]
pub struct StillCapture {
    pub path: PathBuf,
    pub warmup_frames: u32,
    captured: bool,
}

impl StillCapture {
    pub fn new(path: PathBuf, warmup_frames: u32) -> Self {
        Self {
            path,
            warmup_frames,
            captured: false,
        }
    }
}

pub fn still_capture_plugin(app: &mut App) {
    app.add_systems(Update, still_capture_system);
}

fn still_capture_system(
    mut commands: Commands,
    mut capture: ResMut<StillCapture>,
    mut exit: EventWriter<AppExit>,
) {
    if capture.captured {
        exit.send(AppExit::Success);
        return;
    }

    if capture.warmup_frames > 0 {
        capture.warmup_frames -= 1;
        return;
    }

    let path = capture.path.clone();
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(path));
    capture.captured = true;
}
