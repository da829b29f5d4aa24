//! Nimbus — floating icon-cloud backdrop. Runs the icon_cloud app.

use bevy::prelude::*;
use icon_cloud::BackdropBuilder;

fn main() {
    let _ = dotenvy::dotenv();

    BackdropBuilder::new()
        .window_title("Nimbus")
        .clear_color(Color::srgb(0.016, 0.063, 0.141))
        .build()
        .run();
}
