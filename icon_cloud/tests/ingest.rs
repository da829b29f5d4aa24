//! End-to-end ingest: the offline source feeds the sprite factory until the
//! cloud holds exactly catalog-size × density sprites.

use std::time::{Duration, Instant};

use bevy::asset::AssetApp;
use bevy::prelude::*;

use icon_cloud::{
    ingest_textures, init_offline_channel, CloudSettings, IconSprite, SpriteCloud, SpriteMotion,
    SpriteRegistry, CATALOG,
};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.init_asset::<Mesh>();
    app.init_asset::<Image>();
    app.init_asset::<StandardMaterial>();
    app.insert_resource(CloudSettings::default());
    app.insert_resource(SpriteRegistry::default());
    app.add_systems(Update, ingest_textures);
    app.world_mut()
        .spawn((SpriteCloud, Transform::default(), Visibility::default()));
    app
}

fn sprite_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world
        .query_filtered::<(), With<IconSprite>>()
        .iter(world)
        .count()
}

#[test]
fn cloud_converges_to_catalog_size_times_density() {
    let mut app = test_app();
    app.insert_resource(init_offline_channel(CATALOG));

    let expected = CATALOG.len() * CloudSettings::default().sprites_per_icon;
    let deadline = Instant::now() + Duration::from_secs(10);

    loop {
        app.update();
        if sprite_count(&mut app) >= expected {
            break;
        }
        assert!(
            Instant::now() < deadline,
            "cloud never reached {expected} sprites"
        );
        std::thread::sleep(Duration::from_millis(5));
    }

    // Channel exhausted: a few more frames must not overshoot.
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(sprite_count(&mut app), expected);
    assert_eq!(app.world().resource::<SpriteRegistry>().len(), expected);
}

#[test]
fn spawned_sprites_carry_bounded_motion_parameters() {
    let mut app = test_app();
    app.insert_resource(init_offline_channel(CATALOG));

    let expected = CATALOG.len() * CloudSettings::default().sprites_per_icon;
    let deadline = Instant::now() + Duration::from_secs(10);
    while sprite_count(&mut app) < expected {
        app.update();
        assert!(Instant::now() < deadline, "offline payloads never arrived");
        std::thread::sleep(Duration::from_millis(5));
    }

    let settings = CloudSettings::default();
    let outer = settings.cluster_radius * 1.2;

    let world = app.world_mut();
    let mut sprites = world.query::<(&IconSprite, &SpriteMotion)>();
    let mut seen = 0usize;
    for (sprite, motion) in sprites.iter(world) {
        seen += 1;
        assert!(!sprite.label.is_empty());
        assert!(sprite.half_extent > 0.0);
        assert!((0.2..1.0).contains(&motion.speed));
        assert!((0.3..1.3).contains(&motion.bob_amplitude));
        assert!(motion.spin_rate.abs() <= 0.2);
        assert!(motion.base_position.length() <= outer + 1e-3);
    }
    assert_eq!(seen, expected);
}

#[test]
fn sprites_are_parented_to_the_cloud_group() {
    let mut app = test_app();
    app.insert_resource(init_offline_channel(CATALOG));

    let deadline = Instant::now() + Duration::from_secs(10);
    while sprite_count(&mut app) == 0 {
        app.update();
        assert!(Instant::now() < deadline, "no sprite ever spawned");
        std::thread::sleep(Duration::from_millis(5));
    }

    let world = app.world_mut();
    let cloud = world
        .query_filtered::<Entity, With<SpriteCloud>>()
        .single(world);
    let mut sprites = world.query_filtered::<&Parent, With<IconSprite>>();
    for parent in sprites.iter(world) {
        assert_eq!(parent.get(), cloud);
    }
}
