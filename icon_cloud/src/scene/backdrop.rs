//! One-time scene assembly: camera, lights, sky shell, centerpiece, and the
//! empty sprite-cloud group the factory fills in as textures arrive.

use bevy::pbr::wireframe::{Wireframe, WireframeColor};
use bevy::prelude::*;

use crate::scene::materials;
use crate::scene::sprites::{SpriteCloud, SpriteRegistry};

const CAMERA_DISTANCE: f32 = 18.0;
const CAMERA_FOV_DEGREES: f32 = 45.0;
const SKY_RADIUS: f32 = 120.0;
const CENTERPIECE_RADIUS: f32 = 3.6;
const CENTERPIECE_SUBDIVISIONS: u32 = 2;

/// Marker for the slowly tumbling central polyhedron.
#[derive(Component)]
pub struct Centerpiece;

/// Marker for the background shell.
#[derive(Component)]
pub struct SkyShell;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(SpriteRegistry::default());

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
    });
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(139, 85, 255),
            intensity: 2_000_000.0,
            range: 200.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(15.0, 10.0, 10.0),
    ));
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0, 212, 255),
            intensity: 1_500_000.0,
            range: 200.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, -8.0, 6.0),
    ));

    commands.spawn((
        SkyShell,
        Mesh3d(meshes.add(Sphere::new(SKY_RADIUS).mesh().uv(32, 32))),
        MeshMaterial3d(materials::sky_material(&mut materials_res)),
        Transform::default(),
    ));

    let centerpiece_mesh = Sphere::new(CENTERPIECE_RADIUS)
        .mesh()
        .ico(CENTERPIECE_SUBDIVISIONS)
        .unwrap_or_else(|err| panic!("nimbus: icosphere build failed: {err}"));
    commands.spawn((
        Centerpiece,
        Mesh3d(meshes.add(centerpiece_mesh)),
        MeshMaterial3d(materials::centerpiece_material(&mut materials_res)),
        Transform::from_xyz(-2.0, -0.4, -1.0),
        Wireframe,
        WireframeColor {
            color: Color::srgba(0.0, 0.83, 1.0, 0.06),
        },
    ));

    // The cloud group itself; sprites are parented here as textures resolve.
    commands.spawn((SpriteCloud, Transform::default(), Visibility::default()));
}
