//! Dim particle field: one point-list mesh scattered through the volume.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use rand::prelude::*;

use crate::scene::materials;

const PARTICLE_COUNT: usize = 700;
const FIELD_EXTENT: f32 = 60.0;

/// Marker for the particle-field entity.
#[derive(Component)]
pub struct ParticleField;

pub fn spawn_particle_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let positions = scatter_positions(&mut rng, PARTICLE_COUNT, FIELD_EXTENT);

    let mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(
        Mesh::ATTRIBUTE_NORMAL,
        vec![[0.0, 0.0, 1.0]; PARTICLE_COUNT],
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, vec![[0.0, 0.0]; PARTICLE_COUNT]);

    commands.spawn((
        ParticleField,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials::particle_material(&mut materials_res)),
        Transform::default(),
    ));
}

/// Uniform scatter over a cube of half-width `extent`.
pub(crate) fn scatter_positions(
    rng: &mut impl Rng,
    count: usize,
    extent: f32,
) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_stays_within_the_field() {
        let mut rng = rand::thread_rng();
        let positions = scatter_positions(&mut rng, PARTICLE_COUNT, FIELD_EXTENT);

        assert_eq!(positions.len(), PARTICLE_COUNT);
        for p in positions {
            assert!(p.iter().all(|c| c.abs() <= FIELD_EXTENT));
        }
    }
}
