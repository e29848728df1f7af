use bevy::prelude::*;
use neondrive_simulation::{
    Car, Decoration, GlowPulse, Hologram, PanelClosed, PanelOpened, Showcase,
};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_car_visual,
                spawn_showcase_visuals,
                spawn_decoration_visuals,
                sync_car_transform,
                sync_hologram_transforms,
                sync_decoration_visuals,
                log_panel_transitions,
            )
                .chain(),
        )
        .add_systems(Update, draw_floor_grid);
    }
}

/// Link: visual entity → simulation entity
#[derive(Component)]
pub struct VisualOf(pub Entity);

/// Link: simulation entity → visual root entity
#[derive(Component)]
pub struct HasVisual(pub Entity);

/// Marker for the spinning hologram cube above a showcase
#[derive(Component)]
pub struct HologramVisual;

/// The car model sits slightly above the simulation ground plane
const CAR_VISUAL_LIFT: f32 = 0.7;

/// Build the placeholder car out of primitives (body, roof, wheels, lights)
fn spawn_car_visual(
    mut commands: Commands,
    query: Query<(Entity, &Transform), (Added<Car>, Without<HasVisual>)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (sim_entity, sim_transform) in query.iter() {
        let body_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.07, 0.07, 0.07),
            metallic: 0.9,
            perceptual_roughness: 0.2,
            ..default()
        });
        let wheel_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.2, 0.2),
            metallic: 0.5,
            perceptual_roughness: 0.7,
            ..default()
        });
        let headlight_material = materials.add(StandardMaterial {
            base_color: Color::WHITE,
            emissive: LinearRgba::new(5.0, 5.0, 5.0, 1.0),
            ..default()
        });
        let taillight_material = materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            emissive: LinearRgba::new(5.0, 0.0, 0.0, 1.0),
            ..default()
        });

        let body = meshes.add(Cuboid::new(4.0, 1.0, 8.0));
        let roof = meshes.add(Cuboid::new(3.5, 1.0, 4.0));
        let wheel = meshes.add(Cylinder::new(0.7, 0.5));
        let headlight = meshes.add(Sphere::new(0.3));
        let taillight = meshes.add(Cuboid::new(1.0, 0.3, 0.1));

        let mut root_transform = *sim_transform;
        root_transform.translation.y += CAR_VISUAL_LIFT;

        let visual_entity = commands
            .spawn((root_transform, Visibility::default(), VisualOf(sim_entity)))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(body),
                    MeshMaterial3d(body_material.clone()),
                    Transform::from_xyz(0.0, 1.0, 0.0),
                ));
                parent.spawn((
                    Mesh3d(roof),
                    MeshMaterial3d(body_material),
                    Transform::from_xyz(0.0, 2.0, -0.5),
                ));

                // Wheels: cylinders turned onto the X axis
                let wheel_rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
                for (x, z) in [(2.0, 2.0), (-2.0, 2.0), (2.0, -2.0), (-2.0, -2.0)] {
                    parent.spawn((
                        Mesh3d(wheel.clone()),
                        MeshMaterial3d(wheel_material.clone()),
                        Transform::from_xyz(x, 0.0, z).with_rotation(wheel_rotation),
                    ));
                }

                for x in [1.5, -1.5] {
                    parent.spawn((
                        Mesh3d(headlight.clone()),
                        MeshMaterial3d(headlight_material.clone()),
                        Transform::from_xyz(x, 1.0, 4.0),
                    ));
                    parent.spawn((
                        Mesh3d(taillight.clone()),
                        MeshMaterial3d(taillight_material.clone()),
                        Transform::from_xyz(x, 1.0, -4.0),
                    ));
                }
            })
            .id();

        commands.entity(sim_entity).insert(HasVisual(visual_entity));
    }
}

/// Pedestal plus glowing hologram cube for each showcase
fn spawn_showcase_visuals(
    mut commands: Commands,
    query: Query<(Entity, &Transform), (Added<Showcase>, Without<HasVisual>)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (sim_entity, sim_transform) in query.iter() {
        let pedestal_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.05, 0.05, 0.1),
            metallic: 0.7,
            perceptual_roughness: 0.3,
            ..default()
        });
        let hologram_material = materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 1.0, 1.0, 0.6),
            emissive: LinearRgba::new(0.0, 3.0, 3.0, 1.0),
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.spawn((
            Mesh3d(meshes.add(Cylinder::new(2.0, 0.4))),
            MeshMaterial3d(pedestal_material),
            Transform::from_translation(sim_transform.translation + Vec3::Y * 0.2),
        ));

        let hologram_entity = commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(2.0, 2.0, 2.0))),
                MeshMaterial3d(hologram_material),
                Transform::from_translation(sim_transform.translation + Vec3::Y * 4.0),
                HologramVisual,
                VisualOf(sim_entity),
            ))
            .id();

        commands.entity(sim_entity).insert(HasVisual(hologram_entity));
    }
}

/// Neon cubes for decorations, material color cycling by index
fn spawn_decoration_visuals(
    mut commands: Commands,
    query: Query<(Entity, &Transform, &Decoration), (Added<Decoration>, Without<HasVisual>)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (sim_entity, sim_transform, decoration) in query.iter() {
        let emissive = match decoration.index % 3 {
            0 => LinearRgba::new(0.0, 2.0, 2.0, 1.0),
            1 => LinearRgba::new(2.0, 0.0, 2.0, 1.0),
            _ => LinearRgba::new(2.0, 2.0, 0.0, 1.0),
        };
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.1, 0.1, 0.1),
            emissive,
            ..default()
        });

        let visual_entity = commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
                MeshMaterial3d(material),
                *sim_transform,
                VisualOf(sim_entity),
            ))
            .id();

        commands.entity(sim_entity).insert(HasVisual(visual_entity));
    }
}

/// Car visual follows the simulation transform (tilt already baked in)
fn sync_car_transform(
    sim_query: Query<(&Transform, &HasVisual), (With<Car>, Changed<Transform>)>,
    mut visual_query: Query<&mut Transform, (With<VisualOf>, Without<Car>)>,
) {
    for (sim_transform, has_visual) in sim_query.iter() {
        if let Ok(mut visual_transform) = visual_query.get_mut(has_visual.0) {
            *visual_transform = *sim_transform;
            visual_transform.translation.y += CAR_VISUAL_LIFT;
        }
    }
}

/// Hologram spin and hover come straight from the simulation state
fn sync_hologram_transforms(
    sim_query: Query<(&Transform, &Hologram, &HasVisual), With<Showcase>>,
    mut visual_query: Query<&mut Transform, (With<HologramVisual>, Without<Showcase>)>,
) {
    for (sim_transform, hologram, has_visual) in sim_query.iter() {
        if let Ok(mut visual_transform) = visual_query.get_mut(has_visual.0) {
            visual_transform.translation = sim_transform.translation
                + Vec3::Y * (hologram.base_height + hologram.hover_offset);
            visual_transform.rotation = Quat::from_rotation_y(hologram.spin);
        }
    }
}

/// Decoration visuals track transform and the quality-driven visible flag
fn sync_decoration_visuals(
    sim_query: Query<(&Transform, &Decoration, &HasVisual)>,
    mut visual_query: Query<(&mut Transform, &mut Visibility), (With<VisualOf>, Without<Decoration>)>,
) {
    for (sim_transform, decoration, has_visual) in sim_query.iter() {
        if let Ok((mut visual_transform, mut visibility)) = visual_query.get_mut(has_visual.0) {
            *visual_transform = *sim_transform;
            *visibility = if decoration.visible {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        }
    }
}

/// Panel content rendering is plain text for now
fn log_panel_transitions(
    mut opened: EventReader<PanelOpened>,
    mut closed: EventReader<PanelClosed>,
) {
    for event in opened.read() {
        info!("showcase panel opened: {}", event.kind.as_str());
    }
    for event in closed.read() {
        info!("showcase panel closed: {}", event.kind.as_str());
    }
}

/// Pulsing neon grid over the floor, clocked by the simulation
fn draw_floor_grid(mut gizmos: Gizmos, pulse: Res<GlowPulse>) {
    let pulse_factor = 0.5 + 0.5 * (pulse.seconds * 0.5).sin();
    let color = Color::srgba(0.0, 1.0, 1.0, 0.1 + 0.15 * pulse_factor);

    let half = 50.0;
    let step = 5.0;
    let mut offset = -half;
    while offset <= half {
        gizmos.line(
            Vec3::new(offset, 0.01, -half),
            Vec3::new(offset, 0.01, half),
            color,
        );
        gizmos.line(
            Vec3::new(-half, 0.01, offset),
            Vec3::new(half, 0.01, offset),
            color,
        );
        offset += step;
    }
}
