use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;
use neondrive_simulation::{
    init_logger, initial_quality, spawn_car, spawn_decorations, spawn_showcase, ActiveQuality,
    DeterministicRng, DeviceClass, FollowCamera, ShowcaseKind, SimulationPlugin, DECORATION_COUNT,
};

mod camera;
mod input;
mod rendering;

use camera::CameraPlugin;
use input::DriverInputPlugin;
use rendering::RenderingSyncPlugin;

/// Showcases on a ring of radius 30 around the spawn point
const SHOWCASE_RING: [(ShowcaseKind, Vec3); 5] = [
    (ShowcaseKind::Introduction, Vec3::new(0.0, 0.0, 30.0)),
    (ShowcaseKind::Projects, Vec3::new(28.5, 0.0, 9.3)),
    (ShowcaseKind::Skills, Vec3::new(17.6, 0.0, -24.3)),
    (ShowcaseKind::Leadership, Vec3::new(-17.6, 0.0, -24.3)),
    (ShowcaseKind::Contact, Vec3::new(-28.5, 0.0, 9.3)),
];

fn main() {
    init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "NEONDRIVE - Interactive Portfolio".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // Follow camera application
        .add_plugins(CameraPlugin)
        // Keyboard → CarControls
        .add_plugins(DriverInputPlugin)
        .add_systems(Startup, (setup_scene, init_quality))
        .add_systems(Update, (update_quality_on_resize, apply_shadow_settings).chain())
        .run();
}

/// Spawn lights, floor, car, showcases and decorations
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<DeterministicRng>,
) {
    // Dark reflective floor (200x200)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(100.0)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.02, 0.02, 0.06),
            metallic: 0.8,
            perceptual_roughness: 0.2,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Directional light (sun), shadow map size follows the quality preset
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 7.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Dim ambient plus neon point lights for the techno look
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.2, 0.2, 0.2),
        brightness: 80.0,
        affects_lightmapped_meshes: false,
    });
    let neon_lights = [
        (Color::srgb(0.0, 1.0, 1.0), Vec3::new(-10.0, 5.0, 10.0)),
        (Color::srgb(1.0, 0.0, 1.0), Vec3::new(10.0, 5.0, -10.0)),
        (Color::srgb(1.0, 1.0, 0.0), Vec3::new(0.0, 5.0, -15.0)),
    ];
    for (color, position) in neon_lights {
        commands.spawn((
            PointLight {
                color,
                intensity: 800_000.0,
                range: 50.0,
                ..default()
            },
            Transform::from_translation(position),
        ));
    }

    // Follow camera: simulation smooths, CameraPlugin applies
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 5.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        FollowCamera::default(),
    ));

    // Simulation entities; visuals are attached by RenderingSyncPlugin.
    // Camera state lives directly on the Camera3d entity above.
    spawn_car(&mut commands, Vec3::ZERO);
    for (kind, position) in SHOWCASE_RING {
        spawn_showcase(&mut commands, kind, position);
    }
    spawn_decorations(&mut commands, &mut rng.rng, DECORATION_COUNT);
}

/// Classify the device from the window size and pick the starting preset
fn init_quality(windows: Query<&Window>, mut active: ResMut<ActiveQuality>) {
    let Ok(window) = windows.single() else {
        return;
    };

    let device = DeviceClass::from_viewport_width(window.width());
    // Native desktop builds assume a discrete-class adapter; the FPS
    // monitor corrects downward if that was optimistic.
    active.device = device;
    active.level = initial_quality(device, true);
}

/// Re-classify on resize (debug windows, moving between monitors)
fn update_quality_on_resize(
    windows: Query<&Window, Changed<Window>>,
    mut active: ResMut<ActiveQuality>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let device = DeviceClass::from_viewport_width(window.width());
    if device != active.device {
        active.device = device;
        active.level = initial_quality(device, true);
    }
}

/// Keep the shadow map resource in sync with the active preset
fn apply_shadow_settings(
    active: Res<ActiveQuality>,
    mut commands: Commands,
    mut lights: Query<&mut DirectionalLight>,
) {
    if !active.is_changed() {
        return;
    }

    let settings = active.level.settings();
    commands.insert_resource(DirectionalLightShadowMap {
        size: settings.shadow_map_size as usize,
    });
    for mut light in lights.iter_mut() {
        light.shadows_enabled = settings.shadows_enabled;
    }
}
