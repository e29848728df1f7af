//! Интеграционный тест поездки
//!
//! Полный SimulationPlugin headless: разгон по прямой к стенду,
//! торможение в радиусе, открытие панели, сходимость камеры.
//! Инварианты проверяются по ходу всей поездки.

use bevy::prelude::*;
use neondrive_simulation::{
    create_headless_app, spawn_car, spawn_decorations, spawn_follow_camera, spawn_showcase, Car,
    CarControls, CarTilt, Decoration, DeterministicRng, DeviceClass, FollowCamera, GlowPulse,
    PanelRegistry, QualityLevel, ActiveQuality, ShowcaseKind, SimulationPlugin, DECORATION_COUNT,
};

struct TestScene {
    app: App,
    car: Entity,
    camera: Entity,
}

/// Helper: полная сцена — машина, камера, стенд прямо по курсу, декорации
fn create_scene(seed: u64) -> TestScene {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let car = spawn_car(&mut app.world_mut().commands(), Vec3::ZERO);
    let camera = spawn_follow_camera(&mut app.world_mut().commands());
    // Introduction в 30 единицах строго по +Z (heading 0 смотрит туда)
    spawn_showcase(
        &mut app.world_mut().commands(),
        ShowcaseKind::Introduction,
        Vec3::new(0.0, 0.0, 30.0),
    );

    {
        let world = app.world_mut();
        if let Some(mut rng) = world.remove_resource::<DeterministicRng>() {
            {
                let mut commands = world.commands();
                spawn_decorations(&mut commands, &mut rng.rng, DECORATION_COUNT);
            }
            world.insert_resource(rng);
        }
    }
    app.world_mut().flush();

    TestScene { app, car, camera }
}

fn set_controls(scene: &mut TestScene, controls: CarControls) {
    let car = scene.car;
    if let Some(mut car_controls) = scene.app.world_mut().get_mut::<CarControls>(car) {
        *car_controls = controls;
    }
}

fn check_invariants(scene: &mut TestScene, tick: u32) {
    let world = scene.app.world();
    let state = world.get::<Car>(scene.car).expect("car state");
    assert!(
        state.speed.abs() <= state.max_speed,
        "tick {}: |speed| {} > max {}",
        tick,
        state.speed,
        state.max_speed
    );

    let tilt = world.get::<CarTilt>(scene.car).expect("car tilt");
    assert!(
        tilt.roll.abs() <= tilt.intensity + 1e-5,
        "tick {}: |roll| {} > intensity",
        tick,
        tilt.roll
    );

    let camera = world.get::<FollowCamera>(scene.camera).expect("camera");
    assert!(camera.position.is_finite() && camera.look_at.is_finite());
}

#[test]
fn test_straight_drive_opens_showcase_panel() {
    let mut scene = create_scene(42);

    // Фаза 1: газ 70 тиков — машина влетает в радиус стенда
    for tick in 0..70 {
        set_controls(
            &mut scene,
            CarControls {
                forward: true,
                ..Default::default()
            },
        );
        scene.app.update();
        if tick % 10 == 0 {
            check_invariants(&mut scene, tick);
        }
    }

    {
        let world = scene.app.world();
        let transform = world.get::<Transform>(scene.car).expect("car transform");
        // Движение строго вдоль +Z
        assert!(transform.translation.x.abs() < 1e-4);
        assert!(transform.translation.z > 22.0, "z = {}", transform.translation.z);
        // Панель ещё не открывалась — тормоз не нажимали
        assert_eq!(world.resource::<PanelRegistry>().active, None);
    }

    // Фаза 2: тормоз до полной остановки у стенда
    for tick in 70..200 {
        set_controls(
            &mut scene,
            CarControls {
                brake: true,
                ..Default::default()
            },
        );
        scene.app.update();
        if tick % 10 == 0 {
            check_invariants(&mut scene, tick);
        }
    }

    {
        let world = scene.app.world();
        let state = world.get::<Car>(scene.car).expect("car state");
        assert_eq!(state.speed, 0.0, "машина остановилась");

        let transform = world.get::<Transform>(scene.car).expect("car transform");
        let distance = transform.translation.distance(Vec3::new(0.0, 0.0, 30.0));
        assert!(distance < 8.0, "припарковались в радиусе ({:.1})", distance);

        assert_eq!(
            world.resource::<PanelRegistry>().active,
            Some(ShowcaseKind::Introduction),
            "тормоз в радиусе открыл панель"
        );
    }
}

#[test]
fn test_forward_ramp_clamps_at_max_speed() {
    let mut scene = create_scene(7);

    // 50 тиков газа с нуля: скорость 0.5 (clamp), не 0.51
    for _ in 0..50 {
        set_controls(
            &mut scene,
            CarControls {
                forward: true,
                ..Default::default()
            },
        );
        scene.app.update();
    }
    let speed = scene
        .app
        .world()
        .get::<Car>(scene.car)
        .expect("car state")
        .speed;
    assert!((speed - 0.5).abs() < 1e-5, "speed = {}", speed);

    for _ in 0..10 {
        scene.app.update();
    }
    // Газ отпущен: линейное затухание доводит точно до нуля
    assert_eq!(
        scene.app.world().get::<Car>(scene.car).expect("car").speed,
        0.0
    );
}

#[test]
fn test_camera_settles_behind_parked_car() {
    let mut scene = create_scene(3);

    // Стоячая машина: камера сходится к ideal-позе (0, 5, -10) и
    // look-at к (0, 1, 5)
    for _ in 0..400 {
        scene.app.update();
    }

    let camera = scene
        .app
        .world()
        .get::<FollowCamera>(scene.camera)
        .expect("camera");
    assert!(
        (camera.position - Vec3::new(0.0, 5.0, -10.0)).length() < 0.01,
        "camera position = {:?}",
        camera.position
    );
    assert!(
        (camera.look_at - Vec3::new(0.0, 1.0, 5.0)).length() < 0.01,
        "camera look_at = {:?}",
        camera.look_at
    );
}

#[test]
fn test_quality_change_applies_to_decorations() {
    let mut scene = create_scene(11);
    scene.app.update();

    // Default High: вся сцена видима
    {
        let world = scene.app.world_mut();
        let mut query = world.query::<&Decoration>();
        assert_eq!(query.iter(world).filter(|d| d.visible).count(), 20);
    }

    // Руками роняем уровень до Low — как это делает FPS-монитор
    scene.app.world_mut().resource_mut::<ActiveQuality>().level = QualityLevel::Low;
    scene.app.update();

    {
        let world = scene.app.world_mut();
        let mut query = world.query::<&Decoration>();
        assert_eq!(query.iter(world).filter(|d| d.visible).count(), 6);
        for decoration in query.iter(world) {
            assert_eq!(decoration.visible, decoration.index < 6);
        }
    }

    // Устройство в ресурсе — desktop (для политики восстановления)
    assert_eq!(
        scene.app.world().resource::<ActiveQuality>().device,
        DeviceClass::Desktop
    );
}

#[test]
fn test_one_update_is_one_simulation_tick() {
    let mut scene = create_scene(5);

    // 300 update'ов = 300 тиков = ровно 5 секунд simulation clock
    for _ in 0..300 {
        scene.app.update();
    }

    let seconds = scene.app.world().resource::<GlowPulse>().seconds;
    assert!(
        (seconds - 5.0).abs() < 0.05,
        "simulation clock = {} (ожидали ~5.0)",
        seconds
    );
}
