use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Hsl, NVec2};

/// Mesh entity showing the body at this index of the live list.
/// Bodies only ever disappear, so one slot per initial body is enough
#[derive(Component)]
struct BodySlot(pub usize);

const STAR_SIZE: f32 = 1.0;

pub fn run_2d(scenario: Scenario) {
    log::info!(
        "run_2d: starting Bevy 2D viewer with {} bodies (space toggles pause)",
        scenario.simulation.scene().bodies.len()
    );

    let interval = Duration::from_millis(scenario.engine.step_interval_ms);
    let resolution = WindowResolution::new(scenario.width as f32, scenario.height as f32);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "gravtrail".into(),
                        resolution,
                        ..default()
                    }),
                    ..default()
                })
                // env_logger owns the `log` output
                .disable::<LogPlugin>(),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_duration(interval))
        .insert_resource(scenario)
        .add_systems(Startup, setup_scene_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (pause_toggle_system, draw_trails_system, sync_bodies_system))
        .run();
}

/// Canvas coordinates (origin top-left, y down) to the centered camera
fn to_screen(x: &NVec2, scenario: &Scenario) -> Vec2 {
    Vec2::new(
        (x.x - 0.5 * scenario.width) as f32,
        (0.5 * scenario.height - x.y) as f32,
    )
}

fn to_color(c: Hsl) -> Color {
    Color::hsl(c.hue, c.saturation, c.lightness)
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for star in &scenario.stars {
        commands.spawn(SpriteBundle {
            sprite: Sprite {
                color: to_color(star.color),
                custom_size: Some(Vec2::splat(STAR_SIZE)),
                ..default()
            },
            transform: Transform::from_translation(to_screen(&star.x, &scenario).extend(-1.0)),
            ..default()
        });
    }

    // Unit circle scaled by the body radius every frame
    let circle = Mesh2dHandle(meshes.add(Circle::new(1.0)));

    for (i, body) in scenario.simulation.scene().bodies.iter().enumerate() {
        let mut transform = Transform::from_translation(to_screen(&body.x, &scenario).extend(1.0));
        transform.scale = Vec3::splat(body.radius() as f32);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.clone(),
                material: materials.add(ColorMaterial::from(to_color(body.color))),
                transform,
                ..default()
            },
            BodySlot(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.simulation.tick();
}

fn pause_toggle_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::Space) {
        let paused = !scenario.simulation.is_paused();
        scenario.simulation.set_paused(paused);
    }
}

fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for trail in scenario.simulation.trail_snapshots() {
        gizmos.line_2d(
            to_screen(&trail.start, &scenario),
            to_screen(&trail.end, &scenario),
            to_color(trail.color),
        );
    }
}

fn sync_bodies_system(
    scenario: Res<Scenario>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&BodySlot, &mut Transform, &mut Visibility, &Handle<ColorMaterial>)>,
) {
    let bodies = scenario.simulation.body_snapshots();

    for (BodySlot(i), mut transform, mut visibility, material) in &mut query {
        let Some(b) = bodies.get(*i) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        transform.translation = to_screen(&b.position, &scenario).extend(1.0);
        transform.scale = Vec3::splat(b.radius as f32);
        *visibility = Visibility::Visible;

        // Colors change only on merges, skip the asset write otherwise
        let color = to_color(b.color);
        if materials.get(material).is_some_and(|m| m.color != color) {
            if let Some(m) = materials.get_mut(material) {
                m.color = color;
            }
        }
    }
}
