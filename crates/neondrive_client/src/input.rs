use bevy::prelude::*;
use neondrive_simulation::{apply_key, Car, CarControls, ClosePanelIntent};

pub struct DriverInputPlugin;

impl Plugin for DriverInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (keyboard_controls, close_panel_on_escape));
    }
}

/// Forward keyboard edges into the five control flags
///
/// The mapping itself (WASD/arrows/Space) lives in the simulation crate;
/// this system only feeds it key events.
fn keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut CarControls, With<Car>>,
) {
    let mut controls = match query.single_mut() {
        Ok(found) => found,
        Err(_) => return,
    };

    for key in keys.get_just_pressed() {
        apply_key(&mut controls, *key, true);
    }
    for key in keys.get_just_released() {
        apply_key(&mut controls, *key, false);
    }
}

/// Escape asks the simulation to close whatever panel is open
fn close_panel_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    mut intents: EventWriter<ClosePanelIntent>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        intents.write(ClosePanelIntent);
    }
}
