use bevy::prelude::*;
use neondrive_simulation::FollowCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_follow_camera);
    }
}

/// Apply the smoothed simulation camera state to the render camera
///
/// The simulation lerps position/look_at in FixedUpdate; here we only
/// turn the pair into a transform, every render frame.
fn apply_follow_camera(mut query: Query<(&FollowCamera, &mut Transform), With<Camera3d>>) {
    for (follow, mut transform) in query.iter_mut() {
        *transform =
            Transform::from_translation(follow.position).looking_at(follow.look_at, Vec3::Y);
    }
}
