use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec2, Vec3};

/// Camera-side collaborator consumed by physics and interaction.
pub trait Controls {
    /// Physics and interaction only run while the pointer is locked.
    fn is_locked(&self) -> bool;

    /// Unit vector the camera looks along.
    fn look_direction(&self) -> Vec3;

    /// Position delta for moving `distance` along the horizontal heading.
    fn move_forward(&self, distance: f32) -> Vec3;

    /// Position delta for strafing `distance` to the right.
    fn move_right(&self, distance: f32) -> Vec3;
}

/// Yaw/pitch mouse-look camera. Yaw 0 looks down -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstPersonCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub sensitivity: f32,
    pub locked: bool,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.002,
            locked: false,
        }
    }
}

impl FirstPersonCamera {
    // Keeps the view from flipping over the poles
    const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Applies a raw mouse delta in pixels.
    pub fn rotate(&mut self, mouse_delta: Vec2) {
        if !self.locked {
            return;
        }
        let delta = mouse_delta * self.sensitivity;
        self.yaw = (self.yaw - delta.x).rem_euclid(TAU);
        self.pitch = (self.pitch - delta.y).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    fn heading(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }
}

impl Controls for FirstPersonCamera {
    fn is_locked(&self) -> bool {
        self.locked
    }

    fn look_direction(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    fn move_forward(&self, distance: f32) -> Vec3 {
        self.heading() * Vec3::NEG_Z * distance
    }

    fn move_right(&self, distance: f32) -> Vec3 {
        self.heading() * Vec3::X * distance
    }
}
