//! Global constants for bloch-core

/// Default Bloch sphere radius (unit sphere)
pub const SPHERE_RADIUS: f32 = 1.0;

/// Default number of rings (latitude bands) for sphere mesh generation
pub const SPHERE_RINGS: u32 = 10;

/// Default number of sectors (longitude segments) for sphere mesh generation
pub const SPHERE_SECTORS: u32 = 10;

/// Length of the coordinate axes overlay
pub const AXIS_LENGTH: f32 = 1.5;

/// Default orbit camera distance from the origin
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Default orbit camera yaw in degrees
pub const CAMERA_YAW: f32 = -90.0;

/// Default orbit camera pitch in degrees
pub const CAMERA_PITCH: f32 = 0.0;

/// Default mouse sensitivity for camera orbiting
pub const MOUSE_SENSITIVITY: f32 = 0.25;
