use std::sync::atomic::{AtomicU8, Ordering};

/// How trigonometric functions interpret their argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Arguments are radians.
    #[default]
    Radians,
    /// Arguments are degrees.
    Degrees,
}

static ANGLE_MODE: AtomicU8 = AtomicU8::new(AngleMode::Radians as u8);

/// Selects the angle mode for all subsequent evaluations.
pub fn set_angle_mode(mode: AngleMode) {
    log::debug!("angle mode set to {mode:?}");
    ANGLE_MODE.store(mode as u8, Ordering::Relaxed);
}

/// Returns the current angle mode.
#[must_use]
pub fn angle_mode() -> AngleMode {
    if ANGLE_MODE.load(Ordering::Relaxed) == AngleMode::Degrees as u8 {
        AngleMode::Degrees
    } else {
        AngleMode::Radians
    }
}

/// Converts an angle in the current mode to radians.
#[must_use]
pub fn to_radians(angle: f64) -> f64 {
    match angle_mode() {
        AngleMode::Radians => angle,
        AngleMode::Degrees => angle.to_radians(),
    }
}
