//! Damped-spring progress curves.
//!
//! A spring is the step response of a mass-spring-damper system released from rest at 0 with a
//! target of 1. Time is measured in seconds (`frame / fps`), so the same configuration produces
//! the same motion at any frame rate.

use crate::foundation::core::Fps;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Restoring force per unit displacement.
    pub stiffness: f64,
    /// Velocity damping coefficient.
    pub damping: f64,
    /// Simulated mass; values `<= 0` are treated as a tiny positive mass.
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// When set, progress never exceeds the target.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

fn default_mass() -> f64 {
    1.0
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Unit-mass spring with the given stiffness and damping.
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }

    /// Replace the mass.
    pub const fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Enable overshoot clamping.
    pub const fn clamped(mut self) -> Self {
        self.overshoot_clamping = true;
        self
    }

    /// Damping ratio `zeta`: `< 1` underdamped, `1` critical, `> 1` overdamped.
    pub fn damping_ratio(self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }
}

/// Spring progress at `frame` for a spring released at frame 0.
///
/// Returns `0.0` for `frame <= 0` (and NaN), approaches `1.0` as `frame` grows and may
/// overshoot above `1.0` when underdamped unless the config clamps overshoot.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    if frame.is_nan() || frame <= 0.0 {
        return 0.0;
    }
    if frame == f64::INFINITY {
        return 1.0;
    }
    let v = step_response(fps.frames_to_secs(frame), config);
    if config.overshoot_clamping {
        v.min(1.0)
    } else {
        v
    }
}

fn step_response(t: f64, config: SpringConfig) -> f64 {
    // x(0)=0, v(0)=0, target 1.
    let k = config.stiffness.max(0.0);
    let c = config.damping.max(0.0);
    let m = config.mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        // No restoring force: the mass never leaves its rest position.
        return 0.0;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let c1 = (wd * t).cos();
        let s1 = (wd * t).sin();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * (c1 + k * s1)
    } else {
        // Overdamped. `slow` is zeta - sqrt(zeta^2 - 1) without cancellation.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let slow = 1.0 / (zeta + z2);
        let r1 = -w0 * slow;
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = slow / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

/// A spring placed on a local timeline: delayed by `delay` frames and mapped onto `[from, to]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Physical parameters.
    pub config: SpringConfig,
    /// Frames to wait before the spring is released.
    #[serde(default)]
    pub delay: i64,
    /// Value before release.
    #[serde(default)]
    pub from: f64,
    /// Value the spring settles on.
    #[serde(default = "default_to")]
    pub to: f64,
}

fn default_to() -> f64 {
    1.0
}

impl Spring {
    /// Spring from 0 to 1 released at local frame 0.
    pub const fn new(config: SpringConfig) -> Self {
        Self {
            config,
            delay: 0,
            from: 0.0,
            to: 1.0,
        }
    }

    /// Release the spring `frames` after local frame 0.
    pub const fn delayed(mut self, frames: i64) -> Self {
        self.delay = frames;
        self
    }

    /// Map progress onto `[from, to]`.
    pub const fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Raw progress (0 before release, approaching 1) at a local frame.
    pub fn progress(&self, frame: i64, fps: Fps) -> f64 {
        let t = frame.saturating_sub(self.delay);
        spring(t as f64, fps, self.config)
    }

    /// Progress mapped onto `[from, to]` at a local frame.
    pub fn sample(&self, frame: i64, fps: Fps) -> f64 {
        self.from + (self.to - self.from) * self.progress(frame, fps)
    }
}

/// Upper bound on the settling search, in seconds of simulated time.
const MAX_SETTLE_SECS: f64 = 120.0;

/// First frame from which progress stays within `threshold` of 1.
///
/// Returns `None` when the spring does not settle within two minutes of simulated time.
pub fn settle_frames(fps: Fps, config: SpringConfig, threshold: f64) -> Option<u64> {
    let limit = fps.secs_to_frames_floor(MAX_SETTLE_SECS);
    let threshold = threshold.abs();
    let mut last_outside: Option<u64> = None;
    for f in 0..=limit {
        if (1.0 - spring(f as f64, fps, config)).abs() > threshold {
            last_outside = Some(f);
        }
    }
    match last_outside {
        None => Some(0),
        Some(f) if f >= limit => None,
        Some(f) => Some(f + 1),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
