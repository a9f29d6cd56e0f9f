//! Stateless procedural motion.
//!
//! Every generator here is a pure function of the frame and its own constants. Nothing is
//! integrated over time, so any frame can be sampled in any order.

use crate::{
    animation::interpolate::{InterpolateOpts, interpolate, remap},
    foundation::core::{Canvas, Vec2},
    foundation::math::random01,
};

/// Periodic base function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wave {
    /// `sin(x)`.
    #[default]
    Sine,
    /// `cos(x)`.
    Cosine,
}

impl Wave {
    fn eval(self, x: f64) -> f64 {
        match self {
            Self::Sine => x.sin(),
            Self::Cosine => x.cos(),
        }
    }
}

/// `offset + amplitude * wave(frame / divisor + phase)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Oscillator {
    /// Base function.
    #[serde(default)]
    pub wave: Wave,
    /// Peak deviation from `offset`.
    pub amplitude: f64,
    /// Frames per radian.
    pub divisor: f64,
    /// Phase in radians.
    #[serde(default)]
    pub phase: f64,
    /// Center value.
    #[serde(default)]
    pub offset: f64,
}

impl Oscillator {
    /// Sine oscillator centered on 0.
    pub const fn sine(amplitude: f64, divisor: f64) -> Self {
        Self {
            wave: Wave::Sine,
            amplitude,
            divisor,
            phase: 0.0,
            offset: 0.0,
        }
    }

    /// Cosine oscillator centered on 0.
    pub const fn cosine(amplitude: f64, divisor: f64) -> Self {
        Self {
            wave: Wave::Cosine,
            amplitude,
            divisor,
            phase: 0.0,
            offset: 0.0,
        }
    }

    /// Center the oscillation on `offset`.
    pub const fn around(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Shift the phase by `phase` radians.
    pub const fn phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Value at `frame`. A zero divisor holds the center value.
    pub fn sample(&self, frame: f64) -> f64 {
        if self.divisor == 0.0 {
            return self.offset;
        }
        self.offset + self.amplitude * self.wave.eval(frame / self.divisor + self.phase)
    }
}

/// Slow 3D wobble as `rotateX`/`rotateY` degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tilt {
    /// Rotation around the horizontal axis.
    pub x: Oscillator,
    /// Rotation around the vertical axis.
    pub y: Oscillator,
}

impl Tilt {
    /// The card tilt shared by every segment.
    pub const STANDARD: Self = Self {
        x: Oscillator::sine(4.0, 25.0),
        y: Oscillator::cosine(3.0, 30.0),
    };

    /// `(rotate_x, rotate_y)` in degrees.
    pub fn sample(&self, frame: f64) -> Vec2 {
        Vec2::new(self.x.sample(frame), self.y.sample(frame))
    }
}

/// Constant angular velocity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    /// Angular speed.
    pub degrees_per_frame: f64,
}

impl Rotation {
    /// Rotation at `degrees_per_frame`.
    pub const fn new(degrees_per_frame: f64) -> Self {
        Self { degrees_per_frame }
    }

    /// Angle in `[0, 360)`, also for negative frames.
    pub fn angle(&self, frame: f64) -> f64 {
        wrap_degrees(frame * self.degrees_per_frame)
    }
}

fn wrap_degrees(deg: f64) -> f64 {
    let a = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= 360.0 { 0.0 } else { a }
}

/// Center of a light dot travelling around a card, in percent of the card box.
///
/// `(left, top) = (50 + cos(angle) * radius_pct, 50 + sin(angle) * radius_pct)`.
pub fn border_light_position(angle_degrees: f64, radius_pct: f64) -> Vec2 {
    let a = angle_degrees.to_radians();
    Vec2::new(50.0 + a.cos() * radius_pct, 50.0 + a.sin() * radius_pct)
}

/// One orbiting spark, positioned relative to the orbit center in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Spark {
    /// Offset from the orbit center.
    pub offset: Vec2,
    /// Diameter in pixels.
    pub size: f64,
    /// Opacity, may dip slightly outside `[0, 1]` before compositing.
    pub opacity: f64,
}

/// Sparks circling a point at constant angular speed with a radius wobble.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Orbit {
    /// Number of sparks.
    pub count: usize,
    /// Angular speed.
    pub degrees_per_frame: f64,
    /// Angle between consecutive sparks.
    pub spacing_degrees: f64,
    /// Mean radius in pixels.
    pub base_radius: f64,
    /// Radius wobble amplitude in pixels.
    pub wobble: f64,
    /// Frames per radian of the wobble.
    pub wobble_divisor: f64,
}

impl Orbit {
    /// Eight sparks 45 degrees apart with a `sin(f / 10 + i)` wobble.
    pub const fn ring(degrees_per_frame: f64, base_radius: f64, wobble: f64) -> Self {
        Self {
            count: 8,
            degrees_per_frame,
            spacing_degrees: 45.0,
            base_radius,
            wobble,
            wobble_divisor: 10.0,
        }
    }

    /// Angle of spark `i` in `[0, 360)`.
    pub fn angle(&self, frame: f64, i: usize) -> f64 {
        wrap_degrees(frame * self.degrees_per_frame + i as f64 * self.spacing_degrees)
    }

    /// Frames for one full turn, `None` for a stationary orbit.
    pub fn period_frames(&self) -> Option<f64> {
        if self.degrees_per_frame == 0.0 || !self.degrees_per_frame.is_finite() {
            return None;
        }
        Some(360.0 / self.degrees_per_frame.abs())
    }

    /// Spark `i` at `frame`.
    pub fn spark(&self, frame: f64, i: usize) -> Spark {
        let fi = i as f64;
        let angle = self.angle(frame, i).to_radians();
        let radius = self.base_radius + wobble_term(frame, self.wobble_divisor, fi) * self.wobble;
        Spark {
            offset: Vec2::new(angle.cos() * radius, angle.sin() * radius),
            size: 4.0 + (i % 3) as f64 * 2.0,
            opacity: 0.5 + (frame / 8.0 + fi).sin() * 0.4,
        }
    }

    /// All sparks at `frame`.
    pub fn sparks(&self, frame: f64) -> Vec<Spark> {
        (0..self.count).map(|i| self.spark(frame, i)).collect()
    }
}

fn wobble_term(frame: f64, divisor: f64, i: f64) -> f64 {
    if divisor == 0.0 {
        return 0.0;
    }
    (frame / divisor + i).sin()
}

/// One equalizer bar.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bar {
    /// Height in pixels.
    pub height: f64,
    /// Opacity.
    pub opacity: f64,
}

/// Decorative audio-equalizer bars.
///
/// `height = base + sin(f / (a + i*b) + i*c) * amp1 + cos(f / (d + i*e)) * amp2`,
/// `opacity = op_base + sin(f / (op_div + i)) * op_amp`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Equalizer {
    /// Number of bars.
    pub bars: usize,
    /// Resting height.
    pub base: f64,
    /// Sine divisor base.
    pub a: f64,
    /// Sine divisor step per bar.
    pub b: f64,
    /// Sine phase step per bar.
    pub c: f64,
    /// Sine amplitude.
    pub amp1: f64,
    /// Cosine divisor base.
    pub d: f64,
    /// Cosine divisor step per bar.
    pub e: f64,
    /// Cosine amplitude.
    pub amp2: f64,
    /// Resting opacity.
    pub op_base: f64,
    /// Opacity divisor base.
    pub op_div: f64,
    /// Opacity amplitude.
    pub op_amp: f64,
}

impl Equalizer {
    /// 20 bars used behind the cover, counter and folder segments.
    pub const STANDARD: Self = Self {
        bars: 20,
        base: 30.0,
        a: 4.0,
        b: 0.5,
        c: 0.8,
        amp1: 25.0,
        d: 6.0,
        e: 0.3,
        amp2: 15.0,
        op_base: 0.3,
        op_div: 5.0,
        op_amp: 0.2,
    };

    /// Faster 24-bar variant of the closing call to action.
    pub const DENSE: Self = Self {
        bars: 24,
        base: 25.0,
        a: 3.0,
        b: 0.4,
        c: 0.7,
        amp1: 20.0,
        d: 5.0,
        e: 0.3,
        amp2: 12.0,
        op_base: 0.35,
        op_div: 4.0,
        op_amp: 0.2,
    };

    /// Bar `i` at `frame`.
    pub fn bar(&self, frame: f64, i: usize) -> Bar {
        let fi = i as f64;
        Bar {
            height: self.base
                + (frame / (self.a + fi * self.b) + fi * self.c).sin() * self.amp1
                + (frame / (self.d + fi * self.e)).cos() * self.amp2,
            opacity: self.op_base + (frame / (self.op_div + fi)).sin() * self.op_amp,
        }
    }

    /// All bars at `frame`.
    pub fn sample(&self, frame: f64) -> Vec<Bar> {
        (0..self.bars).map(|i| self.bar(frame, i)).collect()
    }
}

/// A positioned particle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    /// `(left, top)` in percent, or pixels for [`DriftField`].
    pub pos: Vec2,
    /// Diameter in pixels.
    pub size: f64,
    /// Opacity.
    pub opacity: f64,
}

/// Particles on a modular grid, bobbing vertically.
///
/// `x = x0 + (i * x_step) % x_mod`, `y = y0 + (i * y_step) % y_mod + sin(f / (bob_div + i *
/// bob_step)) * bob_amp`, `size = 3 + (i % 4) * 2`, `opacity = op_base + sin(f / (op_div + i *
/// op_step)) * op_amp`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FloatingParticles {
    /// Number of particles.
    pub count: usize,
    /// Horizontal origin.
    pub x0: u32,
    /// Horizontal grid step.
    pub x_step: u32,
    /// Horizontal wrap.
    pub x_mod: u32,
    /// Vertical origin.
    pub y0: u32,
    /// Vertical grid step.
    pub y_step: u32,
    /// Vertical wrap.
    pub y_mod: u32,
    /// Bob divisor base.
    pub bob_div: f64,
    /// Bob divisor step per particle.
    pub bob_step: f64,
    /// Bob amplitude in percent.
    pub bob_amp: f64,
    /// Resting opacity.
    pub op_base: f64,
    /// Opacity divisor base.
    pub op_div: f64,
    /// Opacity divisor step per particle.
    pub op_step: f64,
    /// Opacity amplitude.
    pub op_amp: f64,
}

impl FloatingParticles {
    /// Twelve faint particles behind the folder list.
    pub const FOLDER: Self = Self {
        count: 12,
        x0: 15,
        x_step: 67,
        x_mod: 85,
        y0: 10,
        y_step: 43,
        y_mod: 80,
        bob_div: 15.0,
        bob_step: 3.0,
        bob_amp: 8.0,
        op_base: 0.15,
        op_div: 10.0,
        op_step: 2.0,
        op_amp: 0.15,
    };

    /// Fifteen particles over the background video.
    pub const VIDEO: Self = Self {
        count: 15,
        x0: 10,
        x_step: 59,
        x_mod: 80,
        y0: 5,
        y_step: 41,
        y_mod: 90,
        bob_div: 12.0,
        bob_step: 2.0,
        bob_amp: 6.0,
        op_base: 0.2,
        op_div: 8.0,
        op_step: 2.0,
        op_amp: 0.2,
    };

    /// Particle `i` at `frame`.
    pub fn particle(&self, frame: f64, i: usize) -> Particle {
        let fi = i as f64;
        let i = i as u64;
        let x = u64::from(self.x0) + (i * u64::from(self.x_step)) % u64::from(self.x_mod.max(1));
        let y = u64::from(self.y0) + (i * u64::from(self.y_step)) % u64::from(self.y_mod.max(1));
        Particle {
            pos: Vec2::new(
                x as f64,
                y as f64 + (frame / (self.bob_div + fi * self.bob_step)).sin() * self.bob_amp,
            ),
            size: 3.0 + (i % 4) as f64 * 2.0,
            opacity: self.op_base + (frame / (self.op_div + fi * self.op_step)).sin() * self.op_amp,
        }
    }

    /// All particles at `frame`.
    pub fn sample(&self, frame: f64) -> Vec<Particle> {
        (0..self.count).map(|i| self.particle(frame, i)).collect()
    }
}

/// Particles rising through a 130-unit loop in percent, fading in and out at the edges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RisingParticles {
    /// Number of particles.
    pub count: usize,
}

impl RisingParticles {
    const LOOP: f64 = 130.0;

    /// Twenty particles of the closing call to action.
    pub const CTA: Self = Self { count: 20 };

    /// Vertical speed of particle `i` in percent per frame.
    pub fn speed(i: usize) -> f64 {
        1.5 + (i % 4) as f64 * 0.5
    }

    /// Particle `i` at `frame`.
    pub fn particle(&self, frame: f64, i: usize) -> Particle {
        let fi = i as f64;
        let y = 100.0 - (frame * Self::speed(i) + fi * 30.0).rem_euclid(Self::LOOP);
        Particle {
            pos: Vec2::new(8.0 + ((i * 47) % 84) as f64, y),
            size: 2.0 + (i % 3) as f64 * 2.0,
            opacity: interpolate(
                y,
                [-10.0, 10.0, 70.0, 100.0],
                [0.0, 0.4, 0.4, 0.0],
                InterpolateOpts::CLAMP,
            ),
        }
    }

    /// All particles at `frame`.
    pub fn sample(&self, frame: f64) -> Vec<Particle> {
        (0..self.count).map(|i| self.particle(frame, i)).collect()
    }
}

/// Seeded field of particles drifting upward over the full canvas, in pixels.
///
/// Per-particle constants come from [`random01`] keyed by `"x{i}"`, `"y{i}"`, `"size{i}"`,
/// `"speed{i}"` and `"opacity{i}"`, so the field is identical on every call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DriftField {
    /// Number of particles.
    pub count: usize,
    /// Random seed.
    pub seed: u64,
    /// Canvas the field covers.
    pub canvas: Canvas,
}

impl DriftField {
    /// Fifty particles over `canvas`.
    pub const fn new(seed: u64, canvas: Canvas) -> Self {
        Self {
            count: 50,
            seed,
            canvas,
        }
    }

    /// Particle `i` at `frame`.
    pub fn particle(&self, frame: f64, i: usize) -> Particle {
        let w = f64::from(self.canvas.width);
        let h = f64::from(self.canvas.height);
        let r = |key: &str| random01(self.seed, &format!("{key}{i}"));

        let x = r("x") * w;
        let y0 = r("y") * h;
        let size = r("size") * 3.0 + 1.0;
        let speed = r("speed") + 0.2;
        let opacity = r("opacity") * 0.5 + 0.1;

        let y = if h > 0.0 {
            let y = (y0 - frame * speed).rem_euclid(h);
            if y >= h { 0.0 } else { y }
        } else {
            0.0
        };
        Particle {
            pos: Vec2::new(x, y),
            size,
            opacity,
        }
    }

    /// All particles at `frame`.
    pub fn sample(&self, frame: f64) -> Vec<Particle> {
        (0..self.count).map(|i| self.particle(frame, i)).collect()
    }
}

/// Glitch displacement at one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct GlitchSample {
    /// Horizontal jitter in pixels.
    pub offset_x: f64,
    /// Skew in degrees.
    pub skew_deg: f64,
}

impl GlitchSample {
    /// Return `true` when any displacement is applied.
    pub fn is_active(&self) -> bool {
        self.offset_x != 0.0 || self.skew_deg != 0.0
    }
}

/// Short bursts of jitter inside open frame windows `(start, end)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glitch<const N: usize> {
    /// Exclusive windows.
    pub windows: [(f64, f64); N],
}

impl Glitch<3> {
    /// Title glitch of the cover showcase.
    pub const TITLE: Self = Self {
        windows: [(12.0, 16.0), (45.0, 48.0), (85.0, 88.0)],
    };
}

impl<const N: usize> Glitch<N> {
    /// Return `true` when `frame` lies strictly inside a window.
    pub fn is_active(&self, frame: f64) -> bool {
        self.windows.iter().any(|&(a, b)| frame > a && frame < b)
    }

    /// Displacement at `frame`: `sin(f * 50) * 8` px and `cos(f * 30) * 2` degrees when active.
    pub fn sample(&self, frame: f64) -> GlitchSample {
        if !self.is_active(frame) {
            return GlitchSample::default();
        }
        GlitchSample {
            offset_x: (frame * 50.0).sin() * 8.0,
            skew_deg: (frame * 30.0).cos() * 2.0,
        }
    }
}

/// Prefix of `text` revealed at `progress`: `round(progress * chars)` characters.
///
/// Progress below 0 reveals nothing and overshoot above 1 reveals the whole text.
pub fn typewriter(text: &str, progress: f64) -> &str {
    let total = text.chars().count();
    let visible = remap(progress, 0.0, total as f64).round();
    if visible.is_nan() || visible <= 0.0 {
        return "";
    }
    let visible = visible as usize;
    match text.char_indices().nth(visible) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
