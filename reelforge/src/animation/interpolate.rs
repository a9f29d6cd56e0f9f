use crate::animation::ease::Ease;

/// What to do with inputs outside the breakpoint domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the outermost linear segment.
    #[default]
    Extend,
    /// Hold the boundary output.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Policy below the first breakpoint.
    #[serde(default)]
    pub extrapolate_left: Extrapolate,
    /// Policy above the last breakpoint.
    #[serde(default)]
    pub extrapolate_right: Extrapolate,
    /// Easing applied to the in-segment parameter.
    #[serde(default)]
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Linear, extended on both sides.
    pub const EXTEND: Self = Self {
        extrapolate_left: Extrapolate::Extend,
        extrapolate_right: Extrapolate::Extend,
        ease: Ease::Linear,
    };

    /// Linear, clamped on both sides.
    pub const CLAMP: Self = Self {
        extrapolate_left: Extrapolate::Clamp,
        extrapolate_right: Extrapolate::Clamp,
        ease: Ease::Linear,
    };

    /// Replace the easing.
    pub const fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Piecewise-linear map of `x` through `input` breakpoints onto `output` values.
///
/// `input` must be non-decreasing. A zero-width segment never divides: inputs at or left of it
/// map to its left output, inputs right of it to its right output.
pub fn interpolate<const N: usize>(
    x: f64,
    input: [f64; N],
    output: [f64; N],
    opts: InterpolateOpts,
) -> f64 {
    const { assert!(N >= 2, "interpolate needs at least two breakpoints") };
    debug_assert!(
        input.windows(2).all(|w| w[0] <= w[1]),
        "interpolate input must be non-decreasing"
    );

    let mut seg = 0;
    for (i, &d) in input.iter().enumerate().take(N - 1).skip(1) {
        if x >= d {
            seg = i;
        }
    }

    let is_first = seg == 0;
    let is_last = seg == N - 2;
    interpolate_segment(
        x,
        (input[seg], input[seg + 1]),
        (output[seg], output[seg + 1]),
        if is_first {
            opts.extrapolate_left
        } else {
            Extrapolate::Extend
        },
        if is_last {
            opts.extrapolate_right
        } else {
            Extrapolate::Extend
        },
        opts.ease,
    )
}

fn interpolate_segment(
    x: f64,
    (d0, d1): (f64, f64),
    (r0, r1): (f64, f64),
    left: Extrapolate,
    right: Extrapolate,
    ease: Ease,
) -> f64 {
    let past_right = x > d1;
    let mut x = x;
    if x < d0 {
        match left {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = d0,
            Extrapolate::Extend => {}
        }
    }
    if x > d1 {
        match right {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = d1,
            Extrapolate::Extend => {}
        }
    }

    let span = d1 - d0;
    if span == 0.0 {
        return if past_right { r1 } else { r0 };
    }

    let t = (x - d0) / span;
    let te = if (0.0..=1.0).contains(&t) {
        ease.apply(t)
    } else {
        t
    };
    r0 + (r1 - r0) * te
}

/// Map spring or ease progress onto `[from, to]` without clamping.
pub fn remap(progress: f64, from: f64, to: f64) -> f64 {
    interpolate(progress, [0.0, 1.0], [from, to], InterpolateOpts::EXTEND)
}

/// Clamped linear ramp of `frame` over `[start, end]` onto `[from, to]`.
pub fn ramp(frame: f64, (start, end): (f64, f64), (from, to): (f64, f64)) -> f64 {
    interpolate(frame, [start, end], [from, to], InterpolateOpts::CLAMP)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
