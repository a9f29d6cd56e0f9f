use super::*;

#[test]
fn maps_linearly_inside_domain() {
    let v = interpolate(5.0, [0.0, 10.0], [100.0, 200.0], InterpolateOpts::EXTEND);
    assert_eq!(v, 150.0);
    assert_eq!(remap(0.5, 30.0, 0.0), 15.0);
}

#[test]
fn extend_continues_outer_segments() {
    assert_eq!(
        interpolate(-5.0, [0.0, 10.0], [0.0, 1.0], InterpolateOpts::EXTEND),
        -0.5
    );
    assert_eq!(remap(1.1, 0.8, 1.0), 0.8 + 0.2 * 1.1);
}

#[test]
fn clamp_policies_are_independent() {
    let left_only = InterpolateOpts {
        extrapolate_left: Extrapolate::Clamp,
        ..InterpolateOpts::EXTEND
    };
    assert_eq!(interpolate(-5.0, [0.0, 10.0], [0.0, 1.0], left_only), 0.0);
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 1.0], left_only), 2.0);

    let right_only = InterpolateOpts {
        extrapolate_right: Extrapolate::Clamp,
        ..InterpolateOpts::EXTEND
    };
    assert_eq!(interpolate(-5.0, [0.0, 10.0], [0.0, 1.0], right_only), -0.5);
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 1.0], right_only), 1.0);
}

#[test]
fn identity_returns_input() {
    let opts = InterpolateOpts {
        extrapolate_left: Extrapolate::Identity,
        extrapolate_right: Extrapolate::Identity,
        ease: Ease::Linear,
    };
    assert_eq!(interpolate(-3.0, [0.0, 1.0], [10.0, 20.0], opts), -3.0);
    assert_eq!(interpolate(7.0, [0.0, 1.0], [10.0, 20.0], opts), 7.0);
}

#[test]
fn three_point_flash_envelope() {
    let flash = |f: f64| interpolate(f, [3.0, 6.0, 12.0], [0.0, 0.8, 0.0], InterpolateOpts::CLAMP);
    assert_eq!(flash(0.0), 0.0);
    assert_eq!(flash(3.0), 0.0);
    assert!((flash(6.0) - 0.8).abs() < 1e-12);
    assert!((flash(9.0) - 0.4).abs() < 1e-12);
    assert_eq!(flash(12.0), 0.0);
    assert_eq!(flash(40.0), 0.0);
}

#[test]
fn four_point_plateau() {
    let fade = |y: f64| {
        interpolate(
            y,
            [-10.0, 10.0, 70.0, 100.0],
            [0.0, 0.4, 0.4, 0.0],
            InterpolateOpts::CLAMP,
        )
    };
    assert_eq!(fade(-30.0), 0.0);
    assert!((fade(0.0) - 0.2).abs() < 1e-12);
    assert!((fade(40.0) - 0.4).abs() < 1e-12);
    assert!((fade(85.0) - 0.2).abs() < 1e-12);
    assert_eq!(fade(130.0), 0.0);
}

#[test]
fn degenerate_domain_does_not_divide_by_zero() {
    for opts in [InterpolateOpts::EXTEND, InterpolateOpts::CLAMP] {
        assert_eq!(interpolate(4.0, [5.0, 5.0], [1.0, 9.0], opts), 1.0);
        assert_eq!(interpolate(5.0, [5.0, 5.0], [1.0, 9.0], opts), 1.0);
        assert_eq!(interpolate(6.0, [5.0, 5.0], [1.0, 9.0], opts), 9.0);
        assert_eq!(interpolate(60.0, [5.0, 5.0], [1.0, 9.0], opts), 9.0);
        let mid = interpolate(5.0, [0.0, 5.0, 5.0, 10.0], [0.0, 1.0, 3.0, 4.0], opts);
        assert!(mid.is_finite());
    }
}

#[test]
fn monotonic_for_monotonic_domain_and_range() {
    let mut prev = f64::MIN;
    for i in -20..=140 {
        let v = interpolate(
            f64::from(i),
            [0.0, 15.0, 100.0],
            [0.0, 10.0, 40.0],
            InterpolateOpts::CLAMP.with_ease(Ease::InOutCubic),
        );
        assert!(v >= prev);
        prev = v;
    }

    let mut prev = f64::MAX;
    for i in -20..=40 {
        let v = ramp(f64::from(i), (0.0, 20.0), (1.4, 1.0));
        assert!(v <= prev);
        prev = v;
    }
}

#[test]
fn interpolate_is_idempotent() {
    for i in -50..50 {
        let x = f64::from(i) * 0.37;
        let a = interpolate(x, [-3.0, 2.0, 9.0], [5.0, -1.0, 4.0], InterpolateOpts::EXTEND);
        let b = interpolate(x, [-3.0, 2.0, 9.0], [5.0, -1.0, 4.0], InterpolateOpts::EXTEND);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn ease_only_shapes_inside_segment() {
    let opts = InterpolateOpts::EXTEND.with_ease(Ease::InQuad);
    assert_eq!(interpolate(0.5, [0.0, 1.0], [0.0, 100.0], opts), 25.0);
    assert_eq!(interpolate(2.0, [0.0, 1.0], [0.0, 100.0], opts), 200.0);
}

#[test]
fn clamped_zero_width_holds_the_side_it_left() {
    let right_only = InterpolateOpts {
        extrapolate_right: Extrapolate::Clamp,
        ..InterpolateOpts::EXTEND
    };
    assert_eq!(interpolate(7.0, [5.0, 5.0], [1.0, 9.0], right_only), 9.0);
    assert_eq!(interpolate(3.0, [5.0, 5.0], [1.0, 9.0], right_only), 1.0);
    assert_eq!(ramp(20.0, (10.0, 10.0), (0.0, 40.0)), 40.0);
    assert_eq!(ramp(0.0, (10.0, 10.0), (0.0, 40.0)), 0.0);
}
