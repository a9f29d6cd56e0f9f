use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn zero_before_release() {
    let cfg = SpringConfig::new(80.0, 15.0);
    for f in [-1000.0, -10.0, -0.5, 0.0] {
        assert_eq!(spring(f, fps30(), cfg), 0.0);
    }
    assert_eq!(spring(f64::NAN, fps30(), cfg), 0.0);
    assert_eq!(spring(f64::NEG_INFINITY, fps30(), cfg), 0.0);
    assert_eq!(spring(f64::INFINITY, fps30(), cfg), 1.0);
}

#[test]
fn delayed_spring_is_floor_before_delay() {
    let s = Spring::new(SpringConfig::new(100.0, 15.0))
        .delayed(10)
        .range(-40.0, 0.0);
    for f in -20..=10 {
        assert_eq!(s.progress(f, fps30()), 0.0);
        assert_eq!(s.sample(f, fps30()), -40.0);
    }
    assert!(s.sample(11, fps30()) > -40.0);
}

#[test]
fn heavily_damped_spring_settles_for_any_reasonable_stiffness() {
    for stiffness in [60.0, 100.0, 150.0, 300.0, 1000.0] {
        let s = Spring::new(SpringConfig::new(stiffness, 200.0)).delayed(35);
        let v = s.progress(1035, fps30());
        assert!((v - 1.0).abs() <= 0.01, "stiffness={stiffness} v={v}");
    }
    for stiffness in [20.0, 100.0, 1000.0] {
        let v = spring(1000.0, fps30(), SpringConfig::new(stiffness, 50.0));
        assert!((v - 1.0).abs() <= 0.01, "stiffness={stiffness} v={v}");
    }
}

#[test]
fn all_regimes_converge_to_one() {
    let configs = [
        SpringConfig::new(100.0, 10.0), // underdamped
        SpringConfig::new(100.0, 20.0), // critical
        SpringConfig::new(100.0, 60.0), // overdamped
        SpringConfig::new(80.0, 15.0).with_mass(2.0),
    ];
    for cfg in configs {
        let v = spring(900.0, fps30(), cfg);
        assert!((v - 1.0).abs() < 1e-6, "{cfg:?} v={v}");
    }
    assert!((SpringConfig::new(100.0, 20.0).damping_ratio() - 1.0).abs() < 1e-12);
}

#[test]
fn underdamped_overshoot_is_bounded_and_clampable() {
    let cfg = SpringConfig::new(150.0, 12.0);
    let max = (0..300)
        .map(|f| spring(f as f64, fps30(), cfg))
        .fold(f64::MIN, f64::max);
    assert!(max > 1.0);
    assert!(max < 1.25);

    let clamped = cfg.clamped();
    for f in 0..300 {
        assert!(spring(f as f64, fps30(), clamped) <= 1.0);
    }
}

#[test]
fn overdamped_never_overshoots() {
    let cfg = SpringConfig::new(60.0, 80.0);
    let mut prev = 0.0;
    for f in 0..600 {
        let v = spring(f as f64, fps30(), cfg);
        assert!(v <= 1.0 + 1e-12);
        assert!(v + 1e-12 >= prev);
        prev = v;
    }
}

#[test]
fn frame_rate_scales_time() {
    let cfg = SpringConfig::new(100.0, 15.0);
    let at30 = spring(15.0, fps30(), cfg);
    let at60 = spring(30.0, Fps::new(60, 1).unwrap(), cfg);
    assert!((at30 - at60).abs() < 1e-12);
}

#[test]
fn zero_stiffness_never_moves() {
    let cfg = SpringConfig::new(0.0, 10.0);
    assert_eq!(spring(100.0, fps30(), cfg), 0.0);
}

#[test]
fn settle_frames_finds_horizon() {
    let cfg = SpringConfig::new(100.0, 15.0);
    let horizon = settle_frames(fps30(), cfg, 0.01).unwrap();
    assert!(horizon > 0);
    for f in horizon..horizon + 300 {
        assert!((spring(f as f64, fps30(), cfg) - 1.0).abs() <= 0.01);
    }
    assert!((spring((horizon - 1) as f64, fps30(), cfg) - 1.0).abs() > 0.01);

    assert_eq!(settle_frames(fps30(), SpringConfig::new(0.0, 1.0), 0.01), None);
}

#[test]
fn spring_is_pure() {
    let s = Spring::new(SpringConfig::new(120.0, 15.0)).delayed(35);
    let a: Vec<f64> = (0..90).map(|f| s.progress(f, fps30())).collect();
    let b: Vec<f64> = (0..90).rev().map(|f| s.progress(f, fps30())).collect();
    let b: Vec<f64> = b.into_iter().rev().collect();
    assert_eq!(a, b);
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: SpringConfig = serde_json::from_str(r#"{"stiffness": 80, "damping": 15}"#).unwrap();
    assert_eq!(cfg, SpringConfig::new(80.0, 15.0));
}
