use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    },
];

#[test]
fn endpoints_are_fixed() {
    for ease in ALL {
        assert!((ease.apply(0.0) - 0.0).abs() < 1e-9, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=50 {
            let v = ease.apply(f64::from(i) / 50.0);
            assert!(v + 1e-3 >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn in_out_curves_hit_midpoint() {
    assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-9);
    assert!((Ease::InOutCubic.apply(0.5) - 0.5).abs() < 1e-9);
}

#[test]
fn cubic_bezier_linear_control_points_is_identity() {
    let lin = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    for x in [0.1, 0.25, 0.5, 0.9] {
        assert!((lin.apply(x) - x).abs() < 1e-2, "x={x}");
    }
}

#[test]
fn serde_uses_snake_case_names() {
    let e: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
    let e: Ease =
        serde_json::from_str(r#"{"cubic_bezier": {"x1": 0.4, "y1": 0.0, "x2": 0.2, "y2": 1.0}}"#)
            .unwrap();
    assert!(matches!(e, Ease::CubicBezier { .. }));
}
