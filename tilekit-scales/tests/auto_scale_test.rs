use rstest::rstest;
use tilekit_scales::axis::{calc_auto_scale, AxisScaler, AxisScalerConfig};
use tilekit_scales::error::TilesScaleError;
use tilekit_scales::nice::calc_nice_number;

fn is_integral(value: f64) -> bool {
    (value - value.round()).abs() < 1e-9
}

#[rstest]
#[case(3.0, 97.0)]
#[case(0.0, 1.0)]
#[case(-1.0, 1.0)]
#[case(-250.0, -3.0)]
#[case(0.001, 0.0042)]
#[case(12.5, 13.0)]
#[case(1.0, 1e6)]
#[case(-7.3, 1234.5)]
fn test_bounds_cover_input_range(#[case] min: f64, #[case] max: f64) {
    let scale = calc_auto_scale(min, max).unwrap();
    assert!(scale.nice_min <= min, "{min}..{max}: {scale:?}");
    assert!(scale.nice_max >= max, "{min}..{max}: {scale:?}");
    assert!(is_integral(scale.nice_min / scale.major_tick), "{scale:?}");
    assert!(is_integral(scale.nice_max / scale.major_tick), "{scale:?}");
    assert!(scale.minor_tick <= scale.major_tick, "{scale:?}");
}

#[test]
fn test_ticks_are_nice_numbers() {
    for (min, max) in [(3.0, 97.0), (0.0, 0.75), (-42.0, 17.0), (100.0, 40000.0)] {
        let scale = calc_auto_scale(min, max).unwrap();
        for tick in [scale.major_tick, scale.minor_tick] {
            let exponent = tick.log10().floor();
            let fraction = tick / 10.0_f64.powf(exponent);
            assert!(
                [1.0, 2.0, 5.0, 10.0]
                    .iter()
                    .any(|f| (fraction - f).abs() < 1e-9),
                "{tick} is not nice"
            );
        }
    }
}

#[test]
fn test_zero_and_inverted_ranges_fail() {
    assert_eq!(
        calc_auto_scale(5.0, 5.0),
        Err(TilesScaleError::InvalidRange { min: 5.0, max: 5.0 })
    );
    assert!(calc_auto_scale(1.0, -1.0).is_err());
}

#[test]
fn test_nice_number_examples() {
    assert_eq!(calc_nice_number(27.0, true), Ok(20.0));
    assert_eq!(calc_nice_number(27.0, false), Ok(50.0));
}

#[test]
fn test_scaler_config_from_json() {
    let config: AxisScalerConfig = serde_json::from_str(r#"{"max_major_ticks": 6}"#).unwrap();
    assert_eq!(config.max_major_ticks, 6);
    assert_eq!(config.max_minor_ticks, 10);

    let scaler = AxisScaler::new(config).unwrap();
    let scale = scaler.scale(0.0, 10.0).unwrap();
    // nice range 10, 10 / 5 = 2
    assert_eq!(scale.major_tick, 2.0);
    assert_eq!(scale.nice_min, 0.0);
    assert_eq!(scale.nice_max, 10.0);
}

#[test]
fn test_scale_is_deterministic() {
    let a = calc_auto_scale(-7.3, 1234.5).unwrap();
    let b = calc_auto_scale(-7.3, 1234.5).unwrap();
    assert_eq!(a.nice_min.to_bits(), b.nice_min.to_bits());
    assert_eq!(a.nice_max.to_bits(), b.nice_max.to_bits());
    assert_eq!(a.major_tick.to_bits(), b.major_tick.to_bits());
    assert_eq!(a.minor_tick.to_bits(), b.minor_tick.to_bits());
}
