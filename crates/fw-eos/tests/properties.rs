//! Structural properties of the equation of state.

use fw_eos::{CHEN_MILLERO_1986, EosError, EquationOfState, Field, Property, polyval};
use proptest::prelude::*;

/// Full expressions with no zero-pressure shortcut, for comparison.
mod unshortcut {
    use super::*;

    pub fn density(t: f64, s: f64, p: f64) -> f64 {
        let c = &CHEN_MILLERO_1986;
        let e = &c.bulk_salinity;
        let rho0 = polyval(&c.density_base, t) + polyval(&c.density_salinity, t) * s;
        let k = polyval(&c.bulk_base, t)
            + polyval(&c.bulk_pressure, t) * p
            + (e[0] + e[1] * t + e[2] * p) * s;
        rho0 / (1.0 - p / k) * 1000.0
    }

    pub fn alpha(t: f64, s: f64, p: f64) -> f64 {
        let c = &CHEN_MILLERO_1986;
        let h = &c.alpha_pressure;
        (polyval(&c.alpha_base, t)
            + polyval(&c.alpha_salinity, t) * s
            + (polyval(&h[..3], t) + h[3] * s) * p)
            * 1e-6
    }

    pub fn sound_speed(t: f64, s: f64, p: f64) -> f64 {
        let c = &CHEN_MILLERO_1986;
        let l = &c.sound_pressure;
        polyval(&c.sound_base, t)
            + polyval(&c.sound_salinity, t) * s
            + (polyval(&l[..3], t) + l[3] * s) * p
            + c.sound_pressure2[0] * (p * p)
    }

    pub fn heat_capacity(t: f64, s: f64, p: f64) -> f64 {
        let c = &CHEN_MILLERO_1986;
        let q = &c.cp_pressure;
        (polyval(&c.cp_base, t)
            + polyval(&c.cp_salinity, t) * s
            + (polyval(&q[..3], t) + q[3] * s) * p
            + c.cp_pressure2[0] * (p * p))
            * 1000.0
    }
}

#[test]
fn tmd_and_freezing_point_ignore_temperature() {
    let eos = EquationOfState::new();
    for (s, p) in [(0.0, 0.0), (0.5, 100.0), (0.3, 12.5)] {
        let tmd = eos.tmd(0.0, s, p);
        let tf = eos.freezing_point(0.0, s, p);
        for t in [-2.0, 4.0, 15.0, 29.9] {
            assert_eq!(eos.tmd(t, s, p), tmd);
            assert_eq!(eos.freezing_point(t, s, p), tf);
        }
    }
}

#[test]
fn broadcast_sequence_of_temperatures() {
    let eos = EquationOfState::new();
    let temps = vec![0.0, 4.0, 10.0, 20.0, 30.0];
    let out = eos.density_field(temps.clone(), 0.5, 50.0).unwrap();
    let values = out.as_slice().unwrap();
    assert_eq!(values.len(), temps.len());
    for (t, rho) in temps.iter().zip(values) {
        assert_eq!(*rho, eos.density(*t, 0.5, 50.0));
    }
}

#[test]
fn broadcast_all_sequences() {
    let eos = EquationOfState::new();
    let t = [5.0, 10.0, 15.0];
    let s = [0.0, 0.2, 0.4];
    let p = [0.0, 50.0, 100.0];
    let out = eos.heat_capacity_field(t, s, p).unwrap().into_vec();
    for i in 0..3 {
        assert_eq!(out[i], eos.heat_capacity(t[i], s[i], p[i]));
    }
}

#[test]
fn scalar_inputs_give_scalar_output() {
    let eos = EquationOfState::new();
    let out = eos.alpha_field(15.0, 0.0, 50.0).unwrap();
    assert_eq!(out, Field::Scalar(eos.alpha(15.0, 0.0, 50.0)));
}

#[test]
fn mismatched_shapes_are_rejected() {
    let eos = EquationOfState::new();
    let err = eos
        .sound_speed_field(vec![1.0, 2.0, 3.0], vec![0.1, 0.2], 0.0)
        .unwrap_err();
    assert!(matches!(err, EosError::InputShape { t: 3, s: 2, p: 1 }));
}

#[test]
fn every_field_function_matches_evaluate_field() {
    let eos = EquationOfState::new();
    let t = vec![2.0, 12.0];
    let checks: [(Property, Field); 6] = [
        (Property::Density, eos.density_field(t.clone(), 0.1, 5.0).unwrap()),
        (Property::Alpha, eos.alpha_field(t.clone(), 0.1, 5.0).unwrap()),
        (Property::Tmd, eos.tmd_field(t.clone(), 0.1, 5.0).unwrap()),
        (Property::SoundSpeed, eos.sound_speed_field(t.clone(), 0.1, 5.0).unwrap()),
        (Property::HeatCapacity, eos.heat_capacity_field(t.clone(), 0.1, 5.0).unwrap()),
        (Property::FreezingPoint, eos.freezing_point_field(t.clone(), 0.1, 5.0).unwrap()),
    ];
    for (property, field) in checks {
        let expected = eos.evaluate_field(property, t.clone(), 0.1, 5.0).unwrap();
        assert_eq!(field, expected, "{property}");
    }
}

proptest! {
    #[test]
    fn tmd_independent_of_t(t1 in -5.0_f64..40.0, t2 in -5.0_f64..40.0, s in 0.0_f64..0.6, p in 0.0_f64..180.0) {
        let eos = EquationOfState::new();
        prop_assert_eq!(eos.tmd(t1, s, p), eos.tmd(t2, s, p));
        prop_assert_eq!(eos.freezing_point(t1, s, p), eos.freezing_point(t2, s, p));
    }

    #[test]
    fn zero_pressure_shortcut_is_exact(t in 0.0_f64..30.0, s in 0.0_f64..0.6) {
        let eos = EquationOfState::new();
        let c = &CHEN_MILLERO_1986;
        let rho0 = polyval(&c.density_base, t) + polyval(&c.density_salinity, t) * s;
        prop_assert_eq!(eos.density(t, s, 0.0), rho0 * 1000.0);
        prop_assert_eq!(eos.density(t, s, 0.0), unshortcut::density(t, s, 0.0));
        prop_assert_eq!(eos.alpha(t, s, 0.0), unshortcut::alpha(t, s, 0.0));
        prop_assert_eq!(eos.sound_speed(t, s, 0.0), unshortcut::sound_speed(t, s, 0.0));
        prop_assert_eq!(eos.heat_capacity(t, s, 0.0), unshortcut::heat_capacity(t, s, 0.0));
    }

    #[test]
    fn pressurised_values_match_full_expressions(t in 0.0_f64..30.0, s in 0.0_f64..0.6, p in 0.1_f64..180.0) {
        let eos = EquationOfState::new();
        prop_assert_eq!(eos.density(t, s, p), unshortcut::density(t, s, p));
        prop_assert_eq!(eos.alpha(t, s, p), unshortcut::alpha(t, s, p));
        prop_assert_eq!(eos.sound_speed(t, s, p), unshortcut::sound_speed(t, s, p));
        prop_assert_eq!(eos.heat_capacity(t, s, p), unshortcut::heat_capacity(t, s, p));
    }

    #[test]
    fn broadcast_matches_scalar(temps in prop::collection::vec(0.0_f64..30.0, 0..32), s in 0.0_f64..0.6, p in 0.0_f64..180.0) {
        let eos = EquationOfState::new();
        for property in Property::ALL {
            let out = eos.evaluate_field(property, temps.clone(), s, p).unwrap().into_vec();
            prop_assert_eq!(out.len(), temps.len());
            for (t, v) in temps.iter().zip(&out) {
                let expected = eos.evaluate(property, *t, s, p);
                prop_assert!(v.to_bits() == expected.to_bits());
            }
        }
    }
}
