//! Physical properties that hold for every equation over its documented range.
use metfor::{Celsius, Quantity};
use proptest::prelude::*;
use sat_vapor_pressure::{vapor_pressure, Formula, Phase};
use strum::IntoEnumIterator;

fn supported() -> Vec<(Phase, Formula)> {
    Phase::iter()
        .flat_map(|phase| {
            Formula::iter()
                .filter(move |f| f.supports(phase))
                .map(move |f| (phase, f))
        })
        .collect()
}

fn supported_strategy() -> impl Strategy<Value = (Phase, Formula)> {
    prop::sample::select(supported())
}

fn hpa(t: f64, phase: Phase, formula: Formula) -> f64 {
    vapor_pressure(Celsius(t), phase, formula).unwrap().unpack()
}

#[test]
fn positive_and_increasing_over_valid_range() {
    for (phase, formula) in supported() {
        let range = formula.valid_range(phase).unwrap();
        let (min, max) = (range.min.unpack(), range.max.unpack());

        let mut last = 0.0;
        let mut t = min;
        while t <= max {
            let e = hpa(t, phase, formula);

            assert!(e.is_finite(), "{} over {} at {} C", formula, phase, t);
            assert!(e > last, "{} over {} at {} C: {} <= {}", formula, phase, t, e, last);

            last = e;
            t += 0.5;
        }

        let e = hpa(max, phase, formula);
        assert!(e.is_finite() && e > 0.0, "{} over {} at {} C", formula, phase, max);
    }
}

proptest! {
    #[test]
    fn deterministic((phase, formula) in supported_strategy(), frac in 0.0f64..=1.0) {
        let range = formula.valid_range(phase).unwrap();
        let t = range.min.unpack() + frac * (range.max.unpack() - range.min.unpack());

        let first = hpa(t, phase, formula);
        let second = hpa(t, phase, formula);

        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn strictly_increasing(
        (phase, formula) in supported_strategy(),
        frac in 0.0f64..=1.0,
        dt in 0.01f64..10.0,
    ) {
        let range = formula.valid_range(phase).unwrap();
        let (min, max) = (range.min.unpack(), range.max.unpack());

        let t1 = min + frac * (max - min);
        let t2 = t1 + dt;
        prop_assume!(t2 <= max);

        let e1 = hpa(t1, phase, formula);
        let e2 = hpa(t2, phase, formula);

        prop_assert!(e1 > 0.0 && e1.is_finite());
        prop_assert!(e2 > e1, "{} over {}: e({}) = {}, e({}) = {}", formula, phase, t1, e1, t2, e2);
    }
}
