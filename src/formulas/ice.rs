//! Saturation vapor pressure over a plane surface of ice.

use metfor::{Celsius, HectoPascal, Kelvin, Quantity};

/// Triple point of water in K.
const TRIPLE_POINT: f64 = 273.16;

#[inline]
fn kelvin(temperature: Celsius) -> f64 {
    Kelvin::from(temperature).unpack()
}

pub(super) fn marti_mauersberger(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    HectoPascal(10.0f64.powf(-2663.5 / t + 12.537) / 100.0)
}

pub(super) fn hyland_wexler(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let pa = (-0.56745359e4 / t + 0.63925247e1 - 0.96778430e-2 * t + 0.62215701e-6 * t.powi(2)
        + 0.20747825e-8 * t.powi(3)
        - 0.94840240e-12 * t.powi(4)
        + 0.41635019e1 * t.ln())
    .exp();

    HectoPascal(pa / 100.0)
}

// Wexler, A., Vapor pressure formulation for ice, J. Res. Natl. Bur. Stand. 81A, 5-20, 1977.
pub(super) fn wexler(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let pa = (-0.58653696e4 * t.powi(-1) + 0.2224103300e2 + 0.13749042e-1 * t
        - 0.34031775e-4 * t.powi(2)
        + 0.26967687e-7 * t.powi(3)
        + 0.6918651 * t.ln())
    .exp();

    HectoPascal(pa / 100.0)
}

/// Wexler (1977) with the coefficients updated to ITS-90 by Hardy at Thunder Scientific.
pub(super) fn hardy(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let pa = (-0.58666426e4 * t.powi(-1) + 0.2232870244e2 + 0.139387003e-1 * t
        - 0.34262402e-4 * t.powi(2)
        + 0.27040955e-7 * t.powi(3)
        + 0.67063522 * t.ln())
    .exp();

    HectoPascal(pa / 100.0)
}

// Smithsonian Meteorological Tables, 5th edition, p. 350, 1984
pub(super) fn goff_gratch(temperature: Celsius) -> HectoPascal {
    // Saturation pressure over ice at the triple point, hPa
    const E_ICE_0: f64 = 6.1071;

    let t = kelvin(temperature);

    let log_e = -9.09718 * (TRIPLE_POINT / t - 1.0) - 3.56654 * (TRIPLE_POINT / t).log10()
        + 0.876793 * (1.0 - t / TRIPLE_POINT)
        + E_ICE_0.log10();

    HectoPascal(10.0f64.powf(log_e))
}

// Murray quotes 10^(9.5 t / (265.5 + t) + 0.7858) as the original, this is the equivalent in
// base e.
pub(super) fn magnus_tetens(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    HectoPascal(6.1078 * (21.8745584 * (t - TRIPLE_POINT) / (t - 7.66)).exp())
}

pub(super) fn buck(temperature: Celsius) -> HectoPascal {
    let t = temperature.unpack();

    HectoPascal(6.1115 * (22.452 * t / (272.55 + t)).exp())
}

pub(super) fn buck2(temperature: Celsius) -> HectoPascal {
    let t = temperature.unpack();

    HectoPascal(6.1115 * ((23.036 - t / 333.7) * t / (279.82 + t)).exp())
}

pub(super) fn cimo(temperature: Celsius) -> HectoPascal {
    let t = temperature.unpack();

    HectoPascal(6.112 * (22.46 * t / (272.62 + t)).exp())
}

// WMO-No. 49, Vol I, App. A, Aug 2000. Very similar to Goff-Gratch.
pub(super) fn wmo(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let log_e = -9.09685 * (TRIPLE_POINT / t - 1.0) - 3.56654 * (TRIPLE_POINT / t).log10()
        + 0.87682 * (1.0 - t / TRIPLE_POINT)
        + 0.78614;

    HectoPascal(10.0f64.powf(log_e))
}

pub(super) fn sonntag(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    HectoPascal(
        (-6024.5282 / t + 24.721994 + 1.0613868e-2 * t - 1.3198825e-5 * t.powi(2)
            - 0.49382577 * t.ln())
        .exp(),
    )
}

pub(super) fn murphy_koop(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let pa = (9.550426 - 5723.265 / t + 3.53068 * t.ln() - 0.00728332 * t).exp();

    HectoPascal(pa / 100.0)
}

pub(super) fn mcidas(temperature: Celsius) -> HectoPascal {
    const A0: f64 = 0.7859063157e0;
    const A1: f64 = 0.3579242320e-1;
    const A2: f64 = -0.1292820828e-3;
    const A3: f64 = 0.5937519208e-6;
    const A4: f64 = 0.4482949133e-9;
    const A5: f64 = 0.2176664827e-10;

    let t = temperature.unpack();

    let log_e = A0 + t * (A1 + t * (A2 + t * (A3 + t * (A4 + t * A5))));

    HectoPascal(10.0f64.powf(log_e))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_tools::approx_equal;

    fn hpa(e: HectoPascal) -> f64 {
        e.unpack()
    }

    #[test]
    fn test_reference_values_minus_20c() {
        let t = Celsius(-20.0);

        assert!(approx_equal(hpa(marti_mauersberger(t)), 1.0365016977210437, 1.0e-10));
        assert!(approx_equal(hpa(hyland_wexler(t)), 1.0326037858050408, 1.0e-10));
        assert!(approx_equal(hpa(wexler(t)), 1.0327607371434402, 1.0e-10));
        assert!(approx_equal(hpa(hardy(t)), 1.0323228795731982, 1.0e-10));
        assert!(approx_equal(hpa(goff_gratch(t)), 1.0307420396730933, 1.0e-10));
        assert!(approx_equal(hpa(magnus_tetens(t)), 1.0269174799729865, 1.0e-10));
        assert!(approx_equal(hpa(buck(t)), 1.0326704207014978, 1.0e-10));
        assert!(approx_equal(hpa(buck2(t)), 1.0328594448519997, 1.0e-10));
        assert!(approx_equal(hpa(cimo(t)), 1.0326096299134646, 1.0e-10));
        assert!(approx_equal(hpa(wmo(t)), 1.0315327490740696, 1.0e-10));
        assert!(approx_equal(hpa(sonntag(t)), 1.0324877661673235, 1.0e-10));
        assert!(approx_equal(hpa(murphy_koop(t)), 1.032524632801715, 1.0e-10));
        assert!(approx_equal(hpa(mcidas(t)), 1.0318036910322514, 1.0e-10));
    }

    #[test]
    fn test_hardy_at_freezing() {
        // Agrees with Wexler (1977) to within the ITS-68 to ITS-90 update.
        let t = Celsius(0.0);
        assert!(approx_equal(hpa(hardy(t)), 6.11153589845665, 1.0e-9));
        assert!(approx_equal(hpa(hardy(t)), hpa(wexler(t)), 1.0e-4));
    }

    #[test]
    fn test_goff_gratch_at_triple_point() {
        assert!(approx_equal(hpa(goff_gratch(Celsius(0.01))), 6.1071, 1.0e-9));
    }
}
