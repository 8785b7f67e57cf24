//! Saturation vapor pressure over a plane surface of liquid water.

use metfor::{Celsius, HectoPascal, Kelvin, Quantity};

/// Triple point of water in K.
const TRIPLE_POINT: f64 = 273.16;

#[inline]
fn kelvin(temperature: Celsius) -> f64 {
    Kelvin::from(temperature).unpack()
}

pub(super) fn hyland_wexler(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let pa = (-0.58002206e4 / t + 0.13914993e1 - 0.48640239e-1 * t + 0.41764768e-4 * t.powi(2)
        - 0.14452093e-7 * t.powi(3)
        + 0.65459673e1 * t.ln())
    .exp();

    HectoPascal(pa / 100.0)
}

pub(super) fn hardy(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let pa = (-2.8365744e3 / t.powi(2) - 6.028076559e3 / t + 1.954263612e1 - 2.737830188e-2 * t
        + 1.6261698e-5 * t.powi(2)
        + 7.0229056e-10 * t.powi(3)
        - 1.8680009e-13 * t.powi(4)
        + 2.7150305 * t.ln())
    .exp();

    HectoPascal(pa / 100.0)
}

pub(super) fn preining(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let pa = (-7235.424651 / t + 77.34491296 + 5.7113e-3 * t - 8.2 * t.ln()).exp();

    HectoPascal(pa / 100.0)
}

// The T^4 term is positive as in the 1976 publication.
pub(super) fn wexler(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let pa = (-0.29912729e4 * t.powi(-2) - 0.60170128e4 * t.powi(-1) + 0.1887643854e2
        - 0.28354721e-1 * t
        + 0.17838301e-4 * t.powi(2)
        - 0.84150417e-9 * t.powi(3)
        + 0.44412543e-12 * t.powi(4)
        + 2.858487 * t.ln())
    .exp();

    HectoPascal(pa / 100.0)
}

pub(super) fn goff_gratch(temperature: Celsius) -> HectoPascal {
    // Steam point temperature in K
    const STEAM_POINT: f64 = 373.16;
    // Saturation pressure at the steam point, normal atmosphere, hPa
    const E_STEAM_POINT: f64 = 1013.246;

    let t = kelvin(temperature);

    let log_e = -7.90298 * (STEAM_POINT / t - 1.0) + 5.02808 * (STEAM_POINT / t).log10()
        - 1.3816e-7 * (10.0f64.powf(11.344 * (1.0 - t / STEAM_POINT)) - 1.0)
        + 8.1328e-3 * (10.0f64.powf(-3.49149 * (STEAM_POINT / t - 1.0)) - 1.0)
        + E_STEAM_POINT.log10();

    HectoPascal(10.0f64.powf(log_e))
}

pub(super) fn cimo(temperature: Celsius) -> HectoPascal {
    let t = temperature.unpack();

    HectoPascal(6.112 * (17.62 * t / (243.12 + t)).exp())
}

// Murray quotes 10^(7.5 t / (t + 237.5) + 0.7858) as the original, this is the equivalent in
// base e.
pub(super) fn magnus_tetens(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    HectoPascal(6.1078 * (17.269388 * (t - TRIPLE_POINT) / (t - 35.86)).exp())
}

pub(super) fn buck(temperature: Celsius) -> HectoPascal {
    let t = temperature.unpack();

    HectoPascal(6.1121 * (17.502 * t / (240.97 + t)).exp())
}

pub(super) fn buck2(temperature: Celsius) -> HectoPascal {
    let t = temperature.unpack();

    HectoPascal(6.1121 * ((18.678 - t / 234.5) * t / (257.14 + t)).exp())
}

// Goff (1957). The WMO technical regulations (WMO-No. 49, 1988 and the 2000 corrigendum) both
// reference this incorrectly.
pub(super) fn wmo(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let log_e = 10.79574 * (1.0 - TRIPLE_POINT / t) - 5.02800 * (t / TRIPLE_POINT).log10()
        + 1.50475e-4 * (1.0 - 10.0f64.powf(-8.2969 * (t / TRIPLE_POINT - 1.0)))
        + 0.42873e-3 * (10.0f64.powf(4.76955 * (1.0 - TRIPLE_POINT / t)) - 1.0)
        + 0.78614;

    HectoPascal(10.0f64.powf(log_e))
}

// As printed in the 2000 corrigendum, including the sign of the 4.76955 exponent.
pub(super) fn wmo2000(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let log_e = 10.79574 * (1.0 - TRIPLE_POINT / t) - 5.02800 * (t / TRIPLE_POINT).log10()
        + 1.50475e-4 * (1.0 - 10.0f64.powf(-8.2969 * (t / TRIPLE_POINT - 1.0)))
        + 0.42873e-3 * (10.0f64.powf(-4.76955 * (1.0 - TRIPLE_POINT / t)) - 1.0)
        + 0.78614;

    HectoPascal(10.0f64.powf(log_e))
}

pub(super) fn sonntag(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    HectoPascal(
        (-6096.9385 / t + 16.635794 - 2.711193e-2 * t + 1.673952e-5 * t.powi(2) + 2.433502 * t.ln())
            .exp(),
    )
}

// Equation (10)
pub(super) fn bolton(temperature: Celsius) -> HectoPascal {
    let t = temperature.unpack();

    HectoPascal(6.112 * (17.67 * t / (t + 243.5)).exp())
}

/// Fukuta and Gramada measured supercooled water and published a correction to the Smithsonian
/// tables rather than an equation of their own, so this is Goff-Gratch times the correction.
/// There is no value below -39 C.
pub(super) fn fukuta(temperature: Celsius) -> Option<HectoPascal> {
    if temperature < Celsius(-39.0) {
        return None;
    }

    let e_goff_gratch = goff_gratch(temperature).unpack();

    let x = temperature.unpack() + 19.0;
    let correction = 0.9992 + 7.113e-4 * x - 1.847e-4 * x.powi(2) + 1.189e-5 * x.powi(3)
        + 1.130e-7 * x.powi(4)
        - 1.743e-8 * x.powi(5);

    Some(HectoPascal(e_goff_gratch * correction))
}

/// The 'official' formulation of the International Association for the Properties of Water and
/// Steam, based on the ITS-90 temperature scale.
pub(super) fn iapws(temperature: Celsius) -> HectoPascal {
    // Critical point, K and hPa
    const T_CRITICAL: f64 = 647.096;
    const P_CRITICAL: f64 = 22.064e4;

    const A1: f64 = -7.85951783;
    const A2: f64 = 1.84408259;
    const A3: f64 = -11.7866497;
    const A4: f64 = 22.6807411;
    const A5: f64 = -15.9618719;
    const A6: f64 = 1.80122502;

    let t = kelvin(temperature);
    let nu = 1.0 - t / T_CRITICAL;

    HectoPascal(
        P_CRITICAL
            * (T_CRITICAL / t
                * (A1 * nu
                    + A2 * nu.powf(1.5)
                    + A3 * nu.powi(3)
                    + A4 * nu.powf(3.5)
                    + A5 * nu.powi(4)
                    + A6 * nu.powf(7.5)))
                .exp(),
    )
}

pub(super) fn murphy_koop(temperature: Celsius) -> HectoPascal {
    let t = kelvin(temperature);

    let pa = (54.842763 - 6763.22 / t - 4.210 * t.ln()
        + 0.000367 * t
        + (0.0415 * (t - 218.8)).tanh() * (53.878 - 1331.22 / t - 9.44523 * t.ln() + 0.014025 * t))
        .exp();

    HectoPascal(pa / 100.0)
}

pub(super) fn mcidas(temperature: Celsius) -> HectoPascal {
    const A0: f64 = 0.999996876e0;
    const A1: f64 = -0.9082695004e-2;
    const A2: f64 = 0.7873616869e-4;
    const A3: f64 = -0.6111795727e-6;
    const A4: f64 = 0.4388418740e-8;
    const A5: f64 = -0.2988388486e-10;
    const A6: f64 = 0.2187442495e-12;
    const A7: f64 = -0.1789232111e-14;
    const A8: f64 = 0.1111201803e-16;
    const A9: f64 = -0.3099457145e-19;
    const B: f64 = 0.61078e1;

    let t = temperature.unpack();

    let s = A0
        + t * (A1
            + t * (A2 + t * (A3 + t * (A4 + t * (A5 + t * (A6 + t * (A7 + t * (A8 + t * A9))))))));

    HectoPascal(B / s.powi(8))
}
