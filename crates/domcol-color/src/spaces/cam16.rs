//! CAM16-UCS color appearance space.
//!
//! Forward model: XYZ -> CAM16 (J, M, h) -> UCS (J', a', b'), using the
//! Li et al. (2017) uniform space on top of CAM16. Points are
//! `[J', a', b']` with `J'` in `0..100`.
//!
//! The default viewing conditions match common domain-coloring practice:
//! average surround (`c = 0.69`), background `Y_b = 20`, adapting luminance
//! `L_A = 64 / pi / 5` cd/m2, D65 white from the sRGB primaries.
//!
//! # Reference
//!
//! C. Li et al., "Comprehensive color solutions: CAM16, CAT16, and CAM16-UCS",
//! Color Res. Appl. 42 (2017).

use std::f64::consts::PI;
use std::sync::LazyLock;

use domcol_math::{F3, Mat3};

use super::SRGB_XYZ;

/// CAT16 matrix (XYZ to sharpened cone space).
pub const M16: Mat3 = Mat3::from_rows([
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
]);

// UCS coefficients
const C1: f64 = 0.007;
const C2: f64 = 0.0228;

// Post-adaptation compression constants
const NL_EXPONENT: f64 = 0.42;
const NL_OFFSET: f64 = 27.13;
const NL_SCALE: f64 = 400.0;
const NL_FLOOR: f64 = 0.1;

/// Viewing conditions for the appearance model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingConditions {
    /// Surround impact `c`
    pub c: f64,
    /// Chromatic induction factor `N_c`
    pub n_c: f64,
    /// Maximum degree of adaptation `F`
    pub f: f64,
    /// Background luminance factor `Y_b` (relative to white Y = 100)
    pub y_b: f64,
    /// Adapting field luminance `L_A` in cd/m2
    pub l_a: f64,
}

impl Default for ViewingConditions {
    fn default() -> Self {
        Self {
            c: 0.69,
            n_c: 1.0,
            f: 1.0,
            y_b: 20.0,
            l_a: 64.0 / PI / 5.0,
        }
    }
}

/// Precomputed CAM16-UCS model for fixed viewing conditions.
#[derive(Debug, Clone)]
pub struct Cam16Ucs {
    m16_inv: Mat3,
    d_rgb: F3,
    f_l: f64,
    f_l_4: f64,
    n_c: f64,
    n_bb: f64,
    a_w: f64,
    cz: f64,
    chroma_factor: f64,
}

impl Cam16Ucs {
    /// Builds the model for a white point (XYZ with `Y_w = 100`).
    pub fn new(white_xyz100: F3, vc: ViewingConditions) -> Self {
        let y_w = white_xyz100[1];

        let k = 1.0 / (5.0 * vc.l_a + 1.0);
        let k4 = k.powi(4);
        let f_l = 0.2 * k4 * (5.0 * vc.l_a) + 0.1 * (1.0 - k4).powi(2) * (5.0 * vc.l_a).cbrt();

        let n = vc.y_b / y_w;
        let z = 1.48 + n.sqrt();
        let n_bb = 0.725 * n.powf(-0.2);

        let d = (vc.f * (1.0 - (1.0 / 3.6) * ((-vc.l_a - 42.0) / 92.0).exp())).clamp(0.0, 1.0);

        let rgb_w = M16 * white_xyz100;
        let d_rgb = [
            d * y_w / rgb_w[0] + 1.0 - d,
            d * y_w / rgb_w[1] + 1.0 - d,
            d * y_w / rgb_w[2] + 1.0 - d,
        ];

        let mut model = Self {
            m16_inv: M16.inverse().unwrap_or(Mat3::IDENTITY),
            d_rgb,
            f_l,
            f_l_4: f_l.powf(0.25),
            n_c: vc.n_c,
            n_bb,
            a_w: 0.0,
            cz: vc.c * z,
            chroma_factor: (1.64 - 0.29_f64.powf(n)).powf(0.73),
        };

        let rgb_aw = [
            model.compress(d_rgb[0] * rgb_w[0]),
            model.compress(d_rgb[1] * rgb_w[1]),
            model.compress(d_rgb[2] * rgb_w[2]),
        ];
        model.a_w = model.achromatic(&rgb_aw);
        model
    }

    /// Post-adaptation nonlinear compression of one cone channel.
    #[inline]
    fn compress(&self, x: f64) -> f64 {
        let t = (self.f_l * x.abs() / 100.0).powf(NL_EXPONENT);
        (NL_SCALE * t / (t + NL_OFFSET)).copysign(x) + NL_FLOOR
    }

    /// Inverse of [`compress`](Self::compress).
    #[inline]
    fn expand(&self, y: f64) -> f64 {
        let v = y - NL_FLOOR;
        let a = v.abs();
        if a >= NL_SCALE {
            return f64::INFINITY.copysign(v);
        }
        (100.0 / self.f_l * (NL_OFFSET * a / (NL_SCALE - a)).powf(1.0 / NL_EXPONENT)).copysign(v)
    }

    #[inline]
    fn achromatic(&self, rgb_a: &F3) -> f64 {
        (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2] - 0.305) * self.n_bb
    }

    #[inline]
    fn eccentricity_factor(&self, h: f64) -> f64 {
        50000.0 / 13.0 * self.n_c * self.n_bb * 0.25 * ((h + 2.0).cos() + 3.8)
    }

    /// XYZ (`Y_w = 100`) to `[J', a', b']`.
    pub fn from_xyz100(&self, xyz: &F3) -> F3 {
        let rgb = M16 * *xyz;
        let rgb_a = [
            self.compress(self.d_rgb[0] * rgb[0]),
            self.compress(self.d_rgb[1] * rgb[1]),
            self.compress(self.d_rgb[2] * rgb[2]),
        ];

        let a = rgb_a[0] - 12.0 * rgb_a[1] / 11.0 + rgb_a[2] / 11.0;
        let b = (rgb_a[0] + rgb_a[1] - 2.0 * rgb_a[2]) / 9.0;
        let h = b.atan2(a);

        let big_a = self.achromatic(&rgb_a).max(0.0);
        let j = 100.0 * (big_a / self.a_w).powf(self.cz);

        let denom = rgb_a[0] + rgb_a[1] + 1.05 * rgb_a[2];
        let t = self.eccentricity_factor(h) * a.hypot(b) / denom;
        let c = t.max(0.0).powf(0.9) * (j / 100.0).sqrt() * self.chroma_factor;
        let m = c * self.f_l_4;

        let j_ucs = 1.7 * j / (1.0 + C1 * j);
        let m_ucs = (1.0 + C2 * m).ln() / C2;
        [j_ucs, m_ucs * h.cos(), m_ucs * h.sin()]
    }

    /// `[J', a', b']` to XYZ (`Y_w = 100`).
    pub fn to_xyz100(&self, jab: &F3) -> F3 {
        let j = jab[0] / (1.7 - C1 * jab[0]);
        let m_ucs = jab[1].hypot(jab[2]);
        // Without lightness only the achromatic point exists (black);
        // anything with chroma there is unrepresentable.
        if j.is_nan() || (j <= 0.0 && m_ucs > 0.0) {
            return [f64::NAN; 3];
        }
        if j <= 0.0 {
            return [0.0, 0.0, 0.0];
        }
        let h = jab[2].atan2(jab[1]);
        let m = ((C2 * m_ucs).exp() - 1.0) / C2;
        let c = m / self.f_l_4;

        let t = (c / ((j / 100.0).sqrt() * self.chroma_factor)).powf(1.0 / 0.9);
        let big_a = self.a_w * (j / 100.0).powf(1.0 / self.cz);
        let p2 = big_a / self.n_bb + 0.305;

        // |(a, b)| solved in closed form from t, h and p2
        let (sin_h, cos_h) = h.sin_cos();
        let r = p2 * t / (self.eccentricity_factor(h) + t * (671.0 * cos_h + 6588.0 * sin_h) / 1403.0);
        let a = r * cos_h;
        let b = r * sin_h;

        let rgb_a = [
            (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0,
            (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0,
            (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0,
        ];
        let rgb = [
            self.expand(rgb_a[0]) / self.d_rgb[0],
            self.expand(rgb_a[1]) / self.d_rgb[1],
            self.expand(rgb_a[2]) / self.d_rgb[2],
        ];
        self.m16_inv * rgb
    }
}

/// Model for the sRGB white and default viewing conditions.
static DEFAULT: LazyLock<Cam16Ucs> = LazyLock::new(|| {
    let w = SRGB_XYZ.to_xyz * [1.0, 1.0, 1.0];
    Cam16Ucs::new([100.0 * w[0], 100.0 * w[1], 100.0 * w[2]], ViewingConditions::default())
});

/// CAM16-UCS to linear sRGB.
pub fn to_linear_srgb(jab: &F3) -> F3 {
    let xyz = DEFAULT.to_xyz100(jab);
    SRGB_XYZ.from_xyz * [xyz[0] / 100.0, xyz[1] / 100.0, xyz[2] / 100.0]
}

/// Linear sRGB to CAM16-UCS.
pub fn from_linear_srgb(rgb: &F3) -> F3 {
    let xyz = SRGB_XYZ.to_xyz * *rgb;
    DEFAULT.from_xyz100(&[100.0 * xyz[0], 100.0 * xyz[1], 100.0 * xyz[2]])
}
