//! Property tests over the conversion, gamut and mapping stages.

use std::f64::consts::TAU;
use std::sync::Arc;

use approx::assert_abs_diff_eq;
use domcol_color::{ChromaMode, Converter, GamutCache, HueInterpolation, max_radius};
use domcol_core::{Colorspace, Field};
use domcol_map::{AbsScaling, Complex64, MapConfig, Mapper, complex_to_rgb, contour};

/// Complex grid over `[-extent, extent]^2` plus edge cases.
fn sample_plane(n: usize, extent: f64) -> Vec<Complex64> {
    let mut z = Vec::with_capacity(n * n + 8);
    for j in 0..n {
        for i in 0..n {
            let re = -extent + 2.0 * extent * i as f64 / (n - 1) as f64;
            let im = -extent + 2.0 * extent * j as f64 / (n - 1) as f64;
            z.push(Complex64::new(re, im));
        }
    }
    z.extend([
        Complex64::new(0.0, 0.0),
        Complex64::new(1e-300, -1e-300),
        Complex64::new(1e300, 1e300),
        Complex64::new(f64::INFINITY, 0.0),
        Complex64::new(f64::NEG_INFINITY, f64::INFINITY),
        Complex64::new(f64::NAN, 0.0),
        Complex64::new(0.0, f64::NAN),
        Complex64::new(-0.0, -0.0),
    ]);
    z
}

fn all_configs() -> Vec<MapConfig> {
    let mut configs = Vec::new();
    for cs in Colorspace::ALL {
        for scaling in ["standard", "h-1", "m-2", "0"] {
            for chroma in [ChromaMode::PerHue, ChromaMode::Circle] {
                configs.push(MapConfig {
                    colorspace: cs,
                    abs_scaling: scaling.parse().unwrap(),
                    chroma,
                    ..Default::default()
                });
            }
        }
    }
    configs
}

#[test]
fn roundtrip_in_gamut_points() {
    for cs in Colorspace::ALL {
        let conv = Converter::new(cs);
        for li in 1..10 {
            let l = li as f64 / 10.0 * cs.lightness_range();
            for hi in 0..12 {
                let hue = hi as f64 * TAU / 12.0;
                let r = 0.5 * max_radius(cs.name(), l, hue).unwrap();
                let p = conv.from_polar(l, r, hue);

                let (rgb, valid) = conv.to_rgb1(&p);
                assert!(valid, "{cs} l={l} h={hue}");
                let back = conv.from_rgb1(&rgb);
                for k in 0..3 {
                    assert_abs_diff_eq!(back[k], p[k], epsilon = 1e-6);
                }
            }
        }
    }
}

#[test]
fn gamut_validity_is_monotonic_in_radius() {
    for cs in Colorspace::ALL {
        let conv = Converter::new(cs);
        let upper = cs.search_radius();
        for li in 1..10 {
            let l = li as f64 / 10.0 * cs.lightness_range();
            for hi in 0..12 {
                let hue = hi as f64 * TAU / 12.0;
                let mut left_gamut = false;
                for k in 0..=200 {
                    let r = k as f64 / 200.0 * upper;
                    let valid = conv.to_rgb1(&conv.from_polar(l, r, hue)).1;
                    assert!(!(left_gamut && valid), "{cs} l={l} h={hue} r={r}");
                    left_gamut |= !valid;
                }
            }
        }
    }
}

#[test]
fn output_is_bounded() {
    let z = sample_plane(21, 3.0);
    let cache = Arc::new(GamutCache::new());
    for config in all_configs() {
        let mapper = Mapper::with_cache(config.clone(), Arc::clone(&cache)).unwrap();
        for rgb in mapper.complex_to_rgb(&z) {
            assert!(
                rgb.iter().all(|v| (0.0..=1.0).contains(v)),
                "{config:?}: {rgb:?}"
            );
        }
    }
}

#[test]
fn phase_is_periodic() {
    let z = sample_plane(11, 2.0);
    let turn = Complex64::from_polar(1.0, TAU);
    let turned: Vec<Complex64> = z.iter().map(|&z| z * turn).collect();

    for cs in Colorspace::ALL {
        for interpolation in [HueInterpolation::Linear, HueInterpolation::Nearest] {
            let mapper = Mapper::new(MapConfig {
                colorspace: cs,
                interpolation,
                ..Default::default()
            })
            .unwrap();
            let a = mapper.complex_to_rgb(&z[..121]);
            let b = mapper.complex_to_rgb(&turned[..121]);
            for (x, y) in a.iter().zip(&b) {
                for k in 0..3 {
                    assert_abs_diff_eq!(x[k], y[k], epsilon = 1e-6);
                }
            }
        }
    }
}

#[test]
fn hue_offset_of_a_full_turn_is_identity() {
    let z = sample_plane(9, 2.0);
    let plain = Mapper::new(MapConfig::default()).unwrap();
    let turned = Mapper::with_cache(
        MapConfig {
            hue_offset: TAU,
            ..Default::default()
        },
        plain.cache().clone(),
    )
    .unwrap();
    for (x, y) in plain.complex_to_rgb(&z).iter().zip(&turned.complex_to_rgb(&z)) {
        for k in 0..3 {
            assert_abs_diff_eq!(x[k], y[k], epsilon = 1e-6);
        }
    }
}

#[test]
fn binary_scaling_has_one_band_per_octave() {
    // log2 m from -4 to 4, never exactly on a power of two
    let m: Vec<f64> = (0..800)
        .map(|i| (-4.0 + 0.005 + i as f64 * 0.01).exp2())
        .collect();
    let c = contour(&m, "h-1").unwrap();

    let transitions = c.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(transitions, 7);
    assert!(c.windows(2).all(|w| w[0] <= w[1]));

    // h-3: three bands per octave
    let c = contour(&m, "h-3").unwrap();
    assert_eq!(c.windows(2).filter(|w| w[0] != w[1]).count(), 23);
}

#[test]
fn disabled_scaling_is_constant() {
    let m = [0.0, 1e-9, 0.5, 1.0, 2.0, 1e12, f64::INFINITY, f64::NAN];
    assert!(contour(&m, "0").unwrap().iter().all(|&c| c == 0.5));

    // alpha = 0 collapses every mode to the same constant
    let flat = Mapper::new(MapConfig {
        alpha: 0.0,
        abs_scaling: AbsScaling::Binary(2.0),
        ..Default::default()
    })
    .unwrap();
    for z in sample_plane(5, 4.0) {
        assert_eq!(flat.contour(z), 0.5);
    }
}

#[test]
fn contour_is_monotonic_and_bounded() {
    let m: Vec<f64> = (0..=400).map(|i| (i as f64 * 0.1 - 20.0).exp()).collect();
    for scaling in ["standard", "h-1", "h-2.5", "m-1", "m-4"] {
        let c = contour(&m, scaling).unwrap();
        assert!(c.iter().all(|&v| (0.0..=1.0).contains(&v)), "{scaling}");
        assert!(c.windows(2).all(|w| w[0] <= w[1]), "{scaling}");
    }
}

#[test]
fn lightness_follows_magnitude() {
    // log sweep over six decades, covering contours below the first level
    let magnitudes: Vec<f64> = (0..=120)
        .map(|k| 10f64.powf(-3.0 + 6.0 * k as f64 / 120.0))
        .collect();

    for cs in Colorspace::ALL {
        let conv = Converter::new(cs);
        let mapper = Mapper::new(MapConfig {
            colorspace: cs,
            ..Default::default()
        })
        .unwrap();
        let range = cs.lightness_range();

        for hue in [0.0, 1.0, 2.0, 3.0, 4.0, 5.0] {
            let z: Vec<Complex64> = magnitudes
                .iter()
                .map(|&m| Complex64::from_polar(m, hue))
                .collect();
            let l: Vec<f64> = mapper
                .complex_to_rgb(&z)
                .iter()
                .map(|rgb| conv.to_polar(&conv.from_rgb1(rgb)).0)
                .collect();

            for (k, w) in l.windows(2).enumerate() {
                assert!(w[0] < w[1], "{cs} h={hue} m={}: {} >= {}", magnitudes[k], w[0], w[1]);
            }
            for (&m, &actual) in magnitudes.iter().zip(&l) {
                let expected = m / (m + 1.0) * range;
                assert_abs_diff_eq!(actual, expected, epsilon = 0.01 * range);
            }
        }
    }
}

#[test]
fn cam16_near_zero_stays_dark() {
    let rgb = complex_to_rgb(&[Complex64::from_polar(0.012, 4.0)], "cam16", "standard").unwrap();
    assert!(rgb[0].iter().all(|&v| v < 0.01), "{rgb:?}");

    let conv = Converter::new(Colorspace::Cam16Ucs);
    let j = conv.from_rgb1(&rgb[0])[0];
    assert_abs_diff_eq!(j, 0.012 / 1.012 * 100.0, epsilon = 0.05);
}

#[test]
fn field_shape_is_preserved() {
    let data: Vec<Complex64> = (0..6).map(|i| Complex64::new(i as f64, 1.0)).collect();
    let field = Field::new(vec![2, 3], data.clone()).unwrap();
    let mapper = Mapper::new(MapConfig::default()).unwrap();

    let rgb = mapper.map_field(&field).unwrap();
    assert_eq!(rgb.shape(), &[2, 3]);
    assert_eq!(rgb.rgb_shape(), vec![2, 3, 3]);
    assert_eq!(rgb.to_flat().len(), 18);
    assert_eq!(rgb.get(&[1, 2]), Some(&mapper.complex_to_rgb(&data[5..])[0]));
}
