//! Thread-safe cache of gamut tables.
//!
//! Solving a [`GamutTable`] costs `HUE_SAMPLES` bisections, so tables are
//! solved once per `(colorspace, lightness level)` and shared. Lightness is
//! quantized to `LIGHTNESS_STEPS + 1` levels; the mapper interpolates
//! radii between the two levels bracketing a sample.
//!
//! ```rust
//! use domcol_color::{ChromaMode, GamutCache, HueInterpolation};
//! use domcol_core::Colorspace;
//!
//! let cache = GamutCache::new();
//! let stack = cache.stack(Colorspace::Oklab, &[0.5]);
//! let r = stack.radius(0.5, 1.0, HueInterpolation::Linear, ChromaMode::PerHue);
//! assert!(r > 0.0);
//! assert_eq!(cache.len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use domcol_core::Colorspace;
use domcol_math::{lerp, saturate};
use rayon::prelude::*;
use tracing::debug;

use crate::gamut::{ChromaMode, GamutTable, HueInterpolation};

/// Number of lightness intervals; levels run `0..=LIGHTNESS_STEPS`.
pub const LIGHTNESS_STEPS: usize = 64;

/// Cache key for table lookup.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
struct CacheKey {
    colorspace: Colorspace,
    level: u16,
}

/// Thread-safe gamut table cache.
///
/// Tables depend only on the colorspace and level, so entries never go
/// stale and the cache holds at most `LIGHTNESS_STEPS + 1` tables per
/// colorspace.
#[derive(Debug, Default)]
pub struct GamutCache {
    tables: RwLock<HashMap<CacheKey, Arc<GamutTable>>>,
}

impl GamutCache {
    /// Create empty cache.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Native lightness of a quantized level.
    #[inline]
    pub fn level_lightness(colorspace: Colorspace, level: usize) -> f64 {
        level as f64 / LIGHTNESS_STEPS as f64 * colorspace.lightness_range()
    }

    fn build_table(colorspace: Colorspace, level: usize) -> Arc<GamutTable> {
        let table = GamutTable::build(colorspace, Self::level_lightness(colorspace, level));
        debug!(
            %colorspace,
            level,
            min = table.min_radius(),
            max = table.max_radius(),
            "built gamut table"
        );
        Arc::new(table)
    }

    // A panic while holding the lock cannot leave a half-written table
    // behind, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<CacheKey, Arc<GamutTable>>> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<CacheKey, Arc<GamutTable>>> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get or build the table for one level.
    pub fn get_or_build(&self, colorspace: Colorspace, level: usize) -> Arc<GamutTable> {
        let level = level.min(LIGHTNESS_STEPS);
        let key = CacheKey {
            colorspace,
            level: level as u16,
        };

        if let Some(table) = self.read().get(&key) {
            return Arc::clone(table);
        }

        let table = Self::build_table(colorspace, level);
        Arc::clone(self.write().entry(key).or_insert(table))
    }

    /// Tables for an explicit set of levels.
    ///
    /// Missing levels are solved in parallel. Levels not requested stay
    /// empty in the returned stack.
    pub fn stack_levels(&self, colorspace: Colorspace, levels: &[usize]) -> GamutStack {
        let mut tables: Vec<Option<Arc<GamutTable>>> = vec![None; LIGHTNESS_STEPS + 1];
        let mut missing = Vec::new();

        {
            let cache = self.read();
            for &level in levels {
                let level = level.min(LIGHTNESS_STEPS);
                if tables[level].is_some() || missing.contains(&level) {
                    continue;
                }
                let key = CacheKey {
                    colorspace,
                    level: level as u16,
                };
                match cache.get(&key) {
                    Some(table) => tables[level] = Some(Arc::clone(table)),
                    None => missing.push(level),
                }
            }
        }

        if !missing.is_empty() {
            debug!(%colorspace, count = missing.len(), "solving missing gamut tables");
            let built: Vec<(usize, Arc<GamutTable>)> = missing
                .par_iter()
                .map(|&level| (level, Self::build_table(colorspace, level)))
                .collect();

            let mut cache = self.write();
            for (level, table) in built {
                let key = CacheKey {
                    colorspace,
                    level: level as u16,
                };
                tables[level] = Some(Arc::clone(cache.entry(key).or_insert(table)));
            }
        }

        GamutStack::new(colorspace, tables)
    }

    /// Tables covering a set of normalized lightness values in `[0, 1]`.
    pub fn stack(&self, colorspace: Colorspace, lightness: &[f64]) -> GamutStack {
        let mut needed = [false; LIGHTNESS_STEPS + 1];
        for &l in lightness {
            let (lo, hi, _) = GamutStack::bracket(l);
            needed[lo] = true;
            needed[hi] = true;
        }
        let levels: Vec<usize> = (0..=LIGHTNESS_STEPS).filter(|&k| needed[k]).collect();
        self.stack_levels(colorspace, &levels)
    }

    /// Tables for every level.
    pub fn full_stack(&self, colorspace: Colorspace) -> GamutStack {
        let levels: Vec<usize> = (0..=LIGHTNESS_STEPS).collect();
        self.stack_levels(colorspace, &levels)
    }

    /// Clear all cached tables.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Snapshot of gamut tables at some lightness levels of one colorspace.
#[derive(Debug, Clone)]
pub struct GamutStack {
    colorspace: Colorspace,
    tables: Vec<Option<Arc<GamutTable>>>,
    circles: Vec<f64>,
}

impl GamutStack {
    fn new(colorspace: Colorspace, tables: Vec<Option<Arc<GamutTable>>>) -> Self {
        let circles = tables
            .iter()
            .map(|t| t.as_ref().map_or(0.0, |t| t.min_radius()))
            .collect();
        Self {
            colorspace,
            tables,
            circles,
        }
    }

    /// Levels bracketing a normalized lightness, with the blend factor.
    ///
    /// Out-of-range input is clamped to `[0, 1]`; NaN maps to level 0.
    #[inline]
    pub fn bracket(lightness: f64) -> (usize, usize, f64) {
        let pos = saturate(lightness) * LIGHTNESS_STEPS as f64;
        let lo = (pos.floor() as usize).min(LIGHTNESS_STEPS);
        let hi = (lo + 1).min(LIGHTNESS_STEPS);
        (lo, hi, pos - lo as f64)
    }

    /// Colorspace of the tables.
    pub fn colorspace(&self) -> Colorspace {
        self.colorspace
    }

    /// Table at a level, if it was requested.
    pub fn table(&self, level: usize) -> Option<&GamutTable> {
        self.tables.get(level)?.as_deref()
    }

    fn level_radius(
        &self,
        level: usize,
        hue: f64,
        interp: HueInterpolation,
        mode: ChromaMode,
    ) -> f64 {
        match (&self.tables[level], mode) {
            (None, _) => 0.0,
            (Some(table), ChromaMode::PerHue) => table.lookup(hue, interp),
            (Some(_), ChromaMode::Circle) => self.circles[level],
        }
    }

    /// Boundary radius at a normalized lightness and hue (radians).
    ///
    /// Radii of the two bracketing levels are blended linearly. Levels that
    /// were not requested contribute 0.
    pub fn radius(
        &self,
        lightness: f64,
        hue: f64,
        interp: HueInterpolation,
        mode: ChromaMode,
    ) -> f64 {
        let (lo, hi, t) = Self::bracket(lightness);
        let r_lo = self.level_radius(lo, hue, interp, mode);
        if lo == hi || t <= 0.0 {
            return r_lo;
        }
        lerp(r_lo, self.level_radius(hi, hue, interp, mode), t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn cache_hit() {
        let cache = GamutCache::new();
        assert!(cache.is_empty());

        let a = cache.get_or_build(Colorspace::Hsl, 32);
        assert_eq!(cache.len(), 1);
        let b = cache.get_or_build(Colorspace::Hsl, 32);
        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&a, &b));

        cache.get_or_build(Colorspace::Oklab, 32);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn stack_builds_only_needed_levels() {
        let cache = GamutCache::new();
        let stack = cache.stack(Colorspace::Cielab, &[0.5]);
        // 0.5 sits exactly on level 32; its upper neighbour is solved too
        assert_eq!(cache.len(), 2);
        assert!(stack.table(32).is_some());
        assert!(stack.table(33).is_some());
        assert!(stack.table(0).is_none());

        let direct = GamutTable::build(Colorspace::Cielab, 50.0);
        let r = stack.radius(0.5, 1.0, HueInterpolation::Linear, ChromaMode::PerHue);
        assert_eq!(r, direct.lookup(1.0, HueInterpolation::Linear));
    }

    #[test]
    fn bracket_clamps() {
        assert_eq!(GamutStack::bracket(0.0), (0, 1, 0.0));
        assert_eq!(GamutStack::bracket(1.0), (LIGHTNESS_STEPS, LIGHTNESS_STEPS, 0.0));
        assert_eq!(GamutStack::bracket(2.0).0, LIGHTNESS_STEPS);
        assert_eq!(GamutStack::bracket(f64::NAN).0, 0);
    }

    #[test]
    fn circle_mode_is_hue_independent() {
        let cache = GamutCache::new();
        let stack = cache.stack(Colorspace::Cam16Ucs, &[0.5]);
        let a = stack.radius(0.5, 0.3, HueInterpolation::Linear, ChromaMode::Circle);
        let b = stack.radius(0.5, 4.0, HueInterpolation::Nearest, ChromaMode::Circle);
        assert_eq!(a, b);
        assert!(a <= stack.radius(0.5, 0.3, HueInterpolation::Linear, ChromaMode::PerHue));
    }

    #[test]
    fn thread_safe() {
        let cache = Arc::new(GamutCache::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_build(Colorspace::Hsl, i % 2).max_radius())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 1.0);
        }
        assert_eq!(cache.len(), 2);
    }
}
