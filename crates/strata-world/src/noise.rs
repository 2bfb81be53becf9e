//! Seeded 2D gradient noise.
//!
//! The field places a gradient on every lattice point of a square grid with
//! period [`CELL_SIZE`]. A height sample dots the four surrounding gradients
//! with their offsets to the sample point and blends the results with a
//! quintic fade curve.
//!
//! Gradients are restricted to eight directions: the four diagonals and the
//! four axes. The tables are filled from a `fastrand` generator seeded with the
//! world seed, so terrain is reproducible for a given seed and a given
//! generator algorithm. Swapping the generator changes every landscape.

use glam::DVec2;

/// World-space period of the noise lattice.
pub const CELL_SIZE: f64 = 256.0;

/// Number of distinct gradients and permutation entries.
pub const TABLE_SIZE: usize = 256;

/// Length of the duplicated permutation table.
const PERMUTATION_LEN: usize = TABLE_SIZE * 2;

/// Unit-cell corner offsets in blending order.
const CORNERS: [(i64, i64); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Anything that can produce a terrain height for a world position.
pub trait HeightSource {
    /// Returns the height at `(x, y)`, nominally in `[-1, 1]`.
    fn height(&self, x: f64, y: f64) -> f64;
}

impl<T: HeightSource + ?Sized> HeightSource for &T {
    fn height(&self, x: f64, y: f64) -> f64 {
        (**self).height(x, y)
    }
}

/// The eight permitted gradient directions, normalized.
fn gradient_directions() -> [DVec2; 8] {
    [
        DVec2::new(1.0, 1.0),
        DVec2::new(-1.0, 1.0),
        DVec2::new(1.0, -1.0),
        DVec2::new(-1.0, -1.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(-2.0, 0.0),
        DVec2::new(0.0, 2.0),
        DVec2::new(0.0, -2.0),
    ]
    .map(DVec2::normalize)
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
#[inline]
#[must_use]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation from `a` to `b` by weight `w`.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, w: f64) -> f64 {
    a + w * (b - a)
}

/// Deterministic gradient noise field for one world seed.
///
/// Immutable after construction: every sample is a pure function of the
/// seed and the input coordinates.
#[derive(Debug, Clone)]
pub struct NoiseField {
    /// World seed the tables were built from
    seed: i64,
    /// Shuffled `0..256`, stored twice back to back
    permutation: [u8; PERMUTATION_LEN],
    /// One gradient per table slot
    gradients: [DVec2; TABLE_SIZE],
}

impl NoiseField {
    /// Creates a field for `seed` using a generator seeded from it.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed as u64);
        Self::with_rng(seed, &mut rng)
    }

    /// Creates a field drawing its tables from the supplied generator.
    ///
    /// Gradients are drawn first, one per slot, then the permutation is
    /// shuffled from the same stream.
    #[must_use]
    pub fn with_rng(seed: i64, rng: &mut fastrand::Rng) -> Self {
        let directions = gradient_directions();
        let mut gradients = [DVec2::ZERO; TABLE_SIZE];
        for gradient in &mut gradients {
            *gradient = directions[rng.usize(..directions.len())];
        }

        let mut table: [u8; TABLE_SIZE] = std::array::from_fn(|i| i as u8);
        rng.shuffle(&mut table);

        let mut permutation = [0u8; PERMUTATION_LEN];
        permutation[..TABLE_SIZE].copy_from_slice(&table);
        permutation[TABLE_SIZE..].copy_from_slice(&table);

        Self {
            seed,
            permutation,
            gradients,
        }
    }

    /// Returns the seed this field was built from.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// Returns the duplicated permutation table.
    #[must_use]
    pub fn permutation(&self) -> &[u8] {
        &self.permutation
    }

    /// Returns the gradient table.
    #[must_use]
    pub fn gradients(&self) -> &[DVec2] {
        &self.gradients
    }

    /// Hashes a lattice point to its gradient.
    ///
    /// Both lookups wrap modulo the duplicated table length, so any lattice
    /// point is valid, negative ones included.
    #[must_use]
    pub fn gradient_at(&self, ix: i64, iy: i64) -> DVec2 {
        let len = PERMUTATION_LEN as i64;
        let row = i64::from(self.permutation[ix.rem_euclid(len) as usize]);
        let index = self.permutation[row.wrapping_add(iy).rem_euclid(len) as usize];
        self.gradients[usize::from(index)]
    }

    /// Samples the field at `(x, y)` with lattice period `octave`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, octave: f64) -> f64 {
        let rx = x.rem_euclid(octave);
        let ry = y.rem_euclid(octave);
        // Exact multiples of the period up to rounding error
        let gx = ((x - rx) / octave).round() as i64;
        let gy = ((y - ry) / octave).round() as i64;
        let local = DVec2::new(rx / octave, ry / octave);

        let dots = CORNERS.map(|(dx, dy)| {
            let offset = local - DVec2::new(dx as f64, dy as f64);
            self.gradient_at(gx.wrapping_add(dx), gy.wrapping_add(dy)).dot(offset)
        });

        let u = fade(local.x);
        let v = fade(local.y);

        let top = lerp(dots[0], dots[1], u);
        let bottom = lerp(dots[2], dots[3], u);
        lerp(top, bottom, v)
    }
}

impl HeightSource for NoiseField {
    fn height(&self, x: f64, y: f64) -> f64 {
        self.sample(x, y, CELL_SIZE)
    }
}
