/// Seeded 2D value noise in `[0, 1)`.
///
/// Lattice corners are hashed from their integer coordinates and the seed,
/// then blended with a smoothstep bilinear interpolation so neighbouring
/// cells get similar values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueNoise {
    seed: u64,
    scale: f64,
}

impl ValueNoise {
    pub fn new(seed: u64, scale: f64) -> Self {
        Self { seed, scale }
    }

    /// Sample at tile coordinates.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let fx = x * self.scale;
        let fy = y * self.scale;
        let x0 = fx.floor();
        let y0 = fy.floor();
        let tx = smoothstep(fx - x0);
        let ty = smoothstep(fy - y0);
        let (ix, iy) = (x0 as i64, y0 as i64);

        let v00 = lattice(self.seed, ix, iy);
        let v10 = lattice(self.seed, ix + 1, iy);
        let v01 = lattice(self.seed, ix, iy + 1);
        let v11 = lattice(self.seed, ix + 1, iy + 1);

        let top = lerp(v00, v10, tx);
        let bottom = lerp(v01, v11, tx);
        lerp(top, bottom, ty).clamp(0.0, 1.0 - f64::EPSILON)
    }
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Hash of lattice coordinates mapped to `[0, 1)`.
fn lattice(seed: u64, ix: i64, iy: i64) -> f64 {
    let mut h = seed;
    h ^= (ix as u64).wrapping_mul(0x9e3779b97f4a7c15);
    h ^= (iy as u64).wrapping_mul(0xc2b2ae3d27d4eb4f);
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51afd7ed558ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ceb9fe1a85ec53);
    h ^= h >> 33;
    // Top 53 bits give a uniform f64 mantissa.
    (h >> 11) as f64 / (1u64 << 53) as f64
}
