/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared
    pub e2: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        Self {
            a,
            f,
            b: a * (1.0 - f),
            e2: 2.0 * f - f * f,
        }
    }

    /// First eccentricity (computed at runtime, `sqrt` is not const).
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);

/// Krasovsky 1940, the ellipsoid behind the GCJ-02 offset polynomials.
///
/// `e2` is pinned to the published literal rather than derived from `f`, so
/// shifted coordinates match other GCJ-02 implementations to the last digit.
pub const KRASOVSKY_1940: Ellipsoid = Ellipsoid {
    a: 6_378_245.0,
    f: 1.0 / 298.3,
    b: 6_378_245.0 * (1.0 - 1.0 / 298.3),
    e2: 0.006_693_421_622_965_943,
};
