//! Pipeline: CRS-to-CRS transform chain.
//!
//! The supported systems form a chain, BD-09 ⇄ GCJ-02 ⇄ WGS84 ⇄ Web Mercator,
//! and a pipeline walks it from `src` to `dst`. With legacy precision each step
//! rounds, exactly like chaining the free functions in [`crate::convert`].

use log::debug;

use crate::error::PipelineError;
use crate::point::LngLat;
use crate::proj::bd09::Bd09;
use crate::proj::common::Precision;
use crate::proj::crs::Crs;
use crate::proj::gcj02::Gcj02;
use crate::proj::mercator::WebMercator;
use crate::proj::Projection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

struct Step {
    projection: Box<dyn Projection>,
    direction: Direction,
}

impl Step {
    fn forward(projection: impl Projection + 'static) -> Self {
        Self {
            projection: Box::new(projection),
            direction: Direction::Forward,
        }
    }

    fn inverse(projection: impl Projection + 'static) -> Self {
        Self {
            projection: Box::new(projection),
            direction: Direction::Inverse,
        }
    }

    fn flipped(self) -> Self {
        let direction = match self.direction {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        };
        Self { direction, ..self }
    }

    fn describe(&self) -> String {
        match self.direction {
            Direction::Forward => format!("{}.forward", self.projection.name()),
            Direction::Inverse => format!("{}.inverse", self.projection.name()),
        }
    }
}

/// A CRS-to-CRS transform pipeline.
pub struct Pipeline {
    src: Crs,
    dst: Crs,
    steps: Vec<Step>,
}

impl Pipeline {
    /// Pipeline with legacy precision (6 digits for degrees, 2 for metres).
    pub fn new(src: Crs, dst: Crs) -> Self {
        Self::with_precision(src, dst, Precision::default())
    }

    pub fn with_precision(src: Crs, dst: Crs, precision: Precision) -> Self {
        let from = chain_position(src);
        let to = chain_position(dst);
        let steps = if from <= to {
            (from..to).map(|link| chain_link(link, precision)).collect()
        } else {
            (to..from)
                .rev()
                .map(|link| chain_link(link, precision).flipped())
                .collect()
        };

        let pipeline = Self { src, dst, steps };
        debug!("planned {src} -> {dst}: {:?}", pipeline.steps());
        pipeline
    }

    /// Create a Pipeline from CRS names such as `"bd09"` or `"EPSG:3857"`.
    pub fn from_names(src_crs: &str, dst_crs: &str) -> Result<Self, PipelineError> {
        Ok(Self::new(src_crs.parse()?, dst_crs.parse()?))
    }

    pub fn src(&self) -> Crs {
        self.src
    }

    pub fn dst(&self) -> Crs {
        self.dst
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for identity pipelines.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in execution order, e.g. `["bd09.inverse", "gcj02.inverse"]`.
    pub fn steps(&self) -> Vec<String> {
        self.steps.iter().map(Step::describe).collect()
    }

    /// Transform a single point from `src` to `dst`, in CRS native units.
    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64), PipelineError> {
        crate::point::ensure_finite("x", x)?;
        crate::point::ensure_finite("y", y)?;

        let mut point = (x, y);
        for step in &self.steps {
            point = match step.direction {
                Direction::Forward => step.projection.forward(point.0, point.1)?,
                Direction::Inverse => step.projection.inverse(point.0, point.1)?,
            };
        }
        Ok(point)
    }

    /// Transform a position, carrying its height through unchanged.
    pub fn transform_point(&self, point: LngLat) -> Result<LngLat, PipelineError> {
        point.validate()?;
        let (lng, lat) = self.transform(point.lng, point.lat)?;
        Ok(point.moved(lng, lat))
    }

    /// Batch transform, in place. On error the slice may be partially transformed.
    pub fn transform_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), PipelineError> {
        for step in &self.steps {
            match step.direction {
                Direction::Forward => step.projection.forward_batch(coords)?,
                Direction::Inverse => step.projection.inverse_batch(coords)?,
            }
        }
        if self.steps.is_empty() {
            for &(x, y) in coords.iter() {
                crate::point::ensure_finite("x", x)?;
                crate::point::ensure_finite("y", y)?;
            }
        }
        Ok(())
    }

    /// Transform separate x and y columns, returning new columns.
    pub fn transform_columns(
        &self,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<(Vec<f64>, Vec<f64>), PipelineError> {
        if xs.len() != ys.len() {
            return Err(PipelineError::LengthMismatch(xs.len(), ys.len()));
        }
        let mut coords: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        self.transform_batch(&mut coords)?;
        Ok(coords.into_iter().unzip())
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("src", &self.src)
            .field("dst", &self.dst)
            .field("steps", &self.steps())
            .finish()
    }
}

const CHAIN: [Crs; 4] = [Crs::Bd09, Crs::Gcj02, Crs::Wgs84, Crs::WebMercator];

fn chain_position(crs: Crs) -> usize {
    match crs {
        Crs::Bd09 => 0,
        Crs::Gcj02 => 1,
        Crs::Wgs84 => 2,
        Crs::WebMercator => 3,
    }
}

/// Step from `CHAIN[link]` to `CHAIN[link + 1]`.
fn chain_link(link: usize, precision: Precision) -> Step {
    match CHAIN[link] {
        Crs::Bd09 => Step::inverse(Bd09::new(precision)),
        Crs::Gcj02 => Step::inverse(Gcj02::new(precision)),
        // WebMercator is the end of the chain and starts no link
        Crs::Wgs84 | Crs::WebMercator => Step::forward(WebMercator::new(precision)),
    }
}
