use crate::config::{validate_stacking_threshold, BackgroundConfig, CELL_SIZE, DEFAULT_STACKING_THRESHOLD};
use crate::conway::ConwayWorld;
use crate::error::Result;
use crate::shapes::Shape;
use crate::surface::{PathElement, ShapeGroup, VectorSurface, ViewBox};
use log::debug;
use world_grid::{Random, World};

/// Draws a cluster of random glyphs for every live cell of a world.
#[derive(Clone, Debug)]
pub struct ShapeRenderer {
    stacking_threshold: f64,
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self {
            stacking_threshold: DEFAULT_STACKING_THRESHOLD,
        }
    }

    pub fn from_config(config: &BackgroundConfig) -> Result<Self> {
        Self::with_stacking_threshold(config.stacking_threshold)
    }

    /// Fails unless `threshold` is positive and finite.
    pub fn with_stacking_threshold(threshold: f64) -> Result<Self> {
        validate_stacking_threshold(threshold)?;
        Ok(Self {
            stacking_threshold: threshold,
        })
    }

    /// Sets the surface viewport to cover the whole world and appends one group
    /// per live cell, in row-major order.
    pub fn render<'s, S>(&self, world: &ConwayWorld, surface: &'s mut S, rand: &mut Random) -> &'s mut S
    where
        S: VectorSurface,
    {
        surface.set_viewport(ViewBox::new(
            0.0,
            0.0,
            world.width() as f64 * CELL_SIZE,
            world.height() as f64 * CELL_SIZE,
        ));

        let mut num_groups = 0;
        let mut num_shapes = 0;
        for (x, y) in world.live_cells() {
            let group = self.cluster(x, y, rand);
            num_shapes += group.elements.len();
            num_groups += 1;
            surface.append_group(group);
        }
        debug!("Rendered {} shapes in {} clusters", num_shapes, num_groups);
        surface
    }

    /// Builds the cluster for cell `(x, y)`. The first glyph is always placed;
    /// each further attempt `n` draws `r` in `[0, 1)` and continues only while
    /// `r / n` exceeds the stacking threshold. Glyph `n` sits at local offset
    /// `(n - 1, n - 1)`, so a cluster steps diagonally by one unit per glyph.
    pub fn cluster(&self, x: u32, y: u32, rand: &mut Random) -> ShapeGroup {
        let mut group = ShapeGroup::new(x as f64 * CELL_SIZE, y as f64 * CELL_SIZE);
        let mut n: u32 = 0;
        loop {
            let r = rand.next_unit();
            if n > 0 && r / n as f64 <= self.stacking_threshold {
                break;
            }
            let offset = n as f64 - 1.0;
            group.push(PathElement {
                d: Self::random_shape(rand).path_data(offset, offset),
            });
            n += 1;
        }
        group
    }

    fn random_shape(rand: &mut Random) -> Shape {
        Shape::ALL[rand.next_in_range(0..Shape::ALL.len())]
    }
}

impl Default for ShapeRenderer {
    fn default() -> Self {
        Self::new()
    }
}
