use crate::config::validate_density;
use crate::error::{Error, Result};
use log::debug;
use world_grid::{GridCell, Loc, Neighborhood, Random, World, WorldGrid};

/// Seeds a `width` x `height` world at the default density and runs it for
/// exactly `generations` steps. There is no early exit on still lifes or
/// oscillators.
pub fn evolve(width: u32, height: u32, generations: u32, rand: &mut Random) -> Result<ConwayWorld> {
    evolve_with_density(width, height, generations, crate::config::DEFAULT_INITIAL_DENSITY, rand)
}

pub fn evolve_with_density(
    width: u32,
    height: u32,
    generations: u32,
    density: f64,
    rand: &mut Random,
) -> Result<ConwayWorld> {
    validate_dimensions(width, height)?;
    validate_density(density)?;
    let mut world = ConwayWorld::new(width, height, density, rand);
    for _ in 0..generations {
        world.update();
    }
    debug!(
        "Evolved {}x{} world for {} generations, {} cells alive",
        width,
        height,
        generations,
        world.num_live_cells()
    );
    Ok(world)
}

pub(crate) fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct ConwayWorld {
    grid: WorldGrid<ConwayGridCell>,
}

impl ConwayWorld {
    pub fn new(width: u32, height: u32, density: f64, rand: &mut Random) -> Self {
        assert!((0.0..=1.0).contains(&density));
        let mut result = Self::new_empty(width, height);
        result.add_random_life(density, rand);
        result
    }

    /// World with exactly the given `(x, y)` cells alive.
    pub fn from_live_cells<I>(width: u32, height: u32, live: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut result = Self::new_empty(width, height);
        for (x, y) in live {
            result.grid.cells[Loc::new(y, x)].alive = true;
        }
        result
    }

    fn new_empty(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            grid: WorldGrid::new(width, height),
        }
    }

    fn add_random_life(&mut self, density: f64, rand: &mut Random) {
        for cell in self.grid.cells.cells_iter_mut() {
            cell.alive = rand.next_bool(density);
        }
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    /// Panics if `(x, y)` lies outside the world.
    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.grid.cells[Loc::new(y, x)].alive
    }

    /// `(x, y)` of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.grid.width();
        self.grid
            .cells_iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive)
            .map(move |(index, _)| (index as u32 % width, index as u32 / width))
    }

    pub fn num_live_cells(&self) -> usize {
        self.grid.cells_iter().filter(|cell| cell.alive).count()
    }
}

impl World for ConwayWorld {
    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn num_cells(&self) -> usize {
        self.grid.num_cells()
    }

    fn update(&mut self) {
        self.grid.update();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayGridCell {
    pub alive: bool,
}

impl ConwayGridCell {
    fn num_live_neighbors(neighborhood: &Neighborhood<ConwayGridCell>) -> u32 {
        let mut result = 0;
        neighborhood.for_neighbor_cells(|neighbor| {
            if neighbor.alive {
                result += 1;
            }
        });
        result
    }
}

impl GridCell for ConwayGridCell {
    fn update(&self, neighborhood: &Neighborhood<ConwayGridCell>, next_cell: &mut ConwayGridCell) {
        let neighbors = Self::num_live_neighbors(neighborhood);
        next_cell.alive = if self.alive {
            (2..=3).contains(&neighbors)
        } else {
            neighbors == 3
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_set(world: &ConwayWorld) -> Vec<(u32, u32)> {
        world.live_cells().collect()
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let mut rand = Random::from_seed(1);
        assert_eq!(
            evolve(0, 4, 10, &mut rand).unwrap_err(),
            Error::InvalidDimension { width: 0, height: 4 }
        );
        assert!(evolve(4, 0, 10, &mut rand).is_err());
    }

    #[test]
    fn nan_density_is_rejected_before_seeding() {
        let mut rand = Random::from_seed(1);
        assert!(matches!(
            evolve_with_density(3, 3, 10, f64::NAN, &mut rand),
            Err(Error::InvalidConfig(_))
        ));
        assert!(evolve_with_density(3, 3, 10, 1.2, &mut rand).is_err());
    }

    #[test]
    fn full_density_fills_the_world() {
        let world = evolve_with_density(4, 4, 0, 1.0, &mut Random::from_seed(1)).unwrap();
        assert_eq!(world.num_live_cells(), 16);
    }

    #[test]
    fn evolved_world_keeps_its_dimensions() {
        let mut rand = Random::from_seed(2);
        for (width, height) in [(1, 1), (1, 7), (9, 1), (13, 5)] {
            let world = evolve(width, height, 10, &mut rand).unwrap();
            assert_eq!(world.width(), width);
            assert_eq!(world.height(), height);
            assert_eq!(world.num_cells(), (width * height) as usize);
            assert_eq!(world.generation(), 10);
        }
    }

    #[test]
    fn same_seed_same_world() {
        let a = evolve(24, 16, 10, &mut Random::from_seed(42)).unwrap();
        let b = evolve(24, 16, 10, &mut Random::from_seed(42)).unwrap();
        assert_eq!(live_set(&a), live_set(&b));
    }

    #[test]
    fn zero_generations_returns_seeded_world() {
        let world = evolve(6, 6, 0, &mut Random::from_seed(3)).unwrap();
        assert_eq!(world.generation(), 0);
    }

    #[test]
    fn blinker_oscillates() {
        let mut world = ConwayWorld::from_live_cells(5, 5, [(1, 2), (2, 2), (3, 2)]);
        world.update();
        assert_eq!(live_set(&world), vec![(2, 1), (2, 2), (2, 3)]);
        world.update();
        assert_eq!(live_set(&world), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn blinker_wraps_across_edges() {
        let mut world = ConwayWorld::from_live_cells(5, 5, [(4, 0), (0, 0), (1, 0)]);
        world.update();
        assert_eq!(live_set(&world), vec![(0, 0), (0, 1), (0, 4)]);
    }

    #[test]
    fn origin_counts_far_corner_as_neighbor() {
        // (0, 0) is dead with exactly three neighbors, one only reachable by wrapping.
        let mut world = ConwayWorld::from_live_cells(6, 5, [(5, 4), (1, 0), (0, 1)]);
        world.update();
        assert!(world.is_alive(0, 0));
    }

    #[test]
    fn block_is_stable() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut world = ConwayWorld::from_live_cells(6, 6, block);
        for _ in 0..10 {
            world.update();
        }
        assert_eq!(live_set(&world), block.to_vec());
    }

    #[test]
    fn lonely_and_crowded_cells_die() {
        let mut lonely = ConwayWorld::from_live_cells(5, 5, [(2, 2), (2, 3)]);
        lonely.update();
        assert_eq!(lonely.num_live_cells(), 0);

        let plus = [(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)];
        let mut crowded = ConwayWorld::from_live_cells(7, 7, plus);
        crowded.update();
        assert!(!crowded.is_alive(2, 2));
    }
}
