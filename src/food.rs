use rand::Rng;

use crate::geometry::{Grid, Position};

/// A single piece of food somewhere on the grid.
///
/// Spawning does not look at the snake, so food can land on the body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn spawn<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        Self {
            position: random_cell(grid, rng),
        }
    }

    /// Food at a fixed position.
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn respawn<R: Rng>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = random_cell(grid, rng);
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

fn random_cell<R: Rng>(grid: &Grid, rng: &mut R) -> Position {
    let col = rng.gen_range(0..grid.columns());
    let row = rng.gen_range(0..grid.rows());
    grid.cell(col, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn spawns_stay_on_the_grid() {
        let grid = Grid::new(800, 600, 20);
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::spawn(&grid, &mut rng);
        for _ in 0..1_000 {
            let pos = food.position();
            assert!(grid.contains(pos), "{pos:?} off the grid");
            assert!(grid.is_aligned(pos), "{pos:?} not on a cell");
            food.respawn(&grid, &mut rng);
        }
    }

    #[test]
    fn every_cell_of_a_small_grid_is_reachable() {
        let grid = Grid::new(60, 40, 20);
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<Position> = (0..500)
            .map(|_| Food::spawn(&grid, &mut rng).position())
            .collect();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn same_seed_same_food() {
        let grid = Grid::new(800, 600, 20);
        let a = Food::spawn(&grid, &mut StdRng::seed_from_u64(99));
        let b = Food::spawn(&grid, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
