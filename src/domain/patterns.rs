use super::Grid;

/// A reusable arrangement of live cells, stored as offsets from its
/// top-left corner
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        Self { name, cells }
    }

    /// Bounding box of the pattern
    pub fn dimensions(&self) -> (usize, usize) {
        let width = self.cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = self.cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        (width, height)
    }

    /// Stamp the pattern onto the grid with its corner at (x, y).
    /// Placement wraps, matching the grid's toroidal topology.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        let (width, height) = grid.dimensions();
        for (dx, dy) in &self.cells {
            grid.set((x + dx) % width, (y + dy) % height, true);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![
                (0, 0), (1, 0), (2, 0),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally (period 4)
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }
}
