//! Bit-packed, double-buffered toroidal grid.
//!
//! Cells are stored one bit each, row-major, eight cells per byte. Two
//! equally-sized buffers hold consecutive generations: `previous` is the
//! authoritative current generation at all times, `next` is scratch whose
//! content is only meaningful while a step is in flight. Packing is an
//! internal encoding detail; callers never see byte offsets or masks.

use super::Cell;
use crate::error::{Error, Result};
use rand::Rng;

/// The 2D cellular automaton grid. Dimensions are fixed at construction
/// and must be nonzero multiples of 8 so rows pack exactly into bytes.
pub struct Grid {
    width: usize,
    height: usize,
    /// Bytes per row (width / 8)
    row_bytes: usize,
    /// Current generation
    previous: Vec<u8>,
    /// Scratch for the generation being computed
    next: Vec<u8>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// Rejects dimensions that are zero or not multiples of 8, and sizes
    /// whose cell count cannot be addressed. Buffer space is reserved
    /// fallibly, so an exhausted allocator surfaces as an error instead of
    /// an abort.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width % 8 != 0 || height % 8 != 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let row_bytes = width / 8;
        let bytes = row_bytes
            .checked_mul(height)
            .ok_or(Error::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            row_bytes,
            previous: alloc_buffer(bytes)?,
            next: alloc_buffer(bytes)?,
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Byte offset and bit mask addressing cell (x, y)
    const fn address(&self, x: usize, y: usize) -> (usize, u8) {
        (y * self.row_bytes + x / 8, 1 << (x % 8))
    }

    /// Read the current generation's state for cell (x, y).
    /// Out-of-range coordinates read as dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (byte, mask) = self.address(x, y);
        self.previous[byte] & mask != 0
    }

    /// Write one cell of the current generation.
    /// Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (byte, mask) = self.address(x, y);
        if alive {
            self.previous[byte] |= mask;
        } else {
            self.previous[byte] &= !mask;
        }
    }

    /// Overwrite the current generation with random cells.
    /// Each bit is an independent coin flip, so every cell comes up alive
    /// with probability 1/2.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for byte in &mut self.previous {
            *byte = rng.random();
        }
    }

    /// Count live cells among the 8 toroidally-adjacent positions.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as i32;
        let h = self.height as i32;
        let mut count = 0u8;

        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                // Toroidal wrapping: mod with dimensions
                let nx = ((x as i32 + dx) % w + w) % w;
                let ny = ((y as i32 + dy) % h + h) % h;

                if self.get(nx as usize, ny as usize) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advance the grid by one generation.
    ///
    /// Every cell of the new generation is computed from `previous` alone
    /// and written into `next` (both set and clear, since `next` holds
    /// stale data); only once the whole generation is done is `next`
    /// promoted wholesale. Neighbor counts therefore never observe a
    /// partially-updated generation.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neighbors = self.live_neighbors(x, y);
                let current = if self.get(x, y) { Cell::Alive } else { Cell::Dead };
                let (byte, mask) = self.address(x, y);

                if current.evolve(neighbors).is_alive() {
                    self.next[byte] |= mask;
                } else {
                    self.next[byte] &= !mask;
                }
            }
        }

        self.previous.copy_from_slice(&self.next);
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.previous.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Iterate over the current generation in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.get(x, y)))
    }
}

/// Zero-filled buffer obtained through fallible reservation.
fn alloc_buffer(bytes: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(bytes)
        .map_err(|_| Error::Allocation { bytes })?;
    buffer.resize(bytes, 0);
    Ok(buffer)
}
