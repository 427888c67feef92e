//! Double-buffered scalar temperature grid.

use crate::schema::ConfigError;

/// Square scalar field backed by two equal-length buffers.
///
/// Data is stored row-major: `index = row * resolution + col`. Exactly one
/// buffer is authoritative at any time; the stencil writes the other and
/// promotes it with a single O(1) swap (ping-pong buffering). The outer
/// 1-cell ring is never touched by the stencil, giving a fixed Dirichlet
/// boundary at the initialized value of 0.
pub struct Field {
    current: Vec<f32>,
    scratch: Vec<f32>,
    resolution: usize,
    iteration: u64,
}

impl Field {
    /// Create a zero-filled field.
    ///
    /// Fails with [`ConfigError::InvalidDimension`] if `resolution < 3`,
    /// since the stencil needs at least one interior cell.
    pub fn new(resolution: usize) -> Result<Self, ConfigError> {
        if resolution < 3 {
            return Err(ConfigError::InvalidDimension { resolution });
        }
        let size = resolution * resolution;
        Ok(Self {
            current: vec![0.0; size],
            scratch: vec![0.0; size],
            resolution,
            iteration: 0,
        })
    }

    /// Resize to a new resolution, zeroing all cells.
    ///
    /// Reallocates only when the size actually changes; an equal-size resize
    /// clears the existing buffers in place. The iteration counter resets to
    /// 0 either way.
    pub fn resize(&mut self, resolution: usize) -> Result<(), ConfigError> {
        if resolution < 3 {
            return Err(ConfigError::InvalidDimension { resolution });
        }
        let size = resolution * resolution;
        if size != self.current.len() {
            self.current = vec![0.0; size];
            self.scratch = vec![0.0; size];
        } else {
            self.current.fill(0.0);
            self.scratch.fill(0.0);
        }
        self.resolution = resolution;
        self.iteration = 0;
        Ok(())
    }

    /// Grid width/height in cells.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total cell count.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.current.len()
    }

    /// Completed diffusion steps since the last resize.
    #[inline]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Convert (row, col) to a flat index.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.resolution + col
    }

    /// Read a cell from the current buffer. Callers keep coordinates in range.
    #[inline]
    pub fn value_at(&self, row: usize, col: usize) -> f32 {
        self.current[row * self.resolution + col]
    }

    /// Write a cell in the current buffer. Callers keep coordinates in range.
    #[inline]
    pub fn set_value(&mut self, row: usize, col: usize, value: f32) {
        self.current[row * self.resolution + col] = value;
    }

    /// The authoritative buffer, row-major.
    #[inline]
    pub fn current(&self) -> &[f32] {
        &self.current
    }

    /// Split borrow for the stencil pass: read-only current, writable scratch.
    #[inline]
    pub(crate) fn split_buffers(&mut self) -> (&[f32], &mut [f32]) {
        (&self.current, &mut self.scratch)
    }

    /// Exchange the roles of current and scratch. O(1), no element copy.
    pub fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    /// Record one completed diffusion step.
    #[inline]
    pub(crate) fn advance_iteration(&mut self) {
        self.iteration += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_small_resolution() {
        assert!(Field::new(2).is_err());
        assert!(Field::new(3).is_ok());
    }

    #[test]
    fn test_new_is_zeroed() {
        let field = Field::new(8).unwrap();
        assert_eq!(field.cell_count(), 64);
        assert!(field.current().iter().all(|&v| v == 0.0));
        assert_eq!(field.iteration(), 0);
    }

    #[test]
    fn test_resize_zeroes_and_resets_iteration() {
        let mut field = Field::new(5).unwrap();
        field.set_value(2, 2, 1.0);
        field.advance_iteration();

        field.resize(5).unwrap();
        assert!(field.current().iter().all(|&v| v == 0.0));
        assert_eq!(field.iteration(), 0);

        field.set_value(2, 2, 1.0);
        field.resize(9).unwrap();
        assert_eq!(field.cell_count(), 81);
        assert!(field.current().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_equal_size_resize_keeps_allocation() {
        let mut field = Field::new(16).unwrap();
        let ptr = field.current().as_ptr();
        field.resize(16).unwrap();
        assert_eq!(field.current().as_ptr(), ptr);
    }

    #[test]
    fn test_resize_rejects_small_resolution() {
        let mut field = Field::new(5).unwrap();
        field.set_value(1, 1, 0.5);
        assert!(field.resize(2).is_err());
        // A rejected resize leaves the field untouched.
        assert_eq!(field.value_at(1, 1), 0.5);
    }

    #[test]
    fn test_swap_exchanges_buffer_roles() {
        let mut field = Field::new(4).unwrap();
        field.set_value(1, 1, 0.7);

        field.swap_buffers();
        assert_eq!(field.value_at(1, 1), 0.0);

        field.swap_buffers();
        assert_eq!(field.value_at(1, 1), 0.7);
    }
}
