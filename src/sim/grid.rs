//! Block grid layout
//!
//! Pure function of field geometry: the same config always yields the same
//! blocks in the same order (row-major, top-left first).

use glam::Vec2;

use super::state::Block;
use crate::config::GameConfig;

/// Column count and horizontal offset of the block grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    /// Left edge of the first column (centers the grid)
    pub offset_x: f32,
    /// Top edge of the first row
    pub top_y: f32,
}

impl GridLayout {
    /// `rows * cols`, `None` if it does not fit in `usize`
    pub fn block_count(&self) -> Option<usize> {
        (self.rows as usize).checked_mul(self.cols as usize)
    }
}

/// Fit as many whole columns as the field allows and center them
pub fn grid_layout(config: &GameConfig) -> GridLayout {
    let pitch = config.block_width + config.block_spacing;
    let cols = ((config.field_width - config.block_spacing) / pitch).floor().max(0.0) as u32;
    let grid_width = cols as f32 * pitch - config.block_spacing;

    GridLayout {
        rows: config.block_rows,
        cols,
        offset_x: (config.field_width - grid_width) / 2.0,
        top_y: config.top_boundary(),
    }
}

/// Generate the full block set for a new round
pub fn generate_blocks(config: &GameConfig) -> Vec<Block> {
    let layout = grid_layout(config);
    let pitch = Vec2::new(
        config.block_width + config.block_spacing,
        config.block_height + config.block_spacing,
    );

    let mut blocks = Vec::with_capacity(layout.block_count().unwrap_or(0));
    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let pos = Vec2::new(
                layout.offset_x + col as f32 * pitch.x,
                layout.top_y + row as f32 * pitch.y,
            );
            blocks.push(Block { pos });
        }
    }

    log::debug!(
        "Generated {}x{} block grid at offset {}",
        layout.rows,
        layout.cols,
        layout.offset_x
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_390() {
        let config = GameConfig::with_field(390.0, 844.0);
        let layout = grid_layout(&config);

        // (390 - 10) / 60 = 6.33 -> 6 columns, 6*60 - 10 = 350 wide
        assert_eq!(layout.cols, 6);
        assert_eq!(layout.rows, 5);
        assert_eq!(layout.offset_x, 20.0);
        assert_eq!(layout.top_y, 10.0);
    }

    #[test]
    fn test_generate_390_coordinates() {
        let config = GameConfig::with_field(390.0, 844.0);
        let blocks = generate_blocks(&config);
        assert_eq!(blocks.len(), 30);

        assert_eq!(blocks[0].pos, Vec2::new(20.0, 10.0));
        assert_eq!(blocks[5].pos, Vec2::new(320.0, 10.0));
        assert_eq!(blocks[6].pos, Vec2::new(20.0, 40.0));
        assert_eq!(blocks[29].pos, Vec2::new(320.0, 130.0));

        for (i, block) in blocks.iter().enumerate() {
            let (row, col) = (i / 6, i % 6);
            assert_eq!(block.pos.x, 20.0 + col as f32 * 60.0);
            assert_eq!(block.pos.y, 10.0 + row as f32 * 30.0);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = GameConfig::with_field(390.0, 844.0);
        let a = generate_blocks(&config);
        let b = generate_blocks(&config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_grid_is_centered() {
        for width in [300.0, 333.0, 390.0, 414.0, 768.0] {
            let config = GameConfig::with_field(width, 900.0);
            let layout = grid_layout(&config);
            let blocks = generate_blocks(&config);

            let left = blocks.first().unwrap().pos.x;
            let right = blocks[layout.cols as usize - 1].pos.x + config.block_width;
            assert!((left - (width - right)).abs() < 1e-3, "width {width}");
            assert!(left >= 0.0 && right <= width);
        }
    }

    #[test]
    fn test_exact_fit_has_no_partial_column() {
        // 7 columns need exactly 7*60 - 10 = 410 plus margins of 10 each side
        let config = GameConfig::with_field(430.0, 900.0);
        let layout = grid_layout(&config);
        assert_eq!(layout.cols, 7);
        assert_eq!(layout.offset_x, 10.0);
    }
}
