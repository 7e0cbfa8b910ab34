use serde::{Deserialize, Serialize};

/// Configuration for the game.
///
/// Supplied once at construction and immutable thereafter. Dimensions are in
/// pixels; the board is carved into cells of `cell_size` pixels. Dimensions
/// that are not a multiple of the cell size are not validated and leave the
/// edge column and row behavior undefined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ticks per second the driver runs update and draw at
    pub tick_rate: u32,
    /// Width of the board in pixels
    pub board_width: i32,
    /// Height of the board in pixels
    pub board_height: i32,
    /// Initial length of the snake in cells
    pub initial_snake_length: usize,
    /// Edge length of one cell in pixels
    pub cell_size: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: 20,
            board_width: 700,
            board_height: 700,
            initial_snake_length: 5,
            cell_size: 20,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn new(board_width: i32, board_height: i32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// Number of cell columns on the board
    pub fn columns(&self) -> i32 {
        self.board_width / self.cell_size
    }

    /// Number of cell rows on the board
    pub fn rows(&self) -> i32 {
        self.board_height / self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tick_rate, 20);
        assert_eq!(config.board_width, 700);
        assert_eq!(config.board_height, 700);
        assert_eq!(config.initial_snake_length, 5);
        assert_eq!(config.cell_size, 20);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(400, 300);
        assert_eq!(config.board_width, 400);
        assert_eq!(config.board_height, 300);
        assert_eq!(config.columns(), 20);
        assert_eq!(config.rows(), 15);
    }
}
