//! Conway's B3/S23 rule

/// Neighbour counts at which a dead cell comes alive
pub const BIRTH: &[u8] = &[3];

/// Neighbour counts at which a live cell stays alive
pub const SURVIVAL: &[u8] = &[2, 3];

/// Size of the Moore neighbourhood
pub const MAX_NEIGHBORS: u8 = 8;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        let counts = if current_state { SURVIVAL } else { BIRTH };
        counts.contains(&neighbor_count)
    }

    pub fn is_valid_neighbor_count(count: u8) -> bool {
        count <= MAX_NEIGHBORS
    }
}
