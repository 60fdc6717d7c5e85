use crate::error::CoreError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of cells on a 5x5 card.
pub const GRID_CELLS: usize = 25;

/// Row-major index of the center cell.
pub const FREE_CELL_INDEX: usize = 12;

/// Placeholder text of the center cell.
pub const FREE_CELL: &str = "FREE";

/// A 5x5 bingo card laid out row-major with `FREE` in the center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CardGrid(Vec<String>);

impl CardGrid {
    /// Shuffles `items` and fills the card with the first 24 of them.
    ///
    /// Items are trimmed, blanks are dropped and repeats are collapsed
    /// before counting, so at least 24 distinct entries are required.
    pub fn generate<R: Rng + ?Sized>(
        items: &[String],
        rng: &mut R,
    ) -> std::result::Result<Self, CoreError> {
        let mut pool: Vec<&str> = Vec::with_capacity(items.len());
        for item in items.iter().map(|item| item.trim()) {
            if !item.is_empty() && !pool.contains(&item) {
                pool.push(item);
            }
        }

        let needed = GRID_CELLS - 1;
        if pool.len() < needed {
            return Err(CoreError::InvalidItems(format!(
                "at least {} distinct items are required, got {}",
                needed,
                pool.len()
            )));
        }

        pool.shuffle(rng);

        let mut cells: Vec<String> = pool
            .into_iter()
            .take(needed)
            .map(str::to_owned)
            .collect();
        cells.insert(FREE_CELL_INDEX, FREE_CELL.to_owned());

        Ok(Self(cells))
    }

    /// Wraps an already laid out card.
    ///
    /// The card must have exactly 25 cells, `FREE` in the center and no
    /// blank cells.
    pub fn from_cells(cells: Vec<String>) -> std::result::Result<Self, CoreError> {
        if cells.len() != GRID_CELLS {
            return Err(CoreError::InvalidItems(format!(
                "Invalid items array. Must contain exactly {} items.",
                GRID_CELLS
            )));
        }

        if cells[FREE_CELL_INDEX] != FREE_CELL {
            return Err(CoreError::InvalidItems(format!(
                "center cell must be '{}', got '{}'",
                FREE_CELL, cells[FREE_CELL_INDEX]
            )));
        }

        if let Some(index) = cells.iter().position(|cell| cell.trim().is_empty()) {
            return Err(CoreError::InvalidItems(format!("cell {} is blank", index)));
        }

        Ok(Self(cells))
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn into_cells(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for CardGrid {
    type Error = CoreError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_cells(value)
    }
}

impl From<CardGrid> for Vec<String> {
    fn from(value: CardGrid) -> Self {
        value.0
    }
}
