use crate::code::CardCode;
use crate::customization::Customization;
use crate::error::CoreError;
use crate::grid::CardGrid;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A validated card body waiting to be saved under a fresh code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCard {
    pub items: CardGrid,
    pub customization: Customization,
}

impl NewCard {
    /// Validates a submitted card.
    ///
    /// `items` must be a full 25 cell layout with `FREE` in the center.
    pub fn new(
        items: Vec<String>,
        customization: Customization,
    ) -> std::result::Result<Self, CoreError> {
        let items = CardGrid::from_cells(items)?;
        customization.validate()?;
        Ok(Self {
            items,
            customization,
        })
    }
}

/// A card as stored in the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub code: CardCode,
    pub items: CardGrid,
    pub customization: Customization,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{FREE_CELL, FREE_CELL_INDEX};

    fn cells() -> Vec<String> {
        let mut cells: Vec<String> = (0..25).map(|i| format!("item {i}")).collect();
        cells[FREE_CELL_INDEX] = FREE_CELL.to_string();
        cells
    }

    #[test]
    fn new_card_accepts_valid_layout() {
        let card = NewCard::new(cells(), Customization::default()).unwrap();
        assert_eq!(card.items.cells()[0], "item 0");
    }

    #[test]
    fn new_card_rejects_wrong_item_count() {
        let mut short = cells();
        short.pop();
        let err = NewCard::new(short, Customization::default()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidItems(_)));
    }

    #[test]
    fn new_card_rejects_invalid_customization() {
        let mut customization = Customization::default();
        customization.title_color = "blue".to_string();
        let err = NewCard::new(cells(), customization).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCustomization(_)));
    }

    #[test]
    fn record_serializes_created_at_camel_case() {
        let record = CardRecord {
            code: CardCode::parse("HJK234").unwrap(),
            items: CardGrid::from_cells(cells()).unwrap(),
            customization: Customization::default(),
            created_at: Timestamp::UNIX_EPOCH,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["code"], "HJK234");
        assert_eq!(value["items"][12], "FREE");
        assert_eq!(value["createdAt"], "1970-01-01T00:00:00Z");
    }
}
