use ordered_float::OrderedFloat;
use tracing::debug;

use super::RatingItem;
use crate::error::{AmpacityError, Result};

/// Items rated together; the table carries what its weakest item carries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingTable {
    items: Vec<RatingItem>,
}

impl RatingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: RatingItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[RatingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lowest item current (A) at ambient `ta` (°C)
    pub fn current_at(&self, ta: f64) -> Result<f64> {
        self.limiting_item(ta).map(|(_, current)| current)
    }

    /// Index and current of the item with the lowest current; the first wins ties
    pub fn limiting_item(&self, ta: f64) -> Result<(usize, f64)> {
        let currents = self
            .items
            .iter()
            .map(|item| item.current_at(ta))
            .collect::<Result<Vec<_>>>()?;

        let (index, current) = currents
            .into_iter()
            .enumerate()
            .min_by_key(|(_, current)| OrderedFloat(*current))
            .ok_or(AmpacityError::EmptyCollection)?;

        debug!(ta, index, current, items = self.items.len(), "limiting item");
        Ok((index, current))
    }
}

impl FromIterator<RatingItem> for RatingTable {
    fn from_iter<I: IntoIterator<Item = RatingItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<RatingItem> for RatingTable {
    fn extend<I: IntoIterator<Item = RatingItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
