use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::order::OrderStatus;
use super::errors::BoardError;

// ============================================================================
// Board Columns - ordered status groupings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusColumn {
    pub title: String,
    pub statuses: Vec<OrderStatus>,
    pub color: String,
}

impl OrderStatusColumn {
    pub fn new(title: impl Into<String>, statuses: Vec<OrderStatus>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            statuses,
            color: color.into(),
        }
    }

    pub fn contains(&self, status: OrderStatus) -> bool {
        self.statuses.contains(&status)
    }

    /// Status an order receives when it is moved into this column
    pub fn entry_status(&self) -> OrderStatus {
        // BoardColumns::new rejects columns without statuses
        self.statuses[0]
    }
}

/// Validated, ordered column configuration. Position defines "next".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BoardColumns(Vec<OrderStatusColumn>);

impl BoardColumns {
    pub fn new(columns: Vec<OrderStatusColumn>) -> Result<Self, BoardError> {
        if columns.is_empty() {
            return Err(BoardError::NoColumns);
        }

        let mut titles = HashSet::new();
        let mut owners: HashMap<OrderStatus, &str> = HashMap::new();

        for column in &columns {
            if column.statuses.is_empty() {
                return Err(BoardError::EmptyColumn(column.title.clone()));
            }
            if !titles.insert(column.title.as_str()) {
                return Err(BoardError::DuplicateTitle(column.title.clone()));
            }
            for status in &column.statuses {
                if let Some(first) = owners.insert(*status, column.title.as_str()) {
                    if first != column.title {
                        return Err(BoardError::OverlappingStatus {
                            status: *status,
                            first: first.to_string(),
                            second: column.title.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self(columns))
    }

    /// Load a configuration from a JSON array of `{title, statuses, color}`
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let columns: Vec<OrderStatusColumn> =
            serde_json::from_str(json).map_err(|e| BoardError::InvalidJson(e.to_string()))?;
        Self::new(columns)
    }

    pub fn as_slice(&self) -> &[OrderStatusColumn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, column: &OrderStatusColumn) -> Option<usize> {
        self.0.iter().position(|c| c == column)
    }

    pub fn by_title(&self, title: &str) -> Option<&OrderStatusColumn> {
        self.0.iter().find(|c| c.title == title)
    }
}

impl Default for BoardColumns {
    fn default() -> Self {
        Self(vec![
            OrderStatusColumn::new("Pending", vec![OrderStatus::Pending], "#f59e0b"),
            OrderStatusColumn::new("In Production", vec![OrderStatus::InProduction], "#3b82f6"),
            OrderStatusColumn::new("Ready", vec![OrderStatus::Ready], "#10b981"),
        ])
    }
}

impl<'de> Deserialize<'de> for BoardColumns {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let columns = Vec::<OrderStatusColumn>::deserialize(deserializer)?;
        BoardColumns::new(columns).map_err(serde::de::Error::custom)
    }
}
