use super::{
    a1_notation::{A1Notation, ToA1Notation},
    cell_position::CellPosition,
    column::Column,
    row::Row,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellPosition,
    pub end: CellPosition,
}

impl CellRange {
    /// Range anchored at `A1` spanning `column_count` columns and `row_count`
    /// rows. Zero counts collapse to a single cell.
    pub fn from_origin(column_count: u32, row_count: u32) -> Self {
        Self {
            start: CellPosition::origin(),
            end: CellPosition {
                col: Column::from_index(column_count.saturating_sub(1)),
                row: Row::from_number(row_count),
            },
        }
    }
}

impl ToA1Notation for CellRange {
    fn to_a1_notation(&self) -> A1Notation {
        A1Notation(format!(
            "{}:{}",
            self.start.to_a1_notation(),
            self.end.to_a1_notation()
        ))
    }
}
