use super::{
    a1_notation::{A1Notation, ToA1Notation},
    column::Column,
    row::Row,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub col: Column,
    pub row: Row,
}

impl CellPosition {
    /// The top-left cell, `A1`.
    pub fn origin() -> Self {
        CellPosition {
            col: Column::from_index(0),
            row: Row::from_index(0),
        }
    }
}

impl ToA1Notation for CellPosition {
    fn to_a1_notation(&self) -> A1Notation {
        A1Notation(format!("{}{}", self.col, self.row))
    }
}
