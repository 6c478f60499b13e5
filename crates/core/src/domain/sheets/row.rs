use std::fmt::Formatter;

/// Spreadsheet row, stored as a zero-based index and rendered 1-based.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Row {
    index: u32,
}

impl Row {
    pub fn from_index(index: u32) -> Self {
        Row { index }
    }

    /// Builds a row from its 1-based number. Zero saturates to the first row.
    pub fn from_number(number: u32) -> Self {
        Row {
            index: number.saturating_sub(1),
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the row as shown in the spreadsheet UI.
    /// # Examples
    /// ```
    /// use charity_report_core::domain::sheets::row::Row;
    /// assert_eq!(Row::from_index(0).number(), 1);
    /// assert_eq!(Row::from_number(5).number(), 5);
    /// ```
    pub fn number(&self) -> u32 {
        self.index.saturating_add(1)
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row(index: {}, number: {})", self.index(), self.number())
    }
}
