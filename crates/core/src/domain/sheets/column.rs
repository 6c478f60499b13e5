use std::fmt::Formatter;

/// Spreadsheet column, stored as a zero-based index and rendered as letters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Column {
    index: u32,
}

impl Column {
    pub fn from_index(index: u32) -> Self {
        Column { index }
    }

    pub fn letters(&self) -> String {
        index_to_letters(self.index)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters())
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Column(index: {}, letters: {})", self.index, self)
    }
}

// Bijective base-26: A..Z, AA..AZ, BA..
fn index_to_letters(index: u32) -> String {
    let mut number = u64::from(index) + 1;
    let mut result = Vec::new();
    while number > 0 {
        let remainder = ((number - 1) % 26) as u8;
        result.push((remainder + b'A') as char);
        number = (number - 1) / 26;
    }
    result.iter().rev().collect()
}
