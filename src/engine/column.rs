//! Rod identities and their place values

use super::constants::COLUMNS;
use std::fmt;

/// One of the four rods, ordered by significance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Ones,
    Tens,
    Hundreds,
    Thousands,
}

impl Column {
    /// All rods from least to most significant
    pub const ALL: [Column; COLUMNS] = [
        Column::Ones,
        Column::Tens,
        Column::Hundreds,
        Column::Thousands,
    ];

    /// Look up a rod by its raw index, `None` outside `0..=3`
    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Positional value `10^index`
    pub fn multiplier(self) -> u32 {
        10u32.pow(self.index() as u32)
    }

    pub fn name(self) -> &'static str {
        match self {
            Column::Ones => "Ones",
            Column::Tens => "Tens",
            Column::Hundreds => "Hundreds",
            Column::Thousands => "Thousands",
        }
    }

    /// The next more significant rod, `None` for Thousands
    pub fn next(self) -> Option<Column> {
        Column::from_index(self.index() + 1)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Column::from_index(0), Some(Column::Ones));
        assert_eq!(Column::from_index(3), Some(Column::Thousands));
        assert_eq!(Column::from_index(4), None);
    }

    #[test]
    fn test_multipliers() {
        let values: Vec<u32> = Column::ALL.iter().map(|c| c.multiplier()).collect();
        assert_eq!(values, vec![1, 10, 100, 1000]);
    }

    #[test]
    fn test_next_stops_at_thousands() {
        assert_eq!(Column::Hundreds.next(), Some(Column::Thousands));
        assert_eq!(Column::Thousands.next(), None);
    }
}
