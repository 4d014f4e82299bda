//! Sorted row lists
//!
//! A row stores only its nonzero entries as `(column, value)` pairs in
//! increasing column order. Every column missing from the list is an
//! implicit zero, so an empty list is an all-zero row.

use std::slice;

/// One stored entry of a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Zero-based column index
    pub col: usize,
    /// Stored value, nonzero by convention
    pub value: f64,
}

impl Element {
    pub fn new(col: usize, value: f64) -> Self {
        Self { col, value }
    }
}

/// The ordered element list of a single matrix row
///
/// Elements are kept sorted by column. Insertion costs O(n) element moves
/// and lookups scan from the front, stopping at the first column that is
/// not smaller than the requested one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowList {
    elements: Vec<Element>,
}

impl RowList {
    /// Creates an empty (all-zero) row
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Index of the first element whose column is `>= col`
    fn scan_position(&self, col: usize) -> usize {
        self.elements
            .iter()
            .position(|e| e.col >= col)
            .unwrap_or(self.elements.len())
    }

    /// Adds an element, always growing the row by one.
    ///
    /// The new element lands immediately before the first element whose
    /// column is `>= col`, or at the end. An existing element with the same
    /// column is not replaced: the row then holds two entries for `col` and
    /// the new one is found first by [`RowList::get`].
    pub fn insert(&mut self, col: usize, value: f64) {
        let pos = self.scan_position(col);
        self.elements.insert(pos, Element::new(col, value));
    }

    /// Stores `value` at `col`, replacing the first entry already stored
    /// there. Returns the replaced value.
    pub fn set(&mut self, col: usize, value: f64) -> Option<f64> {
        let pos = self.scan_position(col);
        match self.elements.get_mut(pos) {
            Some(e) if e.col == col => Some(std::mem::replace(&mut e.value, value)),
            _ => {
                self.elements.insert(pos, Element::new(col, value));
                None
            }
        }
    }

    /// Value stored at `col`, or `0.0` when the column is not stored
    pub fn get(&self, col: usize) -> f64 {
        for e in &self.elements {
            if e.col == col {
                return e.value;
            }
            if e.col > col {
                break;
            }
        }
        0.0
    }

    /// True when two neighbouring elements share a column
    pub fn has_duplicates(&self) -> bool {
        self.elements.windows(2).any(|w| w[0].col == w[1].col)
    }
}

impl<'a> IntoIterator for &'a RowList {
    type Item = &'a Element;
    type IntoIter = slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(row: &RowList) -> Vec<usize> {
        row.iter().map(|e| e.col).collect()
    }

    #[test]
    fn test_empty_row_is_zero() {
        let row = RowList::new();
        assert!(row.is_empty());
        assert_eq!(row.get(0), 0.0);
        assert_eq!(row.get(42), 0.0);
    }

    #[test]
    fn test_insert_keeps_columns_sorted() {
        let mut row = RowList::new();
        row.insert(5, 5.0);
        row.insert(1, 1.0);
        row.insert(3, 3.0);
        row.insert(9, 9.0);
        row.insert(0, 0.5);

        assert_eq!(cols(&row), vec![0, 1, 3, 5, 9]);
        assert_eq!(row.get(3), 3.0);
        assert_eq!(row.get(4), 0.0);
        assert_eq!(row.get(10), 0.0);
    }

    #[test]
    fn test_insert_equal_column_adds_duplicate_in_front() {
        let mut row = RowList::new();
        row.insert(2, 1.0);
        row.insert(4, 4.0);
        row.insert(2, 7.0);

        assert_eq!(row.len(), 3);
        assert_eq!(cols(&row), vec![2, 2, 4]);
        assert!(row.has_duplicates());
        // the scan meets the newer element first
        assert_eq!(row.get(2), 7.0);
    }

    #[test]
    fn test_set_replaces_existing_column() {
        let mut row = RowList::new();
        assert_eq!(row.set(2, 1.0), None);
        assert_eq!(row.set(0, 3.0), None);
        assert_eq!(row.set(2, 8.0), Some(1.0));

        assert_eq!(row.len(), 2);
        assert_eq!(cols(&row), vec![0, 2]);
        assert_eq!(row.get(2), 8.0);
        assert!(!row.has_duplicates());
    }
}
