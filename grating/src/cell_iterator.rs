//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Cell iterators

/// Row-by-row iterator
pub struct CellIterator {
    row: u32,
    col: u32,
    rows: u32,
    cols: u32,
    finished: bool,
}

impl CellIterator {
    pub fn new(rows: u32, cols: u32) -> CellIterator {
        CellIterator {
            row: 0,
            col: 0,
            rows,
            cols,
            // Return "empty" iterator for an empty lattice
            finished: rows == 0 || cols == 0,
        }
    }
}

impl Iterator for CellIterator {
    /// Current cell index `(row, col)`
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = (self.row, self.col);
        if self.col < self.cols - 1 {
            self.col += 1;
        } else if self.row < self.rows - 1 {
            self.row += 1;
            self.col = 0;
        } else {
            self.finished = true;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = (self.rows - self.row) as usize * self.cols as usize - self.col as usize;
        (remaining, Some(remaining))
    }
}

#[test]
fn test_cell_iter() {
    let cells = CellIterator::new(2, 3).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
    );

    let cells = CellIterator::new(1, 1).collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0)]);

    let mut iter = CellIterator::new(3, 4);
    assert_eq!(iter.size_hint(), (12, Some(12)));
    iter.next();
    iter.next();
    assert_eq!(iter.size_hint(), (10, Some(10)));
}

#[test]
fn test_bad_params() {
    let cells = CellIterator::new(0, 10).collect::<Vec<_>>();
    assert_eq!(cells, vec![]);

    let cells = CellIterator::new(10, 0).collect::<Vec<_>>();
    assert_eq!(cells, vec![]);
}
