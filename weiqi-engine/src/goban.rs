use arrayvec::ArrayVec;

use crate::Point;
use crate::group::GroupId;

/// The N×N grid stored as a flat row-major array of group handles.
///
/// Each cell is either empty or points at the group occupying it. Orthogonal
/// neighbors of every cell are computed once when the board is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Goban {
    cells: Vec<Option<GroupId>>,
    size: u8,
    neighbors: Vec<ArrayVec<usize, 4>>,
}

impl Goban {
    /// Create an empty square board.
    pub fn with_size(size: u8) -> Self {
        let n = size as usize;
        let neighbors: Vec<ArrayVec<usize, 4>> = (0..n * n)
            .map(|i| {
                let (col, row) = (i % n, i / n);
                let mut result = ArrayVec::new();
                if col > 0 {
                    result.push(i - 1);
                }
                if col + 1 < n {
                    result.push(i + 1);
                }
                if row > 0 {
                    result.push(i - n);
                }
                if row + 1 < n {
                    result.push(i + n);
                }
                result
            })
            .collect();

        Goban {
            cells: vec![None; n * n],
            size,
            neighbors,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of points on the board.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn on_board(&self, (col, row): Point) -> bool {
        col < self.size && row < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn get(&self, point: Point) -> Option<GroupId> {
        self.cells[self.idx(point)]
    }

    pub fn get_idx(&self, idx: usize) -> Option<GroupId> {
        self.cells[idx]
    }

    pub fn set(&mut self, point: Point, cell: Option<GroupId>) {
        let i = self.idx(point);
        self.cells[i] = cell;
    }

    // -- Adjacency --

    /// The in-bounds orthogonal neighbors of `point`.
    pub fn neighbors_of(&self, point: Point) -> ArrayVec<Point, 4> {
        self.neighbors[self.idx(point)]
            .iter()
            .map(|&i| self.point_of(i))
            .collect()
    }

    pub fn neighbor_indices(&self, idx: usize) -> &[usize] {
        &self.neighbors[idx]
    }

    // -- Index conversion --

    /// Flat index of `point`. Panics if the point is off the board.
    #[inline]
    pub fn idx(&self, point: Point) -> usize {
        assert!(self.on_board(point), "point {point:?} is off the board");
        point.1 as usize * self.size as usize + point.0 as usize
    }

    #[inline]
    pub fn point_of(&self, idx: usize) -> Point {
        let n = self.size as usize;
        ((idx % n) as u8, (idx / n) as u8)
    }
}
