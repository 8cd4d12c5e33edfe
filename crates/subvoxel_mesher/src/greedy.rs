//! Binary greedy merge of one face bit-plane.
//!
//! Rows are scanned top to bottom. Within a row, `trailing_zeros` finds the
//! start of the next run of set bits and `trailing_zeros` of the complement
//! its length. The run is then extended over following rows for as long as
//! they contain the same run, clearing those bits as they are consumed.
//!
//! Runs are taken in increasing row, then increasing column order, so the
//! output is deterministic for a given plane. It is maximal per run but not
//! guaranteed to be the minimum rectangle count.

/// A merged rectangle within a plane.
///
/// Covers rows `row..row + width` and columns `column..column + height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneRect {
    pub row: u32,
    pub column: u32,
    /// Extent along the column (bit) direction.
    pub height: u32,
    /// Extent along the row direction.
    pub width: u32,
}

impl PlaneRect {
    /// Number of unit faces covered.
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether plane cell `(row, column)` lies inside this rectangle.
    #[inline]
    pub fn contains(&self, row: u32, column: u32) -> bool {
        row >= self.row
            && row < self.row + self.width
            && column >= self.column
            && column < self.column + self.height
    }
}

/// Greedily merge the set bits of `plane` into rectangles.
///
/// `plane[row]` holds one row; only its low `side` bits are considered,
/// and `side` is capped at the 64 bits a row can hold.
/// Rows after the current one are consumed in place, so pass a copy if
/// the plane is needed afterwards. Rectangles are appended to `output`.
pub fn greedy_mesh_plane(plane: &mut [u64], side: u32, output: &mut Vec<PlaneRect>) {
    let side = side.min(u64::BITS);
    let side_mask = if side == u64::BITS { !0u64 } else { (1u64 << side) - 1 };
    let rows = plane.len();

    for row in 0..rows {
        let bits = plane[row] & side_mask;
        let mut column = 0u32;

        while column < side {
            let remaining = bits >> column;
            if remaining == 0 {
                break;
            }
            column += remaining.trailing_zeros();
            if column >= side {
                break;
            }

            let height = (!(bits >> column)).trailing_zeros();
            let run = if height >= u64::BITS { !0u64 } else { (1u64 << height) - 1 };
            let mask = run << column;

            let mut width = 1usize;
            while row + width < rows {
                let next = plane[row + width];
                if (next >> column) & run != run {
                    break;
                }
                plane[row + width] = next & !mask;
                width += 1;
            }

            output.push(PlaneRect {
                row: row as u32,
                column,
                height,
                width: width as u32,
            });
            column += height;
        }
    }
}

/// Convenience wrapper that copies `plane` and returns the rectangles.
pub fn greedy_mesh_plane_copy(plane: &[u64], side: u32) -> Vec<PlaneRect> {
    let mut work = plane.to_vec();
    let mut output = Vec::new();
    greedy_mesh_plane(&mut work, side, &mut output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(plane: &[u64], side: u32) -> Vec<PlaneRect> {
        greedy_mesh_plane_copy(plane, side)
    }

    fn rect(row: u32, column: u32, height: u32, width: u32) -> PlaneRect {
        PlaneRect { row, column, height, width }
    }

    #[test]
    fn empty_plane_no_rects() {
        assert!(mesh(&[0; 8], 8).is_empty());
    }

    #[test]
    fn single_bit_single_rect() {
        assert_eq!(mesh(&[0, 0b100, 0, 0], 4), vec![rect(1, 2, 1, 1)]);
    }

    #[test]
    fn full_plane_merges_to_one() {
        let side = 16;
        let plane = vec![0xFFFFu64; side as usize];
        assert_eq!(mesh(&plane, side), vec![rect(0, 0, 16, 16)]);
    }

    #[test]
    fn widest_plane_merges_to_one() {
        let side = 62;
        let plane = vec![(1u64 << 62) - 1; side as usize];
        assert_eq!(mesh(&plane, side), vec![rect(0, 0, 62, 62)]);
    }

    #[test]
    fn row_run_merges_in_column_direction() {
        assert_eq!(mesh(&[0b0111_1000, 0, 0, 0, 0, 0, 0, 0], 8), vec![rect(0, 3, 4, 1)]);
    }

    #[test]
    fn identical_rows_extend_width() {
        let plane = [0, 0b0110, 0b0110, 0b0110];
        assert_eq!(mesh(&plane, 4), vec![rect(1, 1, 2, 3)]);
    }

    #[test]
    fn wider_next_row_leaves_remainder() {
        // row 1 contains row 0's run plus one more bit
        let plane = [0b0011, 0b0111, 0, 0];
        assert_eq!(mesh(&plane, 4), vec![rect(0, 0, 2, 2), rect(1, 2, 1, 1)]);
    }

    #[test]
    fn narrower_next_row_stops_extension() {
        let plane = [0b0111, 0b0011, 0, 0];
        assert_eq!(mesh(&plane, 4), vec![rect(0, 0, 3, 1), rect(1, 0, 2, 1)]);
    }

    #[test]
    fn several_runs_in_one_row() {
        let plane = [0b1011_0101, 0b1011_0101];
        assert_eq!(
            mesh(&plane, 8),
            vec![rect(0, 0, 1, 2), rect(0, 2, 1, 2), rect(0, 4, 2, 2), rect(0, 7, 1, 2)]
        );
    }

    #[test]
    fn bits_beyond_side_are_ignored() {
        let plane = [0b1111_0001, 0];
        assert_eq!(mesh(&plane, 2), vec![rect(0, 0, 1, 1)]);
    }

    #[test]
    fn side_beyond_word_is_capped() {
        let plane = [!0u64, !0u64];
        assert_eq!(mesh(&plane, 70), vec![rect(0, 0, 64, 2)]);
        assert_eq!(mesh(&[1u64 << 63, 0], 100), vec![rect(0, 63, 1, 1)]);
    }

    #[test]
    fn checkerboard_never_merges() {
        let plane = [0b0101, 0b1010, 0b0101, 0b1010];
        let rects = mesh(&plane, 4);
        assert_eq!(rects.len(), 8);
        assert!(rects.iter().all(|r| r.area() == 1));
    }

    #[test]
    fn consumes_rows_in_place() {
        let mut plane = [0b11, 0b11];
        let mut out = Vec::new();
        greedy_mesh_plane(&mut plane, 2, &mut out);
        assert_eq!(out, vec![rect(0, 0, 2, 2)]);
        assert_eq!(plane, [0b11, 0]);
    }

    #[test]
    fn appends_to_existing_output() {
        let mut out = vec![rect(9, 9, 9, 9)];
        greedy_mesh_plane(&mut [0b1], 1, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], rect(0, 0, 1, 1));
    }

    #[test]
    fn contains_and_area() {
        let r = rect(1, 2, 3, 2);
        assert_eq!(r.area(), 6);
        assert!(r.contains(1, 2));
        assert!(r.contains(2, 4));
        assert!(!r.contains(3, 2));
        assert!(!r.contains(1, 5));
        assert!(!r.contains(0, 2));
    }
}
