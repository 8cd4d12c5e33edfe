//! Grouping faces by the block side they can be culled with.
//!
//! Faces on the outer shell are hidden whenever the neighbouring block
//! covers that side, so a host keeps them in one list per direction.
//! Interior faces are always drawn and go into a single unculled list.

use crate::core::Direction;
use crate::face::Face;

/// Faces split into six cullable side lists plus the unculled rest.
#[derive(Clone, Debug)]
pub struct FaceBuckets<M> {
    sides: [Vec<Face<M>>; 6],
    unculled: Vec<Face<M>>,
}

impl<M> FaceBuckets<M> {
    pub fn from_faces(faces: impl IntoIterator<Item = Face<M>>) -> Self {
        let mut buckets = Self {
            sides: Default::default(),
            unculled: Vec::new(),
        };
        for face in faces {
            if face.is_outer_boundary {
                buckets.sides[face.direction.index()].push(face);
            } else {
                buckets.unculled.push(face);
            }
        }
        buckets
    }

    /// Outer-shell faces facing `direction`.
    pub fn side(&self, direction: Direction) -> &[Face<M>] {
        &self.sides[direction.index()]
    }

    /// Faces that are drawn regardless of neighbours.
    pub fn unculled(&self) -> &[Face<M>] {
        &self.unculled
    }

    pub fn len(&self) -> usize {
        self.sides.iter().map(Vec::len).sum::<usize>() + self.unculled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unculled.is_empty() && self.sides.iter().all(Vec::is_empty)
    }

    /// Side lists indexed by [`Direction::index`], then the unculled list.
    pub fn into_parts(self) -> ([Vec<Face<M>>; 6], Vec<Face<M>>) {
        (self.sides, self.unculled)
    }
}

impl<M> FromIterator<Face<M>> for FaceBuckets<M> {
    fn from_iter<I: IntoIterator<Item = Face<M>>>(iter: I) -> Self {
        Self::from_faces(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::project_face;
    use crate::greedy::PlaneRect;

    fn unit_face(direction: Direction, axis_pos: u32) -> Face<u16> {
        let rect = PlaneRect { row: 0, column: 0, height: 1, width: 1 };
        project_face(&rect, direction, axis_pos, 2, 1)
    }

    #[test]
    fn outer_faces_go_to_their_side() {
        let buckets = FaceBuckets::from_faces([
            unit_face(Direction::NegX, 0),
            unit_face(Direction::PosX, 1),
            unit_face(Direction::PosX, 0),
            unit_face(Direction::NegY, 1),
        ]);

        assert_eq!(buckets.side(Direction::NegX).len(), 1);
        assert_eq!(buckets.side(Direction::PosX).len(), 1);
        assert_eq!(buckets.side(Direction::NegY).len(), 0);
        assert_eq!(buckets.unculled().len(), 2);
        assert_eq!(buckets.len(), 4);
        assert!(!buckets.is_empty());
    }

    #[test]
    fn empty_buckets() {
        let buckets: FaceBuckets<u16> = std::iter::empty().collect();
        assert!(buckets.is_empty());
        assert_eq!(buckets.len(), 0);
    }

    #[test]
    fn into_parts_keeps_direction_slots() {
        let buckets: FaceBuckets<u16> = [unit_face(Direction::PosZ, 1)].into_iter().collect();
        let (sides, unculled) = buckets.into_parts();
        assert!(unculled.is_empty());
        assert_eq!(sides[Direction::PosZ.index()].len(), 1);
        assert_eq!(sides.iter().map(Vec::len).sum::<usize>(), 1);
    }
}
