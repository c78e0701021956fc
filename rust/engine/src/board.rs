use std::collections::BTreeMap;

use crate::coord::Coord;
use crate::errors::GameError;

/// Cells of a game keyed by coordinate.
pub type Board<P> = BTreeMap<Coord, P>;

/// Boundary of a hexagonal board: for each rank `z` the inclusive column range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardShape {
    ranks: BTreeMap<i32, (i32, i32)>,
    z_limits: (i32, i32),
}

impl BoardShape {
    /// Builds a shape from `(z, min_x, max_x)` rank descriptions.
    pub fn new(ranks: &[(i32, i32, i32)]) -> Self {
        let ranks: BTreeMap<i32, (i32, i32)> =
            ranks.iter().map(|&(z, lo, hi)| (z, (lo, hi))).collect();
        let min_z = ranks.keys().next().copied().unwrap_or(0);
        let max_z = ranks.keys().next_back().copied().unwrap_or(0);
        Self {
            ranks,
            z_limits: (min_z, max_z),
        }
    }

    /// Regular hexagon with `radius` rings around the centre cell.
    pub fn hexagon(radius: i32) -> Self {
        let ranks: Vec<(i32, i32, i32)> = (-radius..=radius)
            .map(|z| (z, (-radius).max(-radius - z), radius.min(radius - z)))
            .collect();
        Self::new(&ranks)
    }

    /// The elongated 49-cell Dvonn board.
    pub fn dvonn() -> Self {
        Self::new(&[(-2, -3, 5), (-1, -4, 5), (0, -5, 5), (1, -5, 4), (2, -5, 3)])
    }

    pub fn z_limits(&self) -> (i32, i32) {
        self.z_limits
    }

    pub fn x_limits(&self, z: i32) -> Option<(i32, i32)> {
        self.ranks.get(&z).copied()
    }

    pub fn contains(&self, x: i32, z: i32) -> bool {
        match self.ranks.get(&z) {
            Some(&(lo, hi)) => x >= lo && x <= hi,
            None => false,
        }
    }

    pub fn contains_coord(&self, at: Coord) -> bool {
        at.is_valid() && self.contains(at.x, at.z)
    }

    /// True for cells on the outermost ring.
    pub fn is_edge(&self, at: Coord) -> bool {
        if !self.contains_coord(at) {
            return false;
        }
        if at.z == self.z_limits.0 || at.z == self.z_limits.1 {
            return true;
        }
        match self.ranks.get(&at.z) {
            Some(&(lo, hi)) => at.x == lo || at.x == hi,
            None => false,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.ranks
            .iter()
            .flat_map(|(&z, &(lo, hi))| (lo..=hi).map(move |x| Coord::from_xz(x, z)))
    }

    pub fn len(&self) -> usize {
        self.ranks
            .values()
            .map(|&(lo, hi)| (hi - lo + 1).max(0) as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Turns a ragged layout matrix into a board.
///
/// The middle row is rank `z = 0` and the last row of the matrix is the top
/// rank. The middle row is centred on column 0; every row lists its rank from
/// the smallest column upward.
pub fn build_board<P, F>(
    shape: &BoardShape,
    rows: &[Vec<u8>],
    mut make: F,
) -> Result<Board<P>, GameError>
where
    F: FnMut(Coord, u8) -> Result<P, GameError>,
{
    let count = rows.len();
    if count == 0 || count % 2 == 0 {
        return Err(GameError::MalformedLayout(format!(
            "expected an odd number of rows, got {count}"
        )));
    }
    let half = count / 2;
    let a = (rows[half].len() / 2) as i32;
    let mut board = Board::new();

    for i in 0..count {
        let z = half as i32 - i as i32;
        let src = &rows[count - 1 - i];
        let len = src.len();
        for j in 0..len {
            let x = if z >= 0 { -a + j as i32 } else { a - j as i32 };
            let k = if i <= half { j } else { len - 1 - j };
            let at = Coord::from_xz(x, z);
            if !shape.contains_coord(at) {
                return Err(GameError::MalformedLayout(format!(
                    "cell {at} from row {} is outside the board",
                    count - 1 - i
                )));
            }
            let position = make(at, src[k])?;
            if board.insert(at, position).is_some() {
                return Err(GameError::MalformedLayout(format!("cell {at} appears twice")));
            }
        }
    }

    if board.len() != shape.len() {
        return Err(GameError::MalformedLayout(format!(
            "layout covers {} of {} cells",
            board.len(),
            shape.len()
        )));
    }
    Ok(board)
}

/// Fills a template row by row with `pieces`, one piece per template cell.
pub fn populate(template: &[Vec<u8>], pieces: &[u8]) -> Result<Vec<Vec<u8>>, GameError> {
    let expected: usize = template.iter().map(Vec::len).sum();
    if expected != pieces.len() {
        return Err(GameError::PieceCount {
            expected,
            actual: pieces.len(),
        });
    }
    let mut rest = pieces;
    let mut rows = Vec::with_capacity(template.len());
    for row in template {
        let (head, tail) = rest.split_at(row.len());
        rows.push(head.to_vec());
        rest = tail;
    }
    Ok(rows)
}

/// An all-empty template with the given row lengths.
pub fn empty_layout(lengths: &[usize]) -> Vec<Vec<u8>> {
    lengths.iter().map(|&len| vec![0; len]).collect()
}
