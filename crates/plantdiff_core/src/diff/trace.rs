//! Depth-indexed record of furthest-reaching points.
//!
//! At depth `d` only diagonals `-d, -d + 2, ..., d` are reachable, so each
//! depth is stored as a dense vector of `d + 1` slots addressed by the offset
//! `(k + d) / 2`. Every depth is kept until backtracking finishes, which is
//! what makes the total footprint quadratic in the edit distance.

/// Furthest x reached on each diagonal at one search depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    depth: usize,
    furthest: Vec<usize>,
}

impl Frontier {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            furthest: Vec::with_capacity(depth + 1),
        }
    }

    /// Search depth this frontier belongs to.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn slot(&self, diagonal: isize) -> Option<usize> {
        let depth = self.depth as isize;
        if diagonal < -depth || diagonal > depth {
            return None;
        }
        let offset = diagonal + depth;
        if offset % 2 != 0 {
            return None;
        }
        Some((offset / 2) as usize)
    }

    /// Furthest x recorded on `diagonal`, or `None` when it was never reached.
    pub fn get(&self, diagonal: isize) -> Option<usize> {
        self.slot(diagonal)
            .and_then(|slot| self.furthest.get(slot).copied())
    }

    /// Number of diagonals recorded so far.
    pub fn len(&self) -> usize {
        self.furthest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.furthest.is_empty()
    }

    // Diagonals arrive in ascending order, so the next slot is always the end.
    fn record(&mut self, diagonal: isize, x: usize) {
        debug_assert_eq!(self.slot(diagonal), Some(self.furthest.len()));
        self.furthest.push(x);
    }
}

/// All frontiers from depth 0 up to the depth where the search finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    frontiers: Vec<Frontier>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Start recording the next depth.
    pub(crate) fn begin_depth(&mut self) {
        let depth = self.frontiers.len();
        self.frontiers.push(Frontier::new(depth));
    }

    /// Record the furthest x on `diagonal` for the depth being searched.
    pub(crate) fn record(&mut self, diagonal: isize, x: usize) {
        if let Some(frontier) = self.frontiers.last_mut() {
            frontier.record(diagonal, x);
        }
    }

    /// Frontier stored for `depth`.
    pub fn frontier(&self, depth: usize) -> Option<&Frontier> {
        self.frontiers.get(depth)
    }

    /// Number of depths retained.
    pub fn depths(&self) -> usize {
        self.frontiers.len()
    }

    /// Total furthest points retained across all depths.
    pub fn retained_points(&self) -> usize {
        self.frontiers.iter().map(Frontier::len).sum()
    }

    /// Furthest x on diagonals `k - 1` and `k + 1` one depth before `depth`.
    ///
    /// Depth 0 has no predecessor; it reads a virtual start point of x = 0 on
    /// diagonal 1 so the first snake begins at the origin.
    pub fn neighbors(&self, depth: usize, diagonal: isize) -> (Option<usize>, Option<usize>) {
        if depth == 0 {
            let seed = |k: isize| (k == 1).then_some(0);
            return (seed(diagonal - 1), seed(diagonal + 1));
        }
        match self.frontier(depth - 1) {
            Some(previous) => (previous.get(diagonal - 1), previous.get(diagonal + 1)),
            None => (None, None),
        }
    }
}
