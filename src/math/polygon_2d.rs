use super::Point2;

/// A directed edge of a closed vertex cycle, as indices into the vertex list.
///
/// `start` is the predecessor of `end` in the cycle, so for `end == 0` the
/// edge is the implicit closing edge from the last vertex back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeIndex {
    pub start: usize,
    pub end: usize,
}

/// Returns the index preceding `i` in a closed cycle of `n` vertices.
///
/// `i` must be less than `n`.
#[must_use]
pub fn predecessor(i: usize, n: usize) -> usize {
    debug_assert!(i < n, "index {i} out of range for cycle of {n}");
    if i == 0 {
        n - 1
    } else {
        i - 1
    }
}

/// Enumerates the edges of a closed cycle of `n` vertices.
///
/// Yields `(predecessor(i), i)` for `i = 0..n`, so the closing edge
/// `(n - 1, 0)` comes first. Yields nothing for `n == 0`; for `n == 1` the
/// single edge is the self-loop `(0, 0)`.
pub fn edge_cycle(n: usize) -> impl Iterator<Item = EdgeIndex> {
    (0..n).map(move |end| EdgeIndex {
        start: predecessor(end, n),
        end,
    })
}

/// Enumerates the edges of a closed polygon as `(index, start, end)` triples.
pub fn edges(points: &[Point2]) -> impl Iterator<Item = (EdgeIndex, Point2, Point2)> + '_ {
    edge_cycle(points.len()).map(move |edge| (edge, points[edge.start], points[edge.end]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn predecessor_wraps_at_zero() {
        assert_eq!(predecessor(0, 4), 3);
        assert_eq!(predecessor(1, 4), 0);
        assert_eq!(predecessor(3, 4), 2);
    }

    #[test]
    fn predecessor_single_vertex() {
        assert_eq!(predecessor(0, 1), 0);
    }

    #[test]
    fn edge_cycle_starts_with_closing_edge() {
        let edges: Vec<_> = edge_cycle(4).collect();
        assert_eq!(
            edges,
            vec![
                EdgeIndex { start: 3, end: 0 },
                EdgeIndex { start: 0, end: 1 },
                EdgeIndex { start: 1, end: 2 },
                EdgeIndex { start: 2, end: 3 },
            ]
        );
    }

    #[test]
    fn edge_cycle_covers_every_vertex_once_per_side() {
        let n = 7;
        let mut starts = vec![0; n];
        let mut ends = vec![0; n];
        for edge in edge_cycle(n) {
            starts[edge.start] += 1;
            ends[edge.end] += 1;
        }
        assert!(starts.iter().all(|&c| c == 1));
        assert!(ends.iter().all(|&c| c == 1));
    }

    #[test]
    fn edge_cycle_empty() {
        assert_eq!(edge_cycle(0).count(), 0);
    }

    #[test]
    fn edge_cycle_two_vertices_doubles_back() {
        let edges: Vec<_> = edge_cycle(2).collect();
        assert_eq!(edges[0], EdgeIndex { start: 1, end: 0 });
        assert_eq!(edges[1], EdgeIndex { start: 0, end: 1 });
    }

    #[test]
    fn edges_yield_vertex_pairs() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let (idx, a, b) = edges(&pts).next().unwrap();
        assert_eq!(idx, EdgeIndex { start: 2, end: 0 });
        assert_eq!(a, pts[2]);
        assert_eq!(b, pts[0]);
    }
}
