//! Boundary handling for stencil reads.

/// How a stencil resolves a neighbour index past the grid edge.
///
/// This controls *reads only* — no stencil ever writes outside the grid.
///
/// - **Clamp**: the out-of-bounds neighbour maps to the boundary cell
///   itself, so one-sided differences degrade to zero at the edge and
///   centered differences become one-sided.
/// - **Wrap**: periodic boundary (torus topology).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour maps to the boundary cell.
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side.
    Wrap,
}

/// Resolve a single axis value under the given edge behavior.
pub(crate) fn resolve_axis(val: i32, len: i32, edge: EdgeBehavior) -> i32 {
    if val >= 0 && val < len {
        return val;
    }
    match edge {
        EdgeBehavior::Clamp => val.clamp(0, len - 1),
        EdgeBehavior::Wrap => ((val % len) + len) % len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(2, 5, EdgeBehavior::Clamp), 2);
        assert_eq!(resolve_axis(0, 5, EdgeBehavior::Wrap), 0);
    }

    #[test]
    fn resolve_axis_clamp() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Clamp), 0);
        assert_eq!(resolve_axis(7, 5, EdgeBehavior::Clamp), 4);
    }

    #[test]
    fn resolve_axis_wrap() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), 4);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Wrap), 0);
        assert_eq!(resolve_axis(7, 5, EdgeBehavior::Wrap), 2);
    }
}
