//! The directional cost model and its admissible heuristic.
//!
//! A steady wind blows toward the south (`+y`): moving with it costs 1,
//! against it costs 3, and across it costs 2. The heuristic prices each
//! remaining unit of displacement at exactly its per-direction rate, so it
//! never overestimates and is consistent under these step costs.

use windgrid_core::Point;

/// Neighbor deltas in the fixed visitation order: North, West, South, East.
/// This order, together with the frontier tie-break, determines which of
/// several equal-cost cells is discovered first.
pub const MOVES: [Point; 4] = [
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(1, 0),
];

/// Cost of one step along a cardinal delta: south 1, north 3, lateral 2.
#[inline]
pub fn step_cost(delta: Point) -> i32 {
    match delta.y {
        1 => 1,
        -1 => 3,
        _ => 2,
    }
}

/// Wind-weighted distance estimate from `from` to `to`.
///
/// ```
/// use windgrid_core::Point;
/// use windgrid_paths::wind_estimate;
///
/// // Entrance of the demo maze to its exit: 8 lateral, 3 southward.
/// assert_eq!(wind_estimate(Point::new(3, 0), Point::new(11, 3)), 19);
/// ```
#[inline]
pub fn wind_estimate(from: Point, to: Point) -> i32 {
    let dx = (from.x - to.x).abs();
    let dy = (from.y - to.y).abs();
    let southward = (to.y - from.y).max(0);
    let northward = dy - southward;
    2 * dx + southward + 3 * northward
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_costs_by_direction() {
        let [north, west, south, east] = MOVES;
        assert_eq!(step_cost(south), 1);
        assert_eq!(step_cost(north), 3);
        assert_eq!(step_cost(west), 2);
        assert_eq!(step_cost(east), 2);
    }

    #[test]
    fn estimate_at_goal_is_zero() {
        let p = Point::new(4, 7);
        assert_eq!(wind_estimate(p, p), 0);
    }

    #[test]
    fn estimate_prices_each_axis() {
        let goal = Point::new(0, 0);
        // Southward travel rides the wind.
        assert_eq!(wind_estimate(goal, Point::new(0, 5)), 5);
        // Northward travel fights it.
        assert_eq!(wind_estimate(Point::new(0, 5), goal), 15);
        // Lateral travel.
        assert_eq!(wind_estimate(Point::new(5, 0), goal), 10);
    }

    #[test]
    fn estimate_matches_unobstructed_cost() {
        // With no walls the estimate is exact: it equals the cost of the
        // cheapest move sequence realizing the displacement.
        assert_eq!(wind_estimate(Point::new(0, 0), Point::new(4, 0)), 8);
        assert_eq!(wind_estimate(Point::new(0, 0), Point::new(0, 4)), 4);
        assert_eq!(wind_estimate(Point::new(0, 4), Point::new(0, 0)), 12);
        assert_eq!(wind_estimate(Point::new(3, 0), Point::new(11, 3)), 19);
    }

    #[test]
    fn estimate_is_consistent_across_single_steps() {
        // |h(p) - h(p + d)| <= step_cost(d) for every move d: the triangle
        // inequality that keeps first-discovery costs optimal.
        let goal = Point::new(2, 3);
        for x in -3..6 {
            for y in -3..6 {
                let p = Point::new(x, y);
                for d in MOVES {
                    let n = p + d;
                    assert!(
                        wind_estimate(p, goal) <= step_cost(d) + wind_estimate(n, goal),
                        "inconsistent at {p} via {d}"
                    );
                }
            }
        }
    }
}
