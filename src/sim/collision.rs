//! Player / obstacle collision detection
//!
//! Plain AABB overlap. The caller only needs a boolean "any collision":
//! the session ends on the first hit, so obstacle identity is irrelevant.

use super::entity::{Obstacle, Rect};

/// True if `player` overlaps any obstacle. Short-circuits on the first hit.
pub fn hits_any(player: &Rect, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| o.rect.overlaps(player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn obstacle(rect: Rect) -> Obstacle {
        Obstacle { id: 0, rect, speed: 5 }
    }

    #[test]
    fn test_overlapping_rects_collide() {
        let player = Rect::new(0, 0, 50, 30);
        let obstacles = [obstacle(Rect::new(10, 10, 50, 30))];
        assert!(hits_any(&player, &obstacles));
    }

    #[test]
    fn test_disjoint_rects_do_not_collide() {
        let player = Rect::new(0, 0, 50, 30);
        let obstacles = [obstacle(Rect::new(200, 200, 50, 30))];
        assert!(!hits_any(&player, &obstacles));
    }

    #[test]
    fn test_edge_touching_is_not_a_collision() {
        // Projections must overlap with non-zero extent
        let player = Rect::new(0, 0, 50, 30);
        assert!(!hits_any(&player, &[obstacle(Rect::new(50, 0, 50, 30))]));
        assert!(!hits_any(&player, &[obstacle(Rect::new(0, 30, 50, 30))]));
    }

    #[test]
    fn test_zero_extent_rect_never_collides() {
        let player = Rect::new(0, 0, 50, 30);
        let obstacles = [obstacle(Rect::new(10, 10, 0, 0))];
        assert!(!hits_any(&player, &obstacles));
    }

    #[test]
    fn test_any_single_hit_suffices() {
        let player = Rect::new(100, 100, 50, 30);
        let obstacles = [
            obstacle(Rect::new(500, 500, 50, 30)),
            obstacle(Rect::new(110, 110, 50, 30)),
            obstacle(Rect::new(600, 10, 50, 30)),
        ];
        assert!(hits_any(&player, &obstacles));
    }

    #[test]
    fn test_empty_obstacle_set() {
        let player = Rect::new(0, 0, 50, 30);
        assert!(!hits_any(&player, &[]));
    }

    proptest! {
        /// Overlap must be symmetric and agree with an independently
        /// written projection-overlap predicate.
        #[test]
        fn prop_overlap_symmetric_and_matches_reference(
            ax in -200..200i32, ay in -200..200i32,
            aw in 0..120i32, ah in 0..120i32,
            bx in -200..200i32, by in -200..200i32,
            bw in 0..120i32, bh in 0..120i32,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);

            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));

            let x_overlap = ax.max(bx) < (ax + aw).min(bx + bw);
            let y_overlap = ay.max(by) < (ay + ah).min(by + bh);
            prop_assert_eq!(a.overlaps(&b), x_overlap && y_overlap);
        }

        /// hits_any agrees with checking each obstacle individually.
        #[test]
        fn prop_hits_any_matches_individual_checks(
            px in 0..800i32, py in 0..600i32,
            rects in proptest::collection::vec(
                (0..900i32, 0..600i32, 1..100i32, 1..100i32), 0..8),
        ) {
            let player = Rect::new(px, py, 50, 30);
            let obstacles: Vec<Obstacle> = rects
                .iter()
                .enumerate()
                .map(|(i, &(x, y, w, h))| Obstacle {
                    id: i as u32,
                    rect: Rect::new(x, y, w, h),
                    speed: 5,
                })
                .collect();

            let expected = obstacles.iter().any(|o| o.rect.overlaps(&player));
            prop_assert_eq!(hits_any(&player, &obstacles), expected);
        }
    }
}
