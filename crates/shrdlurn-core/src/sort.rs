//! Painter's-algorithm ordering for blocks viewed by the fixed isometric camera.
//!
//! Lower layers are drawn first; within a layer, blocks further from the viewer (larger `x`,
//! then larger `y`) are drawn first. This is not a general visibility sort, only the order
//! that is correct for the board's camera pose.

use std::cmp::Ordering;

use crate::block::Block;

/// Ascending `z`, then descending `x`, then descending `y`.
pub fn draw_order(a: &Block, b: &Block) -> Ordering {
    a.z.cmp(&b.z)
        .then_with(|| b.x.cmp(&a.x))
        .then_with(|| b.y.cmp(&a.y))
}

/// Sorts in place. The sort is stable, so coincident blocks keep their input order.
pub fn sort_blocks_in_place(blocks: &mut [Block]) {
    blocks.sort_by(draw_order);
}

/// Returns the blocks in draw order, leaving the input untouched.
pub fn sort_blocks(blocks: &[Block]) -> Vec<Block> {
    let mut sorted = blocks.to_vec();
    sort_blocks_in_place(&mut sorted);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_draw_order(blocks: &[Block]) {
        for pair in blocks.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.z <= b.z, "z must not decrease: {a:?} then {b:?}");
            if a.z == b.z {
                assert!(a.x >= b.x, "x must not increase within a layer: {a:?} then {b:?}");
                if a.x == b.x {
                    assert!(a.y >= b.y, "y must not increase within a column: {a:?} then {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_sort_example() {
        let blocks = vec![
            Block::new(0, 0, 1, 0),
            Block::new(1, 0, 0, 0),
            Block::new(0, 1, 0, 0),
        ];
        let sorted = sort_blocks(&blocks);
        assert_eq!(
            sorted,
            vec![
                Block::new(1, 0, 0, 0),
                Block::new(0, 1, 0, 0),
                Block::new(0, 0, 1, 0),
            ]
        );
    }

    #[test]
    fn test_sort_empty_and_single() {
        assert!(sort_blocks(&[]).is_empty());
        let one = vec![Block::new(3, 3, 7, 2)];
        assert_eq!(sort_blocks(&one), one);
    }

    #[test]
    fn test_sort_holds_for_scrambled_stacks() {
        // Deterministic scramble of a 4x4x3 volume.
        let mut blocks = Vec::new();
        let mut seed: u32 = 17;
        for _ in 0..48 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let v = (seed >> 16) as i32;
            blocks.push(Block::new(v % 4, (v / 4) % 4, (v / 16) % 3, (v % 6) as u32));
        }
        sort_blocks_in_place(&mut blocks);
        assert_eq!(blocks.len(), 48);
        assert_draw_order(&blocks);
    }

    #[test]
    fn test_sort_keeps_tags() {
        let blocks = vec![
            Block::new(2, 4, 1, 1).with_name("_new"),
            Block::new(2, 4, 0, 1),
        ];
        let sorted = sort_blocks(&blocks);
        assert_eq!(sorted[0], Block::new(2, 4, 0, 1));
        assert!(sorted[1].is_new());
    }
}
