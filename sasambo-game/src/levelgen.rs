//! Procedural partitioning of a content pool into per-level question sets.
//!
//! The sampler slides a window over the pool (ordered easy to hard by
//! convention) so early levels draw from the front and late levels from
//! the back. It is re-invoked each time a game's question set is
//! requested, so the concrete items vary between sessions while the level
//! count, sizes and difficulty band stay stable.
use rand::Rng;
use std::collections::HashSet;

use crate::constants::{
    DEFAULT_LEVEL_COUNT, SAMPLE_RETRY_LIMIT, WINDOW_MIN, WINDOW_POOL_RATIO,
};

/// Questions per level by level index: 2, then 3, 4 and finally 5 for the
/// late game.
#[must_use]
pub const fn question_count(level_idx: usize) -> usize {
    match level_idx {
        0..=2 => 2,
        3..=8 => 3,
        9..=14 => 4,
        _ => 5,
    }
}

/// Partition `pool` into the standard 20-level curriculum.
pub fn generate_default_level_sets<T: Clone, R: Rng>(pool: &[T], rng: &mut R) -> Vec<Vec<T>> {
    generate_level_sets(pool, DEFAULT_LEVEL_COUNT, rng)
}

/// Partition `pool` into `level_count` sampled question sets of increasing
/// size and difficulty. Items are unique within a level but may repeat
/// across levels, and full pool coverage is not guaranteed.
pub fn generate_level_sets<T: Clone, R: Rng>(
    pool: &[T],
    level_count: usize,
    rng: &mut R,
) -> Vec<Vec<T>> {
    if pool.is_empty() {
        return vec![Vec::new(); level_count];
    }
    (0..level_count)
        .map(|level_idx| sample_level(pool, level_idx, level_count, rng))
        .collect()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sample_level<T: Clone, R: Rng>(
    pool: &[T],
    level_idx: usize,
    level_count: usize,
    rng: &mut R,
) -> Vec<T> {
    let pool_size = pool.len();
    let want = question_count(level_idx).min(pool_size);

    let window = WINDOW_MIN
        .max((pool_size as f64 * WINDOW_POOL_RATIO).floor() as usize)
        .min(pool_size);
    let max_start = pool_size - window;
    let progress = if level_count > 1 {
        level_idx as f64 / (level_count - 1) as f64
    } else {
        0.0
    };
    let start = (progress * max_start as f64).floor() as usize;

    let mut used: HashSet<usize> = HashSet::with_capacity(want);
    let mut picks = Vec::with_capacity(want);
    for _ in 0..want {
        let mut candidate = (start + rng.gen_range(0..window)) % pool_size;
        let mut attempts = 0;
        while used.contains(&candidate) && attempts < SAMPLE_RETRY_LIMIT {
            candidate = (start + rng.gen_range(0..window)) % pool_size;
            attempts += 1;
        }
        // Exhausted the random budget: scan to the next unused index.
        while used.contains(&candidate) {
            candidate = (candidate + 1) % pool_size;
        }
        used.insert(candidate);
        picks.push(pool[candidate].clone());
    }
    picks
}
