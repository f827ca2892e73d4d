//! Reward resolution for level completions.
//!
//! Pure functions of the catalog, the player's current inventory, and an
//! injected random source; granting the returned item (via
//! [`crate::ProgressStore::add_item`]) is the caller's job.
use rand::Rng;
use std::collections::HashSet;

use crate::constants::{
    INTERMEDIATE_REWARD_GATE, TIER_DRAW_KETUA_KARANG, TIER_DRAW_PEMANGKU,
};
use crate::items::{InventoryItem, ItemCatalog, ItemRarity};

fn owned_ids(owned: &[InventoryItem]) -> HashSet<&str> {
    owned.iter().map(|item| item.id.as_str()).collect()
}

/// Roll for an intermediate-level reward: a 30% grant gate, then a
/// tier-weighted pick via [`pick_intermediate`]. `None` means either the
/// gate failed or every non-top-tier item is already owned; both are
/// ordinary outcomes, not errors.
pub fn roll_intermediate<R: Rng>(
    catalog: &ItemCatalog,
    owned: &[InventoryItem],
    rng: &mut R,
) -> Option<InventoryItem> {
    let gate: f64 = rng.gen_range(0.0..1.0);
    if gate <= INTERMEDIATE_REWARD_GATE {
        return None;
    }
    pick_intermediate(catalog, owned, rng)
}

/// Tier-weighted pick with the grant gate already passed.
///
/// The eligible pool excludes Raden Dende and everything the player owns.
/// The tier draw lands on Pemangku (10%), Ketua Karang (30%) or
/// Jajarkarang (60%); an emptied tier falls back to the full eligible
/// pool, which is the only way a Lalu Baiq item can be granted here.
pub fn pick_intermediate<R: Rng>(
    catalog: &ItemCatalog,
    owned: &[InventoryItem],
    rng: &mut R,
) -> Option<InventoryItem> {
    let owned = owned_ids(owned);
    let eligible: Vec<&InventoryItem> = catalog
        .items
        .iter()
        .filter(|item| item.rarity != ItemRarity::RadenDende && !owned.contains(item.id.as_str()))
        .collect();
    if eligible.is_empty() {
        return None;
    }

    let draw: f64 = rng.gen_range(0.0..1.0);
    let target = if draw > TIER_DRAW_PEMANGKU {
        ItemRarity::Pemangku
    } else if draw > TIER_DRAW_KETUA_KARANG {
        ItemRarity::KetuaKarang
    } else {
        ItemRarity::Jajarkarang
    };

    let tier_pool: Vec<&InventoryItem> = eligible
        .iter()
        .copied()
        .filter(|item| item.rarity == target)
        .collect();
    let pool = if tier_pool.is_empty() {
        &eligible
    } else {
        &tier_pool
    };
    Some(pool[rng.gen_range(0..pool.len())].clone())
}

/// Guaranteed top-tier reward for clearing a track's final level.
///
/// Picks uniformly among unowned Raden Dende items; when the player owns
/// them all, picks from the full top-tier catalog instead (an explicit
/// duplicate). Returns `None` only for a catalog with no top tier at all.
pub fn roll_final<R: Rng>(
    catalog: &ItemCatalog,
    owned: &[InventoryItem],
    rng: &mut R,
) -> Option<InventoryItem> {
    let top = catalog.of_rarity(ItemRarity::RadenDende);
    if top.is_empty() {
        return None;
    }
    let owned = owned_ids(owned);
    let unowned: Vec<&InventoryItem> = top
        .iter()
        .copied()
        .filter(|item| !owned.contains(item.id.as_str()))
        .collect();
    let pool = if unowned.is_empty() { &top } else { &unowned };
    Some(pool[rng.gen_range(0..pool.len())].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Error, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    /// Replays a fixed sequence of uniform draws; `rand` turns the top 53
    /// bits of each `u64` into the `[0, 1)` float the resolver sees.
    struct SeqRng {
        values: Vec<u64>,
        idx: usize,
    }

    impl SeqRng {
        fn from_draws(draws: &[f64]) -> Self {
            let values = draws
                .iter()
                .map(|d| {
                    let bits = (d * (1u64 << 53) as f64) as u64;
                    bits << 11
                })
                .collect();
            Self { values, idx: 0 }
        }
    }

    impl RngCore for SeqRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let value = self.values[self.idx % self.values.len()];
            self.idx += 1;
            value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn gate_failure_grants_nothing() {
        let catalog = ItemCatalog::master();
        // Draws at and below the gate all fail.
        for draw in [0.0, 0.3, 0.7] {
            let mut rng = SeqRng::from_draws(&[draw]);
            assert_eq!(roll_intermediate(&catalog, &[], &mut rng), None);
        }
    }

    #[test]
    fn tier_draw_bands_select_expected_rarities() {
        let catalog = ItemCatalog::master();
        let cases = [
            (0.95, ItemRarity::Pemangku),
            (0.75, ItemRarity::KetuaKarang),
            (0.30, ItemRarity::Jajarkarang),
        ];
        for (tier_draw, expected) in cases {
            // gate draw, tier draw, then index selection bits
            let mut rng = SeqRng::from_draws(&[0.99, tier_draw, 0.5]);
            let item = roll_intermediate(&catalog, &[], &mut rng).unwrap();
            assert_eq!(item.rarity, expected, "tier draw {tier_draw}");
        }
    }

    #[test]
    fn intermediate_never_grants_top_tier_or_owned() {
        let catalog = ItemCatalog::master();
        let mut owned: Vec<InventoryItem> = Vec::new();
        let mut rng = ChaCha20Rng::seed_from_u64(0xBADA55);
        for _ in 0..2_000 {
            if let Some(item) = roll_intermediate(&catalog, &owned, &mut rng) {
                assert_ne!(item.rarity, ItemRarity::RadenDende);
                assert!(!owned.iter().any(|o| o.id == item.id), "duplicate {}", item.id);
                owned.push(item);
            }
        }
        assert!(!owned.is_empty(), "expected at least one grant in 2000 rolls");
    }

    #[test]
    fn intermediate_pool_exhaustion_yields_none() {
        let catalog = ItemCatalog::master();
        let owned: Vec<InventoryItem> = catalog
            .items
            .iter()
            .filter(|item| item.rarity != ItemRarity::RadenDende)
            .cloned()
            .collect();
        // Pass the gate; there is still nothing left to grant.
        let mut rng = SeqRng::from_draws(&[0.99, 0.5, 0.5]);
        assert_eq!(roll_intermediate(&catalog, &owned, &mut rng), None);
    }

    #[test]
    fn emptied_tier_falls_back_to_full_eligible_pool() {
        let catalog = ItemCatalog::master();
        // Own every Pemangku item, then force the Pemangku band.
        let owned: Vec<InventoryItem> = catalog
            .of_rarity(ItemRarity::Pemangku)
            .into_iter()
            .cloned()
            .collect();
        let mut rng = SeqRng::from_draws(&[0.99, 0.95, 0.42]);
        let item = roll_intermediate(&catalog, &owned, &mut rng).unwrap();
        assert_ne!(item.rarity, ItemRarity::Pemangku);
        assert_ne!(item.rarity, ItemRarity::RadenDende);
    }

    #[test]
    fn final_reward_is_always_top_tier() {
        let catalog = ItemCatalog::master();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let item = roll_final(&catalog, &[], &mut rng).unwrap();
        assert_eq!(item.rarity, ItemRarity::RadenDende);
    }

    #[test]
    fn final_reward_prefers_unowned_then_allows_duplicates() {
        let catalog = ItemCatalog::master();
        let top: Vec<InventoryItem> = catalog
            .of_rarity(ItemRarity::RadenDende)
            .into_iter()
            .cloned()
            .collect();
        let mut rng = ChaCha20Rng::seed_from_u64(99);

        // All but one owned: the roll must find the missing one.
        let missing = top.last().unwrap().clone();
        let owned: Vec<InventoryItem> = top[..top.len() - 1].to_vec();
        for _ in 0..50 {
            let item = roll_final(&catalog, &owned, &mut rng).unwrap();
            assert_eq!(item.id, missing.id);
        }

        // Full collection: still grants, as a duplicate.
        for _ in 0..50 {
            let item = roll_final(&catalog, &top, &mut rng).unwrap();
            assert_eq!(item.rarity, ItemRarity::RadenDende);
        }
    }

    #[test]
    fn final_reward_needs_a_top_tier_catalog() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(roll_final(&ItemCatalog::empty(), &[], &mut rng), None);
    }
}
