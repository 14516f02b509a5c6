//! Buddy generator.

use rand::seq::SliceRandom;
use rand::Rng;
use buddy_types::buddy::{Buddy, BUDDY_NAMES, BUDDY_PERSONALITIES};

/// Pick a name and a personality independently and uniformly at random.
/// Memoryless: nothing stops two sessions in a row from getting the same buddy.
pub fn match_buddy<R: Rng + ?Sized>(rng: &mut R) -> Buddy {
    let name = BUDDY_NAMES.choose(rng).copied().unwrap_or(BUDDY_NAMES[0]);
    let personality = BUDDY_PERSONALITIES
        .choose(rng)
        .copied()
        .unwrap_or(BUDDY_PERSONALITIES[0]);
    Buddy::new(name, personality)
}
