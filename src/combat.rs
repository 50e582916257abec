//! Dice rolling shared by air units, AA batteries and zones

use rand::Rng;

/// Face that scores a hit on a six-sided die
pub const HIT_FACE: u32 = 6;

/// Roll `dice` six-sided dice and count the hits. Non-positive counts roll
/// nothing.
pub fn roll_hits(dice: i32, rng: &mut impl Rng) -> u32 {
    let dice = u32::try_from(dice).unwrap_or(0);
    (0..dice)
        .filter(|_| rng.gen_range(1..=6) == HIT_FACE)
        .count() as u32
}
