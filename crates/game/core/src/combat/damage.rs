//! Damage rolls for both sides of a fight.

use crate::env::RngOracle;

/// No hit ever deals less than this.
pub const MIN_DAMAGE: i32 = 1;

/// Inclusive range of the penalty subtracted from the player's attack.
pub const PLAYER_PENALTY: (u32, u32) = (0, 2);

/// Inclusive range of a monster's raw hit.
pub const MONSTER_ROLL: (u32, u32) = (2, 6);

// ============================================================================
// Formulas
// ============================================================================

/// Damage dealt by the player.
///
/// # Formula
///
/// ```text
/// damage = max(1, attack - penalty)
/// ```
pub fn player_damage(attack: i32, penalty: i32) -> i32 {
    (attack - penalty).max(MIN_DAMAGE)
}

/// Damage dealt by a monster to the player.
///
/// # Formula
///
/// ```text
/// damage = max(1, roll - ⌊defense / 2⌋)
/// ```
///
/// Defense only halves into the reduction, so a heavily armored character
/// still takes the one-point floor.
pub fn monster_damage(roll: i32, defense: i32) -> i32 {
    (roll - defense.div_euclid(2)).max(MIN_DAMAGE)
}

// ============================================================================
// Rolls
// ============================================================================

/// Roll the penalty and compute the player's damage.
pub fn roll_player_damage(attack: i32, rng: &mut (impl RngOracle + ?Sized)) -> i32 {
    let penalty = rng.range(PLAYER_PENALTY.0, PLAYER_PENALTY.1) as i32;
    player_damage(attack, penalty)
}

/// Roll a monster hit against the player's defense.
pub fn roll_monster_damage(defense: i32, rng: &mut (impl RngOracle + ?Sized)) -> i32 {
    let roll = rng.range(MONSTER_ROLL.0, MONSTER_ROLL.1) as i32;
    monster_damage(roll, defense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, SequenceRng};

    #[test]
    fn player_damage_floors_at_one() {
        assert_eq!(player_damage(7, 0), 7);
        assert_eq!(player_damage(7, 2), 5);
        assert_eq!(player_damage(1, 2), 1);
        assert_eq!(player_damage(-4, 0), 1);
    }

    #[test]
    fn monster_damage_halves_defense_rounding_down() {
        assert_eq!(monster_damage(6, 5), 4);
        assert_eq!(monster_damage(2, 4), 1);
        assert_eq!(monster_damage(2, 40), 1);
        assert_eq!(monster_damage(6, 0), 6);
    }

    #[test]
    fn rolled_damage_is_always_at_least_one() {
        let mut rng = PcgRng::new(99);
        for defense in 0..30 {
            assert!(roll_monster_damage(defense, &mut rng) >= MIN_DAMAGE);
            assert!(roll_player_damage(defense - 10, &mut rng) >= MIN_DAMAGE);
        }
    }

    #[test]
    fn rolls_use_the_oracle_ranges() {
        let mut rng = SequenceRng::new(vec![2, 6]);
        assert_eq!(roll_player_damage(10, &mut rng), 8);
        assert_eq!(roll_monster_damage(4, &mut rng), 4);
    }
}
