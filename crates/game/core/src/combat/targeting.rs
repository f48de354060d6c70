//! Target selection when several monsters are alive.
//!
//! The engine hands the selector the alive monsters in encounter order and
//! expects a position in that list back. Anything else (no answer, an
//! out-of-range position) makes the engine fall back to the first alive
//! monster, so a selector can never stall a turn.

/// An alive monster offered as a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetCandidate<'a> {
    /// Position of the monster in the encounter.
    pub instance: usize,
    pub name: &'a str,
    pub current_health: i32,
    pub max_health: i32,
}

/// Chooses which alive monster the player attacks.
pub trait TargetSelector {
    /// Pick a target among `candidates` (always two or more).
    ///
    /// # Returns
    ///
    /// A position in `candidates`, or `None` to accept the default.
    fn select_target(&mut self, turn: u32, candidates: &[TargetCandidate<'_>]) -> Option<usize>;

    /// Short name shown in settings and logs.
    fn name(&self) -> &'static str;
}

/// Always attacks the first alive monster.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAliveTarget;

impl TargetSelector for FirstAliveTarget {
    fn select_target(&mut self, _turn: u32, _candidates: &[TargetCandidate<'_>]) -> Option<usize> {
        Some(0)
    }

    fn name(&self) -> &'static str {
        "First Alive"
    }
}
