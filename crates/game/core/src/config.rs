/// Game rules constants and tunable parameters.
///
/// Loaded from `config.toml` by the content crate; any field missing from the
/// file falls back to its default.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of full turns a combat may last before the monsters flee.
    pub turn_limit: u32,
    /// Gold granted to a freshly created character.
    pub starting_gold: u32,
    /// Total attribute points spread across the six attributes at creation.
    pub attribute_points: u32,
    /// Lowest value any attribute may hold.
    pub attribute_min: u8,
    /// Highest value any attribute may hold.
    pub attribute_max: u8,
    /// Sale proceeds are `price / sell_divisor`.
    pub sell_divisor: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_LIMIT: u32 = 30;
    pub const DEFAULT_STARTING_GOLD: u32 = 50;
    pub const DEFAULT_ATTRIBUTE_POINTS: u32 = 18;
    pub const DEFAULT_ATTRIBUTE_MIN: u8 = 1;
    pub const DEFAULT_ATTRIBUTE_MAX: u8 = 5;
    pub const DEFAULT_SELL_DIVISOR: u32 = 2;

    pub fn new() -> Self {
        Self {
            turn_limit: Self::DEFAULT_TURN_LIMIT,
            starting_gold: Self::DEFAULT_STARTING_GOLD,
            attribute_points: Self::DEFAULT_ATTRIBUTE_POINTS,
            attribute_min: Self::DEFAULT_ATTRIBUTE_MIN,
            attribute_max: Self::DEFAULT_ATTRIBUTE_MAX,
            sell_divisor: Self::DEFAULT_SELL_DIVISOR,
        }
    }

    pub fn with_turn_limit(turn_limit: u32) -> Self {
        Self {
            turn_limit,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
