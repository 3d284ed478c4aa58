/// Rules configuration constants and tunable parameters.
///
/// Defaults follow NFHS (high-school) rules: 12-minute quarters, three
/// timeouts per half, kickoffs from the kicking team's 40, tries from the 3.
/// A free kick after a safety is taken from the kicking team's 20.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Length of a regulation quarter in seconds.
    pub quarter_length_secs: u16,
    /// Timeouts each team receives at the start of each half.
    pub timeouts_per_half: u8,
    /// Yards from the kicking team's goal line to the kickoff spot.
    pub kickoff_yard_line: u8,
    /// Yards from the kicking team's goal line to the free kick after a safety.
    pub safety_kick_yard_line: u8,
    /// Yards from the goal line to the spot of a try.
    pub try_yard_line: u8,
    /// Yards from the goal line where the ball is placed after a punt or
    /// turnover touchback.
    pub touchback_yard_line: u8,
    /// Same, for a kickoff downed in the receiving team's end zone.
    pub kickoff_touchback_yard_line: u8,
    /// Yards from the goal line where each overtime series starts.
    pub overtime_yard_line: u8,
    pub touchdown_points: u8,
    pub field_goal_points: u8,
    pub safety_points: u8,
    pub extra_point_points: u8,
    pub two_point_points: u8,
}

impl RulesConfig {
    // ===== compile-time constants =====
    /// Yards needed for a fresh set of downs.
    pub const FIRST_DOWN_YARDS: u8 = 10;
    /// Timeouts each team gets per overtime period.
    pub const OVERTIME_TIMEOUTS: u8 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_QUARTER_LENGTH_SECS: u16 = 12 * 60;
    pub const DEFAULT_TIMEOUTS_PER_HALF: u8 = 3;
    pub const DEFAULT_KICKOFF_YARD_LINE: u8 = 40;
    pub const DEFAULT_SAFETY_KICK_YARD_LINE: u8 = 20;
    pub const DEFAULT_TRY_YARD_LINE: u8 = 3;
    pub const DEFAULT_TOUCHBACK_YARD_LINE: u8 = 20;
    pub const DEFAULT_KICKOFF_TOUCHBACK_YARD_LINE: u8 = 25;
    pub const DEFAULT_OVERTIME_YARD_LINE: u8 = 10;

    pub const fn new() -> Self {
        Self {
            quarter_length_secs: Self::DEFAULT_QUARTER_LENGTH_SECS,
            timeouts_per_half: Self::DEFAULT_TIMEOUTS_PER_HALF,
            kickoff_yard_line: Self::DEFAULT_KICKOFF_YARD_LINE,
            safety_kick_yard_line: Self::DEFAULT_SAFETY_KICK_YARD_LINE,
            try_yard_line: Self::DEFAULT_TRY_YARD_LINE,
            touchback_yard_line: Self::DEFAULT_TOUCHBACK_YARD_LINE,
            kickoff_touchback_yard_line: Self::DEFAULT_KICKOFF_TOUCHBACK_YARD_LINE,
            overtime_yard_line: Self::DEFAULT_OVERTIME_YARD_LINE,
            touchdown_points: 6,
            field_goal_points: 3,
            safety_points: 2,
            extra_point_points: 1,
            two_point_points: 2,
        }
    }

    pub const fn with_quarter_length(quarter_length_secs: u16) -> Self {
        let mut config = Self::new();
        config.quarter_length_secs = quarter_length_secs;
        config
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
