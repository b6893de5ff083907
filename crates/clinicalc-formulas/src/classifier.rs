use clinicalc_core::models::risk::RiskTier;

/// One threshold comparison used when banding a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cut {
    AtLeast(f64),
    Above(f64),
    AtMost(f64),
    Below(f64),
}

impl Cut {
    pub fn matches(self, value: f64) -> bool {
        match self {
            Self::AtLeast(t) => value >= t,
            Self::Above(t) => value > t,
            Self::AtMost(t) => value <= t,
            Self::Below(t) => value < t,
        }
    }
}

/// Return the outcome of the first band whose cut matches `value`, or
/// `otherwise` when none does. Bands are checked in order, so list them
/// from the most to the least extreme.
pub fn band<T: Copy>(value: f64, bands: &[(Cut, T)], otherwise: T) -> T {
    bands
        .iter()
        .find(|(cut, _)| cut.matches(value))
        .map(|(_, outcome)| *outcome)
        .unwrap_or(otherwise)
}

/// Score points for a value that is abnormal in either direction.
///
/// Each entry pairs a high cut and a low cut with the points awarded when
/// either matches; the first matching pair wins.
pub fn symmetric_points(value: f64, bands: &[(Cut, Cut, u32)]) -> u32 {
    bands
        .iter()
        .find(|(high, low, _)| high.matches(value) || low.matches(value))
        .map(|(_, _, points)| *points)
        .unwrap_or(0)
}

/// Outcome rate per tier. Formulas with fewer than four tiers leave the
/// unused slots at whatever is adjacent; they are never looked up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRates {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
    pub critical: f64,
}

impl TierRates {
    pub const fn rate(&self, tier: RiskTier) -> f64 {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Moderate => self.moderate,
            RiskTier::High => self.high,
            RiskTier::Critical => self.critical,
        }
    }
}

/// Look up a rate in a table indexed by an integer score. Scores past the
/// end of the table take the last entry; negative scores take the first.
pub fn indexed_rate(score: f64, table: &[f64]) -> f64 {
    let Some(last) = table.len().checked_sub(1) else {
        return 0.0;
    };
    let index = if score.is_nan() || score <= 0.0 {
        0
    } else {
        (score as usize).min(last)
    };
    table[index]
}

/// Count of true criteria, weighted.
pub fn weighted_sum(criteria: &[(bool, u32)]) -> u32 {
    criteria
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, weight)| weight)
        .sum()
}
