//! Position values and the gapped renumbering policy.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intra-column ordering key.
///
/// Positions are neither unique nor contiguous; they only order cards that
/// share a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(u64);

impl Position {
    /// Wraps a raw position value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw position value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gapped integer numbering used when columns are renumbered.
///
/// Cards are numbered `step, 2 * step, 3 * step, ...`, clamped at `ceiling`.
/// Columns longer than `ceiling / step` cards therefore end in a run of equal
/// positions; order is still carried by the column sequence.
///
/// # Examples
///
/// ```
/// use taskdeck::board::domain::PositionPolicy;
///
/// let policy = PositionPolicy::default();
/// assert_eq!(policy.position_for(0).value(), 1000);
/// assert_eq!(policy.position_for(5000).value(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPositionPolicy")]
pub struct PositionPolicy {
    step: u64,
    ceiling: u64,
}

impl Default for PositionPolicy {
    fn default() -> Self {
        Self {
            step: Self::DEFAULT_STEP,
            ceiling: Self::DEFAULT_CEILING,
        }
    }
}

/// Unvalidated configuration shape; absent fields take the defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawPositionPolicy {
    step: u64,
    ceiling: u64,
}

impl Default for RawPositionPolicy {
    fn default() -> Self {
        Self {
            step: PositionPolicy::DEFAULT_STEP,
            ceiling: PositionPolicy::DEFAULT_CEILING,
        }
    }
}

impl TryFrom<RawPositionPolicy> for PositionPolicy {
    type Error = BoardDomainError;

    fn try_from(raw: RawPositionPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.step, raw.ceiling)
    }
}

impl PositionPolicy {
    /// Default gap between neighbouring cards.
    pub const DEFAULT_STEP: u64 = 1000;
    /// Default position ceiling.
    pub const DEFAULT_CEILING: u64 = 1_000_000;

    /// Creates a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidPositionPolicy`] when `step` is
    /// zero or `ceiling` is below `step`.
    pub const fn new(step: u64, ceiling: u64) -> Result<Self, BoardDomainError> {
        if step == 0 || ceiling < step {
            return Err(BoardDomainError::InvalidPositionPolicy { step, ceiling });
        }
        Ok(Self { step, ceiling })
    }

    /// Gap between consecutive renumbered positions.
    #[must_use]
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// Largest position the renumbering will assign.
    #[must_use]
    pub const fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Decodes a policy from JSON configuration, filling absent fields with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::MalformedPositionPolicy`] when the JSON
    /// cannot be decoded, or [`BoardDomainError::InvalidPositionPolicy`] when
    /// the decoded values are unusable.
    pub fn from_json(raw: &str) -> Result<Self, BoardDomainError> {
        let decoded: RawPositionPolicy = serde_json::from_str(raw)
            .map_err(|err| BoardDomainError::MalformedPositionPolicy(err.to_string()))?;
        Self::try_from(decoded)
    }

    /// Position assigned to the card at `index` of a renumbered column.
    #[must_use]
    pub fn position_for(&self, index: usize) -> Position {
        let ordinal = u64::try_from(index)
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        Position(ordinal.saturating_mul(self.step).min(self.ceiling))
    }

    /// Position for a card appended after `highest`, or the first slot when
    /// the column is empty.
    ///
    /// Creation does not clamp to the ceiling; only renumbering does.
    #[must_use]
    pub fn next_after(&self, highest: Option<Position>) -> Position {
        highest.map_or(Position(self.step), |current| {
            Position(current.0.saturating_add(self.step))
        })
    }
}
