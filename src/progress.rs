use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion percentage for the card at `position` against a daily `quota`.
///
/// The quota is independent of how many bills are loaded, so a short deck may
/// never reach 100%.
pub fn compute_percent(position: usize, quota: u32) -> Result<f64> {
    if quota == 0 {
        return Err(Error::InvalidConfiguration(
            "quota must be a positive integer".to_string(),
        ));
    }

    let seen = (position as f64) + 1.0;
    Ok((seen * 100.0 / f64::from(quota)).clamp(0.0, 100.0))
}

/// Daily progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based number of the current card
    pub current: usize,
    pub quota: u32,
    pub percent: f64,
    pub complete: bool,
}

impl Progress {
    pub fn new(position: usize, quota: u32) -> Result<Self> {
        let percent = compute_percent(position, quota)?;
        Ok(Self {
            current: position + 1,
            quota,
            percent,
            complete: percent >= 100.0,
        })
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Daily Progress: {} / {} Bills", self.current, self.quota)
    }
}
