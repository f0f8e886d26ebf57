//! Types for effect size representation

use std::fmt;

/// Strength of an effect following Cohen's conventions for h
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EffectStrength {
    /// |h| < 0.20
    Trivial,
    /// 0.20 <= |h| < 0.50
    Small,
    /// 0.50 <= |h| < 0.80
    Medium,
    /// |h| >= 0.80
    Large,
}

impl EffectStrength {
    /// Lower edge of the Small band
    pub const SMALL: f64 = 0.20;
    /// Lower edge of the Medium band
    pub const MEDIUM: f64 = 0.50;
    /// Lower edge of the Large band
    pub const LARGE: f64 = 0.80;

    /// Classify an effect by its absolute magnitude
    pub fn from_magnitude(magnitude: f64) -> Self {
        let abs_magnitude = magnitude.abs();

        if abs_magnitude < Self::SMALL {
            Self::Trivial
        } else if abs_magnitude < Self::MEDIUM {
            Self::Small
        } else if abs_magnitude < Self::LARGE {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Label written to the report
    pub fn label(&self) -> &'static str {
        match self {
            Self::Trivial => "Trivial",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Whether the difference counts as meaningful
    pub fn is_meaningful(&self) -> bool {
        !matches!(self, Self::Trivial)
    }
}

impl fmt::Display for EffectStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An effect size measurement with magnitude and strength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSize {
    /// Signed effect size, positive when the first group is higher
    pub magnitude: f64,
    /// Strength of the absolute magnitude
    pub strength: EffectStrength,
}

impl EffectSize {
    /// Create a new effect size
    pub fn new(magnitude: f64) -> Self {
        Self {
            magnitude,
            strength: EffectStrength::from_magnitude(magnitude),
        }
    }

    /// Get the absolute magnitude
    pub fn abs_magnitude(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Check if the effect favours the second group
    pub fn favors_second(&self) -> bool {
        self.magnitude < 0.0
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cohen's h: {:.3} ({})", self.magnitude, self.strength)
    }
}
