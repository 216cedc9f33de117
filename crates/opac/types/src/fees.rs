//! Fee amounts and the age-tiered fee schedule
//!
//! The schedule is a pure function of age. It is defined here, once,
//! and consumed by both the registration path and the age-adjustment
//! path so the two can never fall out of sync.

use serde::{Deserialize, Serialize};

/// Membership fee amount (generic currency units)
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Fee(pub u64);

impl Fee {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Fee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Fee {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Fee {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

/// Age-tiered membership fee schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeTier {
    /// Under 18
    Student,
    /// 18 through 64
    Regular,
    /// Over 64
    Senior,
}

impl FeeTier {
    /// The tier a member of the given age falls into
    pub fn for_age(age: u32) -> Self {
        if age < 18 {
            FeeTier::Student
        } else if age <= 64 {
            FeeTier::Regular
        } else {
            FeeTier::Senior
        }
    }

    /// The fee charged for this tier
    pub fn fee(&self) -> Fee {
        match self {
            FeeTier::Student => Fee::new(10),
            FeeTier::Regular => Fee::new(20),
            FeeTier::Senior => Fee::new(15),
        }
    }
}

impl std::fmt::Display for FeeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FeeTier::Student => "Student",
            FeeTier::Regular => "Regular",
            FeeTier::Senior => "Senior",
        };
        write!(f, "{}", label)
    }
}

/// Fee for a member of the given age
pub fn fee_for_age(age: u32) -> Fee {
    FeeTier::for_age(age).fee()
}
