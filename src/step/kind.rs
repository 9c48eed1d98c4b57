//! Test mode and eye selection.
//!
//! Both are closed two-variant enums. The raw integer constants exist only
//! for interop with hosts that exchange framework-style integer codes.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which psychophysical dimension a step measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum EyesightTestMode {
    /// Minimum resolvable gap size in the ring.
    VisualAcuity,
    /// Minimum resolvable contrast of the ring.
    ContrastAcuity,
}

impl EyesightTestMode {
    /// Both modes in declaration order.
    pub const ALL: [Self; 2] = [Self::VisualAcuity, Self::ContrastAcuity];

    /// Raw integer constant for this mode.
    #[inline]
    pub const fn raw(self) -> i64 {
        match self {
            Self::VisualAcuity => 0,
            Self::ContrastAcuity => 1,
        }
    }

    /// Snake-case name, as used in TOML.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VisualAcuity => "visual_acuity",
            Self::ContrastAcuity => "contrast_acuity",
        }
    }
}

impl TryFrom<i64> for EyesightTestMode {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::VisualAcuity),
            1 => Ok(Self::ContrastAcuity),
            other => Err(ConfigError::InvalidMode(other)),
        }
    }
}

impl fmt::Display for EyesightTestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which eye a step applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum EyesightTestEye {
    /// Right eye.
    Right,
    /// Left eye.
    Left,
}

impl EyesightTestEye {
    /// Both eyes in declaration order.
    pub const ALL: [Self; 2] = [Self::Right, Self::Left];

    /// Raw integer constant for this eye.
    #[inline]
    pub const fn raw(self) -> i64 {
        match self {
            Self::Right => 0,
            Self::Left => 1,
        }
    }

    /// Snake-case name, as used in TOML.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }

    /// The opposite eye.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

impl TryFrom<i64> for EyesightTestEye {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Right),
            1 => Ok(Self::Left),
            other => Err(ConfigError::InvalidEye(other)),
        }
    }
}

impl fmt::Display for EyesightTestEye {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
