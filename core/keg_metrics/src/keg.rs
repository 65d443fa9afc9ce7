//! # Keg standards
//!
//! Static configuration for every supported keg standard:
//!
//! | Label  | Volume (L) | Kegs per pallet |
//! |--------|-----------:|----------------:|
//! | `20L`  | 20         | 24              |
//! | `30L`  | 30         | 24              |
//! | `30EE` | 30         | 18              |
//! | `PET`  | 30         | 16              |
//!
//! The table is closed: there are no user-defined keg types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A physical keg standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KegType {
    #[serde(rename = "20L")]
    K20L,
    #[serde(rename = "30L")]
    K30L,
    #[serde(rename = "30EE")]
    K30EE,
    #[serde(rename = "PET")]
    Pet,
}

/// Fixed attributes of a [`KegType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct KegSpec {
    /// Litres held by one filled keg.
    pub volume_litres: u32,
    /// Kegs on one full pallet. Never zero.
    pub per_pallet: u32,
}

impl KegType {
    /// Every keg standard, in display order.
    pub const ALL: [KegType; 4] = [Self::K20L, Self::K30L, Self::K30EE, Self::Pet];

    pub const fn spec(self) -> KegSpec {
        match self {
            Self::K20L => KegSpec {
                volume_litres: 20,
                per_pallet: 24,
            },
            Self::K30L => KegSpec {
                volume_litres: 30,
                per_pallet: 24,
            },
            Self::K30EE => KegSpec {
                volume_litres: 30,
                per_pallet: 18,
            },
            Self::Pet => KegSpec {
                volume_litres: 30,
                per_pallet: 16,
            },
        }
    }

    pub const fn volume_litres(self) -> u32 {
        self.spec().volume_litres
    }

    pub const fn per_pallet(self) -> u32 {
        self.spec().per_pallet
    }

    /// Label used on the wire and in prompts (`"20L"`, `"PET"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::K20L => "20L",
            Self::K30L => "30L",
            Self::K30EE => "30EE",
            Self::Pet => "PET",
        }
    }
}

impl fmt::Display for KegType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KegType {
    type Err = ValidationError;

    /// Labels match case-insensitively after trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ValidationError::UnknownKegType(label.to_string()))
    }
}
