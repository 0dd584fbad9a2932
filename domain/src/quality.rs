use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

/// Caller-specified fidelity/size trade-off in [0, 100]. Zero means "leave
/// the encoder at its format default".
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quality(u8);

impl Quality {
    pub const DEFAULT: Self = Self(0);

    pub fn new(value: u8) -> DomainResult<Self> {
        if value > 100 {
            return Err(DomainError::InvalidQuality(format!(
                "quality {value} is outside 0-100"
            )));
        }
        Ok(Self(value))
    }

    pub fn parse(value: i64) -> DomainResult<Self> {
        let narrowed = u8::try_from(value).map_err(|_| {
            DomainError::InvalidQuality(format!("quality {value} is outside 0-100"))
        })?;
        Self::new(narrowed)
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == 0
    }

    /// PNG effort/size mapping: `clamp(10 - quality/11, 1, 9)`. Higher input
    /// quality yields a lower numeric compression level. The formula is a
    /// compatibility contract and must not be reshaped.
    #[must_use]
    pub fn png_compression_level(&self) -> u8 {
        (10 - self.0 / 11).clamp(1, 9)
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
