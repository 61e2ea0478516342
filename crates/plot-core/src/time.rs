//! Seconds + nanoseconds timestamps.
//!
//! Receive times and header stamps both use this representation. A `Time` is
//! always normalized so that `nsec < 1_000_000_000`; differences between two
//! times are expressed as a (possibly negative) `Time` with the same invariant.

use core::cmp::Ordering;
use core::fmt;

use crate::{PlotError, PlotResult, Real};

pub const NSEC_PER_SEC: u32 = 1_000_000_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawTime"))]
pub struct Time {
    pub sec: i64,
    pub nsec: u32,
}

impl Time {
    /// Build a time, carrying whole seconds out of `nsec`. Seconds saturate at the `i64` range.
    pub fn new(sec: i64, nsec: u32) -> Self {
        Self {
            sec: sec.saturating_add(i64::from(nsec / NSEC_PER_SEC)),
            nsec: nsec % NSEC_PER_SEC,
        }
    }

    pub fn from_sec(seconds: Real) -> PlotResult<Self> {
        if !seconds.is_finite() {
            return Err(PlotError::NonFinite {
                what: "seconds",
                value: seconds,
            });
        }
        let whole = seconds.floor();
        if whole < i64::MIN as Real || whole > i64::MAX as Real {
            return Err(PlotError::TimeOutOfRange { what: "seconds" });
        }
        let nsec = ((seconds - whole) * NSEC_PER_SEC as Real).round() as u32;
        Ok(Self::new(whole as i64, nsec))
    }

    pub fn to_sec(self) -> Real {
        self.sec as Real + self.nsec as Real / NSEC_PER_SEC as Real
    }

    pub fn checked_sub(self, rhs: Time) -> Option<Time> {
        let mut sec = self.sec.checked_sub(rhs.sec)?;
        let nsec = match self.nsec.checked_sub(rhs.nsec) {
            Some(nsec) => nsec,
            None => {
                sec = sec.checked_sub(1)?;
                self.nsec.checked_add(NSEC_PER_SEC)?.checked_sub(rhs.nsec)?
            }
        };
        Some(Time { sec, nsec })
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sec
            .cmp(&other.sec)
            .then_with(|| self.nsec.cmp(&other.nsec))
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Wire shape of a timestamp; normalized through [`Time::new`] on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTime {
    sec: i64,
    nsec: u32,
}

#[cfg(feature = "serde")]
impl From<RawTime> for Time {
    fn from(raw: RawTime) -> Self {
        Time::new(raw.sec, raw.nsec)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.sec, self.nsec)
    }
}
