use std::time::{SystemTime, UNIX_EPOCH};

/// A protocol timestamp: 100-nanosecond ticks since 1601-01-01 00:00 UTC.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    Default,
)]
#[repr(transparent)]
pub struct DateTime(i64);

impl DateTime {
    /// Tick count of the Unix epoch (1970-01-01) in this encoding.
    pub const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;

    /// Ticks per second (tick = 100 ns).
    pub const TICKS_PER_SECOND: i64 = 10_000_000;

    /// Create from a raw tick count.
    #[inline]
    #[must_use]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Get the raw tick count.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Create from whole seconds since the Unix epoch.
    #[must_use]
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self(Self::UNIX_EPOCH_TICKS + seconds * Self::TICKS_PER_SECOND)
    }

    /// Whole seconds since the Unix epoch, truncating sub-second ticks.
    #[must_use]
    pub const fn as_unix_seconds(self) -> i64 {
        (self.0 - Self::UNIX_EPOCH_TICKS) / Self::TICKS_PER_SECOND
    }

    /// The current wall-clock time. A system clock before 1970 reads as the
    /// Unix epoch.
    #[must_use]
    pub fn now() -> Self {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(Self(Self::UNIX_EPOCH_TICKS), |elapsed| {
                let seconds = i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX / 2);
                let sub_ticks = i64::from(elapsed.subsec_nanos() / 100);
                Self(Self::UNIX_EPOCH_TICKS + seconds * Self::TICKS_PER_SECOND + sub_ticks)
            })
    }
}
