use uanode_error::StatusCode;

use crate::{DateTime, Variant};

/// The structured result of an attribute read: the value itself, its quality
/// status, and optional source/server timestamps.
///
/// `Default` is an empty value with a good status and no timestamps, the
/// starting point a best-effort read falls back to.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, Default)]
pub struct DataValue {
    pub value: Variant,
    pub status: StatusCode,
    pub source_timestamp: Option<DateTime>,
    pub server_timestamp: Option<DateTime>,
}

impl DataValue {
    /// Wrap a value with a good status and no timestamps.
    #[must_use]
    pub fn new(value: impl Into<Variant>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set the quality status.
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Set the source timestamp.
    #[must_use]
    pub fn with_source_timestamp(mut self, stamp: DateTime) -> Self {
        self.source_timestamp = Some(stamp);
        self
    }

    /// Set the server timestamp.
    #[must_use]
    pub fn with_server_timestamp(mut self, stamp: DateTime) -> Self {
        self.server_timestamp = Some(stamp);
        self
    }

    /// Whether the quality status is good.
    #[inline]
    #[must_use]
    pub const fn is_good(&self) -> bool {
        self.status.is_good()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_good() {
        let dv = DataValue::default();
        assert!(dv.value.is_empty());
        assert!(dv.is_good());
        assert_eq!(dv.source_timestamp, None);
        assert_eq!(dv.server_timestamp, None);
    }

    #[test]
    fn test_builders() {
        let stamp = DateTime::from_unix_seconds(1_700_000_000);
        let dv = DataValue::new(42u32)
            .with_status(StatusCode::UNCERTAIN)
            .with_source_timestamp(stamp);
        assert_eq!(dv.value.as_u32(), Some(42));
        assert!(!dv.is_good());
        assert_eq!(dv.source_timestamp, Some(stamp));
    }
}
