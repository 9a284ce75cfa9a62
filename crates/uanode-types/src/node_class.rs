use std::fmt;

/// The protocol classification of a node, with the protocol's bit values.
///
/// The class is fixed when a handle is constructed and determines which
/// attribute subset is semantically meaningful. The node layer does not
/// enforce that subset; reading an attribute a class does not carry is
/// delegated to the manager, which reports failure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    Default,
)]
#[repr(u32)]
pub enum NodeClass {
    /// No class information.
    #[default]
    Unspecified = 0,
    Object = 1,
    Variable = 2,
    Method = 4,
    ObjectType = 8,
    VariableType = 16,
    ReferenceType = 32,
    DataType = 64,
    View = 128,
}

impl NodeClass {
    /// The protocol's numeric value for this class.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decode a protocol numeric value.
    ///
    /// Returns `None` for anything that is not exactly one class value.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Self::Unspecified),
            1 => Some(Self::Object),
            2 => Some(Self::Variable),
            4 => Some(Self::Method),
            8 => Some(Self::ObjectType),
            16 => Some(Self::VariableType),
            32 => Some(Self::ReferenceType),
            64 => Some(Self::DataType),
            128 => Some(Self::View),
            _ => None,
        }
    }

    /// The protocol's name for this class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unspecified => "Unspecified",
            Self::Object => "Object",
            Self::Variable => "Variable",
            Self::Method => "Method",
            Self::ObjectType => "ObjectType",
            Self::VariableType => "VariableType",
            Self::ReferenceType => "ReferenceType",
            Self::DataType => "DataType",
            Self::View => "View",
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for NodeClass {
    type Error = InvalidNodeClass;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_bits(value).ok_or(InvalidNodeClass(value))
    }
}

/// Error returned when a numeric value is not a valid node class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNodeClass(pub u32);

impl fmt::Display for InvalidNodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid node class value {}", self.0)
    }
}

impl std::error::Error for InvalidNodeClass {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_round_trip() {
        for class in [
            NodeClass::Unspecified,
            NodeClass::Object,
            NodeClass::Variable,
            NodeClass::Method,
            NodeClass::ObjectType,
            NodeClass::VariableType,
            NodeClass::ReferenceType,
            NodeClass::DataType,
            NodeClass::View,
        ] {
            assert_eq!(NodeClass::from_bits(class.bits()), Some(class));
        }
    }

    #[test]
    fn test_protocol_values() {
        assert_eq!(NodeClass::Object.bits(), 1);
        assert_eq!(NodeClass::Variable.bits(), 2);
        assert_eq!(NodeClass::Method.bits(), 4);
        assert_eq!(NodeClass::View.bits(), 128);
    }

    #[test]
    fn test_combined_bits_rejected() {
        assert_eq!(NodeClass::from_bits(3), None);
        assert_eq!(NodeClass::try_from(255), Err(InvalidNodeClass(255)));
    }

    #[test]
    fn test_default_is_unspecified() {
        assert_eq!(NodeClass::default(), NodeClass::Unspecified);
    }
}
