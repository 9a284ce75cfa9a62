use std::fmt;

use uanode_error::{NodeError, Result};

use crate::{DataValue, LocalizedText, NodeClass, NodeId, QualifiedName, Variant};

/// The protocol attribute enumeration, with the protocol's numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u32)]
pub enum AttributeId {
    NodeId = 1,
    NodeClass = 2,
    BrowseName = 3,
    DisplayName = 4,
    Description = 5,
    WriteMask = 6,
    UserWriteMask = 7,
    IsAbstract = 8,
    Symmetric = 9,
    InverseName = 10,
    ContainsNoLoops = 11,
    EventNotifier = 12,
    Value = 13,
    DataType = 14,
    ValueRank = 15,
    ArrayDimensions = 16,
    AccessLevel = 17,
    UserAccessLevel = 18,
    MinimumSamplingInterval = 19,
    Historizing = 20,
    Executable = 21,
    UserExecutable = 22,
}

impl AttributeId {
    /// The protocol's numeric id for this attribute.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// The protocol's name for this attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NodeId => "NodeId",
            Self::NodeClass => "NodeClass",
            Self::BrowseName => "BrowseName",
            Self::DisplayName => "DisplayName",
            Self::Description => "Description",
            Self::WriteMask => "WriteMask",
            Self::UserWriteMask => "UserWriteMask",
            Self::IsAbstract => "IsAbstract",
            Self::Symmetric => "Symmetric",
            Self::InverseName => "InverseName",
            Self::ContainsNoLoops => "ContainsNoLoops",
            Self::EventNotifier => "EventNotifier",
            Self::Value => "Value",
            Self::DataType => "DataType",
            Self::ValueRank => "ValueRank",
            Self::ArrayDimensions => "ArrayDimensions",
            Self::AccessLevel => "AccessLevel",
            Self::UserAccessLevel => "UserAccessLevel",
            Self::MinimumSamplingInterval => "MinimumSamplingInterval",
            Self::Historizing => "Historizing",
            Self::Executable => "Executable",
            Self::UserExecutable => "UserExecutable",
        }
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for AttributeId {
    type Error = InvalidAttributeId;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::NodeId,
            2 => Self::NodeClass,
            3 => Self::BrowseName,
            4 => Self::DisplayName,
            5 => Self::Description,
            6 => Self::WriteMask,
            7 => Self::UserWriteMask,
            8 => Self::IsAbstract,
            9 => Self::Symmetric,
            10 => Self::InverseName,
            11 => Self::ContainsNoLoops,
            12 => Self::EventNotifier,
            13 => Self::Value,
            14 => Self::DataType,
            15 => Self::ValueRank,
            16 => Self::ArrayDimensions,
            17 => Self::AccessLevel,
            18 => Self::UserAccessLevel,
            19 => Self::MinimumSamplingInterval,
            20 => Self::Historizing,
            21 => Self::Executable,
            22 => Self::UserExecutable,
            _ => return Err(InvalidAttributeId(value)),
        })
    }
}

/// Error returned when a numeric value is not a protocol attribute id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidAttributeId(pub u32);

impl fmt::Display for InvalidAttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid attribute id {}", self.0)
    }
}

impl std::error::Error for InvalidAttributeId {}

// ---------------------------------------------------------------------------
// AttributeValue — the kind-to-type table
// ---------------------------------------------------------------------------

/// A Rust type an attribute decodes to and encodes from.
///
/// This trait is the attribute kind-to-type table: one generic read/write
/// pair in the node layer is parameterized over it instead of hand-writing
/// twenty near-identical accessor bodies.
///
/// Every implementation except [`DataValue`] rejects a read whose quality
/// status is non-good (there is no trustworthy value to decode) and then
/// projects the contained [`Variant`]; a wrong variant is a
/// [`NodeError::AttributeType`] decode error. The `DataValue` implementation
/// passes the whole container through, quality and timestamps included.
pub trait AttributeValue: Default + Sized {
    /// Decode the read result of `attribute`.
    fn from_attribute(attribute: AttributeId, value: DataValue) -> Result<Self>;

    /// Encode into the container an attribute write carries.
    fn into_attribute(self) -> DataValue;
}

fn quality_checked(attribute: AttributeId, value: DataValue) -> Result<DataValue> {
    value.status.check(attribute.name())?;
    Ok(value)
}

fn mismatch(attribute: AttributeId, actual: &Variant) -> NodeError {
    NodeError::AttributeType {
        attribute: attribute.name(),
        actual: actual.type_name(),
    }
}

macro_rules! scalar_attribute_value {
    ($($ty:ty => $projection:ident),+ $(,)?) => {
        $(
            impl AttributeValue for $ty {
                fn from_attribute(attribute: AttributeId, value: DataValue) -> Result<Self> {
                    let value = quality_checked(attribute, value)?;
                    value
                        .value
                        .$projection()
                        .ok_or_else(|| mismatch(attribute, &value.value))
                }

                fn into_attribute(self) -> DataValue {
                    DataValue::new(self)
                }
            }
        )+
    };
}

scalar_attribute_value! {
    bool => as_bool,
    u8 => as_u8,
    u32 => as_u32,
    i32 => as_i32,
    f64 => as_f64,
}

impl AttributeValue for QualifiedName {
    fn from_attribute(attribute: AttributeId, value: DataValue) -> Result<Self> {
        let value = quality_checked(attribute, value)?;
        match value.value {
            Variant::QualifiedName(v) => Ok(v),
            other => Err(mismatch(attribute, &other)),
        }
    }

    fn into_attribute(self) -> DataValue {
        DataValue::new(self)
    }
}

impl AttributeValue for LocalizedText {
    fn from_attribute(attribute: AttributeId, value: DataValue) -> Result<Self> {
        let value = quality_checked(attribute, value)?;
        match value.value {
            Variant::LocalizedText(v) => Ok(v),
            other => Err(mismatch(attribute, &other)),
        }
    }

    fn into_attribute(self) -> DataValue {
        DataValue::new(self)
    }
}

impl AttributeValue for NodeId {
    fn from_attribute(attribute: AttributeId, value: DataValue) -> Result<Self> {
        let value = quality_checked(attribute, value)?;
        match value.value {
            Variant::NodeId(v) => Ok(v),
            other => Err(mismatch(attribute, &other)),
        }
    }

    fn into_attribute(self) -> DataValue {
        DataValue::new(self)
    }
}

impl AttributeValue for NodeClass {
    /// The class travels as an Int32 enumeration value.
    fn from_attribute(attribute: AttributeId, value: DataValue) -> Result<Self> {
        let value = quality_checked(attribute, value)?;
        match value.value {
            Variant::Int32(v) => u32::try_from(v)
                .ok()
                .and_then(Self::from_bits)
                .ok_or_else(|| mismatch(attribute, &Variant::Int32(v))),
            other => Err(mismatch(attribute, &other)),
        }
    }

    fn into_attribute(self) -> DataValue {
        DataValue::new(Variant::Int32(self.bits() as i32))
    }
}

impl AttributeValue for Variant {
    fn from_attribute(attribute: AttributeId, value: DataValue) -> Result<Self> {
        let value = quality_checked(attribute, value)?;
        Ok(value.value)
    }

    fn into_attribute(self) -> DataValue {
        DataValue::new(self)
    }
}

impl AttributeValue for DataValue {
    /// Passes the container through untouched, non-good quality included.
    fn from_attribute(_attribute: AttributeId, value: DataValue) -> Result<Self> {
        Ok(value)
    }

    fn into_attribute(self) -> DataValue {
        self
    }
}

#[cfg(test)]
mod tests {
    use uanode_error::StatusCode;

    use super::*;

    #[test]
    fn test_protocol_ids() {
        assert_eq!(AttributeId::NodeId.id(), 1);
        assert_eq!(AttributeId::BrowseName.id(), 3);
        assert_eq!(AttributeId::Value.id(), 13);
        assert_eq!(AttributeId::UserExecutable.id(), 22);
    }

    #[test]
    fn test_try_from_round_trip() {
        for raw in 1..=22u32 {
            let attribute = AttributeId::try_from(raw).expect("valid id");
            assert_eq!(attribute.id(), raw);
        }
        assert_eq!(AttributeId::try_from(0), Err(InvalidAttributeId(0)));
        assert_eq!(AttributeId::try_from(23), Err(InvalidAttributeId(23)));
    }

    #[test]
    fn test_scalar_decode_and_mismatch() {
        let decoded =
            u32::from_attribute(AttributeId::WriteMask, DataValue::new(9u32)).expect("decode");
        assert_eq!(decoded, 9);

        let err = u32::from_attribute(AttributeId::WriteMask, DataValue::new(true))
            .expect_err("wrong variant");
        assert_eq!(
            err,
            NodeError::AttributeType {
                attribute: "WriteMask",
                actual: "Boolean",
            }
        );
    }

    #[test]
    fn test_bad_quality_rejected_for_scalars() {
        let dv = DataValue::new(true).with_status(StatusCode::BAD_NOT_READABLE);
        let err = bool::from_attribute(AttributeId::Historizing, dv).expect_err("bad quality");
        assert_eq!(err.status(), StatusCode::BAD_NOT_READABLE);
    }

    #[test]
    fn test_data_value_passes_bad_quality_through() {
        let dv = DataValue::new(7i32).with_status(StatusCode::BAD_NOT_READABLE);
        let decoded = DataValue::from_attribute(AttributeId::Value, dv.clone()).expect("container");
        assert_eq!(decoded, dv);
    }

    #[test]
    fn test_node_class_decode() {
        let dv = DataValue::new(Variant::Int32(2));
        assert_eq!(
            NodeClass::from_attribute(AttributeId::NodeClass, dv).expect("decode"),
            NodeClass::Variable
        );

        let dv = DataValue::new(Variant::Int32(3));
        assert!(NodeClass::from_attribute(AttributeId::NodeClass, dv).is_err());

        assert_eq!(
            NodeClass::View.into_attribute().value,
            Variant::Int32(128)
        );
    }

    #[test]
    fn test_owned_decodes() {
        let qn = QualifiedName::new(1, "Pump");
        let decoded =
            QualifiedName::from_attribute(AttributeId::BrowseName, DataValue::new(qn.clone()))
                .expect("decode");
        assert_eq!(decoded, qn);

        let text = LocalizedText::new("en", "Pump");
        let decoded =
            LocalizedText::from_attribute(AttributeId::DisplayName, DataValue::new(text.clone()))
                .expect("decode");
        assert_eq!(decoded, text);
    }
}
