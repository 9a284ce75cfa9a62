use crate::{LocalizedText, NodeId, Variant, ns0};

/// Value-rank constants for the ValueRank attribute.
pub mod value_rank {
    /// Scalar or a one-dimensional array.
    pub const SCALAR_OR_ONE_DIMENSION: i32 = -3;
    /// Any rank.
    pub const ANY: i32 = -2;
    /// Scalar only.
    pub const SCALAR: i32 = -1;
    /// Array with one or more dimensions.
    pub const ONE_OR_MORE_DIMENSIONS: i32 = 0;
    /// One-dimensional array.
    pub const ONE_DIMENSION: i32 = 1;
}

bitflags::bitflags! {
    /// Access-level bits of the AccessLevel/UserAccessLevel attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessLevel: u8 {
        /// The current value can be read.
        const CURRENT_READ = 1;
        /// The current value can be written.
        const CURRENT_WRITE = 2;
        /// The value history can be read.
        const HISTORY_READ = 4;
        /// The value history can be written.
        const HISTORY_WRITE = 8;
        /// Semantic-change events are raised for the variable.
        const SEMANTIC_CHANGE = 16;
        /// The status component of the value can be written.
        const STATUS_WRITE = 32;
        /// The timestamp components of the value can be written.
        const TIMESTAMP_WRITE = 64;
    }
}

impl serde::Serialize for AccessLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for AccessLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Self::from_bits(bits)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid AccessLevel bits: {bits:#x}")))
    }
}

impl Default for AccessLevel {
    fn default() -> Self {
        Self::CURRENT_READ
    }
}

bitflags::bitflags! {
    /// Event-notifier bits of the EventNotifier attribute.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventNotifier: u8 {
        /// Events produced by the node can be subscribed to.
        const SUBSCRIBE_TO_EVENTS = 1;
        /// The event history of the node can be read.
        const HISTORY_READ = 4;
        /// The event history of the node can be written.
        const HISTORY_WRITE = 8;
    }
}

impl serde::Serialize for EventNotifier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for EventNotifier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Self::from_bits(bits).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid EventNotifier bits: {bits:#x}"))
        })
    }
}

impl Default for EventNotifier {
    fn default() -> Self {
        Self::empty()
    }
}

/// Creation payload for object and folder nodes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, Default)]
pub struct ObjectAttributes {
    pub display_name: LocalizedText,
    pub description: LocalizedText,
    pub write_mask: u32,
    pub user_write_mask: u32,
    pub event_notifier: EventNotifier,
}

impl ObjectAttributes {
    /// Default attributes carrying a display name.
    #[must_use]
    pub fn named(display_name: impl Into<LocalizedText>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }
}

/// Creation payload for variable nodes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VariableAttributes {
    pub display_name: LocalizedText,
    pub description: LocalizedText,
    pub write_mask: u32,
    pub user_write_mask: u32,
    pub value: Variant,
    pub data_type: NodeId,
    pub value_rank: i32,
    pub access_level: AccessLevel,
    pub user_access_level: AccessLevel,
    pub minimum_sampling_interval: f64,
    pub historizing: bool,
}

impl VariableAttributes {
    /// Default attributes carrying a display name and an initial value.
    #[must_use]
    pub fn named(display_name: impl Into<LocalizedText>, value: impl Into<Variant>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

impl Default for VariableAttributes {
    /// Protocol defaults: any value rank, current-read access, base data
    /// type.
    fn default() -> Self {
        Self {
            display_name: LocalizedText::default(),
            description: LocalizedText::default(),
            write_mask: 0,
            user_write_mask: 0,
            value: Variant::Empty,
            data_type: ns0::BASE_DATA_TYPE,
            value_rank: value_rank::ANY,
            access_level: AccessLevel::CURRENT_READ,
            user_access_level: AccessLevel::CURRENT_READ,
            minimum_sampling_interval: 0.0,
            historizing: false,
        }
    }
}

/// Creation payload for view nodes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, Default)]
pub struct ViewAttributes {
    pub display_name: LocalizedText,
    pub description: LocalizedText,
    pub write_mask: u32,
    pub user_write_mask: u32,
    pub contains_no_loops: bool,
    pub event_notifier: EventNotifier,
}

impl ViewAttributes {
    /// Default attributes carrying a display name.
    #[must_use]
    pub fn named(display_name: impl Into<LocalizedText>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }
}

/// Creation payload for method nodes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MethodAttributes {
    pub display_name: LocalizedText,
    pub description: LocalizedText,
    pub write_mask: u32,
    pub user_write_mask: u32,
    pub executable: bool,
    pub user_executable: bool,
}

impl MethodAttributes {
    /// Default attributes carrying a display name.
    #[must_use]
    pub fn named(display_name: impl Into<LocalizedText>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }
}

impl Default for MethodAttributes {
    /// Protocol default: methods are created executable.
    fn default() -> Self {
        Self {
            display_name: LocalizedText::default(),
            description: LocalizedText::default(),
            write_mask: 0,
            user_write_mask: 0,
            executable: true,
            user_executable: true,
        }
    }
}
