//! Protocol value model for the uanode address-space layer.
//!
//! Everything here is a plain value type: identifiers, qualified names, the
//! typed value container, the structured read result, the attribute
//! enumeration with its kind-to-type table, and the per-class creation
//! payloads. No type in this crate talks to an address space; that layer
//! lives in `uanode-core`.

pub mod attribute;
pub mod attributes;
pub mod data_value;
pub mod date_time;
pub mod localized_text;
pub mod node_class;
pub mod node_id;
pub mod ns0;
pub mod qualified_name;
pub mod variant;

pub use attribute::{AttributeId, AttributeValue, InvalidAttributeId};
pub use attributes::{
    AccessLevel, EventNotifier, MethodAttributes, ObjectAttributes, VariableAttributes,
    ViewAttributes, value_rank,
};
pub use data_value::DataValue;
pub use date_time::DateTime;
pub use localized_text::LocalizedText;
pub use node_class::{InvalidNodeClass, NodeClass};
pub use node_id::{ExpandedNodeId, Identifier, NodeId};
pub use qualified_name::QualifiedName;
pub use variant::Variant;
