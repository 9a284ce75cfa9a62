//! Public API facade for the uanode address-space layer.
//!
//! Everything an embedder needs is re-exported here: the value model from
//! `uanode-types`, the status and error types from `uanode-error`, and the
//! manager traits, node handle, and in-memory manager from `uanode-core`.
//!
//! ```
//! use uanode::{MemAddressSpace, NodeId, ObjectAttributes, VariableAttributes, Variant};
//!
//! let space = MemAddressSpace::new();
//! let ns = space.register_namespace("urn:example:boiler");
//! let objects = space.objects_folder();
//!
//! let boiler = objects
//!     .add_object(NodeId::numeric(ns, 1), "Boiler", ObjectAttributes::named("Boiler"))
//!     .expect("add boiler");
//! let temperature = boiler
//!     .add_variable(
//!         NodeId::numeric(ns, 2),
//!         "Temperature",
//!         VariableAttributes::named("Temperature", 20.0f64),
//!     )
//!     .expect("add temperature");
//!
//! let found = objects
//!     .resolve_path(&["1:Boiler", "Temperature"])
//!     .expect("resolve");
//! assert_eq!(found[0].id(), temperature.id());
//! assert_eq!(found[0].value(), Variant::Double(20.0));
//! ```

pub use uanode_core::{
    AddressSpace, AttributeReader, AttributeWriter, ChildVisitor, MemAddressSpace, MethodHandler,
    NS0_URI, Node, Reference, ServiceResult, collect_references, find_by_name,
};
pub use uanode_error::{NodeError, Result, StatusCode};
pub use uanode_types::{
    AccessLevel, AttributeId, AttributeValue, DataValue, DateTime, EventNotifier, ExpandedNodeId,
    Identifier, InvalidAttributeId, InvalidNodeClass, LocalizedText, MethodAttributes, NodeClass,
    NodeId, ObjectAttributes, QualifiedName, VariableAttributes, Variant, ViewAttributes, ns0,
    value_rank,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_create_and_read_back() {
        let space = MemAddressSpace::new();
        let objects = space.objects_folder();
        let tank = objects
            .add_object(NodeId::numeric(1, 1), "Tank", ObjectAttributes::named("Tank"))
            .expect("add object");
        assert_eq!(tank.display_name(), LocalizedText::from_text("Tank"));
        assert_eq!(tank.browse_name(), QualifiedName::new(1, "Tank"));
        assert_eq!(tank.node_class(), NodeClass::Object);
    }

    #[test]
    fn test_public_api_error_carries_status() {
        let space = MemAddressSpace::new();
        let objects = space.objects_folder();
        let err = objects.find_child("Nowhere").expect_err("no such child");
        assert_eq!(err.status(), StatusCode::BAD_NO_MATCH);
        assert_eq!(err.to_string(), "no child matching 'Nowhere'");
    }

    #[test]
    fn test_public_api_well_known_ids_exported() {
        assert_eq!(ns0::OBJECTS_FOLDER, NodeId::numeric(0, 85));
        assert_eq!(value_rank::SCALAR, -1);
        assert!(AccessLevel::default().contains(AccessLevel::CURRENT_READ));
    }
}
