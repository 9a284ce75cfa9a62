//! A scriptable manager for driving walk and probe behavior in tests.

use std::cell::Cell;
use std::collections::HashMap;

use uanode_error::StatusCode;
use uanode_types::{
    AttributeId, DataValue, ExpandedNodeId, MethodAttributes, NodeClass, NodeId, ObjectAttributes,
    QualifiedName, VariableAttributes, Variant, ViewAttributes, ns0,
};

use crate::space::{
    AddressSpace, AttributeReader, AttributeWriter, ChildVisitor, ServiceResult,
};

/// Fake manager whose walks and browse-name probes are scripted per test.
///
/// Structural operations are unsupported; tests that need them use
/// `MemAddressSpace`.
pub(crate) struct ScriptedSpace {
    edges: HashMap<NodeId, Vec<(NodeId, bool, NodeId)>>,
    browse_names: HashMap<NodeId, ServiceResult<QualifiedName>>,
    /// Returned by every walk before any visitor call when non-good.
    pub walk_status: StatusCode,
    /// Number of walk invocations issued so far.
    pub walk_calls: Cell<usize>,
}

impl ScriptedSpace {
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
            browse_names: HashMap::new(),
            walk_status: StatusCode::GOOD,
            walk_calls: Cell::new(0),
        }
    }

    /// Register a node with a readable browse name and no edges yet.
    pub fn add_node(&mut self, id: NodeId, browse_name: QualifiedName) {
        self.edges.entry(id.clone()).or_default();
        self.browse_names.insert(id, Ok(browse_name));
    }

    /// Register a child of `parent` reached by a forward Organizes edge.
    pub fn add_child(&mut self, parent: &NodeId, id: NodeId, browse_name: QualifiedName) -> NodeId {
        self.add_node(id.clone(), browse_name);
        self.edges
            .entry(parent.clone())
            .or_default()
            .push((id.clone(), false, ns0::ORGANIZES));
        id
    }

    /// Register a child of `parent` reported as an inverse edge.
    pub fn add_inverse_child(
        &mut self,
        parent: &NodeId,
        id: NodeId,
        browse_name: QualifiedName,
    ) -> NodeId {
        self.add_node(id.clone(), browse_name);
        self.edges
            .entry(parent.clone())
            .or_default()
            .push((id.clone(), true, ns0::ORGANIZES));
        id
    }

    /// Make the BrowseName probe of `id` fail with `status`.
    pub fn fail_browse_name(&mut self, id: &NodeId, status: StatusCode) {
        self.browse_names.insert(id.clone(), Err(status));
    }
}

impl AttributeReader for ScriptedSpace {
    fn read(&self, node: &NodeId, attribute: AttributeId) -> ServiceResult<DataValue> {
        if attribute != AttributeId::BrowseName {
            return Err(StatusCode::BAD_ATTRIBUTE_ID_INVALID);
        }
        match self.browse_names.get(node) {
            Some(Ok(name)) => Ok(DataValue::new(Variant::QualifiedName(name.clone()))),
            Some(Err(status)) => Err(*status),
            None => Err(StatusCode::BAD_NODE_ID_UNKNOWN),
        }
    }
}

impl AttributeWriter for ScriptedSpace {
    fn write(&self, _node: &NodeId, _attribute: AttributeId, _value: &DataValue) -> StatusCode {
        StatusCode::BAD_NOT_WRITABLE
    }
}

impl AddressSpace for ScriptedSpace {
    fn reader(&self) -> &dyn AttributeReader {
        self
    }

    fn writer(&self) -> &dyn AttributeWriter {
        self
    }

    fn for_each_child(&self, node: &NodeId, visitor: &mut ChildVisitor<'_>) -> StatusCode {
        self.walk_calls.set(self.walk_calls.get() + 1);
        if !self.walk_status.is_good() {
            return self.walk_status;
        }
        let Some(edges) = self.edges.get(node) else {
            return StatusCode::BAD_NODE_ID_UNKNOWN;
        };
        for (child, is_inverse, reference_type) in edges {
            let status = visitor(child, *is_inverse, reference_type);
            if !status.is_good() {
                return status;
            }
        }
        StatusCode::GOOD
    }

    fn add_object(
        &self,
        _requested: &NodeId,
        _parent: &NodeId,
        _reference_type: &NodeId,
        _browse_name: &QualifiedName,
        _type_definition: &NodeId,
        _attributes: &ObjectAttributes,
    ) -> ServiceResult<NodeId> {
        Err(StatusCode::BAD_NOT_SUPPORTED)
    }

    fn add_variable(
        &self,
        _requested: &NodeId,
        _parent: &NodeId,
        _reference_type: &NodeId,
        _browse_name: &QualifiedName,
        _type_definition: &NodeId,
        _attributes: &VariableAttributes,
    ) -> ServiceResult<NodeId> {
        Err(StatusCode::BAD_NOT_SUPPORTED)
    }

    fn add_view(
        &self,
        _requested: &NodeId,
        _parent: &NodeId,
        _reference_type: &NodeId,
        _browse_name: &QualifiedName,
        _attributes: &ViewAttributes,
    ) -> ServiceResult<NodeId> {
        Err(StatusCode::BAD_NOT_SUPPORTED)
    }

    fn add_method(
        &self,
        _requested: &NodeId,
        _parent: &NodeId,
        _reference_type: &NodeId,
        _browse_name: &QualifiedName,
        _attributes: &MethodAttributes,
    ) -> ServiceResult<NodeId> {
        Err(StatusCode::BAD_NOT_SUPPORTED)
    }

    fn add_reference(
        &self,
        _source: &NodeId,
        _reference_type: &NodeId,
        _target: &ExpandedNodeId,
        _forward: bool,
        _target_class: NodeClass,
    ) -> StatusCode {
        StatusCode::BAD_NOT_SUPPORTED
    }

    fn delete_reference(
        &self,
        _source: &NodeId,
        _reference_type: &NodeId,
        _target: &ExpandedNodeId,
        _forward: bool,
        _target_class: NodeClass,
    ) -> StatusCode {
        StatusCode::BAD_NOT_SUPPORTED
    }

    fn delete_node(&self, _node: &NodeId, _delete_references: bool) -> StatusCode {
        StatusCode::BAD_NOT_SUPPORTED
    }

    fn call_method(
        &self,
        _object: &NodeId,
        _method: &NodeId,
        _inputs: &[Variant],
    ) -> ServiceResult<Vec<Variant>> {
        Err(StatusCode::BAD_NOT_SUPPORTED)
    }
}
