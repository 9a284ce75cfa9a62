//! The address-space manager boundary.
//!
//! This module defines the traits the node layer calls through. A manager
//! owns the actual node graph and attribute storage: a live protocol
//! session, or [`crate::MemAddressSpace`] for embedders and tests. The node
//! layer holds only identifiers into it.
//!
//! # Status discipline
//!
//! Every operation reports failure as a value. Value-producing operations
//! return [`ServiceResult`], whose `Err` side carries the manager's non-good
//! [`StatusCode`] verbatim; status-only operations return the code directly.
//! Implementations must not panic on bad input; unknown ids, invalid
//! attributes, and constraint violations are all status codes.

use uanode_error::StatusCode;
use uanode_types::{
    AttributeId, DataValue, ExpandedNodeId, MethodAttributes, NodeClass, NodeId, ObjectAttributes,
    QualifiedName, VariableAttributes, Variant, ViewAttributes,
};

/// Result of a manager service call: the value, or the manager's non-good
/// status verbatim.
pub type ServiceResult<T> = std::result::Result<T, StatusCode>;

/// Visitor invoked once per reference edge during a child walk:
/// `(child_id, is_inverse, reference_type_id)`.
///
/// A non-good return aborts the walk and becomes the walk's status.
pub type ChildVisitor<'a> = dyn FnMut(&NodeId, bool, &NodeId) -> StatusCode + 'a;

/// Reads node attributes on behalf of the node layer.
pub trait AttributeReader {
    /// Read one attribute of one node.
    ///
    /// `Err` is a service-level failure (unknown node, unsupported
    /// attribute). An `Ok` container may still carry a non-good quality
    /// status; interpreting that is the caller's concern.
    fn read(&self, node: &NodeId, attribute: AttributeId) -> ServiceResult<DataValue>;
}

/// Writes node attributes on behalf of the node layer.
pub trait AttributeWriter {
    /// Write one attribute of one node, returning the manager's status.
    #[must_use]
    fn write(&self, node: &NodeId, attribute: AttributeId, value: &DataValue) -> StatusCode;
}

/// An address-space manager.
///
/// # Ownership
///
/// Handles borrow the manager (`&dyn AddressSpace`); the manager must
/// outlive every handle derived from it. The node layer never stores
/// node state of its own; every read and write goes through these methods
/// at call time.
///
/// # Walk contract
///
/// `for_each_child` reports every reference edge touching the node, forward
/// and inverse, in whatever order the manager's walk produces. The node
/// layer imposes no reordering or deduplication. A walk over a node with no
/// edges is a good status and zero visitor calls, not a failure.
///
/// # Creation contract
///
/// The `add_*` operations insert a node under `parent` via `reference_type`,
/// attach `type_definition` where the node class has one, and return the id
/// actually used. A null `requested` id asks the manager to allocate one.
pub trait AddressSpace {
    /// The attribute-read collaborator.
    fn reader(&self) -> &dyn AttributeReader;

    /// The attribute-write collaborator.
    fn writer(&self) -> &dyn AttributeWriter;

    /// Invoke `visitor` once per reference edge touching `node`.
    #[must_use]
    fn for_each_child(&self, node: &NodeId, visitor: &mut ChildVisitor<'_>) -> StatusCode;

    /// Create an object node (folders included).
    fn add_object(
        &self,
        requested: &NodeId,
        parent: &NodeId,
        reference_type: &NodeId,
        browse_name: &QualifiedName,
        type_definition: &NodeId,
        attributes: &ObjectAttributes,
    ) -> ServiceResult<NodeId>;

    /// Create a variable node. A null `type_definition` attaches none.
    fn add_variable(
        &self,
        requested: &NodeId,
        parent: &NodeId,
        reference_type: &NodeId,
        browse_name: &QualifiedName,
        type_definition: &NodeId,
        attributes: &VariableAttributes,
    ) -> ServiceResult<NodeId>;

    /// Create a view node.
    fn add_view(
        &self,
        requested: &NodeId,
        parent: &NodeId,
        reference_type: &NodeId,
        browse_name: &QualifiedName,
        attributes: &ViewAttributes,
    ) -> ServiceResult<NodeId>;

    /// Create a method node. Invocation is wired separately by the manager.
    fn add_method(
        &self,
        requested: &NodeId,
        parent: &NodeId,
        reference_type: &NodeId,
        browse_name: &QualifiedName,
        attributes: &MethodAttributes,
    ) -> ServiceResult<NodeId>;

    /// Add a reference edge from `source` to `target`. `forward = false`
    /// records the edge in the inverse direction. `target_class` is the
    /// class the caller believes the target has; managers may use it for
    /// validation.
    #[must_use]
    fn add_reference(
        &self,
        source: &NodeId,
        reference_type: &NodeId,
        target: &ExpandedNodeId,
        forward: bool,
        target_class: NodeClass,
    ) -> StatusCode;

    /// Delete a reference edge previously added.
    #[must_use]
    fn delete_reference(
        &self,
        source: &NodeId,
        reference_type: &NodeId,
        target: &ExpandedNodeId,
        forward: bool,
        target_class: NodeClass,
    ) -> StatusCode;

    /// Delete a node. `delete_references = false` leaves edges naming the
    /// node in place.
    #[must_use]
    fn delete_node(&self, node: &NodeId, delete_references: bool) -> StatusCode;

    /// Invoke the method node `method` on the object `object`.
    fn call_method(
        &self,
        object: &NodeId,
        method: &NodeId,
        inputs: &[Variant],
    ) -> ServiceResult<Vec<Variant>>;
}
