//! The node handle: navigation, path resolution, and the attribute surface.

use std::fmt;

use tracing::warn;

use uanode_error::{NodeError, Result, StatusCode};
use uanode_types::{
    AttributeId, AttributeValue, DataValue, ExpandedNodeId, LocalizedText, MethodAttributes,
    NodeClass, NodeId, ObjectAttributes, QualifiedName, VariableAttributes, Variant,
    ViewAttributes, ns0,
};

use crate::browse;
use crate::space::AddressSpace;

/// Expands one get/set delegation pair per attribute kind. Every accessor
/// goes through the same generic read/write pair; no body is duplicated.
macro_rules! attribute_accessors {
    ($($kind:ident: $ty:ty => $getter:ident / $setter:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Read the ", stringify!($kind), " attribute, best-effort.")]
            #[must_use]
            pub fn $getter(&self) -> $ty {
                self.attribute(AttributeId::$kind)
            }

            #[doc = concat!("Write the ", stringify!($kind), " attribute.")]
            #[must_use]
            pub fn $setter(&self, value: $ty) -> StatusCode {
                self.write_attribute(AttributeId::$kind, value)
            }
        )+
    };
}

/// A lightweight handle to one node of an address space.
///
/// A handle is a reference, not a copy of node state: every attribute read
/// and write goes through the borrowed manager at call time, and the handle
/// itself caches nothing. Besides the id it records how it was reached (the
/// reference type of the edge or creation operation) and a class tag fixed
/// at construction.
///
/// Handles are obtained from a manager minting its well-known roots, or from
/// navigation and creation operations off an existing handle. The manager
/// must outlive every handle derived from it.
#[derive(Clone)]
pub struct Node<'a> {
    space: &'a dyn AddressSpace,
    id: NodeId,
    reference_type: NodeId,
    class: NodeClass,
}

impl<'a> Node<'a> {
    /// Bind a handle to `space`. Managers use this to mint root handles;
    /// everything else reaches nodes through navigation or creation, which
    /// bind internally.
    #[must_use]
    pub fn bind(
        space: &'a dyn AddressSpace,
        id: NodeId,
        reference_type: NodeId,
        class: NodeClass,
    ) -> Self {
        Self {
            space,
            id,
            reference_type,
            class,
        }
    }

    /// The node's identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// The reference type this handle was reached or created through.
    #[inline]
    #[must_use]
    pub fn reference_type(&self) -> &NodeId {
        &self.reference_type
    }

    /// The class tag fixed when the handle was constructed. Navigation tags
    /// children as Object without consulting the manager; the NodeClass
    /// attribute holds the authoritative class.
    #[inline]
    #[must_use]
    pub fn class(&self) -> NodeClass {
        self.class
    }

    // -- Attribute surface --

    /// Read an attribute, best-effort: any failure (service status, bad
    /// quality, wrong type) yields `T::default()` and is not surfaced.
    #[must_use]
    pub fn attribute<T: AttributeValue>(&self, attribute: AttributeId) -> T {
        self.try_attribute(attribute).unwrap_or_default()
    }

    /// Read an attribute, surfacing failure instead of defaulting.
    pub fn try_attribute<T: AttributeValue>(&self, attribute: AttributeId) -> Result<T> {
        let value = self
            .space
            .reader()
            .read(&self.id, attribute)
            .map_err(|status| NodeError::service(attribute.name(), status))?;
        T::from_attribute(attribute, value)
    }

    /// Write an attribute, returning the manager's status verbatim. A
    /// non-good status is also reported once through the diagnostic log;
    /// execution continues either way.
    #[must_use]
    pub fn write_attribute<T: AttributeValue>(
        &self,
        attribute: AttributeId,
        value: T,
    ) -> StatusCode {
        let status = self
            .space
            .writer()
            .write(&self.id, attribute, &value.into_attribute());
        if !status.is_good() {
            warn!(
                node = %self.id,
                attribute = %attribute,
                status = %status,
                "attribute write rejected"
            );
        }
        status
    }

    attribute_accessors! {
        NodeClass: NodeClass => node_class / set_node_class,
        BrowseName: QualifiedName => browse_name / set_browse_name,
        DisplayName: LocalizedText => display_name / set_display_name,
        Description: LocalizedText => description / set_description,
        WriteMask: u32 => write_mask / set_write_mask,
        UserWriteMask: u32 => user_write_mask / set_user_write_mask,
        IsAbstract: bool => is_abstract / set_is_abstract,
        Symmetric: bool => symmetric / set_symmetric,
        InverseName: LocalizedText => inverse_name / set_inverse_name,
        ContainsNoLoops: bool => contains_no_loops / set_contains_no_loops,
        EventNotifier: u8 => event_notifier / set_event_notifier,
        Value: Variant => value / set_value,
        Value: DataValue => data_value / set_data_value,
        DataType: NodeId => data_type / set_data_type,
        ValueRank: i32 => value_rank / set_value_rank,
        AccessLevel: u8 => access_level / set_access_level,
        UserAccessLevel: u8 => user_access_level / set_user_access_level,
        MinimumSamplingInterval: f64 => minimum_sampling_interval / set_minimum_sampling_interval,
        Historizing: bool => historizing / set_historizing,
        Executable: bool => executable / set_executable,
        UserExecutable: bool => user_executable / set_user_executable,
    }

    // -- Navigation --

    /// All children of this node, one handle per reference edge, in the
    /// manager's walk order. Children are tagged class Object; the walk does
    /// not retrieve true classes.
    pub fn children(&self) -> Result<Vec<Node<'a>>> {
        let references = browse::collect_references(self.space, &self.id)
            .map_err(|status| NodeError::service("browse", status))?;
        Ok(references
            .into_iter()
            .map(|reference| self.wrap(reference))
            .collect())
    }

    /// All children whose browse name matches `name`, parsed against this
    /// node's own namespace. Zero matches is a [`NodeError::NoSuchChild`].
    pub fn find_child(&self, name: &str) -> Result<Vec<Node<'a>>> {
        let target = QualifiedName::parse(name, self.id.namespace)?;
        let matches = browse::find_by_name(self.space, &self.id, &target)
            .map_err(|status| NodeError::service("browse", status))?;
        if matches.is_empty() {
            return Err(NodeError::no_such_child(name));
        }
        Ok(matches.into_iter().map(|reference| self.wrap(reference)).collect())
    }

    /// Resolve a segmented path, preserving every match at every level.
    ///
    /// A frontier of candidates starts as `{self}`. Each segment is looked
    /// up from every frontier node (parsed against that node's namespace)
    /// and the matches across the whole frontier become the next frontier.
    /// Distinct children under different parents may share a name, so the
    /// frontier legitimately widens; it never narrows except by match
    /// failure. A segment matching nothing fails resolution immediately,
    /// naming that segment; later segments are not attempted. An empty
    /// segment list resolves to `{self}`.
    pub fn resolve_path<S: AsRef<str>>(&self, segments: &[S]) -> Result<Vec<Node<'a>>> {
        let mut frontier = vec![self.clone()];
        for segment in segments {
            let segment = segment.as_ref();
            let mut next = Vec::new();
            for candidate in &frontier {
                let target = QualifiedName::parse(segment, candidate.id.namespace)?;
                let matches = browse::find_by_name(candidate.space, &candidate.id, &target)
                    .map_err(|status| NodeError::service("browse", status))?;
                next.extend(matches.into_iter().map(|reference| candidate.wrap(reference)));
            }
            if next.is_empty() {
                return Err(NodeError::no_such_child(segment));
            }
            frontier = next;
        }
        Ok(frontier)
    }

    fn wrap(&self, reference: browse::Reference) -> Node<'a> {
        Node::bind(
            self.space,
            reference.child,
            reference.reference_type,
            NodeClass::Object,
        )
    }

    // -- Structural operations --

    /// Create a folder under this node: an Organizes edge and the
    /// FolderType type definition.
    pub fn add_folder(
        &self,
        id: NodeId,
        browse_name: &str,
        attributes: ObjectAttributes,
    ) -> Result<Node<'a>> {
        let browse = QualifiedName::new(id.namespace, browse_name);
        let created = self
            .space
            .add_object(&id, &self.id, &ns0::ORGANIZES, &browse, &ns0::FOLDER_TYPE, &attributes)
            .map_err(|status| NodeError::service("add_folder", status))?;
        Ok(Node::bind(self.space, created, ns0::ORGANIZES, NodeClass::Object))
    }

    /// Create an object under this node: an Organizes edge and the
    /// BaseObjectType type definition.
    pub fn add_object(
        &self,
        id: NodeId,
        browse_name: &str,
        attributes: ObjectAttributes,
    ) -> Result<Node<'a>> {
        let browse = QualifiedName::new(id.namespace, browse_name);
        let created = self
            .space
            .add_object(
                &id,
                &self.id,
                &ns0::ORGANIZES,
                &browse,
                &ns0::BASE_OBJECT_TYPE,
                &attributes,
            )
            .map_err(|status| NodeError::service("add_object", status))?;
        Ok(Node::bind(self.space, created, ns0::ORGANIZES, NodeClass::Object))
    }

    /// Create a variable under this node: an Organizes edge, no forced type
    /// definition.
    pub fn add_variable(
        &self,
        id: NodeId,
        browse_name: &str,
        attributes: VariableAttributes,
    ) -> Result<Node<'a>> {
        let browse = QualifiedName::new(id.namespace, browse_name);
        let created = self
            .space
            .add_variable(&id, &self.id, &ns0::ORGANIZES, &browse, &NodeId::NULL, &attributes)
            .map_err(|status| NodeError::service("add_variable", status))?;
        Ok(Node::bind(self.space, created, ns0::ORGANIZES, NodeClass::Variable))
    }

    /// Create a view under this node via an Organizes edge.
    pub fn add_view(
        &self,
        id: NodeId,
        browse_name: &str,
        attributes: ViewAttributes,
    ) -> Result<Node<'a>> {
        let browse = QualifiedName::new(id.namespace, browse_name);
        let created = self
            .space
            .add_view(&id, &self.id, &ns0::ORGANIZES, &browse, &attributes)
            .map_err(|status| NodeError::service("add_view", status))?;
        Ok(Node::bind(self.space, created, ns0::ORGANIZES, NodeClass::View))
    }

    /// Create a method node under this node via an Organizes edge. The
    /// handler, if any, is registered with the manager separately.
    pub fn add_method(
        &self,
        id: NodeId,
        browse_name: &str,
        attributes: MethodAttributes,
    ) -> Result<Node<'a>> {
        let browse = QualifiedName::new(id.namespace, browse_name);
        let created = self
            .space
            .add_method(&id, &self.id, &ns0::ORGANIZES, &browse, &attributes)
            .map_err(|status| NodeError::service("add_method", status))?;
        Ok(Node::bind(self.space, created, ns0::ORGANIZES, NodeClass::Method))
    }

    /// Add an Organizes reference from this node to `target`.
    #[must_use]
    pub fn add_reference(
        &self,
        target: ExpandedNodeId,
        forward: bool,
        target_class: NodeClass,
    ) -> StatusCode {
        self.space
            .add_reference(&self.id, &ns0::ORGANIZES, &target, forward, target_class)
    }

    /// Delete an Organizes reference from this node to `target`.
    #[must_use]
    pub fn delete_reference(
        &self,
        target: ExpandedNodeId,
        forward: bool,
        target_class: NodeClass,
    ) -> StatusCode {
        self.space
            .delete_reference(&self.id, &ns0::ORGANIZES, &target, forward, target_class)
    }

    /// Delete this node, returning the manager's status verbatim. The handle
    /// itself stays valid as a value; further calls report unknown-node
    /// statuses.
    #[must_use]
    pub fn delete_node(&self, delete_references: bool) -> StatusCode {
        self.space.delete_node(&self.id, delete_references)
    }

    /// Invoke the method node `method` on this object.
    pub fn call_method(&self, method: &NodeId, inputs: &[Variant]) -> Result<Vec<Variant>> {
        self.space
            .call_method(&self.id, method, inputs)
            .map_err(|status| NodeError::service("call_method", status))
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("reference_type", &self.reference_type)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node(id={};type={};class={})",
            self.id, self.reference_type, self.class
        )
    }
}
