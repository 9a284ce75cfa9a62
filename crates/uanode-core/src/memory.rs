//! An in-memory address space.
//!
//! `MemAddressSpace` implements the full manager contract against process
//! memory: embedders get a working address space without a live server, and
//! tests get a manager with honest status codes. It comes seeded with the
//! namespace-zero skeleton this layer names: the folder hierarchy, the
//! reference types used for containment edges, the base object/variable
//! types, and the scalar data types.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use uanode_error::StatusCode;
use uanode_types::{
    AttributeId, DataValue, DateTime, ExpandedNodeId, LocalizedText, MethodAttributes, NodeClass,
    NodeId, ObjectAttributes, QualifiedName, VariableAttributes, Variant, ViewAttributes, ns0,
};

use crate::node::Node;
use crate::space::{AddressSpace, AttributeReader, AttributeWriter, ChildVisitor, ServiceResult};

/// Handler invoked for a method call: inputs in, outputs or a non-good
/// status out.
pub type MethodHandler = Arc<dyn Fn(&[Variant]) -> ServiceResult<Vec<Variant>> + Send + Sync>;

/// The standard namespace-zero URI, preseeded at index 0.
pub const NS0_URI: &str = "http://opcfoundation.org/UA/";

struct StoredNode {
    class: NodeClass,
    attributes: HashMap<AttributeId, DataValue>,
}

/// One stored reference edge, always in its forward direction.
struct Edge {
    source: NodeId,
    reference_type: NodeId,
    target: NodeId,
}

struct Store {
    nodes: HashMap<NodeId, StoredNode>,
    edges: Vec<Edge>,
    namespaces: Vec<String>,
    methods: HashMap<NodeId, MethodHandler>,
    next_numeric: u32,
}

impl Store {
    fn is_reference_type(&self, id: &NodeId) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| node.class == NodeClass::ReferenceType)
    }

    /// Allocate the next free numeric id in namespace 1.
    fn allocate_id(&mut self) -> NodeId {
        loop {
            let candidate = NodeId::numeric(1, self.next_numeric);
            self.next_numeric += 1;
            if !self.nodes.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn link(&mut self, source: &NodeId, reference_type: &NodeId, target: &NodeId) {
        self.edges.push(Edge {
            source: source.clone(),
            reference_type: reference_type.clone(),
            target: target.clone(),
        });
    }

    fn has_edge(&self, source: &NodeId, reference_type: &NodeId, target: &NodeId) -> bool {
        self.edges.iter().any(|edge| {
            edge.source == *source
                && edge.reference_type == *reference_type
                && edge.target == *target
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn insert_node(
        &mut self,
        id: NodeId,
        class: NodeClass,
        browse: QualifiedName,
        display: LocalizedText,
        description: LocalizedText,
        write_mask: u32,
        user_write_mask: u32,
        extra: Vec<(AttributeId, DataValue)>,
    ) {
        let mut attributes = HashMap::new();
        attributes.insert(
            AttributeId::NodeId,
            DataValue::new(Variant::NodeId(id.clone())),
        );
        attributes.insert(
            AttributeId::NodeClass,
            DataValue::new(Variant::Int32(class.bits() as i32)),
        );
        attributes.insert(
            AttributeId::BrowseName,
            DataValue::new(Variant::QualifiedName(browse)),
        );
        attributes.insert(
            AttributeId::DisplayName,
            DataValue::new(Variant::LocalizedText(display)),
        );
        attributes.insert(
            AttributeId::Description,
            DataValue::new(Variant::LocalizedText(description)),
        );
        attributes.insert(AttributeId::WriteMask, DataValue::new(write_mask));
        attributes.insert(AttributeId::UserWriteMask, DataValue::new(user_write_mask));
        for (attribute, value) in extra {
            attributes.insert(attribute, value);
        }
        self.nodes.insert(id, StoredNode { class, attributes });
    }

    fn insert_seeded(
        &mut self,
        id: NodeId,
        class: NodeClass,
        name: &str,
        extra: Vec<(AttributeId, DataValue)>,
    ) {
        self.insert_node(
            id,
            class,
            QualifiedName::new(0, name),
            LocalizedText::from_text(name),
            LocalizedText::default(),
            0,
            0,
            extra,
        );
    }

    fn seed(&mut self) {
        self.namespaces.push(NS0_URI.to_owned());

        let folders: [(NodeId, &str); 8] = [
            (ns0::ROOT_FOLDER, "Root"),
            (ns0::OBJECTS_FOLDER, "Objects"),
            (ns0::TYPES_FOLDER, "Types"),
            (ns0::VIEWS_FOLDER, "Views"),
            (ns0::OBJECT_TYPES_FOLDER, "ObjectTypes"),
            (ns0::VARIABLE_TYPES_FOLDER, "VariableTypes"),
            (ns0::DATA_TYPES_FOLDER, "DataTypes"),
            (ns0::REFERENCE_TYPES_FOLDER, "ReferenceTypes"),
        ];
        for (id, name) in folders {
            self.insert_seeded(
                id,
                NodeClass::Object,
                name,
                vec![(AttributeId::EventNotifier, DataValue::new(0u8))],
            );
        }
        self.insert_seeded(
            ns0::SERVER,
            NodeClass::Object,
            "Server",
            vec![(AttributeId::EventNotifier, DataValue::new(1u8))],
        );

        let reference_types: [(NodeId, &str, &str, bool, bool); 10] = [
            (ns0::REFERENCES, "References", "References", true, true),
            (
                ns0::HIERARCHICAL_REFERENCES,
                "HierarchicalReferences",
                "InverseHierarchicalReferences",
                true,
                false,
            ),
            (
                ns0::NON_HIERARCHICAL_REFERENCES,
                "NonHierarchicalReferences",
                "InverseNonHierarchicalReferences",
                true,
                false,
            ),
            (ns0::HAS_CHILD, "HasChild", "ChildOf", true, false),
            (ns0::ORGANIZES, "Organizes", "OrganizedBy", false, false),
            (
                ns0::HAS_MODELLING_RULE,
                "HasModellingRule",
                "ModellingRuleOf",
                false,
                false,
            ),
            (
                ns0::HAS_TYPE_DEFINITION,
                "HasTypeDefinition",
                "TypeDefinitionOf",
                false,
                false,
            ),
            (ns0::HAS_SUBTYPE, "HasSubtype", "SubtypeOf", false, false),
            (ns0::HAS_PROPERTY, "HasProperty", "PropertyOf", false, false),
            (ns0::HAS_COMPONENT, "HasComponent", "ComponentOf", false, false),
        ];
        for (id, name, inverse, is_abstract, symmetric) in reference_types {
            self.insert_seeded(
                id,
                NodeClass::ReferenceType,
                name,
                vec![
                    (AttributeId::IsAbstract, DataValue::new(is_abstract)),
                    (AttributeId::Symmetric, DataValue::new(symmetric)),
                    (
                        AttributeId::InverseName,
                        DataValue::new(Variant::LocalizedText(LocalizedText::from_text(inverse))),
                    ),
                ],
            );
        }

        let object_types: [(NodeId, &str); 2] = [
            (ns0::BASE_OBJECT_TYPE, "BaseObjectType"),
            (ns0::FOLDER_TYPE, "FolderType"),
        ];
        for (id, name) in object_types {
            self.insert_seeded(
                id,
                NodeClass::ObjectType,
                name,
                vec![(AttributeId::IsAbstract, DataValue::new(false))],
            );
        }

        let variable_types: [(NodeId, &str, bool); 3] = [
            (ns0::BASE_VARIABLE_TYPE, "BaseVariableType", true),
            (ns0::BASE_DATA_VARIABLE_TYPE, "BaseDataVariableType", false),
            (ns0::PROPERTY_TYPE, "PropertyType", false),
        ];
        for (id, name, is_abstract) in variable_types {
            self.insert_seeded(
                id,
                NodeClass::VariableType,
                name,
                vec![(AttributeId::IsAbstract, DataValue::new(is_abstract))],
            );
        }

        self.insert_seeded(
            ns0::BASE_DATA_TYPE,
            NodeClass::DataType,
            "BaseDataType",
            vec![(AttributeId::IsAbstract, DataValue::new(true))],
        );
        let scalars: [(NodeId, &str); 13] = [
            (ns0::BOOLEAN, "Boolean"),
            (ns0::SBYTE, "SByte"),
            (ns0::BYTE, "Byte"),
            (ns0::INT16, "Int16"),
            (ns0::UINT16, "UInt16"),
            (ns0::INT32, "Int32"),
            (ns0::UINT32, "UInt32"),
            (ns0::INT64, "Int64"),
            (ns0::UINT64, "UInt64"),
            (ns0::FLOAT, "Float"),
            (ns0::DOUBLE, "Double"),
            (ns0::STRING, "String"),
            (ns0::DATE_TIME, "DateTime"),
        ];
        for (id, name) in scalars {
            self.link(&ns0::BASE_DATA_TYPE, &ns0::HAS_SUBTYPE, &id);
            self.insert_seeded(
                id,
                NodeClass::DataType,
                name,
                vec![(AttributeId::IsAbstract, DataValue::new(false))],
            );
        }

        self.link(&ns0::ROOT_FOLDER, &ns0::ORGANIZES, &ns0::OBJECTS_FOLDER);
        self.link(&ns0::ROOT_FOLDER, &ns0::ORGANIZES, &ns0::TYPES_FOLDER);
        self.link(&ns0::ROOT_FOLDER, &ns0::ORGANIZES, &ns0::VIEWS_FOLDER);
        self.link(&ns0::OBJECTS_FOLDER, &ns0::ORGANIZES, &ns0::SERVER);
        self.link(&ns0::TYPES_FOLDER, &ns0::ORGANIZES, &ns0::OBJECT_TYPES_FOLDER);
        self.link(&ns0::TYPES_FOLDER, &ns0::ORGANIZES, &ns0::VARIABLE_TYPES_FOLDER);
        self.link(&ns0::TYPES_FOLDER, &ns0::ORGANIZES, &ns0::DATA_TYPES_FOLDER);
        self.link(&ns0::TYPES_FOLDER, &ns0::ORGANIZES, &ns0::REFERENCE_TYPES_FOLDER);
        self.link(&ns0::OBJECT_TYPES_FOLDER, &ns0::ORGANIZES, &ns0::BASE_OBJECT_TYPE);
        self.link(&ns0::BASE_OBJECT_TYPE, &ns0::HAS_SUBTYPE, &ns0::FOLDER_TYPE);
        self.link(&ns0::VARIABLE_TYPES_FOLDER, &ns0::ORGANIZES, &ns0::BASE_VARIABLE_TYPE);
        self.link(&ns0::BASE_VARIABLE_TYPE, &ns0::HAS_SUBTYPE, &ns0::BASE_DATA_VARIABLE_TYPE);
        self.link(&ns0::BASE_VARIABLE_TYPE, &ns0::HAS_SUBTYPE, &ns0::PROPERTY_TYPE);
        self.link(&ns0::DATA_TYPES_FOLDER, &ns0::ORGANIZES, &ns0::BASE_DATA_TYPE);
        self.link(&ns0::REFERENCE_TYPES_FOLDER, &ns0::ORGANIZES, &ns0::REFERENCES);
        self.link(&ns0::REFERENCES, &ns0::HAS_SUBTYPE, &ns0::HIERARCHICAL_REFERENCES);
        self.link(&ns0::REFERENCES, &ns0::HAS_SUBTYPE, &ns0::NON_HIERARCHICAL_REFERENCES);
        self.link(&ns0::HIERARCHICAL_REFERENCES, &ns0::HAS_SUBTYPE, &ns0::HAS_CHILD);
        self.link(&ns0::HIERARCHICAL_REFERENCES, &ns0::HAS_SUBTYPE, &ns0::ORGANIZES);
        self.link(&ns0::HAS_CHILD, &ns0::HAS_SUBTYPE, &ns0::HAS_SUBTYPE);
        self.link(&ns0::HAS_CHILD, &ns0::HAS_SUBTYPE, &ns0::HAS_COMPONENT);
        self.link(&ns0::HAS_COMPONENT, &ns0::HAS_SUBTYPE, &ns0::HAS_PROPERTY);
        self.link(&ns0::NON_HIERARCHICAL_REFERENCES, &ns0::HAS_SUBTYPE, &ns0::HAS_TYPE_DEFINITION);
        self.link(&ns0::NON_HIERARCHICAL_REFERENCES, &ns0::HAS_SUBTYPE, &ns0::HAS_MODELLING_RULE);

        let folder_typed: [NodeId; 8] = [
            ns0::ROOT_FOLDER,
            ns0::OBJECTS_FOLDER,
            ns0::TYPES_FOLDER,
            ns0::VIEWS_FOLDER,
            ns0::OBJECT_TYPES_FOLDER,
            ns0::VARIABLE_TYPES_FOLDER,
            ns0::DATA_TYPES_FOLDER,
            ns0::REFERENCE_TYPES_FOLDER,
        ];
        for id in folder_typed {
            self.link(&id, &ns0::HAS_TYPE_DEFINITION, &ns0::FOLDER_TYPE);
        }
        self.link(&ns0::SERVER, &ns0::HAS_TYPE_DEFINITION, &ns0::BASE_OBJECT_TYPE);
    }
}

/// In-memory manager implementing [`AddressSpace`].
///
/// Access is serialized internally with a read-write lock so the space can
/// be shared behind `&self`; that is an implementation detail of this
/// manager, not a guarantee of the node layer.
pub struct MemAddressSpace {
    store: RwLock<Store>,
}

impl MemAddressSpace {
    /// Create a space seeded with the namespace-zero skeleton.
    #[must_use]
    pub fn new() -> Self {
        let mut store = Store {
            nodes: HashMap::new(),
            edges: Vec::new(),
            namespaces: Vec::new(),
            methods: HashMap::new(),
            next_numeric: 1,
        };
        store.seed();
        Self {
            store: RwLock::new(store),
        }
    }

    /// Register a namespace URI, returning its index. Registering an
    /// already-known URI returns the existing index.
    pub fn register_namespace(&self, uri: &str) -> u16 {
        let mut store = self.store.write();
        if let Some(index) = store.namespaces.iter().position(|known| known == uri) {
            return u16::try_from(index).unwrap_or(u16::MAX);
        }
        store.namespaces.push(uri.to_owned());
        u16::try_from(store.namespaces.len() - 1).unwrap_or(u16::MAX)
    }

    /// Look up the index of a registered namespace URI.
    pub fn namespace_index(&self, uri: &str) -> Option<u16> {
        self.store
            .read()
            .namespaces
            .iter()
            .position(|known| known == uri)
            .and_then(|index| u16::try_from(index).ok())
    }

    /// Register the handler invoked when the method node `method` is
    /// called. Replaces any previous handler for that node.
    pub fn register_method<F>(&self, method: NodeId, handler: F)
    where
        F: Fn(&[Variant]) -> ServiceResult<Vec<Variant>> + Send + Sync + 'static,
    {
        self.store.write().methods.insert(method, Arc::new(handler));
    }

    /// Handle to the Root folder.
    #[must_use]
    pub fn root_folder(&self) -> Node<'_> {
        Node::bind(self, ns0::ROOT_FOLDER, ns0::ORGANIZES, NodeClass::Object)
    }

    /// Handle to the Objects folder, where instance nodes live.
    #[must_use]
    pub fn objects_folder(&self) -> Node<'_> {
        Node::bind(self, ns0::OBJECTS_FOLDER, ns0::ORGANIZES, NodeClass::Object)
    }

    /// Handle to an arbitrary stored node, tagged with its true class.
    pub fn handle(&self, id: &NodeId) -> ServiceResult<Node<'_>> {
        let class = {
            let store = self.store.read();
            store
                .nodes
                .get(id)
                .map(|node| node.class)
                .ok_or(StatusCode::BAD_NODE_ID_UNKNOWN)?
        };
        Ok(Node::bind(self, id.clone(), ns0::ORGANIZES, class))
    }

    #[allow(clippy::too_many_arguments)]
    fn create_node(
        &self,
        requested: &NodeId,
        parent: &NodeId,
        reference_type: &NodeId,
        browse_name: &QualifiedName,
        type_definition: Option<&NodeId>,
        class: NodeClass,
        display: &LocalizedText,
        description: &LocalizedText,
        write_mask: u32,
        user_write_mask: u32,
        extra: Vec<(AttributeId, DataValue)>,
    ) -> ServiceResult<NodeId> {
        let mut store = self.store.write();
        if !store.nodes.contains_key(parent) {
            return Err(StatusCode::BAD_PARENT_NODE_ID_INVALID);
        }
        if !store.is_reference_type(reference_type) {
            return Err(StatusCode::BAD_REFERENCE_TYPE_ID_INVALID);
        }
        if let Some(definition) = type_definition {
            if !store.nodes.contains_key(definition) {
                return Err(StatusCode::BAD_TYPE_DEFINITION_INVALID);
            }
        }
        let id = if requested.is_null() {
            store.allocate_id()
        } else {
            if store.nodes.contains_key(requested) {
                return Err(StatusCode::BAD_NODE_ID_EXISTS);
            }
            requested.clone()
        };
        store.insert_node(
            id.clone(),
            class,
            browse_name.clone(),
            display.clone(),
            description.clone(),
            write_mask,
            user_write_mask,
            extra,
        );
        store.link(parent, reference_type, &id);
        if let Some(definition) = type_definition {
            store.link(&id, &ns0::HAS_TYPE_DEFINITION, definition);
        }
        debug!(node = %id, class = %class, parent = %parent, "node added");
        Ok(id)
    }
}

impl Default for MemAddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemAddressSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.read();
        f.debug_struct("MemAddressSpace")
            .field("nodes", &store.nodes.len())
            .field("edges", &store.edges.len())
            .field("namespaces", &store.namespaces.len())
            .finish_non_exhaustive()
    }
}

impl AttributeReader for MemAddressSpace {
    fn read(&self, node: &NodeId, attribute: AttributeId) -> ServiceResult<DataValue> {
        let store = self.store.read();
        let stored = store.nodes.get(node).ok_or(StatusCode::BAD_NODE_ID_UNKNOWN)?;
        stored
            .attributes
            .get(&attribute)
            .cloned()
            .ok_or(StatusCode::BAD_ATTRIBUTE_ID_INVALID)
    }
}

impl AttributeWriter for MemAddressSpace {
    fn write(&self, node: &NodeId, attribute: AttributeId, value: &DataValue) -> StatusCode {
        if matches!(attribute, AttributeId::NodeId | AttributeId::NodeClass) {
            return StatusCode::BAD_NOT_WRITABLE;
        }
        let mut store = self.store.write();
        let Some(stored) = store.nodes.get_mut(node) else {
            return StatusCode::BAD_NODE_ID_UNKNOWN;
        };
        let Some(existing) = stored.attributes.get_mut(&attribute) else {
            return StatusCode::BAD_ATTRIBUTE_ID_INVALID;
        };
        if !existing.value.is_empty()
            && !value.value.is_empty()
            && existing.value.type_name() != value.value.type_name()
        {
            return StatusCode::BAD_TYPE_MISMATCH;
        }
        *existing = value.clone();
        if attribute == AttributeId::Value {
            let now = DateTime::now();
            existing.server_timestamp = Some(now);
            if existing.source_timestamp.is_none() {
                existing.source_timestamp = Some(now);
            }
        }
        StatusCode::GOOD
    }
}

impl AddressSpace for MemAddressSpace {
    fn reader(&self) -> &dyn AttributeReader {
        self
    }

    fn writer(&self) -> &dyn AttributeWriter {
        self
    }

    fn for_each_child(&self, node: &NodeId, visitor: &mut ChildVisitor<'_>) -> StatusCode {
        // Edges are snapshotted before visiting so the visitor can reenter
        // the space (the name-probe path does).
        let edges: Vec<(NodeId, bool, NodeId)> = {
            let store = self.store.read();
            if !store.nodes.contains_key(node) {
                return StatusCode::BAD_NODE_ID_UNKNOWN;
            }
            store
                .edges
                .iter()
                .filter_map(|edge| {
                    if edge.source == *node {
                        Some((edge.target.clone(), false, edge.reference_type.clone()))
                    } else if edge.target == *node {
                        Some((edge.source.clone(), true, edge.reference_type.clone()))
                    } else {
                        None
                    }
                })
                .collect()
        };
        for (child, is_inverse, reference_type) in &edges {
            let status = visitor(child, *is_inverse, reference_type);
            if !status.is_good() {
                return status;
            }
        }
        StatusCode::GOOD
    }

    fn add_object(
        &self,
        requested: &NodeId,
        parent: &NodeId,
        reference_type: &NodeId,
        browse_name: &QualifiedName,
        type_definition: &NodeId,
        attributes: &ObjectAttributes,
    ) -> ServiceResult<NodeId> {
        let definition = (!type_definition.is_null()).then_some(type_definition);
        self.create_node(
            requested,
            parent,
            reference_type,
            browse_name,
            definition,
            NodeClass::Object,
            &attributes.display_name,
            &attributes.description,
            attributes.write_mask,
            attributes.user_write_mask,
            vec![(
                AttributeId::EventNotifier,
                DataValue::new(attributes.event_notifier.bits()),
            )],
        )
    }

    fn add_variable(
        &self,
        requested: &NodeId,
        parent: &NodeId,
        reference_type: &NodeId,
        browse_name: &QualifiedName,
        type_definition: &NodeId,
        attributes: &VariableAttributes,
    ) -> ServiceResult<NodeId> {
        let definition = (!type_definition.is_null()).then_some(type_definition);
        let now = DateTime::now();
        self.create_node(
            requested,
            parent,
            reference_type,
            browse_name,
            definition,
            NodeClass::Variable,
            &attributes.display_name,
            &attributes.description,
            attributes.write_mask,
            attributes.user_write_mask,
            vec![
                (
                    AttributeId::Value,
                    DataValue::new(attributes.value.clone())
                        .with_source_timestamp(now)
                        .with_server_timestamp(now),
                ),
                (
                    AttributeId::DataType,
                    DataValue::new(Variant::NodeId(attributes.data_type.clone())),
                ),
                (
                    AttributeId::ValueRank,
                    DataValue::new(Variant::Int32(attributes.value_rank)),
                ),
                (
                    AttributeId::AccessLevel,
                    DataValue::new(attributes.access_level.bits()),
                ),
                (
                    AttributeId::UserAccessLevel,
                    DataValue::new(attributes.user_access_level.bits()),
                ),
                (
                    AttributeId::MinimumSamplingInterval,
                    DataValue::new(attributes.minimum_sampling_interval),
                ),
                (
                    AttributeId::Historizing,
                    DataValue::new(attributes.historizing),
                ),
            ],
        )
    }

    fn add_view(
        &self,
        requested: &NodeId,
        parent: &NodeId,
        reference_type: &NodeId,
        browse_name: &QualifiedName,
        attributes: &ViewAttributes,
    ) -> ServiceResult<NodeId> {
        self.create_node(
            requested,
            parent,
            reference_type,
            browse_name,
            None,
            NodeClass::View,
            &attributes.display_name,
            &attributes.description,
            attributes.write_mask,
            attributes.user_write_mask,
            vec![
                (
                    AttributeId::ContainsNoLoops,
                    DataValue::new(attributes.contains_no_loops),
                ),
                (
                    AttributeId::EventNotifier,
                    DataValue::new(attributes.event_notifier.bits()),
                ),
            ],
        )
    }

    fn add_method(
        &self,
        requested: &NodeId,
        parent: &NodeId,
        reference_type: &NodeId,
        browse_name: &QualifiedName,
        attributes: &MethodAttributes,
    ) -> ServiceResult<NodeId> {
        self.create_node(
            requested,
            parent,
            reference_type,
            browse_name,
            None,
            NodeClass::Method,
            &attributes.display_name,
            &attributes.description,
            attributes.write_mask,
            attributes.user_write_mask,
            vec![
                (
                    AttributeId::Executable,
                    DataValue::new(attributes.executable),
                ),
                (
                    AttributeId::UserExecutable,
                    DataValue::new(attributes.user_executable),
                ),
            ],
        )
    }

    fn add_reference(
        &self,
        source: &NodeId,
        reference_type: &NodeId,
        target: &ExpandedNodeId,
        forward: bool,
        _target_class: NodeClass,
    ) -> StatusCode {
        if !target.is_local() {
            return StatusCode::BAD_REFERENCE_LOCAL_ONLY;
        }
        let mut store = self.store.write();
        if !store.nodes.contains_key(source) {
            return StatusCode::BAD_SOURCE_NODE_ID_INVALID;
        }
        if !store.nodes.contains_key(&target.node_id) {
            return StatusCode::BAD_TARGET_NODE_ID_INVALID;
        }
        if !store.is_reference_type(reference_type) {
            return StatusCode::BAD_REFERENCE_TYPE_ID_INVALID;
        }
        let (from, to) = if forward {
            (source, &target.node_id)
        } else {
            (&target.node_id, source)
        };
        if store.has_edge(from, reference_type, to) {
            return StatusCode::BAD_DUPLICATE_REFERENCE_NOT_ALLOWED;
        }
        store.link(from, reference_type, to);
        debug!(source = %from, target = %to, reference_type = %reference_type, "reference added");
        StatusCode::GOOD
    }

    fn delete_reference(
        &self,
        source: &NodeId,
        reference_type: &NodeId,
        target: &ExpandedNodeId,
        forward: bool,
        _target_class: NodeClass,
    ) -> StatusCode {
        if !target.is_local() {
            return StatusCode::BAD_REFERENCE_LOCAL_ONLY;
        }
        let mut store = self.store.write();
        let (from, to) = if forward {
            (source, &target.node_id)
        } else {
            (&target.node_id, source)
        };
        let Some(position) = store.edges.iter().position(|edge| {
            edge.source == *from && edge.reference_type == *reference_type && edge.target == *to
        }) else {
            return StatusCode::BAD_NOT_FOUND;
        };
        store.edges.remove(position);
        debug!(source = %from, target = %to, reference_type = %reference_type, "reference deleted");
        StatusCode::GOOD
    }

    fn delete_node(&self, node: &NodeId, delete_references: bool) -> StatusCode {
        let mut store = self.store.write();
        if !store.nodes.contains_key(node) {
            return StatusCode::BAD_NODE_ID_UNKNOWN;
        }
        // The namespace-zero skeleton is server-owned.
        if node.namespace == 0 {
            return StatusCode::BAD_NO_DELETE_RIGHTS;
        }
        store.nodes.remove(node);
        store.methods.remove(node);
        if delete_references {
            store
                .edges
                .retain(|edge| edge.source != *node && edge.target != *node);
        }
        debug!(node = %node, delete_references, "node deleted");
        StatusCode::GOOD
    }

    fn call_method(
        &self,
        object: &NodeId,
        method: &NodeId,
        inputs: &[Variant],
    ) -> ServiceResult<Vec<Variant>> {
        // The handler is cloned out and invoked after the lock drops so it
        // may reenter the space.
        let handler = {
            let store = self.store.read();
            if !store.nodes.contains_key(object) {
                return Err(StatusCode::BAD_NODE_ID_UNKNOWN);
            }
            let stored = store.nodes.get(method).ok_or(StatusCode::BAD_METHOD_INVALID)?;
            if stored.class != NodeClass::Method {
                return Err(StatusCode::BAD_METHOD_INVALID);
            }
            store
                .methods
                .get(method)
                .map(Arc::clone)
                .ok_or(StatusCode::BAD_METHOD_INVALID)?
        };
        handler(inputs)
    }
}
