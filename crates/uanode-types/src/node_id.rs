use std::fmt;

/// The identifier part of a [`NodeId`], one of the three forms the protocol
/// allows for addressing a node within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Identifier {
    /// A numeric identifier. Namespace zero uses these exclusively.
    Numeric(u32),
    /// A string identifier.
    String(String),
    /// An opaque binary identifier.
    ByteString(Vec<u8>),
}

impl Identifier {
    /// Numeric zero, the identifier of the null node id.
    pub const NULL: Self = Self::Numeric(0);
}

/// A namespace-scoped node identifier.
///
/// Value type: copied, never mutated after construction, structural
/// equality. A handle owns its own `NodeId` storage; nothing is shared
/// between handles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NodeId {
    pub namespace: u16,
    pub identifier: Identifier,
}

impl NodeId {
    /// The null node id: namespace 0, numeric 0. Passed as a requested id to
    /// creation operations to ask the manager to allocate one.
    pub const NULL: Self = Self {
        namespace: 0,
        identifier: Identifier::NULL,
    };

    /// Create a numeric node id.
    #[inline]
    #[must_use]
    pub const fn numeric(namespace: u16, identifier: u32) -> Self {
        Self {
            namespace,
            identifier: Identifier::Numeric(identifier),
        }
    }

    /// Create a string node id.
    #[must_use]
    pub fn string(namespace: u16, identifier: impl Into<String>) -> Self {
        Self {
            namespace,
            identifier: Identifier::String(identifier.into()),
        }
    }

    /// Create an opaque binary node id.
    #[must_use]
    pub fn byte_string(namespace: u16, identifier: impl Into<Vec<u8>>) -> Self {
        Self {
            namespace,
            identifier: Identifier::ByteString(identifier.into()),
        }
    }

    /// Whether this is the null id (namespace 0, numeric 0).
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.namespace == 0 && matches!(self.identifier, Identifier::Numeric(0))
    }

    /// Wrap into an [`ExpandedNodeId`] addressing the local server.
    #[must_use]
    pub fn into_expanded(self) -> ExpandedNodeId {
        ExpandedNodeId {
            node_id: self,
            namespace_uri: None,
            server_index: 0,
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for NodeId {
    /// Renders the protocol's text form: `i=84`, `ns=1;i=42`, `ns=1;s=Pump`,
    /// `ns=1;b=<hex>`. The `ns=` part is omitted for namespace zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};", self.namespace)?;
        }
        match &self.identifier {
            Identifier::Numeric(n) => write!(f, "i={n}"),
            Identifier::String(s) => write!(f, "s={s}"),
            Identifier::ByteString(b) => {
                f.write_str("b=")?;
                for byte in b {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<Identifier> for NodeId {
    /// An identifier without an explicit namespace lands in namespace 0.
    fn from(identifier: Identifier) -> Self {
        Self {
            namespace: 0,
            identifier,
        }
    }
}

/// A [`NodeId`] extended with optional remote-server addressing, used as the
/// target of add/delete-reference operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ExpandedNodeId {
    pub node_id: NodeId,
    /// Namespace URI overriding the numeric namespace index, if set.
    pub namespace_uri: Option<String>,
    /// Index into the server table; 0 addresses the local server.
    pub server_index: u32,
}

impl ExpandedNodeId {
    /// Whether this id addresses the local server with no URI override.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.server_index == 0 && self.namespace_uri.is_none()
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self {
        node_id.into_expanded()
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.server_index != 0 {
            write!(f, "svr={};", self.server_index)?;
        }
        if let Some(uri) = &self.namespace_uri {
            write!(f, "nsu={uri};")?;
        }
        write!(f, "{}", self.node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_numeric_ns0_omits_namespace() {
        assert_eq!(NodeId::numeric(0, 84).to_string(), "i=84");
    }

    #[test]
    fn test_display_numeric_with_namespace() {
        assert_eq!(NodeId::numeric(1, 42).to_string(), "ns=1;i=42");
    }

    #[test]
    fn test_display_string_and_byte_string() {
        assert_eq!(NodeId::string(1, "Pump").to_string(), "ns=1;s=Pump");
        assert_eq!(
            NodeId::byte_string(2, vec![0xDE, 0xAD, 0x01]).to_string(),
            "ns=2;b=dead01"
        );
    }

    #[test]
    fn test_null_checks() {
        assert!(NodeId::NULL.is_null());
        assert!(NodeId::default().is_null());
        assert!(!NodeId::numeric(1, 0).is_null());
        assert!(!NodeId::numeric(0, 84).is_null());
        assert!(!NodeId::string(0, "").is_null());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(NodeId::numeric(1, 5), NodeId::numeric(1, 5));
        assert_ne!(NodeId::numeric(1, 5), NodeId::numeric(2, 5));
        assert_ne!(NodeId::numeric(1, 5), NodeId::string(1, "5"));
    }

    #[test]
    fn test_expanded_display_and_locality() {
        let local = NodeId::numeric(1, 7).into_expanded();
        assert!(local.is_local());
        assert_eq!(local.to_string(), "ns=1;i=7");

        let remote = ExpandedNodeId {
            node_id: NodeId::numeric(0, 85),
            namespace_uri: Some("urn:factory:plc".to_owned()),
            server_index: 3,
        };
        assert!(!remote.is_local());
        assert_eq!(remote.to_string(), "svr=3;nsu=urn:factory:plc;i=85");
    }

    #[test]
    fn test_serde_round_trip() {
        let id = NodeId::string(4, "Motor.Speed");
        let json = serde_json::to_string(&id).expect("serialize");
        let back: NodeId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
