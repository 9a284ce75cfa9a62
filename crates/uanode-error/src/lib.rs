//! Status codes and error types for the uanode address-space layer.
//!
//! Two failure carriers exist, chosen by the shape of the operation:
//!
//! - [`StatusCode`] — the protocol's numeric result code (severity in the top
//!   two bits). Status-only operations (attribute writes, reference edits,
//!   node deletion) return it directly and the caller must check it.
//! - [`NodeError`] — the library error for value-producing operations, with
//!   structured variants and a [`NodeError::status`] mapping back onto the
//!   protocol code space.

use thiserror::Error;

// ---------------------------------------------------------------------------
// StatusCode
// ---------------------------------------------------------------------------

/// A protocol result code.
///
/// The numeric values are the protocol's own (OPC UA Part 4): bits 30..=31
/// carry the severity (`00` good, `01` uncertain, `10` bad), the upper half
/// of the word carries the subcode. The code space is open: codes outside
/// the named table below still round-trip through [`StatusCode::from_raw`]
/// and compare structurally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
#[repr(transparent)]
pub struct StatusCode(u32);

impl StatusCode {
    /// The operation succeeded.
    pub const GOOD: Self = Self(0x0000_0000);
    /// Generic uncertain severity with no subcode.
    pub const UNCERTAIN: Self = Self(0x4000_0000);
    /// Generic bad severity with no subcode.
    pub const BAD: Self = Self(0x8000_0000);

    /// An unexpected error occurred.
    pub const BAD_UNEXPECTED_ERROR: Self = Self(0x8001_0000);
    /// An internal error occurred as a result of a programming or
    /// configuration error.
    pub const BAD_INTERNAL_ERROR: Self = Self(0x8002_0000);
    /// Not enough memory to complete the operation.
    pub const BAD_OUT_OF_MEMORY: Self = Self(0x8003_0000);
    /// An operating system resource is not available.
    pub const BAD_RESOURCE_UNAVAILABLE: Self = Self(0x8004_0000);
    /// A low level communication error occurred.
    pub const BAD_COMMUNICATION_ERROR: Self = Self(0x8005_0000);
    /// Encoding halted because of invalid data in the objects being
    /// serialized.
    pub const BAD_ENCODING_ERROR: Self = Self(0x8006_0000);
    /// Decoding halted because of invalid data in the stream.
    pub const BAD_DECODING_ERROR: Self = Self(0x8007_0000);
    /// The operation timed out.
    pub const BAD_TIMEOUT: Self = Self(0x800A_0000);
    /// The server does not support the requested service.
    pub const BAD_SERVICE_UNSUPPORTED: Self = Self(0x800B_0000);
    /// The operation was cancelled because the application is shutting down.
    pub const BAD_SHUTDOWN: Self = Self(0x800C_0000);
    /// The operation could not complete because the client is not connected
    /// to the server.
    pub const BAD_SERVER_NOT_CONNECTED: Self = Self(0x800D_0000);
    /// There was nothing to do because the request did not specify any work.
    pub const BAD_NOTHING_TO_DO: Self = Self(0x800F_0000);
    /// The request could not be processed because it specified too many
    /// operations.
    pub const BAD_TOO_MANY_OPERATIONS: Self = Self(0x8010_0000);
    /// User does not have permission to perform the requested operation.
    pub const BAD_USER_ACCESS_DENIED: Self = Self(0x801F_0000);
    /// The session id is not valid.
    pub const BAD_SESSION_ID_INVALID: Self = Self(0x8025_0000);
    /// The session was closed by the client.
    pub const BAD_SESSION_CLOSED: Self = Self(0x8026_0000);
    /// The syntax of the node id is not valid.
    pub const BAD_NODE_ID_INVALID: Self = Self(0x8033_0000);
    /// The node id refers to a node that does not exist in the address space.
    pub const BAD_NODE_ID_UNKNOWN: Self = Self(0x8034_0000);
    /// The attribute is not supported for the specified node.
    pub const BAD_ATTRIBUTE_ID_INVALID: Self = Self(0x8035_0000);
    /// The syntax of the index range parameter is invalid.
    pub const BAD_INDEX_RANGE_INVALID: Self = Self(0x8036_0000);
    /// The data encoding is invalid.
    pub const BAD_DATA_ENCODING_INVALID: Self = Self(0x8038_0000);
    /// The access level does not allow reading or subscribing to the node.
    pub const BAD_NOT_READABLE: Self = Self(0x803A_0000);
    /// The access level does not allow writing to the node.
    pub const BAD_NOT_WRITABLE: Self = Self(0x803B_0000);
    /// The value was out of range.
    pub const BAD_OUT_OF_RANGE: Self = Self(0x803C_0000);
    /// The requested operation is not supported.
    pub const BAD_NOT_SUPPORTED: Self = Self(0x803D_0000);
    /// A requested item was not found or a search operation ended without
    /// success.
    pub const BAD_NOT_FOUND: Self = Self(0x803E_0000);
    /// The reference type id does not refer to a valid reference type node.
    pub const BAD_REFERENCE_TYPE_ID_INVALID: Self = Self(0x804C_0000);
    /// The browse direction is not valid.
    pub const BAD_BROWSE_DIRECTION_INVALID: Self = Self(0x804D_0000);
    /// The node is not part of the view.
    pub const BAD_NODE_NOT_IN_VIEW: Self = Self(0x804E_0000);
    /// The parent node id does not refer to a valid node.
    pub const BAD_PARENT_NODE_ID_INVALID: Self = Self(0x805B_0000);
    /// The reference could not be created because it violates constraints
    /// imposed by the data model.
    pub const BAD_REFERENCE_NOT_ALLOWED: Self = Self(0x805C_0000);
    /// The requested node id was rejected because it was either invalid or
    /// server does not allow node ids to be specified by the client.
    pub const BAD_NODE_ID_REJECTED: Self = Self(0x805D_0000);
    /// The requested node id is already used by another node.
    pub const BAD_NODE_ID_EXISTS: Self = Self(0x805E_0000);
    /// The node class is not valid.
    pub const BAD_NODE_CLASS_INVALID: Self = Self(0x805F_0000);
    /// The browse name is invalid.
    pub const BAD_BROWSE_NAME_INVALID: Self = Self(0x8060_0000);
    /// The browse name is not unique among nodes that share the same
    /// relationship with the parent.
    pub const BAD_BROWSE_NAME_DUPLICATED: Self = Self(0x8061_0000);
    /// The node attributes are not valid for the node class.
    pub const BAD_NODE_ATTRIBUTES_INVALID: Self = Self(0x8062_0000);
    /// The type definition node id does not reference an appropriate type
    /// node.
    pub const BAD_TYPE_DEFINITION_INVALID: Self = Self(0x8063_0000);
    /// The source node id does not reference a valid node.
    pub const BAD_SOURCE_NODE_ID_INVALID: Self = Self(0x8064_0000);
    /// The target node id does not reference a valid node.
    pub const BAD_TARGET_NODE_ID_INVALID: Self = Self(0x8065_0000);
    /// The reference type between the nodes is already defined.
    pub const BAD_DUPLICATE_REFERENCE_NOT_ALLOWED: Self = Self(0x8066_0000);
    /// The server does not allow this type of self reference on this node.
    pub const BAD_INVALID_SELF_REFERENCE: Self = Self(0x8067_0000);
    /// The reference type is not valid for a reference to a remote server.
    pub const BAD_REFERENCE_LOCAL_ONLY: Self = Self(0x8068_0000);
    /// The server will not allow the node to be deleted.
    pub const BAD_NO_DELETE_RIGHTS: Self = Self(0x8069_0000);
    /// The requested operation has no match to return.
    pub const BAD_NO_MATCH: Self = Self(0x806F_0000);
    /// The value supplied for the attribute is not of the same type as the
    /// attribute's value.
    pub const BAD_TYPE_MISMATCH: Self = Self(0x8074_0000);
    /// The method id does not refer to a method for the specified object.
    pub const BAD_METHOD_INVALID: Self = Self(0x8075_0000);
    /// The client did not specify all of the input arguments for the method.
    pub const BAD_ARGUMENTS_MISSING: Self = Self(0x8076_0000);
    /// One or more arguments are invalid.
    pub const BAD_INVALID_ARGUMENT: Self = Self(0x80AB_0000);

    const SEVERITY_MASK: u32 = 0xC000_0000;

    /// Wrap a raw protocol code.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 code.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether the severity bits say "good".
    #[inline]
    #[must_use]
    pub const fn is_good(self) -> bool {
        self.0 & Self::SEVERITY_MASK == 0
    }

    /// Whether the severity bits say "uncertain".
    #[inline]
    #[must_use]
    pub const fn is_uncertain(self) -> bool {
        self.0 & Self::SEVERITY_MASK == 0x4000_0000
    }

    /// Whether the severity bits say "bad".
    #[inline]
    #[must_use]
    pub const fn is_bad(self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    /// Symbolic name of the code, if it is one of the named codes.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::GOOD => "Good",
            Self::UNCERTAIN => "Uncertain",
            Self::BAD => "Bad",
            Self::BAD_UNEXPECTED_ERROR => "BadUnexpectedError",
            Self::BAD_INTERNAL_ERROR => "BadInternalError",
            Self::BAD_OUT_OF_MEMORY => "BadOutOfMemory",
            Self::BAD_RESOURCE_UNAVAILABLE => "BadResourceUnavailable",
            Self::BAD_COMMUNICATION_ERROR => "BadCommunicationError",
            Self::BAD_ENCODING_ERROR => "BadEncodingError",
            Self::BAD_DECODING_ERROR => "BadDecodingError",
            Self::BAD_TIMEOUT => "BadTimeout",
            Self::BAD_SERVICE_UNSUPPORTED => "BadServiceUnsupported",
            Self::BAD_SHUTDOWN => "BadShutdown",
            Self::BAD_SERVER_NOT_CONNECTED => "BadServerNotConnected",
            Self::BAD_NOTHING_TO_DO => "BadNothingToDo",
            Self::BAD_TOO_MANY_OPERATIONS => "BadTooManyOperations",
            Self::BAD_USER_ACCESS_DENIED => "BadUserAccessDenied",
            Self::BAD_SESSION_ID_INVALID => "BadSessionIdInvalid",
            Self::BAD_SESSION_CLOSED => "BadSessionClosed",
            Self::BAD_NODE_ID_INVALID => "BadNodeIdInvalid",
            Self::BAD_NODE_ID_UNKNOWN => "BadNodeIdUnknown",
            Self::BAD_ATTRIBUTE_ID_INVALID => "BadAttributeIdInvalid",
            Self::BAD_INDEX_RANGE_INVALID => "BadIndexRangeInvalid",
            Self::BAD_DATA_ENCODING_INVALID => "BadDataEncodingInvalid",
            Self::BAD_NOT_READABLE => "BadNotReadable",
            Self::BAD_NOT_WRITABLE => "BadNotWritable",
            Self::BAD_OUT_OF_RANGE => "BadOutOfRange",
            Self::BAD_NOT_SUPPORTED => "BadNotSupported",
            Self::BAD_NOT_FOUND => "BadNotFound",
            Self::BAD_REFERENCE_TYPE_ID_INVALID => "BadReferenceTypeIdInvalid",
            Self::BAD_BROWSE_DIRECTION_INVALID => "BadBrowseDirectionInvalid",
            Self::BAD_NODE_NOT_IN_VIEW => "BadNodeNotInView",
            Self::BAD_PARENT_NODE_ID_INVALID => "BadParentNodeIdInvalid",
            Self::BAD_REFERENCE_NOT_ALLOWED => "BadReferenceNotAllowed",
            Self::BAD_NODE_ID_REJECTED => "BadNodeIdRejected",
            Self::BAD_NODE_ID_EXISTS => "BadNodeIdExists",
            Self::BAD_NODE_CLASS_INVALID => "BadNodeClassInvalid",
            Self::BAD_BROWSE_NAME_INVALID => "BadBrowseNameInvalid",
            Self::BAD_BROWSE_NAME_DUPLICATED => "BadBrowseNameDuplicated",
            Self::BAD_NODE_ATTRIBUTES_INVALID => "BadNodeAttributesInvalid",
            Self::BAD_TYPE_DEFINITION_INVALID => "BadTypeDefinitionInvalid",
            Self::BAD_SOURCE_NODE_ID_INVALID => "BadSourceNodeIdInvalid",
            Self::BAD_TARGET_NODE_ID_INVALID => "BadTargetNodeIdInvalid",
            Self::BAD_DUPLICATE_REFERENCE_NOT_ALLOWED => "BadDuplicateReferenceNotAllowed",
            Self::BAD_INVALID_SELF_REFERENCE => "BadInvalidSelfReference",
            Self::BAD_REFERENCE_LOCAL_ONLY => "BadReferenceLocalOnly",
            Self::BAD_NO_DELETE_RIGHTS => "BadNoDeleteRights",
            Self::BAD_NO_MATCH => "BadNoMatch",
            Self::BAD_TYPE_MISMATCH => "BadTypeMismatch",
            Self::BAD_METHOD_INVALID => "BadMethodInvalid",
            Self::BAD_ARGUMENTS_MISSING => "BadArgumentsMissing",
            Self::BAD_INVALID_ARGUMENT => "BadInvalidArgument",
            _ => return None,
        })
    }

    /// Turn a non-good status into [`NodeError::Service`] for `operation`.
    ///
    /// Good statuses (including good-with-subcode) pass through as `Ok(())`.
    pub fn check(self, operation: &'static str) -> Result<()> {
        if self.is_good() {
            Ok(())
        } else {
            Err(NodeError::Service {
                operation,
                status: self,
            })
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:08X}", self.0),
        }
    }
}

// ---------------------------------------------------------------------------
// NodeError
// ---------------------------------------------------------------------------

/// Primary error type for node-layer operations.
///
/// Structured variants for the failures this layer itself detects, plus a
/// verbatim carrier for any non-good status produced by the address-space
/// manager.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    // === Resolution failures ===
    /// A path segment (or single-name lookup) matched no child. Resolution
    /// stops at the named segment; later segments are never attempted.
    #[error("no child matching '{segment}'")]
    NoSuchChild { segment: String },

    /// A qualified name carried a namespace prefix that is not a valid
    /// namespace index.
    #[error("invalid namespace prefix '{prefix}' in qualified name '{raw}'")]
    BadNamespacePrefix { raw: String, prefix: String },

    // === Manager failures ===
    /// The address-space manager reported a non-good status. The status is
    /// the manager's, untranslated.
    #[error("{operation} failed: {status}")]
    Service {
        operation: &'static str,
        status: StatusCode,
    },

    // === Decode failures ===
    /// An attribute read produced a value of an unexpected variant type.
    #[error("attribute {attribute} decoded as {actual}")]
    AttributeType {
        attribute: &'static str,
        actual: &'static str,
    },
}

impl NodeError {
    /// Map this error onto the protocol code space.
    ///
    /// [`NodeError::Service`] passes the manager's status through verbatim;
    /// the layer's own failures map to the closest protocol code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NoSuchChild { .. } => StatusCode::BAD_NO_MATCH,
            Self::BadNamespacePrefix { .. } => StatusCode::BAD_BROWSE_NAME_INVALID,
            Self::Service { status, .. } => *status,
            Self::AttributeType { .. } => StatusCode::BAD_TYPE_MISMATCH,
        }
    }

    /// Whether this is a transient failure that may succeed on retry.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Service {
                status: StatusCode::BAD_TIMEOUT
                    | StatusCode::BAD_SERVER_NOT_CONNECTED
                    | StatusCode::BAD_RESOURCE_UNAVAILABLE,
                ..
            }
        )
    }

    /// Create a [`NodeError::Service`] for `operation`.
    #[must_use]
    pub const fn service(operation: &'static str, status: StatusCode) -> Self {
        Self::Service { operation, status }
    }

    /// Create a [`NodeError::NoSuchChild`] naming the failing segment.
    pub fn no_such_child(segment: impl Into<String>) -> Self {
        Self::NoSuchChild {
            segment: segment.into(),
        }
    }
}

/// Result type alias using `NodeError`.
pub type Result<T> = std::result::Result<T, NodeError>;
