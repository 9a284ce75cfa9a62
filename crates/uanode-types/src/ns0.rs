//! Well-known namespace-zero node ids.
//!
//! The subset of the standard information model this layer touches:
//! the folder skeleton, the reference types used for containment edges,
//! the base type nodes used as type definitions, and the scalar data-type
//! nodes.

use crate::NodeId;

// Folder skeleton.
pub const ROOT_FOLDER: NodeId = NodeId::numeric(0, 84);
pub const OBJECTS_FOLDER: NodeId = NodeId::numeric(0, 85);
pub const TYPES_FOLDER: NodeId = NodeId::numeric(0, 86);
pub const VIEWS_FOLDER: NodeId = NodeId::numeric(0, 87);
pub const OBJECT_TYPES_FOLDER: NodeId = NodeId::numeric(0, 88);
pub const VARIABLE_TYPES_FOLDER: NodeId = NodeId::numeric(0, 89);
pub const DATA_TYPES_FOLDER: NodeId = NodeId::numeric(0, 90);
pub const REFERENCE_TYPES_FOLDER: NodeId = NodeId::numeric(0, 91);

// Reference types.
pub const REFERENCES: NodeId = NodeId::numeric(0, 31);
pub const NON_HIERARCHICAL_REFERENCES: NodeId = NodeId::numeric(0, 32);
pub const HIERARCHICAL_REFERENCES: NodeId = NodeId::numeric(0, 33);
pub const HAS_CHILD: NodeId = NodeId::numeric(0, 34);
pub const ORGANIZES: NodeId = NodeId::numeric(0, 35);
pub const HAS_MODELLING_RULE: NodeId = NodeId::numeric(0, 37);
pub const HAS_TYPE_DEFINITION: NodeId = NodeId::numeric(0, 40);
pub const HAS_SUBTYPE: NodeId = NodeId::numeric(0, 45);
pub const HAS_PROPERTY: NodeId = NodeId::numeric(0, 46);
pub const HAS_COMPONENT: NodeId = NodeId::numeric(0, 47);

// Type definitions.
pub const BASE_OBJECT_TYPE: NodeId = NodeId::numeric(0, 58);
pub const FOLDER_TYPE: NodeId = NodeId::numeric(0, 61);
pub const BASE_VARIABLE_TYPE: NodeId = NodeId::numeric(0, 62);
pub const BASE_DATA_VARIABLE_TYPE: NodeId = NodeId::numeric(0, 63);
pub const PROPERTY_TYPE: NodeId = NodeId::numeric(0, 68);

// Data types.
pub const BASE_DATA_TYPE: NodeId = NodeId::numeric(0, 24);
pub const BOOLEAN: NodeId = NodeId::numeric(0, 1);
pub const SBYTE: NodeId = NodeId::numeric(0, 2);
pub const BYTE: NodeId = NodeId::numeric(0, 3);
pub const INT16: NodeId = NodeId::numeric(0, 4);
pub const UINT16: NodeId = NodeId::numeric(0, 5);
pub const INT32: NodeId = NodeId::numeric(0, 6);
pub const UINT32: NodeId = NodeId::numeric(0, 7);
pub const INT64: NodeId = NodeId::numeric(0, 8);
pub const UINT64: NodeId = NodeId::numeric(0, 9);
pub const FLOAT: NodeId = NodeId::numeric(0, 10);
pub const DOUBLE: NodeId = NodeId::numeric(0, 11);
pub const STRING: NodeId = NodeId::numeric(0, 12);
pub const DATE_TIME: NodeId = NodeId::numeric(0, 13);

// Server object.
pub const SERVER: NodeId = NodeId::numeric(0, 2253);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_numeric_values() {
        assert_eq!(ROOT_FOLDER, NodeId::numeric(0, 84));
        assert_eq!(OBJECTS_FOLDER, NodeId::numeric(0, 85));
        assert_eq!(ORGANIZES, NodeId::numeric(0, 35));
        assert_eq!(FOLDER_TYPE, NodeId::numeric(0, 61));
        assert_eq!(BASE_OBJECT_TYPE, NodeId::numeric(0, 58));
        assert_eq!(SERVER, NodeId::numeric(0, 2253));
    }

    #[test]
    fn test_all_in_namespace_zero() {
        for id in [
            &ROOT_FOLDER,
            &OBJECTS_FOLDER,
            &TYPES_FOLDER,
            &VIEWS_FOLDER,
            &ORGANIZES,
            &HAS_TYPE_DEFINITION,
            &HAS_COMPONENT,
            &FOLDER_TYPE,
            &BASE_DATA_TYPE,
            &SERVER,
        ] {
            assert_eq!(id.namespace, 0);
        }
    }
}
