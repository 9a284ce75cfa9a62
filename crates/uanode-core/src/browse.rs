//! Accumulator strategies over the manager's child walk.
//!
//! The manager pushes edges through a visitor callback; the two functions
//! here are the strategies the node layer consumes that stream with. Both
//! run the walk to completion unless the manager itself aborts it.

use uanode_error::StatusCode;
use uanode_types::{AttributeId, NodeId, QualifiedName, Variant};

use crate::space::{AddressSpace, ServiceResult};

/// One reference edge reported by a child walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The node on the far end of the edge.
    pub child: NodeId,
    /// Whether the edge was traversed against its forward direction.
    pub is_inverse: bool,
    /// The reference type labelling the edge.
    pub reference_type: NodeId,
}

/// Collect every edge of `node`, in the manager's walk order.
///
/// Zero edges with a good walk status is `Ok` with an empty Vec.
pub fn collect_references(
    space: &dyn AddressSpace,
    node: &NodeId,
) -> ServiceResult<Vec<Reference>> {
    let mut out = Vec::new();
    let status = space.for_each_child(node, &mut |child, is_inverse, reference_type| {
        out.push(Reference {
            child: child.clone(),
            is_inverse,
            reference_type: reference_type.clone(),
        });
        StatusCode::GOOD
    });
    if status.is_good() {
        Ok(out)
    } else {
        Err(status)
    }
}

/// Collect every edge of `node` whose child's browse name equals `target`.
///
/// A child in a different namespace than the token is skipped without a
/// probe. A per-child BrowseName probe that fails at service level, decodes
/// to the wrong type, or carries non-good quality counts as "does not
/// match"; the walk continues to later children. Ambiguous browse names are
/// legal, so all matches are collected and the caller decides plurality.
pub fn find_by_name(
    space: &dyn AddressSpace,
    node: &NodeId,
    target: &QualifiedName,
) -> ServiceResult<Vec<Reference>> {
    let mut out = Vec::new();
    let status = space.for_each_child(node, &mut |child, is_inverse, reference_type| {
        if child.namespace != target.namespace_index {
            return StatusCode::GOOD;
        }
        let matched = space
            .reader()
            .read(child, AttributeId::BrowseName)
            .ok()
            .filter(|probe| probe.status.is_good())
            .and_then(|probe| match probe.value {
                Variant::QualifiedName(name) => Some(name),
                _ => None,
            })
            .is_some_and(|name| name.name == target.name);
        if matched {
            out.push(Reference {
                child: child.clone(),
                is_inverse,
                reference_type: reference_type.clone(),
            });
        }
        StatusCode::GOOD
    });
    if status.is_good() {
        Ok(out)
    } else {
        Err(status)
    }
}
