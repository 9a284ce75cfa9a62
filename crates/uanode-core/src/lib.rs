//! Node handles over an abstract address space.
//!
//! This crate separates two concerns. The manager traits in [`space`]
//! describe what an address space can do: read and write attributes, walk
//! reference edges, create and delete nodes, invoke methods. The handle in
//! [`node`] is the ergonomic layer on top: a cheap `(manager, id)` pair with
//! best-effort attribute accessors, name lookup, and path resolution.
//! [`memory`] provides the in-process manager used by embedders and tests.

pub mod browse;
pub mod memory;
pub mod node;
pub mod space;

#[cfg(test)]
pub(crate) mod testing;

pub use browse::{Reference, collect_references, find_by_name};
pub use memory::{MemAddressSpace, MethodHandler, NS0_URI};
pub use node::Node;
pub use space::{
    AddressSpace, AttributeReader, AttributeWriter, ChildVisitor, ServiceResult,
};
