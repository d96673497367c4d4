//! Mesh construction and graph assembly errors.

use thiserror::Error;

use crate::core::{EdgeId, NodeId};

/// Error raised while building the mesh
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Root region has a zero, negative or non-finite extent
    #[error("degenerate region: width={width}, height={height}")]
    DegenerateRegion {
        /// Region width
        width: f32,
        /// Region height
        height: f32,
    },

    /// Subdivision depth outside the supported range
    #[error("max level {requested} exceeds the supported maximum of {supported}")]
    InvalidMaxLevel {
        /// Requested depth
        requested: u8,
        /// Largest supported depth
        supported: u8,
    },

    /// The mesh would contain more nodes than the configured ceiling
    #[error("mesh node limit of {limit} exceeded")]
    NodeLimitExceeded {
        /// Configured ceiling
        limit: usize,
    },

    /// Subdivision visited more cells than the build budget allows
    #[error("mesh cell budget of {limit} visited cells exceeded")]
    CellLimitExceeded {
        /// Budget derived from the node ceiling
        limit: usize,
    },
}

/// Error raised when a node/edge set does not form a valid graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Two nodes share an identity
    #[error("duplicate node identity {0}")]
    DuplicateNode(NodeId),

    /// An edge references a node that is not in the node set
    #[error("edge {edge} references unknown node {node}")]
    UnknownEndpoint {
        /// Offending edge
        edge: EdgeId,
        /// Missing node
        node: NodeId,
    },

    /// Two edges connect the same unordered pair
    #[error("duplicate edge between {0} and {1}")]
    DuplicateEdge(NodeId, NodeId),

    /// An edge connects a node to itself
    #[error("edge {0} is a self loop")]
    SelfLoop(EdgeId),
}
