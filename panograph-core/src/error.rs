//! Error types for the panograph core library.
//!
//! Every public error enum carries a companion code enum with stable,
//! machine-readable identifiers for logs and CLI exit reporting.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Raised by [`crate::DisjointSet`] when queried about a node it was never
/// initialised with.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The node has no subset record.
    #[error("node {node} was not registered with the disjoint set")]
    UnknownNode {
        /// Debug rendering of the offending node.
        node: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The node has no subset record.
        UnknownNode => UnknownNode { .. } => "DISJOINT_SET_UNKNOWN_NODE",
    }
}

/// Names one of the parallel per-edge input arrays of [`crate::compute_mst`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeArray {
    /// Source endpoints.
    FromNodes,
    /// Target endpoints.
    ToNodes,
    /// Edge weights.
    Weights,
    /// Edge bearings.
    Bearings,
}

impl EdgeArray {
    /// Returns the argument name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FromNodes => "from_nodes",
            Self::ToNodes => "to_nodes",
            Self::Weights => "weights",
            Self::Bearings => "bearings",
        }
    }
}

impl fmt::Display for EdgeArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while computing a minimum spanning tree/forest.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// One of the per-edge arrays disagrees with the declared edge count.
    #[error("{array} has length {actual} but edge_count is {expected}")]
    LengthMismatch {
        /// The offending array.
        array: EdgeArray,
        /// The declared edge count.
        expected: usize,
        /// The array's actual length.
        actual: usize,
    },
    /// The edges reference more distinct nodes than were declared.
    #[error("edges reference {distinct} distinct nodes but node_count is {declared}")]
    NodeCountExceeded {
        /// The declared node count.
        declared: usize,
        /// Distinct endpoints found across all edges.
        distinct: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge {index} has a non-finite weight")]
    NonFiniteWeight {
        /// Position of the edge in the input arrays.
        index: usize,
    },
    /// The driver queried the disjoint set about an unregistered node.
    #[error(transparent)]
    UnknownNode {
        /// Underlying disjoint-set failure.
        #[from]
        source: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// One of the per-edge arrays disagrees with the declared edge count.
        LengthMismatch => LengthMismatch { .. } => "MST_LENGTH_MISMATCH",
        /// The edges reference more distinct nodes than were declared.
        NodeCountExceeded => NodeCountExceeded { .. } => "MST_NODE_COUNT_EXCEEDED",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "MST_NON_FINITE_WEIGHT",
        /// The driver queried the disjoint set about an unregistered node.
        UnknownNode => UnknownNode { .. } => "MST_UNKNOWN_NODE",
    }
}

impl MstError {
    /// Returns `true` for caller contract violations detected before any
    /// graph work starts: mismatched array lengths, too many distinct nodes
    /// or a non-finite weight.
    #[must_use]
    pub const fn is_input_shape(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::NodeCountExceeded { .. }
                | Self::NonFiniteWeight { .. }
        )
    }
}

/// Errors produced while configuring or running the navigation planner.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NavigationError {
    /// The maximum link distance must be finite and positive.
    #[error("max_link_distance must be finite and > 0 (got {got})")]
    InvalidLinkDistance {
        /// The rejected value.
        got: f64,
    },
    /// A panorama lacked latitude or longitude while running in strict mode.
    #[error("panorama `{id}` has no usable location")]
    MissingLocation {
        /// Identifier of the panorama.
        id: String,
    },
    /// A panorama heading fell outside `[0, 359]`.
    #[error("panorama `{id}` has heading {heading}, expected 0..=359")]
    InvalidHeading {
        /// Identifier of the panorama.
        id: String,
        /// The rejected heading.
        heading: u16,
    },
    /// Spanning tree construction failed.
    #[error("failed to compute navigation links: {source}")]
    Mst {
        /// Underlying spanning-tree failure.
        #[from]
        source: MstError,
    },
}

define_error_codes! {
    /// Stable codes describing [`NavigationError`] variants.
    enum NavigationErrorCode for NavigationError {
        /// The maximum link distance must be finite and positive.
        InvalidLinkDistance => InvalidLinkDistance { .. } => "NAVIGATION_INVALID_LINK_DISTANCE",
        /// A panorama lacked latitude or longitude while running in strict mode.
        MissingLocation => MissingLocation { .. } => "NAVIGATION_MISSING_LOCATION",
        /// A panorama heading fell outside `[0, 359]`.
        InvalidHeading => InvalidHeading { .. } => "NAVIGATION_INVALID_HEADING",
        /// Spanning tree construction failed.
        MstFailure => Mst { .. } => "NAVIGATION_MST_FAILURE",
    }
}

impl NavigationError {
    /// Returns the underlying [`MstErrorCode`] when the failure originated in
    /// the spanning-tree computation.
    #[must_use]
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Mst { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// Convenient result alias for navigation planning.
pub type Result<T, E = NavigationError> = core::result::Result<T, E>;
