//! Error types for the spanwise core library.
//!
//! Graph construction failures are reported through [`GraphError`]; failures
//! raised while an engine or disjoint-set runs are reported through
//! [`MstError`]. Both carry stable machine-readable codes.

use std::{fmt, sync::Arc};

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

/// An error produced while constructing a [`crate::Graph`].
///
/// Vertex identifiers are captured through their `Debug` rendering so the
/// error type stays independent of the graph's vertex type.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex missing from the vertex sequence.
    #[error("edge {edge_index} references unknown vertex {vertex}")]
    InvalidEdge {
        /// Rendering of the vertex that could not be found.
        vertex: Arc<str>,
        /// Position of the offending edge in the supplied edge list.
        edge_index: usize,
    },
    /// The vertex sequence listed the same identifier more than once.
    #[error("vertex {vertex} appears more than once")]
    DuplicateVertex {
        /// Rendering of the repeated vertex.
        vertex: Arc<str>,
    },
    /// An edge joined a vertex to itself.
    #[error("edge {edge_index} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Rendering of the looped vertex.
        vertex: Arc<str>,
        /// Position of the offending edge in the supplied edge list.
        edge_index: usize,
    },
    /// An edge carried a NaN weight.
    #[error("edge {edge_index} has a NaN weight")]
    NonFiniteWeight {
        /// Position of the offending edge in the supplied edge list.
        edge_index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex missing from the vertex sequence.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// The vertex sequence listed the same identifier more than once.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An edge joined a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge carried a NaN weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// An error raised while a disjoint-set or MST engine is running.
///
/// These indicate a caller inconsistency upstream of a well-formed graph and
/// are not retried.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// A vertex was not registered with the structure being queried.
    #[error("vertex {vertex} is not registered")]
    UnknownVertex {
        /// Rendering of the unregistered vertex.
        vertex: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A vertex was not registered with the structure being queried.
        UnknownVertex => UnknownVertex { .. } => "MST_UNKNOWN_VERTEX",
    }
}

impl MstError {
    pub(crate) fn unknown_vertex(vertex: &impl fmt::Debug) -> Self {
        Self::UnknownVertex {
            vertex: render_vertex(vertex),
        }
    }
}

pub(crate) fn render_vertex(vertex: &impl fmt::Debug) -> Arc<str> {
    Arc::from(format!("{vertex:?}"))
}

/// Convenient alias for results returned by the engines.
pub type Result<T> = core::result::Result<T, MstError>;
