//! Panograph core library.
//!
//! Turns geotagged panoramas into a navigable connectivity graph: candidate
//! links between nearby panoramas carry a distance weight and a bearing, and
//! a Kruskal minimum spanning tree over a union-find keeps the lightest
//! acyclic subset while preserving each link's bearing.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod geometry;
mod graph;
mod mst;
mod navigation;
mod panorama;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{
        DisjointSetError, DisjointSetErrorCode, EdgeArray, MstError, MstErrorCode,
        NavigationError, NavigationErrorCode, Result,
    },
    geometry::{
        GeoCoordinate, Point2, bearing, bounds_contain, clamp, degrees_to_radians, distance,
        wrap_degrees,
    },
    graph::{Edge, Graph},
    mst::{MinimumSpanningForest, compute_mst, kruskal},
    navigation::{NavigationArrow, NavigationGraph, NavigationGraphBuilder, NavigationPlanner},
    panorama::{Dms, PanoramaMetadata},
};
