//! Road model and coordinate engine.
//!
//! A [`Road`] combines a [`ReferenceLine`], lane-offset and superelevation
//! splines and a set of [`LaneSection`]s, and evaluates the road frame:
//!
//! - **road**: `(s, t, z)` to world, lane-section and lane lookup, lane meshes
//! - **ref_line**: reference-line trait and a line/arc plan-view implementation
//! - **spline**: piecewise cubic polynomials over station
//! - **lane** / **lane_section**: lane widths and lateral lane layout
//! - **road_set** / **network**: id-keyed road storage and the bevy resource
//!
//! Numeric kernels (golden-section search, RDP, mesh stitching) live in the
//! `geometry` crate.

pub mod config;
pub mod error;
pub mod lane;
pub mod lane_section;
pub mod network;
pub mod ref_line;
pub mod road;
pub mod road_set;
pub mod spline;

pub use error::RoadError;
pub use lane::{Lane, LaneType};
pub use lane_section::LaneSection;
pub use network::{RoadNetwork, RoadNetworkPlugin};
pub use ref_line::{GeometryKind, RefLine, ReferenceLine, RoadGeometry};
pub use road::{Road, RoadBuilder, RoadId};
pub use road_set::RoadSet;
pub use spline::{CubicSpline, Poly3};
