//! Geometry kernel shared by every road entity.
//!
//! Pure functions and small value types, no road concepts:
//!
//! - **box2d**: axis-aligned [`Box2D`] with a point distance query
//! - **bbox**: discrete bounding box over sampled parameter values
//! - **golden_section**: 1-D unimodal minimization
//! - **rdp**: Ramer-Douglas-Peucker simplification in any dimension
//! - **mesh**: [`Mesh3D`] and border-to-ribbon stitching
//! - **collections**: key projection of ordered maps
//!
//! Everything here is reentrant and holds no shared state, so it can be
//! called from any number of threads at once.

pub mod bbox;
pub mod box2d;
pub mod collections;
pub mod error;
pub mod golden_section;
pub mod mesh;
pub mod rdp;

pub use bbox::get_bbox_for_s_values;
pub use box2d::Box2D;
pub use collections::extract_keys;
pub use error::GeometryError;
pub use golden_section::golden_section_search;
pub use mesh::{generate_mesh_from_borders, Line3D, Mesh3D};
pub use rdp::{rdp, rdp_strided, PolylinePoint};
