//! Data structures representing parsed 3MF models
//!
//! These are the values a 3MF reader hands over for conversion. Only the
//! parts of the 3MF Core specification that reach the X3D scene are
//! represented: units, metadata, mesh objects and build items.

mod core;

pub use core::{Build, BuildItem, Mesh, MetadataEntry, Model, Object, Resources, Triangle, Vertex};
