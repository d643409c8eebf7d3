//! Vertex finding along the beam line.
//!
//! `zvertex` groups tracks, each reduced to a longitudinal impact point `z` and
//! its uncertainty, into clusters of tracks that plausibly share an origin, and
//! reduces each cluster to a vertex estimate.
//!
//! The primary public API:
//! - [`ClusterizerInZ`]: strategy trait for splitting tracks along z
//! - [`GapClusterizer`]: splits wherever neighbouring tracks are at least
//!   `z_separation` apart
//! - [`aggregate`]: inverse-variance weighted vertex of one cluster
//! - [`find_vertices`]: the whole chain in one call
//!
//! ```rust
//! use zvertex::{find_vertices, GapConfig, Track};
//!
//! let tracks = vec![
//!     Track::new(-5.0, 0.1),
//!     Track::new(-4.9, 0.1),
//!     Track::new(3.0, 0.2),
//!     Track::new(3.05, 0.2),
//!     Track::new(10.0, 0.3),
//! ];
//! let vertices = find_vertices(&tracks, &GapConfig::new(0.5)).unwrap();
//! assert_eq!(vertices.len(), 3);
//! assert_eq!(vertices[2].position(), 10.0);
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod track;
pub mod vertex;

pub use cluster::{Cluster, ClusterizerInZ, GapClusterizer};
pub use config::GapConfig;
pub use error::{Error, Result};
pub use pipeline::{find_vertices, find_vertices_per_event};
pub use track::{Track, ZTrack};
pub use vertex::{aggregate, Vertex};
