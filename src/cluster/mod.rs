//! Clustering of tracks along the beam line.
//!
//! ## Why cluster in one dimension
//!
//! Tracks from the same interaction point meet the beam line at nearly the
//! same z, smeared by their measurement errors. Tracks from different
//! interaction points land apart. Before fitting anything, the tracks of one
//! event are split into groups that plausibly share an origin.
//!
//! ## Strategies
//!
//! [`ClusterizerInZ`] is the seam: anything that partitions tracks into
//! z-ordered, non-empty clusters can feed the vertex aggregation.
//!
//! ### Gap clustering
//!
//! [`GapClusterizer`] sorts by z and cuts wherever two neighbours are at
//! least `z_separation` apart. Cheap and deterministic, but a continuous
//! chain of tracks merges everything it touches.
//!
//! ## Usage
//!
//! ```rust
//! use zvertex::cluster::{ClusterizerInZ, GapClusterizer};
//! use zvertex::Track;
//!
//! let tracks = vec![Track::new(0.0, 0.1), Track::new(0.2, 0.1), Track::new(2.0, 0.1)];
//! let clusterizer = GapClusterizer::with_z_separation(0.5).unwrap();
//! let clusters = clusterizer.clusterize(&tracks).unwrap();
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].len(), 2);
//! ```

mod gap;
mod track_cluster;
mod traits;

pub use gap::GapClusterizer;
pub use track_cluster::Cluster;
pub use traits::ClusterizerInZ;
