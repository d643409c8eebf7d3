//! Gap clustering along the beam line.
//!
//! # The Algorithm
//!
//! Sort tracks by z, then walk the sorted list once. A new cluster starts at the
//! first track and at every track whose distance to its predecessor reaches the
//! gap threshold (`z_separation`). Everything else joins the current cluster.
//!
//! ```text
//!   z:  -5.0 -4.9 -4.8        3.0 3.05              10.0
//!        |----|----|    gap    |---|      gap         |
//!        [ cluster 0  ]       [ cl. 1 ]             [ 2 ]
//! ```
//!
//! This is single-linkage clustering in one dimension with a distance cut, so
//! the result does not depend on input order. The sort is stable, which only
//! matters for the order of members with identical z.
//!
//! ## Complexity
//!
//! - **Time**: O(n log n) for the sort, O(n) for the scan.
//! - **Space**: O(n) for the sorted references.
//!
//! ## Limitations
//!
//! - A single chain of closely spaced tracks merges two true vertices however
//!   long it is. Density-based or annealing strategies handle that case better
//!   and can be plugged in through [`ClusterizerInZ`].

use super::track_cluster::{sort_by_z, Cluster};
use super::traits::ClusterizerInZ;
use crate::config::GapConfig;
use crate::error::Result;
use crate::track::{self, ZTrack};
use crate::vertex::{self, Vertex};
use tracing::{debug, trace};

/// Splits tracks wherever consecutive z positions are at least `z_separation` apart.
#[derive(Debug, Clone)]
pub struct GapClusterizer {
    config: GapConfig,
}

impl GapClusterizer {
    /// Create a clusterizer from a validated config.
    ///
    /// Fails with [`Error::InvalidParameter`](crate::Error::InvalidParameter) when
    /// `z_separation` is not a finite positive number.
    pub fn new(config: GapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Shorthand for `GapClusterizer::new(GapConfig::new(z_separation))`.
    pub fn with_z_separation(z_separation: f64) -> Result<Self> {
        Self::new(GapConfig::new(z_separation))
    }

    /// The gap that forces a cluster split.
    pub fn z_separation(&self) -> f64 {
        self.config.z_separation
    }

    /// Whether per-cluster diagnostics are emitted.
    pub fn verbose(&self) -> bool {
        self.config.verbose
    }

    /// The configuration this clusterizer was built with.
    pub fn config(&self) -> &GapConfig {
        &self.config
    }
}

impl ClusterizerInZ for GapClusterizer {
    fn clusterize<'a, T: ZTrack>(&self, tracks: &'a [T]) -> Result<Vec<Cluster<'a, T>>> {
        track::validate(tracks)?;

        let mut sorted: Vec<&'a T> = tracks.iter().collect();
        sort_by_z(&mut sorted);

        let z_sep = self.config.z_separation;
        let mut clusters = Vec::new();
        let mut current: Vec<&'a T> = Vec::new();

        for track in sorted {
            if let Some(prev) = current.last() {
                if track.z() - prev.z() >= z_sep {
                    clusters.push(Cluster::from_sorted(std::mem::take(&mut current)));
                }
            }
            current.push(track);
        }
        if !current.is_empty() {
            clusters.push(Cluster::from_sorted(current));
        }

        if self.config.verbose {
            for (index, cluster) in clusters.iter().enumerate() {
                debug!(
                    cluster = index,
                    size = cluster.len(),
                    z_min = cluster.z_min(),
                    z_max = cluster.z_max(),
                    "gap cluster"
                );
            }
        }
        trace!(
            n_tracks = tracks.len(),
            n_clusters = clusters.len(),
            z_separation = z_sep,
            "clusterized tracks"
        );

        Ok(clusters)
    }

    fn vertices<'a, T: ZTrack>(&self, tracks: &'a [T]) -> Result<Vec<Vertex<'a, T>>> {
        let vertices = vertex::aggregate_all(self.clusterize(tracks)?)?;
        if self.config.verbose {
            for (index, v) in vertices.iter().enumerate() {
                debug!(
                    vertex = index,
                    z = v.position(),
                    sigma_z = v.uncertainty(),
                    n_tracks = v.n_tracks(),
                    "gap vertex"
                );
            }
        }
        Ok(vertices)
    }
}
