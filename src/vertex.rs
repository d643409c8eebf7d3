//! Vertex estimates from track clusters.
//!
//! # Inverse-variance weighting
//!
//! Each member track contributes with weight `w_i = 1 / σ_i²`:
//!
//! ```text
//! z_vtx = Σ w_i z_i / Σ w_i
//! σ_vtx = sqrt(1 / Σ w_i)
//! ```
//!
//! Weights are evaluated relative to the smallest uncertainty in the cluster,
//! `w_i' = (σ_min / σ_i)²`, which lies in (0, 1] and cannot overflow. Then
//! `σ_vtx = σ_min / sqrt(Σ w_i')`.
//!
//! ## Exact tracks
//!
//! A track with `σ = 0` is an exact measurement and dominates the mean: the
//! vertex takes its position with zero uncertainty. Several exact tracks are
//! fine as long as they agree; if they disagree the cluster is reported as
//! [`Error::InconsistentInput`] instead of picking one.

use crate::cluster::Cluster;
use crate::error::{Error, Result};
use crate::track::{self, ZTrack};

/// Aggregate estimate of one cluster.
#[derive(Debug)]
pub struct Vertex<'a, T> {
    position: f64,
    uncertainty: f64,
    cluster: Cluster<'a, T>,
}

impl<T> Clone for Vertex<'_, T> {
    fn clone(&self) -> Self {
        Self {
            position: self.position,
            uncertainty: self.uncertainty,
            cluster: self.cluster.clone(),
        }
    }
}

impl<'a, T> Vertex<'a, T> {
    /// Weighted mean z of the member tracks.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Propagated standard error of [`position`](Self::position).
    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// The cluster this vertex was built from.
    pub fn cluster(&self) -> &Cluster<'a, T> {
        &self.cluster
    }

    /// Member tracks in z order.
    pub fn tracks(&self) -> &[&'a T] {
        self.cluster.tracks()
    }

    /// Number of member tracks.
    pub fn n_tracks(&self) -> usize {
        self.cluster.len()
    }

    /// Drop the estimate, keeping the cluster.
    pub fn into_cluster(self) -> Cluster<'a, T> {
        self.cluster
    }
}

/// Reduce a cluster to a vertex.
///
/// Member tracks are checked first: a non-finite position or a negative or NaN
/// uncertainty gives [`Error::InvalidTrack`], with `index` counted in z order
/// within the cluster.
///
/// An [`Error::InconsistentInput`] from this function reports `cluster: 0`;
/// [`ClusterizerInZ::vertices`](crate::ClusterizerInZ::vertices) fills in the
/// real position of the cluster in its output.
pub fn aggregate<T: ZTrack>(cluster: Cluster<'_, T>) -> Result<Vertex<'_, T>> {
    aggregate_at(cluster, 0)
}

/// Aggregate every cluster, or none if any cluster fails.
pub(crate) fn aggregate_all<'a, T: ZTrack>(
    clusters: Vec<Cluster<'a, T>>,
) -> Result<Vec<Vertex<'a, T>>> {
    clusters
        .into_iter()
        .enumerate()
        .map(|(index, cluster)| aggregate_at(cluster, index))
        .collect()
}

fn aggregate_at<T: ZTrack>(cluster: Cluster<'_, T>, index: usize) -> Result<Vertex<'_, T>> {
    // Clusters built through `Cluster::from_tracks` have not been checked yet.
    track::validate(cluster.tracks())?;

    if cluster.len() == 1 {
        let only = cluster.tracks()[0];
        let (position, uncertainty) = (only.z(), only.z_error());
        return Ok(Vertex {
            position,
            uncertainty,
            cluster,
        });
    }

    if let Some(z) = exact_position(&cluster, index)? {
        return Ok(Vertex {
            position: z,
            uncertainty: 0.0,
            cluster,
        });
    }

    let sigma_min = cluster
        .iter()
        .map(|t| t.z_error())
        .fold(f64::INFINITY, f64::min);

    let mut sum_w = 0.0;
    let mut sum_wz = 0.0;
    for track in cluster.iter() {
        let ratio = sigma_min / track.z_error();
        let w = ratio * ratio;
        sum_w += w;
        sum_wz += w * track.z();
    }

    // Rounding can land the mean a few ulps outside the member range.
    let position = (sum_wz / sum_w).clamp(cluster.z_min(), cluster.z_max());
    let uncertainty = sigma_min / sum_w.sqrt();

    Ok(Vertex {
        position,
        uncertainty,
        cluster,
    })
}

/// Position shared by all zero-uncertainty members, if there are any.
fn exact_position<T: ZTrack>(cluster: &Cluster<'_, T>, index: usize) -> Result<Option<f64>> {
    let mut count = 0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for track in cluster.iter().filter(|t| t.z_error() == 0.0) {
        count += 1;
        min = min.min(track.z());
        max = max.max(track.z());
    }

    match count {
        0 => Ok(None),
        _ if min == max => Ok(Some(min)),
        _ => Err(Error::InconsistentInput {
            cluster: index,
            count,
            min,
            max,
        }),
    }
}
