use super::track_cluster::Cluster;
use crate::error::Result;
use crate::track::ZTrack;
use crate::vertex::{self, Vertex};

/// Common interface for strategies that split tracks into clusters along z.
///
/// Implementations must return a partition of the input: every track in exactly
/// one non-empty cluster, clusters in ascending z order.
///
/// The methods are generic over the track type, so the trait is not object safe:
/// strategies are picked at compile time through a type parameter
/// (`fn run<C: ClusterizerInZ>(c: &C)`), not as `dyn ClusterizerInZ`.
pub trait ClusterizerInZ {
    /// Group `tracks` into clusters. Clusters borrow the caller's tracks.
    fn clusterize<'a, T: ZTrack>(&self, tracks: &'a [T]) -> Result<Vec<Cluster<'a, T>>>;

    /// Cluster `tracks` and reduce every cluster to a vertex.
    ///
    /// Fails as a whole if any cluster cannot be aggregated.
    fn vertices<'a, T: ZTrack>(&self, tracks: &'a [T]) -> Result<Vec<Vertex<'a, T>>> {
        vertex::aggregate_all(self.clusterize(tracks)?)
    }
}
