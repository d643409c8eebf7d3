//! End-to-end entry points: tracks in, vertices out.

use crate::cluster::{ClusterizerInZ, GapClusterizer};
use crate::config::GapConfig;
use crate::error::Result;
use crate::track::ZTrack;
use crate::vertex::Vertex;
use tracing::trace;

/// Cluster `tracks` with the gap algorithm and aggregate each cluster.
///
/// Vertices come back in ascending z. The call either returns every vertex or
/// an error, never a partial list.
///
/// ```rust
/// use zvertex::{find_vertices, GapConfig, Track};
///
/// let tracks = [Track::new(0.0, 0.1), Track::new(0.1, 0.1), Track::new(4.0, 0.2)];
/// let vertices = find_vertices(&tracks, &GapConfig::new(0.5)).unwrap();
/// assert_eq!(vertices.len(), 2);
/// assert_eq!(vertices[1].position(), 4.0);
/// ```
pub fn find_vertices<'a, T: ZTrack>(
    tracks: &'a [T],
    config: &GapConfig,
) -> Result<Vec<Vertex<'a, T>>> {
    GapClusterizer::new(*config)?.vertices(tracks)
}

/// Run `clusterizer` once per event.
///
/// Events are independent: one failing event does not affect the others, and
/// nothing is carried from one event to the next.
pub fn find_vertices_per_event<'a, C, T, E>(
    clusterizer: &C,
    events: &'a [E],
) -> Vec<Result<Vec<Vertex<'a, T>>>>
where
    C: ClusterizerInZ,
    T: ZTrack,
    E: AsRef<[T]>,
{
    let results: Vec<_> = events
        .iter()
        .map(|event| clusterizer.vertices(event.as_ref()))
        .collect();
    trace!(
        n_events = events.len(),
        n_failed = results.iter().filter(|r| r.is_err()).count(),
        "processed events"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::Track;

    fn tracks_at(zs: &[f64], sigma: f64) -> Vec<Track> {
        zs.iter().map(|&z| Track::new(z, sigma)).collect()
    }

    #[test]
    fn test_three_vertices() {
        let tracks = tracks_at(&[-5.0, -4.9, -4.8, 3.0, 3.05, 10.0], 0.1);
        let vertices = find_vertices(&tracks, &GapConfig::new(0.5)).unwrap();

        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0].n_tracks(), 3);
        assert_eq!(vertices[1].n_tracks(), 2);
        assert_eq!(vertices[2].n_tracks(), 1);
        assert!((vertices[0].position() - (-4.9)).abs() < 1e-12);
        assert!((vertices[1].position() - 3.025).abs() < 1e-12);
        assert_eq!(vertices[2].position(), 10.0);
        assert!(vertices
            .windows(2)
            .all(|w| w[0].position() < w[1].position()));
    }

    #[test]
    fn test_empty_event() {
        let tracks: Vec<Track> = Vec::new();
        let vertices = find_vertices(&tracks, &GapConfig::new(0.5)).unwrap();
        assert!(vertices.is_empty());
    }

    #[test]
    fn test_single_track_vertex() {
        let tracks = [Track::new(1.0, 0.1)];
        let vertices = find_vertices(&tracks, &GapConfig::new(0.5)).unwrap();
        assert_eq!(vertices.len(), 1);
        assert_eq!(vertices[0].position(), 1.0);
        assert_eq!(vertices[0].uncertainty(), 0.1);
    }

    #[test]
    fn test_bad_threshold_fails_before_processing() {
        let tracks = [Track::new(1.0, 0.1)];
        for z_sep in [0.0, -0.5] {
            assert!(matches!(
                find_vertices(&tracks, &GapConfig::new(z_sep)),
                Err(Error::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_conflicting_exact_tracks_fail_whole_call() {
        let tracks = vec![
            Track::new(-3.0, 0.1),
            Track::new(0.0, 0.0),
            Track::new(0.1, 0.0),
        ];
        assert!(matches!(
            find_vertices(&tracks, &GapConfig::new(0.5)),
            Err(Error::InconsistentInput { cluster: 1, count: 2, .. })
        ));
    }

    #[test]
    fn test_per_event_results_are_independent() {
        let events = vec![
            tracks_at(&[0.0, 0.2, 3.0], 0.1),
            vec![Track::new(0.0, 0.0), Track::new(0.2, 0.0)],
            Vec::new(),
        ];
        let clusterizer = GapClusterizer::with_z_separation(0.5).unwrap();
        let results = find_vertices_per_event::<_, Track, _>(&clusterizer, &events);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 2);
        assert!(results[1].is_err());
        assert!(results[2].as_ref().unwrap().is_empty());
    }
}
