use crate::track::ZTrack;
use std::cmp::Ordering;

/// A non-empty run of tracks in ascending z order.
#[derive(Debug)]
pub struct Cluster<'a, T> {
    tracks: Vec<&'a T>,
}

// Manual impl: `&'a T` is `Clone` whatever `T` is.
impl<T> Clone for Cluster<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tracks: self.tracks.clone(),
        }
    }
}

impl<'a, T: ZTrack> Cluster<'a, T> {
    /// Build a cluster from arbitrary members. Returns `None` when `tracks` is empty.
    ///
    /// Members are stably sorted by z. Positions must not be NaN.
    pub fn from_tracks(mut tracks: Vec<&'a T>) -> Option<Self> {
        if tracks.is_empty() {
            return None;
        }
        sort_by_z(&mut tracks);
        Some(Self { tracks })
    }

    /// Caller guarantees `tracks` is non-empty and already z-ordered.
    pub(crate) fn from_sorted(tracks: Vec<&'a T>) -> Self {
        debug_assert!(!tracks.is_empty());
        debug_assert!(tracks.windows(2).all(|w| w[0].z() <= w[1].z()));
        Self { tracks }
    }

    /// Smallest member position.
    pub fn z_min(&self) -> f64 {
        self.tracks[0].z()
    }

    /// Largest member position.
    pub fn z_max(&self) -> f64 {
        self.tracks[self.tracks.len() - 1].z()
    }
}

impl<'a, T> Cluster<'a, T> {
    /// Number of member tracks (at least one).
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always `false`; clusters are never empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Member tracks in z order.
    pub fn tracks(&self) -> &[&'a T] {
        &self.tracks
    }

    /// Iterate over member tracks in z order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.tracks.iter().copied()
    }

    /// Give up the cluster, keeping its members.
    pub fn into_tracks(self) -> Vec<&'a T> {
        self.tracks
    }
}

/// Stable ascending sort on z.
///
/// `partial_cmp` keeps `-0.0` and `0.0` tied so equal positions stay in input order.
pub(crate) fn sort_by_z<T: ZTrack>(tracks: &mut [&T]) {
    tracks.sort_by(|a, b| a.z().partial_cmp(&b.z()).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Track;

    #[test]
    fn test_from_tracks_sorts_and_rejects_empty() {
        let tracks = [Track::new(2.0, 0.1), Track::new(-1.0, 0.1), Track::new(0.5, 0.1)];
        let cluster = Cluster::from_tracks(tracks.iter().collect()).unwrap();

        let zs: Vec<f64> = cluster.iter().map(|t| t.z).collect();
        assert_eq!(zs, vec![-1.0, 0.5, 2.0]);
        assert_eq!(cluster.z_min(), -1.0);
        assert_eq!(cluster.z_max(), 2.0);
        assert_eq!(cluster.len(), 3);
        assert!(!cluster.is_empty());

        assert!(Cluster::<Track>::from_tracks(Vec::new()).is_none());
    }

    #[test]
    fn test_into_tracks_returns_sorted_references() {
        let tracks = [Track::new(1.0, 0.1), Track::new(0.0, 0.1)];
        let members = Cluster::from_tracks(tracks.iter().collect())
            .unwrap()
            .into_tracks();
        assert_eq!(members.len(), 2);
        assert!(std::ptr::eq(members[0], &tracks[1]));
        assert!(std::ptr::eq(members[1], &tracks[0]));
    }

    #[test]
    fn test_sort_is_stable_for_signed_zero() {
        let tracks = [Track::new(0.0, 0.1), Track::new(-0.0, 0.2)];
        let mut refs: Vec<&Track> = tracks.iter().collect();
        sort_by_z(&mut refs);
        assert!(std::ptr::eq(refs[0], &tracks[0]));
        assert!(std::ptr::eq(refs[1], &tracks[1]));
    }
}
