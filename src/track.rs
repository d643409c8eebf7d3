//! Input boundary: tracks reduced to a longitudinal position and its error.

use crate::error::{Error, Result};

/// Read-only view of a track extrapolated to the beam line.
///
/// The clusterizer only ever looks at these two values. Everything else about a
/// track stays with the caller, who gets its own references back in each
/// [`Cluster`](crate::Cluster).
pub trait ZTrack {
    /// Longitudinal impact point.
    fn z(&self) -> f64;

    /// Standard deviation of [`z`](Self::z). Zero marks an exact measurement.
    fn z_error(&self) -> f64;
}

impl<T: ZTrack + ?Sized> ZTrack for &T {
    #[inline]
    fn z(&self) -> f64 {
        (**self).z()
    }

    #[inline]
    fn z_error(&self) -> f64 {
        (**self).z_error()
    }
}

impl<T: ZTrack + ?Sized> ZTrack for Box<T> {
    #[inline]
    fn z(&self) -> f64 {
        (**self).z()
    }

    #[inline]
    fn z_error(&self) -> f64 {
        (**self).z_error()
    }
}

/// Plain position/uncertainty pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Longitudinal impact point.
    pub z: f64,
    /// Standard deviation of `z`.
    pub z_error: f64,
}

impl Track {
    /// Create a track at `z` with standard deviation `z_error`.
    pub fn new(z: f64, z_error: f64) -> Self {
        Self { z, z_error }
    }
}

impl ZTrack for Track {
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    fn z_error(&self) -> f64 {
        self.z_error
    }
}

/// Reject tracks that cannot be ordered or weighted.
pub(crate) fn validate<T: ZTrack>(tracks: &[T]) -> Result<()> {
    for (index, track) in tracks.iter().enumerate() {
        if !track.z().is_finite() {
            return Err(Error::InvalidTrack {
                index,
                message: "position must be finite",
            });
        }
        // `!(x >= 0.0)` also catches NaN.
        if !(track.z_error() >= 0.0) {
            return Err(Error::InvalidTrack {
                index,
                message: "uncertainty must be non-negative",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_forwards_accessors() {
        let track = Track::new(1.5, 0.25);
        let by_ref = &track;
        assert_eq!(by_ref.z(), 1.5);
        assert_eq!(by_ref.z_error(), 0.25);

        let boxed: Box<dyn ZTrack> = Box::new(track);
        assert_eq!(boxed.z(), 1.5);
        assert_eq!(boxed.z_error(), 0.25);
    }

    #[test]
    fn test_validate_accepts_zero_uncertainty() {
        let tracks = vec![Track::new(0.0, 0.0), Track::new(-3.0, 1.0)];
        assert!(validate(&tracks).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let nan_z = vec![Track::new(0.0, 0.1), Track::new(f64::NAN, 0.1)];
        assert!(matches!(
            validate(&nan_z),
            Err(Error::InvalidTrack { index: 1, .. })
        ));

        let inf_z = vec![Track::new(f64::INFINITY, 0.1)];
        assert!(validate(&inf_z).is_err());

        let negative = vec![Track::new(0.0, -0.1)];
        assert!(matches!(
            validate(&negative),
            Err(Error::InvalidTrack { index: 0, .. })
        ));

        let nan_err = vec![Track::new(0.0, f64::NAN)];
        assert!(validate(&nan_err).is_err());
    }
}
