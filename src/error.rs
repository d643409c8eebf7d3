use thiserror::Error;

/// Errors returned by clustering and vertex aggregation.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A track carries a value the algorithm cannot order or weight.
    #[error("invalid track at index {index}: {message}")]
    InvalidTrack {
        /// Position of the track in the input slice.
        index: usize,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Several zero-uncertainty tracks in one cluster disagree on position.
    #[error(
        "inconsistent input in cluster {cluster}: {count} exact tracks span z in [{min}, {max}]"
    )]
    InconsistentInput {
        /// Index of the offending cluster in emission order.
        cluster: usize,
        /// Number of zero-uncertainty tracks in the cluster.
        count: usize,
        /// Smallest position among them.
        min: f64,
        /// Largest position among them.
        max: f64,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
