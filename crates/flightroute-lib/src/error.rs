use thiserror::Error;

/// Convenient result alias for the flight route library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an airport code could not be found in the network.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a route is requested between an airport and itself.
    #[error("start and destination are the same airport: {code}")]
    SameAirport { code: String },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a network spec declares the same airport code twice.
    #[error("duplicate airport code in network spec: {code}")]
    DuplicateAirportCode { code: String },

    /// Raised when a leg or attribute record references an airport with no
    /// registered position. This is a configuration error, fatal at load.
    #[error("leg references unknown airport: {code}")]
    LegEndpointUnknown { code: String },

    /// Raised when a leg connects an airport to itself.
    #[error("leg connects {code} to itself")]
    SelfLoopLeg { code: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors when loading a network spec.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
