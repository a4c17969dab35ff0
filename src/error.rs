use thiserror::Error;

/// Top-level error type for the panel network engine.
#[derive(Debug, Error)]
pub enum PanelnetError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors caused by the shape of the caller's input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("at least one line is required")]
    NoLines,

    #[error("width list `{list}` is empty and cannot be extended")]
    EmptyWidthList { list: &'static str },

    #[error("welding tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

/// Errors related to the line network topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("edge {edge} out of range ({count} edges)")]
    EdgeOutOfRange { edge: usize, count: usize },

    #[error("vertex {vertex} out of range ({count} vertices)")]
    VertexOutOfRange { vertex: usize, count: usize },

    #[error("no width for edge {edge} ({count} widths)")]
    MissingWidth { edge: usize, count: usize },
}

/// Errors related to mesh filling.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`PanelnetError`].
pub type Result<T> = std::result::Result<T, PanelnetError>;
