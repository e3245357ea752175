// error.rs - Error types for startup; the simulation itself never fails

/// A game configuration value that cannot drive the simulation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A step threshold is zero, negative, or not a finite number.
    #[error("invalid {name}: {value} (must be a positive number of seconds)")]
    InvalidThreshold {
        /// Name of the offending field.
        name: &'static str,
        /// Value that was rejected.
        value: f32,
    },

    /// Fast-forward would step less often than normal speed.
    #[error("fast-forward threshold {fast} exceeds normal threshold {normal}")]
    FastForwardSlower { fast: f32, normal: f32 },

    #[error("invalid pixel size: {0} (must be positive)")]
    InvalidPixelSize(f32),
}

/// Anything that stops the game before the first frame.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    /// The window or rendering backend could not be created.
    #[error("failed to start window host: {0}")]
    HostStartup(#[from] eframe::Error),
}
