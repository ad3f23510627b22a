use thiserror::Error;

/// Reasons a particle field cannot be built for a surface.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("viewport has zero area ({width}x{height})")]
    EmptyViewport { width: u32, height: u32 },
}
