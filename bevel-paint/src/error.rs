//! Error types for painting.

use thiserror::Error;

use crate::widget::Capabilities;

/// Errors a painter can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// The painter was asked to decorate a widget that lacks the state it reads.
    #[error("{painter} requires {required:?}, but '{widget}' only offers {found:?}")]
    CapabilityMismatch {
        /// The painter that refused to paint.
        painter: &'static str,
        /// The widget's diagnostic name.
        widget: String,
        /// What the painter needs.
        required: Capabilities,
        /// What the widget provides.
        found: Capabilities,
    },
}

/// Result type alias for painting operations.
pub type PaintResult<T> = Result<T, PaintError>;

impl PaintError {
    /// Create a capability mismatch error.
    pub fn capability_mismatch(
        painter: &'static str,
        widget: impl Into<String>,
        required: Capabilities,
        found: Capabilities,
    ) -> Self {
        Self::CapabilityMismatch {
            painter,
            widget: widget.into(),
            required,
            found,
        }
    }

    /// The capabilities the painter needed but did not get.
    pub fn missing(&self) -> Capabilities {
        match self {
            Self::CapabilityMismatch {
                required, found, ..
            } => required.difference(*found),
        }
    }
}
