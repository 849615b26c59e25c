use std::path::PathBuf;

use crate::texture_pipeline::common::error::{ConversionError, ErrorKind};

/// Outcome of a directory conversion
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Headers written, in conversion order
    pub converted: Vec<PathBuf>,
    /// Inputs that were skipped together with the reason
    pub failed: Vec<(PathBuf, ConversionError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn internal_failures(&self) -> usize {
        self.failed
            .iter()
            .filter(|(_, e)| e.kind() == ErrorKind::InternalInvariant)
            .count()
    }
}
