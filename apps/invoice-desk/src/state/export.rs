//! # Export State
//!
//! Tracks whether a PDF export is running. Only one may run at a time;
//! the export button is disabled while the flag is set.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{ApiError, ApiResult, ErrorCode};

#[derive(Debug, Default)]
pub struct ExportState {
    in_flight: AtomicBool,
}

impl ExportState {
    pub fn new() -> Self {
        ExportState::default()
    }

    /// Whether an export is currently running.
    pub fn is_exporting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claims the export slot.
    ///
    /// The slot is released when the returned guard drops, whether the
    /// export succeeded or not.
    pub fn begin(&self) -> ApiResult<ExportGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                ApiError::new(ErrorCode::ExportInProgress, "An export is already running")
            })?;
        Ok(ExportGuard { state: self })
    }
}

/// Holds the export slot until dropped.
#[derive(Debug)]
pub struct ExportGuard<'a> {
    state: &'a ExportState,
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.state.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_slot() {
        let state = ExportState::new();
        assert!(!state.is_exporting());

        let guard = state.begin().unwrap();
        assert!(state.is_exporting());

        let err = state.begin().unwrap_err();
        assert_eq!(err.code, ErrorCode::ExportInProgress);

        drop(guard);
        assert!(!state.is_exporting());
        assert!(state.begin().is_ok());
    }
}
