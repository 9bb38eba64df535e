// src/exit.rs
//! Standardized process exit codes for `pkgrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::PkgRankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PkgRankExit {
    /// Ranking completed.
    Success = 0,
    /// Generic error (e.g. IO).
    Error = 1,
    /// Malformed edge list, configuration, or unschedulable units.
    InvalidInput = 2,
    /// A producer or driver contract was broken (edge kind mismatch,
    /// missing dependency fragment). No ranking is produced.
    ContractViolation = 3,
}

impl PkgRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<PkgRankError>() {
            Some(e) if e.is_contract_violation() => Self::ContractViolation,
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for PkgRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
