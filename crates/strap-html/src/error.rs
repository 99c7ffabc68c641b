//! Helper session errors.

/// Errors surfaced by a [`Helper`](crate::Helper) session.
///
/// Component calls never fail; these cover draining into an output sink and
/// finishing a session with structure still open.
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    /// Writing the drained buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Tab groups were opened but never closed.
    #[error("{0} tab group(s) left open at end of session")]
    UnclosedTabGroups(usize),
    /// Form-like elements were opened but never closed.
    #[error("{0} form(s) left open at end of session")]
    UnclosedForms(usize),
}
