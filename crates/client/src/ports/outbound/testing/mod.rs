//! Test utilities for outbound ports
//!
//! Hand-written recording fakes for the HTTP boundary and the shell. These
//! complement the generated `MockShellPort`: the fakes record every call in
//! order, which keeps "no request was issued" and "alert came before
//! navigation" assertions cheap.
//!
//! Available in unit tests and behind the `testing` feature for downstream
//! crates.

#[cfg(any(test, feature = "testing"))]
mod recording;

#[cfg(any(test, feature = "testing"))]
pub use recording::{RecordedCall, RecordingShell, ScriptedApi, ShellEvent};
