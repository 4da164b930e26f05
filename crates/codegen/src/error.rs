use thiserror::Error;

/// Reasons component synthesis produced no output.
///
/// The public synthesis and dispatch functions collapse these to the empty
/// string; boundaries that want a message (e.g. the wasm layer) can keep the
/// `Result` from [`crate::try_synthesize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// Input was empty or whitespace-only.
    #[error("empty input")]
    EmptyInput,
    /// No `<svg ...>...</svg>` envelope was found after dialect conversion.
    #[error("no <svg> envelope found in input")]
    MissingEnvelope,
}
