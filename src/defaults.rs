//! Default constants for quillcheck.
//!
//! Shared across configuration types and the analysis engine to ensure
//! consistency and eliminate duplication.

/// Weight of the word-frequency signal in the suggestion score.
pub const WEIGHT_FREQUENCY: f64 = 0.30;

/// Weight of the edit-distance signal in the suggestion score.
pub const WEIGHT_EDIT: f64 = 0.30;

/// Weight of the keyboard-proximity signal in the suggestion score.
pub const WEIGHT_KEYBOARD: f64 = 0.15;

/// Weight of the phonetic-similarity signal in the suggestion score.
///
/// The four weights sum to 1.0 so the combined score stays in [0, 1].
pub const WEIGHT_PHONETIC: f64 = 0.25;

/// Maximum frequency rank the frequency signal normalizes against.
///
/// A candidate ranked at or beyond this bound contributes a frequency
/// score of zero.
pub const MAX_FREQUENCY_RANK: usize = 5000;

/// Rank reported for words absent from the reference corpus.
///
/// Deliberately beyond `MAX_FREQUENCY_RANK` so unknown words normalize
/// to a zero frequency score.
pub const UNKNOWN_FREQUENCY_RANK: usize = 10_000;

/// Maximum raw candidates requested from the dictionary per misspelling.
pub const GENERATION_LIMIT: usize = 15;

/// Ranked suggestions returned to the caller per misspelling.
pub const SUGGESTION_LIMIT: usize = 5;

/// Maximum text length the caller is expected to submit, in bytes.
///
/// Longer fields should be clamped by the caller before checking;
/// the engine itself does not truncate.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Suggested idle debounce before a full-text check, in milliseconds.
pub const DEBOUNCE_MS: u64 = 1000;

/// Minimum text length worth an AI-tier analysis, in bytes.
///
/// Shorter inputs are fully covered by the local tier.
pub const AI_MIN_TEXT_LEN: usize = 15;

/// Minimum interval between AI-tier dispatches, in milliseconds.
pub const AI_MIN_REQUEST_INTERVAL_MS: u64 = 2000;

/// Time-to-live for cached AI responses, in seconds.
pub const AI_CACHE_TTL_SECS: u64 = 300;

/// Cache size bound beyond which writes sweep expired entries.
pub const AI_CACHE_CAPACITY: usize = 100;
