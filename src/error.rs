/// Returned when a [`crate::FormatSink`] refuses a character.
///
/// This is the only error [`crate::render`] can report. Whatever was written
/// before the failure stays written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("character sink rejected output")]
pub struct SinkFailure;
