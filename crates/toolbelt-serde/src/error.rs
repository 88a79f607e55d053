use thiserror::Error;

/// Text matched none of the accepted date-time forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unable to parse date/datetime: {input}. Expected formats: 'yyyy-MM-dd'T'HH:mm:ss', 'yyyy-MM-dd HH:mm:ss', or 'yyyy-MM-dd'"
)]
pub struct DateTimeFormatError {
    /// The trimmed input that failed to parse.
    pub input: String,
}
