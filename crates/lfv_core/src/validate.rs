/// Substrings that mark a URL as something the backend can convert.
///
/// Matching is plain substring containment, not URL parsing: any text that
/// contains one of these is accepted, even if it is not a well-formed URL.
pub const ACCEPTED_URL_MARKERS: [&str; 3] =
    ["youtube.com/watch", "youtu.be", "learnfromvideo.com/watch"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    UnrecognizedHost,
}

impl InvalidReason {
    /// Stable machine-readable code.
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidReason::Empty => "empty",
            InvalidReason::UnrecognizedHost => "unrecognized-host",
        }
    }

    /// Message shown inline under the input field.
    pub fn user_message(self) -> &'static str {
        match self {
            InvalidReason::Empty => "Please enter a YouTube URL",
            InvalidReason::UnrecognizedHost => {
                "Please enter a valid YouTube or LearnFromVideo URL"
            }
        }
    }
}

/// Checks pasted input before any network call is made.
pub fn validate(url: &str) -> ValidationResult {
    if url.trim().is_empty() {
        return ValidationResult::Invalid(InvalidReason::Empty);
    }
    if ACCEPTED_URL_MARKERS
        .iter()
        .any(|marker| url.contains(marker))
    {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(InvalidReason::UnrecognizedHost)
    }
}
