use thiserror::Error;

/// Validation failures for client-submitted bootcamp documents.
///
/// Every variant maps to a 400 Bad Request. The messages follow the wording
/// of the public API ("Please add a name", length limits, format messages).
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("Please add a {0}")]
    MissingField(&'static str),

    /// A string field exceeds its maximum length.
    #[error("{field} can not be more than {max} characters")]
    TooLong {
        /// The offending field name
        field: &'static str,
        /// The maximum allowed length
        max: usize,
    },

    /// The email field is not a valid email address.
    #[error("{0} is not a valid email")]
    InvalidEmail(String),

    /// The phone field is not a valid phone number.
    #[error("{0} is not a valid phone number")]
    InvalidPhone(String),

    /// A website field is not a valid http(s) URL.
    #[error("{0} is not a valid URL")]
    InvalidUrl(String),

    /// The careers list is empty.
    #[error("Please add at least one career")]
    EmptyCareers,

    /// The average rating is outside the 1-10 range.
    #[error("Rating must be between 1 and 10, got {0}")]
    RatingOutOfRange(f64),

    /// Another bootcamp already uses this name.
    #[error("A bootcamp named '{0}' already exists")]
    DuplicateName(String),
}
