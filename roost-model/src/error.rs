//! API and decoding errors.

use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

use serde::{Deserialize, Serialize};

/// The error payload of a failed API call.
///
/// ```json
/// {"errors":[{"code":34,"message":"Sorry, that page does not exist."}]}
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<ApiError>,
}

/// API error.
#[derive(Clone, Debug, Deserialize, Serialize, Error)]
pub struct ApiError {
    /// An API error code.
    pub code: ErrorCode,
    /// A user-friendly message of the error.
    pub message: String,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, u32::from(self.code))
    }
}

/// An API error code.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "u32", into = "u32")]
pub enum ErrorCode {
    /// The request could not be authenticated.
    CouldNotAuthenticate,
    /// The endpoint does not exist.
    PageNotFound,
    /// The requested user does not exist.
    UserNotFound,
    /// The requested user has been suspended.
    UserSuspended,
    /// The authenticated account has been suspended.
    AccountSuspended,
    /// The request limit for this resource has been reached.
    RateLimitExceeded,
    /// The access token is invalid or expired.
    InvalidToken,
    /// The service is temporarily over capacity.
    OverCapacity,
    /// An internal error occured on the API side.
    InternalError,
    /// A follow request to this user is already pending.
    AlreadyRequested,
    /// The authenticated user cannot follow any more people right now.
    FollowLimit,
    /// The authenticated user has been blocked by the target.
    Blocked,
    /// Any other error code.
    Other(u32),
}

impl From<u32> for ErrorCode {
    fn from(value: u32) -> Self {
        match value {
            32 => ErrorCode::CouldNotAuthenticate,
            34 => ErrorCode::PageNotFound,
            50 => ErrorCode::UserNotFound,
            63 => ErrorCode::UserSuspended,
            64 => ErrorCode::AccountSuspended,
            88 => ErrorCode::RateLimitExceeded,
            89 => ErrorCode::InvalidToken,
            130 => ErrorCode::OverCapacity,
            131 => ErrorCode::InternalError,
            160 => ErrorCode::AlreadyRequested,
            161 => ErrorCode::FollowLimit,
            162 => ErrorCode::Blocked,
            other => ErrorCode::Other(other),
        }
    }
}

impl From<ErrorCode> for u32 {
    fn from(value: ErrorCode) -> Self {
        match value {
            ErrorCode::CouldNotAuthenticate => 32,
            ErrorCode::PageNotFound => 34,
            ErrorCode::UserNotFound => 50,
            ErrorCode::UserSuspended => 63,
            ErrorCode::AccountSuspended => 64,
            ErrorCode::RateLimitExceeded => 88,
            ErrorCode::InvalidToken => 89,
            ErrorCode::OverCapacity => 130,
            ErrorCode::InternalError => 131,
            ErrorCode::AlreadyRequested => 160,
            ErrorCode::FollowLimit => 161,
            ErrorCode::Blocked => 162,
            ErrorCode::Other(other) => other,
        }
    }
}

/// A response page could not be decoded.
#[derive(Debug, Display, Error)]
pub enum DecodeError {
    /// The page was some JSON value other than an object.
    #[display("response page is not a JSON object")]
    NotAnObject,
    /// The page's `users` field was missing or malformed.
    #[display("malformed friends page: {_0}")]
    Page(#[error(source)] serde_json::Error),
    /// A user record carried neither `id_str` nor a numeric `id`.
    #[display("user record `{screen_name}` has no id")]
    MissingId { screen_name: String },
}
