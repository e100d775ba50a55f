//! API request models.

pub mod friends;
pub mod friendship;

use serde::Serialize;
use serde_json::{Map, Value};

/// Request parameters as handed to a transport.
///
/// Values are JSON scalars; the transport decides how to encode them.
pub type Params = Map<String, Value>;

/// Serializes a request model into [`Params`].
///
/// Fails if the model does not serialize to an object.
pub fn to_params<T>(request: &T) -> Result<Params, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(request)? {
        Value::Object(params) => Ok(params),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "request parameters must be an object, got `{}`",
            other
        ))),
    }
}
