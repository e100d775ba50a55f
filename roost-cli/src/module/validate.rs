//! Module parameter validation.

use derive_more::{Display, Error};

use serde_json::Value;

use super::ModuleParams;

/// A validator.
pub trait Validator<T> {
    /// The name of the parameter.
    fn name(&self) -> &'static str;

    /// Runs the validation.
    fn validate(self) -> Result<T, ParamError>;
}

/// Validator extension functions.
pub trait ValidatorExt<T>
where
    Self: Sized,
{
    /// Checks that a present value is a string.
    fn string(self) -> StringValidator<Self>;

    /// Checks that a value is present.
    fn required(self) -> RequiredValidator<Self>;
}

impl<T, V> ValidatorExt<V> for T
where
    T: Validator<V> + Sized,
{
    fn string(self) -> StringValidator<Self> {
        StringValidator { inner: self }
    }

    fn required(self) -> RequiredValidator<Self> {
        RequiredValidator { inner: self }
    }
}

/// A raw parameter, as passed to the module.
///
/// This is where all parameter validation begins. A `null` counts as absent.
#[derive(Debug)]
pub struct Field {
    name: &'static str,
    value: Option<Value>,
}

impl Validator<Option<Value>> for Field {
    fn validate(self) -> Result<Option<Value>, ParamError> {
        Ok(self.value.filter(|value| !value.is_null()))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// String validator.
#[derive(Debug)]
pub struct StringValidator<I> {
    inner: I,
}

impl<I> Validator<Option<String>> for StringValidator<I>
where
    I: Validator<Option<Value>>,
{
    fn validate(self) -> Result<Option<String>, ParamError> {
        let name = self.inner.name();

        match self.inner.validate()? {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(_) => Err(ParamError::WrongType {
                name,
                expected: "string",
            }),
            None => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

/// Presence validator.
#[derive(Debug)]
pub struct RequiredValidator<I> {
    inner: I,
}

impl<T, I> Validator<T> for RequiredValidator<I>
where
    I: Validator<Option<T>>,
{
    fn validate(self) -> Result<T, ParamError> {
        let name = self.inner.name();

        self.inner.validate()?.ok_or(ParamError::Missing(name))
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

/// Looks up a parameter for validation.
pub fn field(params: &ModuleParams, name: &'static str) -> Field {
    Field {
        name,
        value: params.get(name).cloned(),
    }
}

/// A module was given bad parameters.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ParamError {
    #[display("missing required parameter `{_0}`")]
    Missing(#[error(not(source))] &'static str),
    #[display("parameter `{name}` must be a {expected}")]
    WrongType {
        name: &'static str,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn params(value: Value) -> ModuleParams {
        match value {
            Value::Object(params) => params,
            _ => panic!("params must be an object"),
        }
    }

    #[test]
    fn required_string() {
        let params = params(json!({ "user": "abc" }));

        let user: String = field(&params, "user").string().required().validate().unwrap();

        assert_eq!(user, "abc");
    }

    #[test]
    fn missing_required() {
        let params = params(json!({ "other": "abc" }));

        let err = field(&params, "user").string().required().validate().unwrap_err();

        assert_eq!(err, ParamError::Missing("user"));
        assert_eq!(err.to_string(), "missing required parameter `user`");
    }

    #[test]
    fn null_is_missing() {
        let params = params(json!({ "user": null }));

        let err = field(&params, "user").string().required().validate().unwrap_err();

        assert_eq!(err, ParamError::Missing("user"));
    }

    #[test]
    fn wrong_type() {
        for value in [json!(true), json!(1), json!(["abc"]), json!({})] {
            let params = params(json!({ "out": value }));

            let err = field(&params, "out").string().validate().unwrap_err();

            assert_eq!(
                err,
                ParamError::WrongType {
                    name: "out",
                    expected: "string"
                }
            );
        }
    }

    #[test]
    fn optional_string() {
        let params = params(json!({ "out": "list.json" }));

        assert_eq!(
            field(&params, "out").string().validate().unwrap(),
            Some("list.json".to_owned())
        );
        assert_eq!(field(&params, "missing").string().validate().unwrap(), None);
    }
}
