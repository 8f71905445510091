use crate::output::OutputMode;
use serde::Deserialize;
use thiserror::Error;

/// Options accepted by [`GraphQLLoader`](crate::GraphQLLoader).
///
/// Deserializes from the loader's JSON options object, e.g.
/// `{"schema": "schema.json", "validate": true, "output": "document",
/// "removeUnusedFragments": true}`. Every key is optional; unknown keys are
/// rejected.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct LoaderOptions {
    pub output: OutputMode,

    /// Drop fragment definitions that no operation can reach.
    pub remove_unused_fragments: bool,

    /// File name of the JSON introspection result, searched for in the
    /// loaded file's directory and then its ancestors.
    pub schema: Option<String>,

    /// Validate the bundled document against `schema`. Requires `schema`.
    pub validate: bool,
}
impl LoaderOptions {
    pub fn from_json_str(json: &str) -> Result<Self, LoaderOptionsError> {
        serde_json::from_str(json)
            .map_err(|err| LoaderOptionsError::InvalidJson(err.to_string()))
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoaderOptionsError {
    #[error("Invalid loader options: {0}")]
    InvalidJson(String),
}
