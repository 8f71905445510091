use crate::output::LoaderOutput;
use crate::validation::ValidationError;

#[derive(Clone, Debug, PartialEq)]
pub struct LoaderResult {
    pub output: LoaderOutput,

    /// Validation errors found in the bundled document. Empty unless
    /// validation is enabled.
    pub diagnostics: Vec<ValidationError>,
}
