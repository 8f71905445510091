use thiserror::Error;

/// The validation rule a [`ValidationError`] was reported by.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValidationRule {
    FieldsOnCorrectType,
    FragmentsOnCompositeTypes,
    KnownArgumentNames,
    KnownFragmentNames,
    KnownOperationTypes,
    KnownTypeNames,
    LoneAnonymousOperation,
    NoFragmentCycles,
    NoUnusedFragments,
    ScalarLeafs,
    UniqueOperationNames,
}
impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    pub rule: ValidationRule,
    pub message: String,
}
impl ValidationError {
    pub fn new(rule: ValidationRule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}
