//! Serde model of a JSON introspection result, i.e. the response to the
//! standard introspection query.

use crate::schema::TypeKind;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum IntrospectionResponse {
    Wrapped { data: IntrospectionData },
    Bare(IntrospectionData),
}
impl IntrospectionResponse {
    pub(crate) fn into_schema(self) -> IntrospectionSchema {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data.schema,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub(crate) schema: IntrospectionSchema,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IntrospectionSchema {
    pub(crate) mutation_type: Option<NamedRef>,
    pub(crate) query_type: NamedRef,
    pub(crate) subscription_type: Option<NamedRef>,
    pub(crate) types: Vec<IntrospectionType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedRef {
    pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IntrospectionType {
    #[serde(default)]
    pub(crate) fields: Option<Vec<IntrospectionField>>,
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) possible_types: Option<Vec<NamedRef>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IntrospectionField {
    #[serde(default)]
    pub(crate) args: Option<Vec<IntrospectionInputValue>>,
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) type_ref: IntrospectionTypeRef,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IntrospectionInputValue {
    pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IntrospectionTypeRef {
    pub(crate) kind: TypeKind,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) of_type: Option<Box<IntrospectionTypeRef>>,
}
