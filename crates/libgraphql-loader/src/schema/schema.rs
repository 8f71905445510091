use crate::schema::SchemaBuildError;
use crate::schema::SchemaField;
use crate::schema::SchemaType;
use crate::schema::TypeKind;
use crate::schema::TypeRef;
use crate::schema::introspection::IntrospectionField;
use crate::schema::introspection::IntrospectionResponse;
use crate::schema::introspection::IntrospectionType;
use crate::schema::introspection::IntrospectionTypeRef;
use indexmap::IndexMap;

const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The type system of a GraphQL service, as far as operation validation
/// needs it: the root operation types and every named type with its fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    mutation_type: Option<String>,
    query_type: String,
    subscription_type: Option<String>,
    types: IndexMap<String, SchemaType>,
}
impl Schema {
    /// Builds a schema from a JSON introspection result. Both the bare
    /// `{"__schema": ...}` form and the full response form
    /// `{"data": {"__schema": ...}}` are accepted.
    pub fn from_introspection_json(json: &str) -> Result<Self> {
        let response: IntrospectionResponse = serde_json::from_str(json)
            .map_err(|err| SchemaBuildError::InvalidJson(err.to_string()))?;
        let introspection = response.into_schema();

        let mut types = IndexMap::new();
        for introspected in introspection.types {
            let schema_type = schema_type_from_introspection(introspected)?;
            if types.contains_key(&schema_type.name) {
                return Err(SchemaBuildError::DuplicateTypeDefinition {
                    type_name: schema_type.name,
                });
            }
            types.insert(schema_type.name.to_string(), schema_type);
        }
        for scalar in BUILTIN_SCALARS {
            types.entry(scalar.to_string()).or_insert_with(|| SchemaType {
                fields: IndexMap::new(),
                kind: TypeKind::Scalar,
                name: scalar.to_string(),
                possible_types: vec![],
            });
        }

        let schema = Self {
            mutation_type: introspection.mutation_type.map(|named| named.name),
            query_type: introspection.query_type.name,
            subscription_type: introspection.subscription_type.map(|named| named.name),
            types,
        };
        schema.check_root_type("query", Some(&schema.query_type))?;
        schema.check_root_type("mutation", schema.mutation_type.as_ref())?;
        schema.check_root_type("subscription", schema.subscription_type.as_ref())?;

        log::debug!(
            "Built schema with {} types from introspection JSON.",
            schema.types.len(),
        );
        Ok(schema)
    }

    /// The root type for `operation` (`"query"`, `"mutation"` or
    /// `"subscription"`), if the schema supports that operation type.
    pub fn root_type(&self, operation: &str) -> Option<&SchemaType> {
        let type_name = match operation {
            "query" => Some(&self.query_type),
            "mutation" => self.mutation_type.as_ref(),
            "subscription" => self.subscription_type.as_ref(),
            _ => None,
        }?;
        self.types.get(type_name)
    }

    pub fn type_named(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &SchemaType> {
        self.types.values()
    }

    fn check_root_type(
        &self,
        operation: &'static str,
        type_name: Option<&String>,
    ) -> Result<()> {
        match type_name {
            Some(type_name) if !self.types.contains_key(type_name) => {
                Err(SchemaBuildError::UndefinedRootType {
                    operation,
                    type_name: type_name.to_string(),
                })
            },
            _ => Ok(()),
        }
    }
}

fn schema_type_from_introspection(introspected: IntrospectionType) -> Result<SchemaType> {
    let fields = introspected
        .fields
        .unwrap_or_default()
        .into_iter()
        .map(|field| -> Result<(String, SchemaField)> {
            let field = schema_field_from_introspection(field)?;
            Ok((field.name.to_string(), field))
        })
        .collect::<Result<IndexMap<_, _>>>()?;

    Ok(SchemaType {
        fields,
        kind: introspected.kind,
        name: introspected.name,
        possible_types: introspected
            .possible_types
            .unwrap_or_default()
            .into_iter()
            .map(|named| named.name)
            .collect(),
    })
}

fn schema_field_from_introspection(field: IntrospectionField) -> Result<SchemaField> {
    Ok(SchemaField {
        arguments: field
            .args
            .unwrap_or_default()
            .into_iter()
            .map(|arg| arg.name)
            .collect(),
        name: field.name,
        type_ref: type_ref_from_introspection(field.type_ref)?,
    })
}

fn type_ref_from_introspection(type_ref: IntrospectionTypeRef) -> Result<TypeRef> {
    match type_ref.kind {
        TypeKind::List | TypeKind::NonNull => {
            let inner = type_ref.of_type.ok_or(SchemaBuildError::MalformedTypeRef {
                kind: type_ref.kind,
                missing: "ofType",
            })?;
            let inner = Box::new(type_ref_from_introspection(*inner)?);
            Ok(if type_ref.kind == TypeKind::List {
                TypeRef::List(inner)
            } else {
                TypeRef::NonNull(inner)
            })
        },
        kind => type_ref
            .name
            .map(TypeRef::Named)
            .ok_or(SchemaBuildError::MalformedTypeRef {
                kind,
                missing: "name",
            }),
    }
}
