use indexmap::IndexMap;
use serde::Deserialize;

/// The `__TypeKind` enum of the introspection system.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    /// Types that can carry a selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    /// Types that must not carry a selection set.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum | Self::Scalar)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(String),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    /// The innermost named type (`[User!]!` → `User`).
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaField {
    pub arguments: Vec<String>,
    pub name: String,
    pub type_ref: TypeRef,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaType {
    pub fields: IndexMap<String, SchemaField>,
    pub kind: TypeKind,
    pub name: String,
    /// Concrete object types of an interface or union.
    pub possible_types: Vec<String>,
}
impl SchemaType {
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }
}
