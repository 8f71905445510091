use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use indexmap::IndexMap;
use std::collections::HashSet;

/// The parts of an operation the rules look at, whatever its form.
struct OperationView<'a> {
    kind: &'static str,
    name: Option<&'a str>,
    selection_set: &'a ast::SelectionSet,
    variable_definitions: &'a [ast::VariableDefinition],
}
impl<'a> OperationView<'a> {
    fn of(operation: &'a ast::OperationDefinition) -> Self {
        use ast::OperationDefinition as OpDef;

        match operation {
            OpDef::SelectionSet(selection_set) => Self {
                kind: "query",
                name: None,
                selection_set,
                variable_definitions: &[],
            },
            OpDef::Query(query) => Self {
                kind: "query",
                name: query.name.as_deref(),
                selection_set: &query.selection_set,
                variable_definitions: &query.variable_definitions,
            },
            OpDef::Mutation(mutation) => Self {
                kind: "mutation",
                name: mutation.name.as_deref(),
                selection_set: &mutation.selection_set,
                variable_definitions: &mutation.variable_definitions,
            },
            OpDef::Subscription(subscription) => Self {
                kind: "subscription",
                name: subscription.name.as_deref(),
                selection_set: &subscription.selection_set,
                variable_definitions: &subscription.variable_definitions,
            },
        }
    }
}

/// Applies the validation rules of [`IntrospectionValidationEngine`] to one
/// document.
///
/// Document-level rules run first (operation naming and root types), then
/// every definition is walked in document order with its parent type in
/// hand, and finally fragment usage and fragment cycles are checked.
///
/// [`IntrospectionValidationEngine`]: crate::validation::IntrospectionValidationEngine
pub(crate) struct DocumentValidator<'a> {
    document: &'a ast::Document,
    errors: Vec<ValidationError>,
    fragments: IndexMap<&'a str, &'a ast::FragmentDefinition>,
    schema: &'a Schema,
}
impl<'a> DocumentValidator<'a> {
    pub(crate) fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        let mut fragments = IndexMap::new();
        for definition in &document.definitions {
            if let ast::Definition::Fragment(fragment) = definition {
                fragments.entry(fragment.name.as_str()).or_insert(fragment);
            }
        }

        Self {
            document,
            errors: vec![],
            fragments,
            schema,
        }
    }

    pub(crate) fn validate(mut self) -> Vec<ValidationError> {
        let document = self.document;
        let operations: Vec<OperationView<'a>> = document
            .definitions
            .iter()
            .filter_map(|definition| match definition {
                ast::Definition::Operation(operation) => {
                    Some(OperationView::of(operation))
                },
                ast::Definition::Fragment(_) => None,
            })
            .collect();

        self.check_lone_anonymous_operation(&operations);
        self.check_unique_operation_names(&operations);

        for definition in &document.definitions {
            match definition {
                ast::Definition::Operation(operation) => {
                    self.check_operation(&OperationView::of(operation));
                },
                ast::Definition::Fragment(fragment) => {
                    let parent = self.check_type_condition(
                        Some(fragment.name.as_str()),
                        &fragment.type_condition,
                    );
                    self.check_selection_set(parent, &fragment.selection_set);
                },
            }
        }

        self.check_no_unused_fragments(&operations);
        self.check_no_fragment_cycles();
        self.errors
    }

    fn report(&mut self, rule: ValidationRule, message: String) {
        log::trace!("{rule}: {message}");
        self.errors.push(ValidationError::new(rule, message));
    }

    fn check_lone_anonymous_operation(&mut self, operations: &[OperationView<'a>]) {
        if operations.len() < 2 {
            return;
        }
        for _ in operations.iter().filter(|op| op.name.is_none()) {
            self.report(
                ValidationRule::LoneAnonymousOperation,
                "This anonymous operation must be the only defined operation.".to_string(),
            );
        }
    }

    fn check_unique_operation_names(&mut self, operations: &[OperationView<'a>]) {
        let mut seen = HashSet::new();
        for name in operations.iter().filter_map(|op| op.name) {
            if !seen.insert(name) {
                self.report(
                    ValidationRule::UniqueOperationNames,
                    format!("There can be only one operation named \"{name}\"."),
                );
            }
        }
    }

    fn check_operation(&mut self, operation: &OperationView<'a>) {
        for variable in operation.variable_definitions {
            self.check_known_type_name(ast::innermost_type_name(&variable.var_type));
        }

        let schema = self.schema;
        let root = schema.root_type(operation.kind);
        if root.is_none() {
            self.report(
                ValidationRule::KnownOperationTypes,
                format!("The schema is not configured for {} operations.", operation.kind),
            );
        }
        self.check_selection_set(root, operation.selection_set);
    }

    /// Reports an unknown type name; returns the type when it is known.
    fn check_known_type_name(&mut self, type_name: &str) -> Option<&'a SchemaType> {
        let schema = self.schema;
        let schema_type = schema.type_named(type_name);
        if schema_type.is_none() {
            self.report(
                ValidationRule::KnownTypeNames,
                format!("Unknown type \"{type_name}\"."),
            );
        }
        schema_type
    }

    /// Checks a fragment's type condition and returns the composite type
    /// its selection set applies to.
    fn check_type_condition(
        &mut self,
        fragment_name: Option<&str>,
        type_condition: &ast::TypeCondition,
    ) -> Option<&'a SchemaType> {
        let ast::TypeCondition::On(type_name) = type_condition;
        let schema_type = self.check_known_type_name(type_name)?;
        if schema_type.kind.is_composite() {
            return Some(schema_type);
        }

        let message = match fragment_name {
            Some(fragment_name) => format!(
                "Fragment \"{fragment_name}\" cannot condition on non composite \
                type \"{type_name}\".",
            ),
            None => format!(
                "Fragment cannot condition on non composite type \"{type_name}\".",
            ),
        };
        self.report(ValidationRule::FragmentsOnCompositeTypes, message);
        None
    }

    /// Walks `selection_set` as a selection on `parent`. With no parent type
    /// (unknown or non-composite) only the schema-independent checks run.
    fn check_selection_set(
        &mut self,
        parent: Option<&'a SchemaType>,
        selection_set: &'a ast::SelectionSet,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::Selection::Field(field) => self.check_field(parent, field),
                ast::Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name.as_str();
                    if !self.fragments.contains_key(fragment_name) {
                        self.report(
                            ValidationRule::KnownFragmentNames,
                            format!("Unknown fragment \"{fragment_name}\"."),
                        );
                    }
                },
                ast::Selection::InlineFragment(inline) => {
                    let inline_parent = match &inline.type_condition {
                        Some(type_condition) => {
                            self.check_type_condition(None, type_condition)
                        },
                        None => parent,
                    };
                    self.check_selection_set(inline_parent, &inline.selection_set);
                },
            }
        }
    }

    fn check_field(&mut self, parent: Option<&'a SchemaType>, field: &'a ast::Field) {
        let Some(parent) = parent else {
            self.check_selection_set(None, &field.selection_set);
            return;
        };
        if field.name == "__typename" || self.is_introspection_entry(parent, field) {
            return;
        }

        let Some(schema_field) = parent.field(&field.name) else {
            self.report(
                ValidationRule::FieldsOnCorrectType,
                format!(
                    "Cannot query field \"{}\" on type \"{}\".",
                    field.name,
                    parent.name,
                ),
            );
            self.check_selection_set(None, &field.selection_set);
            return;
        };

        for (argument_name, _) in &field.arguments {
            if !schema_field.arguments.contains(argument_name) {
                self.report(
                    ValidationRule::KnownArgumentNames,
                    format!(
                        "Unknown argument \"{argument_name}\" on field \"{}.{}\".",
                        parent.name,
                        field.name,
                    ),
                );
            }
        }

        let schema = self.schema;
        let field_type = schema.type_named(schema_field.type_ref.named_type());
        let has_selection = !field.selection_set.items.is_empty();
        match field_type {
            Some(field_type) if field_type.kind.is_leaf() && has_selection => {
                self.report(
                    ValidationRule::ScalarLeafs,
                    format!(
                        "Field \"{}\" must not have a selection since type \"{}\" \
                        has no subfields.",
                        field.name,
                        schema_field.type_ref,
                    ),
                );
            },
            Some(field_type) if field_type.kind.is_composite() && !has_selection => {
                self.report(
                    ValidationRule::ScalarLeafs,
                    format!(
                        "Field \"{}\" of type \"{}\" must have a selection of \
                        subfields.",
                        field.name,
                        schema_field.type_ref,
                    ),
                );
            },
            _ => (),
        }

        self.check_selection_set(
            field_type.filter(|field_type| field_type.kind.is_composite()),
            &field.selection_set,
        );
    }

    /// `__schema` and `__type` are implicit fields of the query root. The
    /// introspection types themselves are not part of the schema, so their
    /// selections are not checked.
    fn is_introspection_entry(&self, parent: &SchemaType, field: &ast::Field) -> bool {
        matches!(field.name.as_str(), "__schema" | "__type")
            && self
                .schema
                .root_type("query")
                .is_some_and(|root| root.name == parent.name)
    }

    fn check_no_unused_fragments(&mut self, operations: &[OperationView<'a>]) {
        let mut used = HashSet::new();
        let mut pending: Vec<&str> = operations
            .iter()
            .flat_map(|op| spreads_in(op.selection_set))
            .collect();
        while let Some(fragment_name) = pending.pop() {
            if !used.insert(fragment_name) {
                continue;
            }
            if let Some(&fragment) = self.fragments.get(fragment_name) {
                pending.extend(spreads_in(&fragment.selection_set));
            }
        }

        let unused: Vec<&str> = self
            .fragments
            .keys()
            .copied()
            .filter(|name| !used.contains(name))
            .collect();
        for fragment_name in unused {
            self.report(
                ValidationRule::NoUnusedFragments,
                format!("Fragment \"{fragment_name}\" is never used."),
            );
        }
    }

    /// Reports each distinct fragment cycle once, however many of its
    /// fragments the search starts from.
    fn check_no_fragment_cycles(&mut self) {
        let mut cycles = vec![];
        let mut seen_cycles = HashSet::new();
        let mut explored = HashSet::new();
        for fragment_name in self.fragments.keys().copied() {
            self.find_fragment_cycles(
                fragment_name,
                &mut vec![],
                &mut explored,
                &mut cycles,
                &mut seen_cycles,
            );
        }

        for cycle in cycles {
            let message = match &cycle[1..cycle.len() - 1] {
                [] => format!("Cannot spread fragment \"{}\" within itself.", cycle[0]),
                via => format!(
                    "Cannot spread fragment \"{}\" within itself via {}.",
                    cycle[0],
                    via.iter()
                        .map(|name| format!("\"{name}\""))
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
            };
            self.report(ValidationRule::NoFragmentCycles, message);
        }
    }

    fn find_fragment_cycles(
        &self,
        fragment_name: &'a str,
        path: &mut Vec<&'a str>,
        explored: &mut HashSet<&'a str>,
        cycles: &mut Vec<Vec<&'a str>>,
        seen_cycles: &mut HashSet<Vec<&'a str>>,
    ) {
        if explored.contains(fragment_name) {
            return;
        }
        if let Some(cycle_start) = path.iter().position(|name| *name == fragment_name) {
            let mut cycle = path[cycle_start..].to_vec();
            cycle.push(fragment_name);
            let cycle = normalize_cycle(&cycle);
            if seen_cycles.insert(cycle.clone()) {
                cycles.push(cycle);
            }
            return;
        }

        // Undefined fragments are reported by KnownFragmentNames.
        let Some(&fragment) = self.fragments.get(fragment_name) else {
            return;
        };

        path.push(fragment_name);
        for spread in spreads_in(&fragment.selection_set) {
            self.find_fragment_cycles(spread, path, explored, cycles, seen_cycles);
        }
        path.pop();
        // Every cycle through a fully explored fragment has been reported.
        explored.insert(fragment_name);
    }
}

/// Names of every fragment spread in `selection_set`, including those
/// nested in fields and inline fragments.
fn spreads_in(selection_set: &ast::SelectionSet) -> Vec<&str> {
    let mut spreads = vec![];
    let mut pending = vec![selection_set];
    while let Some(selection_set) = pending.pop() {
        for selection in &selection_set.items {
            match selection {
                ast::Selection::Field(field) => pending.push(&field.selection_set),
                ast::Selection::FragmentSpread(spread) => {
                    spreads.push(spread.fragment_name.as_str());
                },
                ast::Selection::InlineFragment(inline) => {
                    pending.push(&inline.selection_set);
                },
            }
        }
    }
    spreads
}

/// Rotates a closed cycle (`[B, C, A, B]`) so it starts at its smallest name
/// (`[A, B, C, A]`), making rotations of the same cycle compare equal.
fn normalize_cycle<'a>(cycle: &[&'a str]) -> Vec<&'a str> {
    let open_cycle = &cycle[..cycle.len() - 1];
    let min_idx = open_cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, name)| **name)
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = open_cycle[min_idx..].to_vec();
    normalized.extend_from_slice(&open_cycle[..min_idx]);
    normalized.push(normalized[0]);
    normalized
}
