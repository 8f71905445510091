use crate::ast;
use crate::node::AstNode;
use crate::node::NodeShapeError;
use crate::node::kind;
use crate::node::lower_document;
use crate::output::LoaderOutput;
use crate::output::OutputMode;
use crate::transform::strip_locations;

fn stripped(source: &str) -> AstNode {
    let mut document = lower_document(&ast::parse(source).unwrap(), None);
    strip_locations(&mut document);
    document
}

#[test]
fn string_mode_prints_the_document() {
    let source = "query Q {\n  a\n}\n";

    let output = LoaderOutput::render(stripped(source), OutputMode::String).unwrap();

    assert_eq!(output.as_text(), Some(ast::print(&ast::parse(source).unwrap()).as_str()));
    assert!(output.as_document().is_none());
}

#[test]
fn document_mode_hands_back_the_tree() {
    let document = stripped("fragment F on T { id }");

    let output = LoaderOutput::render(document.clone(), OutputMode::Document).unwrap();

    assert_eq!(output.as_document(), Some(&document));
    assert!(output.as_text().is_none());
}

#[test]
fn document_json_uses_the_graphql_ast_shape() {
    let output = LoaderOutput::render(
        stripped("fragment F on T { id }"),
        OutputMode::Document,
    ).unwrap();

    let json = output.to_json().unwrap();
    assert_eq!(json["kind"], "Document");
    let fragment = &json["definitions"][0];
    assert_eq!(fragment["kind"], "FragmentDefinition");
    assert_eq!(fragment["name"]["value"], "F");
    assert_eq!(fragment["typeCondition"]["name"]["value"], "T");
    assert_eq!(
        fragment["selectionSet"]["selections"][0]["name"]["value"],
        "id",
    );
    assert!(json.get("loc").is_none());
    assert!(fragment.get("loc").is_none());
}

#[test]
fn text_json_is_a_string() {
    let output = LoaderOutput::Text("{\n  a\n}\n".to_string());

    assert_eq!(output.to_json().unwrap(), serde_json::json!("{\n  a\n}\n"));
}

#[test]
fn malformed_trees_cannot_be_printed() {
    let document = AstNode::new(kind::DOCUMENT)
        .with("definitions", vec![AstNode::new(kind::FIELD)]);

    assert!(matches!(
        LoaderOutput::render(document, OutputMode::String),
        Err(NodeShapeError::UnexpectedKind { .. }),
    ));
}

#[test]
fn string_mode_prints_ints_wider_than_32_bits() {
    let output = LoaderOutput::render(
        stripped("query Q { f(x: 3000000000) }"),
        OutputMode::String,
    ).unwrap();

    assert!(output.as_text().unwrap().contains("f(x: 3000000000)"));
}

#[test]
fn number_literals_keep_their_source_text_in_document_json() {
    let output = LoaderOutput::render(
        stripped("{ f(i: 3000000000, r: 1.50) }"),
        OutputMode::Document,
    ).unwrap();

    let json = output.to_json().unwrap();
    let arguments = &json["definitions"][0]["selectionSet"]["selections"][0]["arguments"];
    assert_eq!(arguments[0]["value"]["kind"], "IntValue");
    assert_eq!(arguments[0]["value"]["value"], "3000000000");
    assert_eq!(arguments[1]["value"]["kind"], "FloatValue");
    assert!(arguments[1]["value"]["value"].is_string());
}
