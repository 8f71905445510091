use crate::import::ImportDirective;
use crate::import::ImportError;
use crate::import::scan_import_directives;
use std::path::Path;
use std::path::PathBuf;

#[test]
fn finds_double_and_single_quoted_directives() {
    let source = "#import \"./a.graphql\"\n\
                  query Q { ...A ...B }\n\
                  #import './b.graphql'\n";

    assert_eq!(scan_import_directives(source, None).unwrap(), vec![
        ImportDirective { import_spec: "./a.graphql".to_string(), line: 1 },
        ImportDirective { import_spec: "./b.graphql".to_string(), line: 3 },
    ]);
}

#[test]
fn ordinary_comments_are_not_directives() {
    let source = "# import \"./spaced.graphql\"\n\
                  #important: read this\n\
                  #\n  \
                  #import \"./indented.graphql\"\n\
                  query Q { id } # import \"./trailing.graphql\"\n";

    assert!(scan_import_directives(source, None).unwrap().is_empty());
}

#[test]
fn tolerates_surrounding_whitespace_and_crlf() {
    let source = "#import   \"./a.graphql\"  \r\nquery Q { id }\r\n";
    assert_eq!(scan_import_directives(source, None).unwrap(), vec![
        ImportDirective { import_spec: "./a.graphql".to_string(), line: 1 },
    ]);
}

#[test]
fn rejects_unquoted_paths() {
    let err = scan_import_directives(
        "query Q { id }\n#import ./a.graphql\n",
        Some(Path::new("/app/main.graphql")),
    ).unwrap_err();

    assert_eq!(err, ImportError::MalformedImportDirective {
        file: Some(PathBuf::from("/app/main.graphql")),
        line: 2,
        text: "#import ./a.graphql".to_string(),
    });
}

#[test]
fn rejects_mismatched_empty_and_trailing_quotes() {
    for line in [
        "#import",
        "#import \"./a.graphql'",
        "#import \"\"",
        "#import \"./a.graphql\" extra",
        "#import \"a\" \"b\"",
    ] {
        let result = scan_import_directives(line, None);
        assert!(
            matches!(result, Err(ImportError::MalformedImportDirective { .. })),
            "expected `{line}` to be rejected, got {result:?}",
        );
    }
}

#[test]
fn a_malformed_directive_fails_the_whole_file() {
    let source = "#import \"./good.graphql\"\n#import bad\n";
    assert!(scan_import_directives(source, None).is_err());
}
