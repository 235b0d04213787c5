use std::fs;

use beaker_parse::{Dialect, ParseError, Parser, parse_file};
use beaker_span::SymbolTable;
use beaker_syntax::SyntaxKind;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, text: &str) -> Utf8PathBuf {
    let path = Utf8Path::from_path(dir.path()).expect("temp dir is not UTF-8").join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn dialect_follows_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let text = "def a : array [3] int;\n";

    let keyword = write(&dir, "sample.bkr", text);
    let standard = write(&dir, "sample.beaker", text);

    let mut symbols = SymbolTable::new();

    let parser = Parser::new(&keyword, &mut symbols).unwrap();
    assert_eq!(parser.dialect(), Dialect::Keyword);
    assert_eq!(parser.text(), text);

    let file = parse_file(&keyword, &mut symbols).unwrap();
    let declaration = &file.operand(0).unwrap().terms()[0];
    assert_eq!(declaration.operand(1).map(|ty| ty.kind()), Some(SyntaxKind::ARRAY));

    // `array` is not a type literal in the standard dialect.
    let err = parse_file(&standard, &mut symbols).unwrap_err();
    assert_eq!(err.to_string(), "1:9: expected 'primary-expression' but got 'array'");
}

#[test]
fn explicit_dialect_overrides_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "pointers.beaker", "def p : * const int;\n");

    let mut symbols = SymbolTable::new();
    let mut parser = Parser::with_dialect(&path, &mut symbols, Dialect::Pointer).unwrap();
    let file = parser.parse_file().unwrap();

    assert_eq!(
        file.display_tree().to_string(),
        "File @1:1-21\n\
         \x20 Sequence @1:1-21\n\
         \x20   Declaration @1:1-21 introducer='def'\n\
         \x20     Identifier @1:5-6 identifier='p'\n\
         \x20     Prefix @1:9-20 operator='*'\n\
         \x20       Prefix @1:11-20 operator='const'\n\
         \x20         Literal @1:17-20 value='int'\n"
    );
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8Path::from_path(dir.path()).unwrap().join("absent.beaker");

    let mut symbols = SymbolTable::new();
    let err = parse_file(&path, &mut symbols).unwrap_err();

    assert!(matches!(&err, ParseError::Io { path: reported, .. } if *reported == path));
    assert!(err.to_string().starts_with(&format!("cannot read {path}: ")));
    assert!(err.diagnostic().is_none());
    assert!(err.location().is_none());
}

#[test]
fn diagnostic_points_into_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "broken.beaker", "def x : int;\ndef y :;\n");

    let mut symbols = SymbolTable::new();
    let mut parser = Parser::new(&path, &mut symbols).unwrap();
    let err = parser.parse_file().unwrap_err();

    let diagnostic = err.diagnostic().unwrap();
    let rendered = diagnostic
        .render(&beaker_errors::Renderer::plain(), path.as_str(), parser.text())
        .to_string();

    assert!(rendered.contains("expected 'primary-expression' but got ';'"), "{rendered}");
    assert!(rendered.contains("broken.beaker:2:8"), "{rendered}");
}
