//! Tests for the scan -> parse -> analyze pipeline and its dumps

use tiny_frontend::ast::format_program;
use tiny_frontend::{Frontend, StatementKind, TokenType};
use tiny_common::{CompilerError, DataType};
use pretty_assertions::assert_eq;

const COUNTER: &str = "int x;
x := 5;
x := x + 1;
write x
";

#[test]
fn test_annotated_tree_dump() {
    let (program, _) = Frontend::analyze_source(COUNTER).expect("Should analyze");

    let expected = "\
[Decl][x][Integer]
[Assign][x][Integer]
   [Num][5][Integer]
[Assign][x][Integer]
   [Oper][Plus][Integer]
      [ID][x][Integer]
      [Num][1][Integer]
[Write]
   [ID][x][Integer]
";
    assert_eq!(format_program(&program), expected);
}

#[test]
fn test_symbol_table_dump_lists_every_line() {
    let (_, table) = Frontend::analyze_source(COUNTER).expect("Should analyze");
    assert_eq!(
        table.to_string(),
        "[Var=x][Mem=0][Type=Integer][Line=1][Line=2][Line=3][Line=3][Line=4]\n"
    );
}

#[test]
fn test_unparsed_tree_has_no_types_on_names() {
    let program = Frontend::parse_source("real r := 2.5;\nif r > 1 then write r end").expect("Should parse");

    let expected = "\
[Decl][r][Real]
   [Num][2.500000][Real]
[If]
   [Oper][GreaterThan]
      [ID][r]
      [Num][1][Integer]
   [Write]
      [ID][r]
";
    assert_eq!(format_program(&program), expected);
}

#[test]
fn test_if_else_dump() {
    let source = "bool b := true;
if b then
  write 1
else
  write 2.0 & 1
end";
    let (program, table) = Frontend::analyze_source(source).expect("Should analyze");

    let expected = "\
[Decl][b][Boolean]
   [Bool][true][Boolean]
[If]
   [ID][b][Boolean]
   [Write]
      [Num][1][Integer]
   [Write]
      [Oper][And][Real]
         [Num][2.000000][Real]
         [Num][1][Integer]
";
    assert_eq!(format_program(&program), expected);
    assert_eq!(table.find("b").map(|v| v.lines.clone()), Some(vec![1, 2]));
}

#[test]
fn test_ast_serializes_to_json() {
    let (program, _) = Frontend::analyze_source("int n := 3; write n ^ 2").expect("Should analyze");
    let json = serde_json::to_value(&program).expect("Should serialize");

    let statements = json["statements"].as_array().expect("statements array");
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0]["kind"]["Declaration"]["name"], "n");
    assert_eq!(statements[1]["kind"]["Write"]["expr_type"], "Integer");
}

#[test]
fn test_scanner_stops_at_unterminated_comment() {
    let tokens = Frontend::tokenize_source("int x { never closed\nwrite x");
    let types: Vec<TokenType> = tokens.into_iter().map(|t| t.token_type).collect();
    assert_eq!(
        types,
        vec![TokenType::Int, TokenType::Identifier("x".to_string()), TokenType::EndOfFile]
    );
}

#[test]
fn test_comments_are_skipped_across_lines() {
    let source = "{ header\n  comment }\nint x;\n{ inline } read x";
    let (program, table) = Frontend::analyze_source(source).expect("Should analyze");
    assert!(matches!(program.statements[1].kind, StatementKind::Read { var_type: DataType::Integer, .. }));
    assert_eq!(table.find("x").map(|v| v.lines.clone()), Some(vec![3, 4]));
}

#[test]
fn test_errors_carry_lines() {
    let err = Frontend::analyze_source("int x;\nbool b;\nb := x").unwrap_err();
    assert!(matches!(err, CompilerError::SemanticError { .. }));
    assert_eq!(err.line(), Some(3));
}
