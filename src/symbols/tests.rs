//! Unit tests for the scope stack and the function table.

use crate::ast::types::BuiltinType;
use crate::symbols::function_table::FunctionTable;
use crate::symbols::scope::Scope;
use crate::symbols::symbol_table::SymbolTable;

#[test]
fn test_scope_param_offsets_descend() {
    let mut scope = Scope::new(0, -1);

    assert_eq!(scope.add_param("a", BuiltinType::Int), -1);
    assert_eq!(scope.add_param("b", BuiltinType::Int), -2);
    assert_eq!(scope.add_param("c", BuiltinType::Byte), -3);
}

#[test]
fn test_scope_variable_offsets_ascend() {
    let mut scope = Scope::new(0, -1);

    assert_eq!(scope.add_variable("x", BuiltinType::Int), 0);
    assert_eq!(scope.add_variable("y", BuiltinType::Bool), 1);
    assert_eq!(scope.add_variable("z", BuiltinType::Int), 2);
}

#[test]
fn test_scope_counters_are_independent() {
    let mut scope = Scope::new(0, -1);

    assert_eq!(scope.add_param("a", BuiltinType::Int), -1);
    assert_eq!(scope.add_variable("x", BuiltinType::Int), 0);
    assert_eq!(scope.add_param("b", BuiltinType::Int), -2);
    assert_eq!(scope.add_variable("y", BuiltinType::Int), 1);
}

#[test]
fn test_nested_scope_continues_frame_layout() {
    let mut table = SymbolTable::new();

    table.begin_scope();
    assert_eq!(table.add_variable("x", BuiltinType::Int), 0);

    table.begin_scope();
    assert_eq!(table.add_variable("y", BuiltinType::Int), 1);
    table.end_scope();

    table.end_scope();
}

#[test]
fn test_end_scope_restores_counters() {
    let mut table = SymbolTable::new();

    table.begin_scope();
    assert_eq!(table.add_variable("x", BuiltinType::Int), 0);

    table.begin_scope();
    assert_eq!(table.add_variable("y", BuiltinType::Int), 1);
    assert_eq!(table.add_variable("z", BuiltinType::Int), 2);
    table.end_scope();

    // The sibling scope reuses the offsets the ended scope had taken.
    table.begin_scope();
    assert_eq!(table.add_variable("w", BuiltinType::Int), 1);
    table.end_scope();

    table.end_scope();
}

#[test]
fn test_offset_round_trip_through_arbitrary_nesting() {
    let mut table = SymbolTable::new();

    table.begin_scope();
    table.add_param("p", BuiltinType::Int);
    table.add_variable("v", BuiltinType::Int);

    table.begin_scope();
    table.add_variable("a", BuiltinType::Int);
    table.begin_scope();
    table.add_param("q", BuiltinType::Byte);
    table.add_variable("b", BuiltinType::Int);
    table.end_scope();
    table.end_scope();

    // Counters are back to the values captured at the outer begin_scope,
    // so the next allocations continue right after p and v.
    assert_eq!(table.add_param("r", BuiltinType::Int), -2);
    assert_eq!(table.add_variable("w", BuiltinType::Int), 1);
    table.end_scope();
}

#[test]
fn test_lookup_searches_innermost_first() {
    let mut table = SymbolTable::new();

    table.begin_scope();
    table.add_variable("x", BuiltinType::Int);

    table.begin_scope();
    table.add_variable("x", BuiltinType::Bool);

    let inner = table.lookup("x").unwrap();
    assert_eq!(inner.ty, BuiltinType::Bool);
    assert_eq!(inner.offset, 1);

    table.end_scope();

    let outer = table.lookup("x").unwrap();
    assert_eq!(outer.ty, BuiltinType::Int);
    assert_eq!(outer.offset, 0);

    table.end_scope();
}

#[test]
fn test_lookup_current_ignores_outer_scopes() {
    let mut table = SymbolTable::new();

    table.begin_scope();
    table.add_variable("x", BuiltinType::Int);

    table.begin_scope();
    assert!(table.lookup_current("x").is_none());
    assert!(table.lookup("x").is_some());

    table.end_scope();
    assert!(table.lookup_current("x").is_some());
    table.end_scope();
}

#[test]
fn test_sibling_scopes_do_not_see_each_other() {
    let mut table = SymbolTable::new();

    table.begin_scope();

    table.begin_scope();
    table.add_variable("x", BuiltinType::Int);
    table.end_scope();

    table.begin_scope();
    assert!(table.lookup("x").is_none());
    // A second declaration of x in a sibling block is legal.
    table.add_variable("x", BuiltinType::Int);
    table.end_scope();

    table.end_scope();
}

#[test]
fn test_lookup_after_all_scopes_closed() {
    let mut table = SymbolTable::new();

    table.begin_scope();
    table.add_variable("x", BuiltinType::Int);
    table.end_scope();

    assert!(table.lookup("x").is_none());
    assert_eq!(table.depth(), 0);
}

#[test]
fn test_function_table_insert_and_lookup() {
    let mut functions = FunctionTable::new();

    assert!(functions.insert("foo", BuiltinType::Void, vec![BuiltinType::Int]));

    let entry = functions.lookup("foo").unwrap();
    assert_eq!(entry.return_type, BuiltinType::Void);
    assert_eq!(entry.params, vec![BuiltinType::Int]);
}

#[test]
fn test_function_table_rejects_redefinition() {
    let mut functions = FunctionTable::new();

    assert!(functions.insert("foo", BuiltinType::Void, vec![]));
    // No overloading: a second signature under the same name is refused.
    assert!(!functions.insert("foo", BuiltinType::Int, vec![BuiltinType::Int]));

    let entry = functions.lookup("foo").unwrap();
    assert_eq!(entry.return_type, BuiltinType::Void);
}

#[test]
fn test_validate_call_unknown_function() {
    let functions = FunctionTable::new();

    let error = functions
        .validate_call("missing", &[], 4)
        .unwrap_err();
    assert_eq!(error.get_error_name(), "UndefinedFunction");
    assert_eq!(error.to_string(), "line 4: function missing is not defined");
}

#[test]
fn test_validate_call_arity_mismatch() {
    let mut functions = FunctionTable::new();
    functions.insert(
        "foo",
        BuiltinType::Void,
        vec![BuiltinType::Int, BuiltinType::Int],
    );

    let error = functions
        .validate_call("foo", &[BuiltinType::Int], 7)
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "line 7: prototype mismatch, function foo expects parameters (int,int)"
    );
}

#[test]
fn test_validate_call_type_mismatch() {
    let mut functions = FunctionTable::new();
    functions.insert("foo", BuiltinType::Void, vec![BuiltinType::Bool]);

    let error = functions
        .validate_call("foo", &[BuiltinType::Int], 7)
        .unwrap_err();
    assert_eq!(error.get_error_name(), "PrototypeMismatch");
}

#[test]
fn test_validate_call_byte_widens_to_int() {
    let mut functions = FunctionTable::new();
    functions.insert("foo", BuiltinType::Int, vec![BuiltinType::Int]);

    let result = functions.validate_call("foo", &[BuiltinType::Byte], 3);
    assert_eq!(result.unwrap(), BuiltinType::Int);
}

#[test]
fn test_validate_call_int_does_not_narrow_to_byte() {
    let mut functions = FunctionTable::new();
    functions.insert("foo", BuiltinType::Void, vec![BuiltinType::Byte]);

    assert!(functions
        .validate_call("foo", &[BuiltinType::Int], 3)
        .is_err());
}
