use quill_core::{Kind, Scope, Value};

use super::builtin::{Builtin, BuiltinRegistry, check_argument, check_input};
use super::error::EvalError;
use super::filter::Filter;

/// Builtin that counts its arguments, for registry tests.
struct Arity;

impl Builtin for Arity {
    fn apply(
        &self,
        _scope: &Scope,
        args: &[&dyn Filter],
        _input: &Value,
    ) -> Result<Vec<Value>, EvalError> {
        Ok(vec![Value::from(args.len() as i64)])
    }
}

#[test]
fn registry_dispatches_by_name_and_arity() {
    let mut registry = BuiltinRegistry::new();
    registry.register("arity", 0, Box::new(Arity));

    let scope = Scope::new();
    let out = registry.apply("arity", &scope, &[], &Value::Null).unwrap();
    assert_eq!(out, vec![Value::Number(0.0)]);
}

#[test]
fn registry_misses_are_undefined_errors() {
    let registry = BuiltinRegistry::new();
    let scope = Scope::new();
    let err = registry
        .apply("nope", &scope, &[], &Value::Null)
        .unwrap_err();
    assert_eq!(
        err,
        EvalError::Undefined {
            name: "nope".to_owned(),
            arity: 0
        }
    );
}

#[test]
fn arity_is_part_of_the_key() {
    let mut registry = BuiltinRegistry::new();
    registry.register("f", 2, Box::new(Arity));
    assert!(registry.get("f", 2).is_some());
    assert!(registry.get("f", 1).is_none());
    assert!(registry.get("g", 2).is_none());
}

#[test]
fn defaults_include_the_match_builtin() {
    let registry = BuiltinRegistry::with_defaults();
    assert!(registry.get("_match_impl", 3).is_some());
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
}

#[test]
fn input_check_names_the_builtin() {
    let err = check_input("f/1", &Value::from(3), &[Kind::String]).unwrap_err();
    assert_eq!(
        err,
        EvalError::InputType {
            function: "f/1",
            expected: "string".to_owned(),
            actual: Kind::Number,
        }
    );
    assert_eq!(err.to_string(), "f/1 input must be string, but got number");

    assert!(check_input("f/1", &Value::from("ok"), &[Kind::String]).is_ok());
}

#[test]
fn argument_check_reports_one_based_position() {
    let err =
        check_argument("f/2", 2, &Value::Bool(true), &[Kind::String, Kind::Null]).unwrap_err();
    assert_eq!(
        err,
        EvalError::ArgumentType {
            function: "f/2",
            position: 2,
            expected: "string or null".to_owned(),
            actual: Kind::Bool,
        }
    );
    assert_eq!(
        err.to_string(),
        "f/2 argument 2 must be string or null, but got boolean"
    );

    assert!(check_argument("f/2", 2, &Value::Null, &[Kind::String, Kind::Null]).is_ok());
}
