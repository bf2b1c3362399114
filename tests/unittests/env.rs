// Environment construction, replacement and rendering
use crate::common::{chain, pairs};
use bindenv::{Env, EnvError, SymbolTable, Value};

#[test]
fn test_shadowing_on_replace() {
    let mut symbols = SymbolTable::new();
    let env = chain(
        &mut symbols,
        &[("x", Some(Value::int(1))), ("x", Some(Value::int(2)))],
    );

    env.replace("x", Value::int(9)).unwrap();

    assert_eq!(
        pairs(&env),
        vec![
            ("x".to_string(), Some(Value::int(9))),
            ("x".to_string(), Some(Value::int(2))),
        ]
    );
}

#[test]
fn test_missing_name_does_not_mutate() {
    let mut symbols = SymbolTable::new();
    let env = chain(
        &mut symbols,
        &[("x", Some(Value::int(1))), ("y", None)],
    );
    let before = pairs(&env);

    let err = env.replace("z", Value::int(0)).unwrap_err();

    assert!(matches!(err, EnvError::Lookup { ref name, .. } if name == "z"));
    assert_eq!(
        err.to_string(),
        "Cannot find the name z in the environment [ x: 1 y: null ]"
    );
    assert_eq!(pairs(&env), before);
}

#[test]
fn test_empty_chain_renders_brackets() {
    assert_eq!(Env::empty().to_string(), "[ ]");
}

#[test]
fn test_inner_scope_sees_outer_mutation() {
    let mut symbols = SymbolTable::new();
    let outer = Env::empty().bind(symbols.canonicalize("count"), Value::int(0));
    let inner = outer.bind(symbols.canonicalize("i"), Value::int(5));

    outer.replace("count", Value::int(1)).unwrap();
    assert_eq!(inner.lookup("count").unwrap(), Some(Value::int(1)));

    inner.replace("count", Value::int(2)).unwrap();
    assert_eq!(outer.lookup("count").unwrap(), Some(Value::int(2)));
}

#[test]
fn test_lookup_uses_same_shadowing_as_replace() {
    let mut symbols = SymbolTable::new();
    let env = chain(
        &mut symbols,
        &[("v", Some(Value::int(1))), ("v", Some(Value::int(2)))],
    );
    assert_eq!(env.lookup("v").unwrap(), Some(Value::int(1)));
    env.replace("v", Value::int(3)).unwrap();
    assert_eq!(env.lookup("v").unwrap(), Some(Value::int(3)));
}

#[test]
fn test_iter_matches_len() {
    let mut symbols = SymbolTable::new();
    let env = chain(
        &mut symbols,
        &[
            ("a", Some(Value::int(1))),
            ("b", Some(Value::int(2))),
            ("c", None),
        ],
    );
    assert_eq!(env.len(), 3);
    assert_eq!((&env).into_iter().count(), 3);
}
