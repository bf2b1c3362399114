// Name interning must be canonical and idempotent
use bindenv::{Canonicalize, GlobalSymbols, SymbolTable};
use std::rc::Rc;

#[test]
fn test_symbol_interning_basic() {
    let mut table = SymbolTable::new();

    let a = table.canonicalize("foo");
    let b = table.canonicalize("bar");
    let c = table.canonicalize("foo");

    assert!(Rc::ptr_eq(&a, &c));
    assert!(!Rc::ptr_eq(&a, &b));
}

#[test]
fn test_many_names() {
    let mut table = SymbolTable::new();
    let names: Vec<_> = (0..1000)
        .map(|i| table.canonicalize(&format!("name-{}", i)))
        .collect();
    assert_eq!(table.len(), 1000);
    for (i, name) in names.iter().enumerate() {
        assert_eq!(&**name, format!("name-{}", i));
    }
}

#[test]
fn test_trait_and_inherent_agree() {
    let mut table = SymbolTable::new();
    let a = table.canonicalize("same");
    let b = Canonicalize::canonicalize(&mut table, "same");
    assert!(Rc::ptr_eq(&a, &b));
}

#[test]
fn test_global_symbols_are_per_thread_canonical() {
    let a = GlobalSymbols.canonicalize("thread-local");
    let b = bindenv::intern("thread-local");
    assert!(Rc::ptr_eq(&a, &b));
}
