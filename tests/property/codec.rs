// Property tests for the environment wire encoding.
//
// Round-trips must preserve order and content; frames that cannot be
// transmitted come back as the placeholder; decoding a truncated image
// never yields a chain.

use super::strategies::*;
use crate::common::pairs;
use bindenv::{Env, SymbolTable, Value, WireConfig};
use proptest::prelude::*;
use std::rc::Rc;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn value_roundtrip(v in arb_value()) {
        let bytes = v.to_bytes().unwrap();
        let decoded = Value::read(&mut bytes.as_slice(), &WireConfig::default()).unwrap();
        prop_assert_eq!(decoded, v);
    }

    #[test]
    fn plain_chain_roundtrip(specs in prop::collection::vec(arb_plain_frame(), 0..40)) {
        let mut symbols = SymbolTable::new();
        let env = build_chain(&mut symbols, &specs);
        let bytes = env.to_bytes().unwrap();
        let decoded = Env::from_bytes(&bytes, &mut SymbolTable::new(), &WireConfig::default()).unwrap();
        prop_assert_eq!(pairs(&decoded), pairs(&env));
    }

    #[test]
    fn sentinel_substitution(specs in prop::collection::vec(arb_frame(), 1..40)) {
        let mut symbols = SymbolTable::new();
        let env = build_chain(&mut symbols, &specs);
        let bytes = env.to_bytes().unwrap();
        let decoded = Env::from_bytes(&bytes, &mut SymbolTable::new(), &WireConfig::default()).unwrap();

        let got = pairs(&decoded);
        prop_assert_eq!(got.len(), specs.len());
        for (i, (spec, (name, value))) in specs.iter().zip(got).enumerate() {
            match spec {
                FrameSpec::Plain(n, v) => {
                    prop_assert_eq!(&name, n, "frame {}", i);
                    prop_assert_eq!(value, Some(v.clone()), "frame {}", i);
                }
                FrameSpec::Absent(_) | FrameSpec::Closure(..) => {
                    prop_assert_eq!(name, "", "frame {}", i);
                    prop_assert_eq!(value, Some(Value::sentinel()), "frame {}", i);
                }
            }
        }
    }

    #[test]
    fn truncated_image_never_decodes(
        specs in prop::collection::vec(arb_frame(), 1..10),
        cut in any::<prop::sample::Index>(),
    ) {
        let mut symbols = SymbolTable::new();
        let bytes = build_chain(&mut symbols, &specs).to_bytes().unwrap();
        // A cut at zero leaves the empty image, which is the empty chain
        let cut = 1 + cut.index(bytes.len() - 1);
        let result = Env::from_bytes(&bytes[..cut], &mut SymbolTable::new(), &WireConfig::default());
        prop_assert!(result.is_err());
    }

    #[test]
    fn decoding_twice_is_idempotent(specs in prop::collection::vec(arb_plain_frame(), 1..20)) {
        let mut symbols = SymbolTable::new();
        let bytes = build_chain(&mut SymbolTable::new(), &specs).to_bytes().unwrap();

        let first = Env::from_bytes(&bytes, &mut symbols, &WireConfig::default()).unwrap();
        let interned = symbols.len();
        let second = Env::from_bytes(&bytes, &mut symbols, &WireConfig::default()).unwrap();

        prop_assert_eq!(symbols.len(), interned);
        for ((a, _), (b, _)) in first.iter().zip(second.iter()) {
            prop_assert!(Rc::ptr_eq(&a, &b));
        }
    }

    #[test]
    fn canonicalize_is_idempotent(name in arb_name()) {
        let mut symbols = SymbolTable::new();
        let once = symbols.canonicalize(&name);
        let twice = symbols.canonicalize(&once);
        prop_assert!(Rc::ptr_eq(&once, &twice));
    }
}
