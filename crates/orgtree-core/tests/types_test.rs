//! Tests for organization key interning.

use lasso::Spur;
use orgtree_core::types::{OrgInterner, OrgKey};

#[test]
fn test_interner_basic() {
    let interner = OrgInterner::new();
    let key = interner.intern("https://ror.org/01abc");
    assert_eq!(interner.resolve(key), "https://ror.org/01abc");
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_interner_dedupes() {
    let interner = OrgInterner::new();
    let a = interner.intern("https://ror.org/01abc");
    let b = interner.intern("https://ror.org/01abc");
    assert_eq!(a, b);
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_interner_does_not_normalize() {
    let interner = OrgInterner::new();
    let a = interner.intern("https://ror.org/01ABC");
    let b = interner.intern("https://ror.org/01abc");
    assert_ne!(a, b);
}

#[test]
fn test_get_does_not_insert() {
    let interner = OrgInterner::new();
    assert!(interner.get("https://ror.org/missing").is_none());
    assert!(interner.is_empty());
}

#[test]
fn test_key_spur_conversions() {
    let interner = OrgInterner::new();
    let key = interner.intern("x");
    let spur: Spur = key.into();
    assert_eq!(OrgKey::from(spur), key);
    assert_eq!(OrgKey::new(spur).inner(), spur);
}

#[test]
fn test_concurrent_interning() {
    use rayon::prelude::*;

    let interner = OrgInterner::new();
    let ids: Vec<String> = (0..1000).map(|i| format!("https://ror.org/{i:07}")).collect();

    let keys: Vec<OrgKey> = ids.par_iter().map(|id| interner.intern(id)).collect();
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(interner.resolve(*key), ids[i]);
    }

    let again: Vec<OrgKey> = ids.par_iter().map(|id| interner.intern(id)).collect();
    assert_eq!(keys, again);
}
