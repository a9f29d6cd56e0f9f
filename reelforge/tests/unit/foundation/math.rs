use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    a.write_bytes(b"reelforge");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_bytes(b"reel");
    b.write_bytes(b"forge");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn random01_is_keyed_and_bounded() {
    let x0 = random01(0, "x0");
    assert_eq!(x0, random01(0, "x0"));
    assert_ne!(x0, random01(0, "x1"));
    assert_ne!(x0, random01(1, "x0"));
    for i in 0..100 {
        let v = random01(7, &format!("size{i}"));
        assert!((0.0..1.0).contains(&v));
    }
}
