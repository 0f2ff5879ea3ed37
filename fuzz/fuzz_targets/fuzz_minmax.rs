#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|pair: (i64, i64, i32, i32)| {
    let (a, b, c, d) = pair;

    assert_eq!(branchless::min(a, b), a.min(b));
    assert_eq!(branchless::max(a, b), a.max(b));
    assert_eq!(branchless::min(c, d), c.min(d));
    assert_eq!(branchless::max(c, d), c.max(d));

    // Wraparound variant: exact unless the difference overflows
    match branchless::wrapping::checked_min(c, d) {
        Ok(v) => assert_eq!(v, c.min(d)),
        Err(_) => assert!(c.checked_sub(d).is_none()),
    }

    if let Ok(v) = branchless::clamp(a, c.into(), d.into()) {
        assert_eq!(v, a.clamp(c.into(), d.into()));
    }
});
