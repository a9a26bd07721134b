/// Asserts that a block panics, optionally checking that the panic message contains some text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), "assertion failed to panic");
    };
    ($run:block, contains $expected:literal) => {{
        let payload = std::panic::catch_unwind(|| $run).expect_err("assertion failed to panic");
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($expected),
            "panic message {:?} should contain {:?}",
            message,
            $expected
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
