/// Asserts that the provided block panics. When given a message fragment, the panic payload must
/// also contain it, which pins the error a `throw`ing method reports.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $fragment:literal) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($fragment),
                    "panic message {:?} doesn't contain {:?}",
                    message,
                    $fragment
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
