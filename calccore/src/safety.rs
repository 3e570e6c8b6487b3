//! Frame isolation: a panic while drawing one frame must not take the
//! calculator down.

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            tracing::error!(panic = %msg, "caught panic in frame, recovered");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_or_passes_value_through() {
        assert_eq!(catch_or(0, || 7), 7);
    }

    #[test]
    fn test_catch_or_returns_fallback_on_panic() {
        let got = catch_or("fallback", || -> &str { panic!("boom") });
        assert_eq!(got, "fallback");
    }
}
