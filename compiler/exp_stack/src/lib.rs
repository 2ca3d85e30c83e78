//! Stack growth for deep recursion.
//!
//! The parser recurses once per nesting level of the source and the
//! interpreter recurses once per nested block, loop iteration body and
//! function call. Wrapping those recursion points in
//! [`ensure_sufficient_stack`] moves evaluation onto a freshly allocated
//! segment when the current one runs low, so the host thread's stack size
//! does not decide how deep a program may nest. Runaway recursion is still
//! bounded by the interpreter's call-depth limit.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Grow when less than this much stack remains (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_result() {
        let result: Result<i64, &str> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn nested_depth_beyond_default_stack() {
        fn nest(depth: u64) -> u64 {
            ensure_sufficient_stack(|| {
                // Keep a sizeable frame alive across the recursive call.
                let frame = [depth; 64];
                if depth == 0 {
                    0
                } else {
                    nest(depth - 1) + frame[63] / depth.max(1)
                }
            })
        }

        assert_eq!(nest(200_000), 200_000);
    }
}
