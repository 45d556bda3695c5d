//! The switch behind the crate's stderr warnings. The crate warns when a
//! [`SharedDeque`](crate::core::SharedDeque) is modified by one of its own elements while it is
//! being formatted, since the printed contents then no longer match the deque.
use parking_lot::Once;
use std::sync::atomic::{AtomicU8, Ordering};

const UNSET: u8 = 0;
const USER_ON: u8 = 1;
const USER_OFF: u8 = 2;
const ENV_ON: u8 = 3;
const ENV_OFF: u8 = 4;

static SWITCH: AtomicU8 = AtomicU8::new(UNSET);
static ENV_READ: Once = Once::new();

fn env_choice(value: &str) -> Option<u8> {
    match value {
        "0" => Some(ENV_OFF),
        "1" => Some(ENV_ON),
        _ => None,
    }
}

fn read_env() {
    ENV_READ.call_once(|| {
        if let Some(choice) = std::env::var("BOUNDEQUE_WARNINGS")
            .ok()
            .as_deref()
            .and_then(env_choice)
        {
            SWITCH.store(choice, Ordering::Relaxed);
        }
    });
}

/// Only the first choice sticks, and only if the environment has not already decided.
fn choose(on: bool) {
    read_env();
    let choice = if on { USER_ON } else { USER_OFF };
    let _ = SWITCH.compare_exchange(UNSET, choice, Ordering::Relaxed, Ordering::Relaxed);
}

/// Turn deque warnings on, unless a library or the user already switched them off first.
///
/// Has no effect when the environment variable `BOUNDEQUE_WARNINGS=0` is set.
pub fn enable_warnings() {
    choose(true);
}

/// Silence deque warnings (for example the notice printed when a
/// [`SharedDeque`](crate::core::SharedDeque) changes during its own `repr`), unless they were
/// already switched on explicitly.
///
/// Has no effect when the environment variable `BOUNDEQUE_WARNINGS=1` is set.
pub fn disable_warnings() {
    choose(false);
}

/// Returns `true` if deque warnings will be printed.
///
/// Warnings are on by default. The environment variable `BOUNDEQUE_WARNINGS` (`0` or `1`) always
/// decides when present. Otherwise the first call to [`enable_warnings`] or
/// [`disable_warnings`] decides and later calls are ignored.
pub fn should_warn() -> bool {
    read_env();
    !matches!(SWITCH.load(Ordering::Relaxed), USER_OFF | ENV_OFF)
}

/// Print `Warning: {msg}` to stderr if [`should_warn`] allows it.
pub fn maybe_warn(msg: &str) {
    if should_warn() {
        eprintln!("Warning: {msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Consumes the one-time environment read first, so the variable cannot reapply later.
    fn reset_switch() {
        read_env();
        SWITCH.store(UNSET, Ordering::Relaxed);
    }

    // Both scenarios share the global switch, so they live in one test to avoid racing.
    #[test]
    fn test_default_should_warn_and_overrides() {
        reset_switch();
        assert!(should_warn());
        disable_warnings();
        assert!(!should_warn());
        enable_warnings();
        // a dependency enabling warnings after the user disabled them
        assert!(!should_warn());
        maybe_warn("this should not print");

        reset_switch();
        enable_warnings();
        assert!(should_warn());
        disable_warnings();
        // a dependency disabling warnings after the user enabled them
        assert!(should_warn());
        maybe_warn("this should print");

        reset_switch();
    }

    #[test]
    fn test_env_choice() {
        assert_eq!(env_choice("0"), Some(ENV_OFF));
        assert_eq!(env_choice("1"), Some(ENV_ON));
        assert_eq!(env_choice("yes"), None);
        assert_eq!(env_choice(""), None);
    }
}
