use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Flips the switch and returns the new state.
pub fn toggle_debug() -> bool {
    let new_state = !debug_enabled();
    set_debug(new_state);
    new_state
}

pub(crate) fn debug_println(msg: &str) {
    if debug_enabled() {
        println!("{}", msg);
    }
}
