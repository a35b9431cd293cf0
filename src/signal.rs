//! Interrupt handling
//!
//! Ctrl-C is a normal shutdown path, not an error: the handler clears a
//! shared run flag that every loop checks once per iteration, so the process
//! leaves through the ordinary end of `main` with status 0.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Install the SIGINT handler and return the shared run flag.
pub fn run_flag() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let running = Arc::new(AtomicBool::new(true));
    let handle = Arc::clone(&running);
    ctrlc::set_handler(move || {
        handle.store(false, Ordering::SeqCst);
    })?;
    Ok(running)
}

/// True while no interrupt has been received.
pub fn is_running(flag: &AtomicBool) -> bool {
    flag.load(Ordering::SeqCst)
}
