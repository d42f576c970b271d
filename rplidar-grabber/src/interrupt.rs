use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation for the continuous-capture loop.
///
/// The flag is set from the Ctrl+C handler and polled between capture
/// cycles; a grab already in flight finishes before the loop stops.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Installs a Ctrl+C handler that only sets the returned token.
///
/// # Panics
/// Panics if registering the Ctrl+C handler fails.
pub fn install() -> CancelToken {
    let token = CancelToken::new();
    let handler = token.clone();
    ctrlc::set_handler(move || handler.cancel()).expect("Error setting Ctrl+C handler");
    token
}
