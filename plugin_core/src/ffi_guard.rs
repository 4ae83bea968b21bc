//! Panic guards for exported `extern "C"` functions.
//!
//! A panic must never unwind into the host. Every export generated by
//! [`declare_plugin!`](crate::declare_plugin) runs its body through one of
//! these helpers.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::log_error;

/// Extract a human-readable message from a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        return (*msg).to_string();
    }
    if let Some(msg) = payload.downcast_ref::<String>() {
        return msg.clone();
    }
    "non-string panic payload".to_string()
}

/// Run `f`; on panic, log it and return `default`.
pub fn guard_with_default<T>(op: &'static str, default: T, f: impl FnOnce() -> T) -> T {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(payload) => {
            report(op, payload.as_ref());
            default
        }
    }
}

/// Run `f`; on panic, log it.
pub fn guard_void(op: &'static str, f: impl FnOnce()) {
    if let Err(payload) = catch_unwind(AssertUnwindSafe(f)) {
        report(op, payload.as_ref());
    }
}

fn report(op: &'static str, payload: &(dyn Any + Send)) {
    let msg = panic_message(payload);
    #[cfg(not(feature = "logging"))]
    eprintln!("panic in ffi `{}`: {}", op, msg);
    log_error!("panic in ffi `{}`: {}", op, msg);
}
