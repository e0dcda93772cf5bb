//! Fault hook for contract violations
//!
//! A raw thermocouple type code outside `0..=12` means the caller is broken:
//! a corrupted configuration record, an uninitialised selector, a protocol
//! mismatch. The dispatcher reports it through a [`FaultHandler`] before it
//! returns the error, and the handler decides what a fault means for the
//! product:
//!
//! | Handler               | Behaviour                                  |
//! |-----------------------|--------------------------------------------|
//! | [`LogFaultHandler`]   | log at error level (default)               |
//! | [`PanicFaultHandler`] | panic, for firmware that halts on faults   |
//! | [`IgnoreFaults`]      | nothing                                    |
//! | [`FaultCounter`]      | count faults and keep the last bad code    |
//! | any `Fn(u8)`          | caller-defined                             |
//!
//! Handlers are called at most once per faulty call and may be shared
//! between threads or interrupt contexts through `&self`.

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

/// Receives contract violations detected by the dispatcher
pub trait FaultHandler {
    /// `code` does not name a thermocouple type
    fn unknown_thermocouple(&self, code: u8);
}

impl<F> FaultHandler for F
where
    F: Fn(u8),
{
    fn unknown_thermocouple(&self, code: u8) {
        self(code)
    }
}

/// Logs faults at error level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFaultHandler;

impl FaultHandler for LogFaultHandler {
    fn unknown_thermocouple(&self, code: u8) {
        log_error!("unknown thermocouple type code {}", code);
    }
}

/// Panics on the first fault
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanicFaultHandler;

impl FaultHandler for PanicFaultHandler {
    fn unknown_thermocouple(&self, code: u8) {
        panic!("unknown thermocouple type code {}", code);
    }
}

/// Discards faults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreFaults;

impl FaultHandler for IgnoreFaults {
    fn unknown_thermocouple(&self, _code: u8) {}
}

/// Counts faults for supervision
#[derive(Debug, Default)]
pub struct FaultCounter {
    count: AtomicU32,
    last_code: AtomicU8,
}

impl FaultCounter {
    /// Counter with no faults recorded
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
            last_code: AtomicU8::new(0),
        }
    }

    /// Faults seen so far (wraps at `u32::MAX`)
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }

    /// Code of the most recent fault, `None` before the first one
    pub fn last_code(&self) -> Option<u8> {
        if self.count() == 0 {
            None
        } else {
            Some(self.last_code.load(Ordering::Relaxed))
        }
    }

    /// Forget all recorded faults
    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
        self.last_code.store(0, Ordering::Relaxed);
    }
}

impl FaultHandler for FaultCounter {
    fn unknown_thermocouple(&self, code: u8) {
        self.last_code.store(code, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}
