//! Single-flight guard per resource class

use std::sync::atomic::{AtomicBool, Ordering};

use crate::client::pagination::ResourceClass;

/// One in-flight flag per resource class.
///
/// A latch, not a queue: a caller that finds the flag set is expected to drop
/// its request.
#[derive(Debug, Default)]
pub struct RequestGate {
    flags: [AtomicBool; 3],
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag for `class`. Returns false if it was already set.
    pub fn try_enter(&self, class: ResourceClass) -> bool {
        self.flags[class.index()]
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Clear the flag for `class` unconditionally
    pub fn exit(&self, class: ResourceClass) {
        self.flags[class.index()].store(false, Ordering::Release);
    }

    #[cfg(test)]
    pub fn is_busy(&self, class: ResourceClass) -> bool {
        self.flags[class.index()].load(Ordering::Acquire)
    }

    /// Enter the gate and get a pass that exits it when dropped, on every
    /// path out of the guarded operation.
    pub fn enter(&self, class: ResourceClass) -> Option<GatePass<'_>> {
        self.try_enter(class).then(|| GatePass { gate: self, class })
    }
}

/// Holds a resource class's gate open until dropped
#[must_use = "the gate closes again as soon as the pass is dropped"]
#[derive(Debug)]
pub struct GatePass<'a> {
    gate: &'a RequestGate,
    class: ResourceClass,
}

impl Drop for GatePass<'_> {
    fn drop(&mut self) {
        self.gate.exit(self.class);
    }
}
