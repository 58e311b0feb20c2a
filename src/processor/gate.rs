//! Counting admission gate

use crossbeam::channel::{bounded, Receiver, Sender};

/// Semaphore bounding how many files are processed at once
///
/// A slot is taken by sending a token into a bounded channel and given back
/// by receiving one, so the channel length is the number of holders.
pub struct AdmissionGate {
    slots_tx: Sender<()>,
    slots_rx: Receiver<()>,
    capacity: usize,
}

impl AdmissionGate {
    /// Create a gate with `capacity` slots (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (slots_tx, slots_rx) = bounded(capacity);
        AdmissionGate {
            slots_tx,
            slots_rx,
            capacity,
        }
    }

    /// Block until a slot is free and take it
    pub fn acquire(&self) -> GatePermit<'_> {
        // Both channel ends live in the gate, so send cannot disconnect
        let _ = self.slots_tx.send(());
        GatePermit { gate: self }
    }

    /// Number of slots currently held
    pub fn in_flight(&self) -> usize {
        self.slots_tx.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A held slot, released when dropped
pub struct GatePermit<'g> {
    gate: &'g AdmissionGate,
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        let _ = self.gate.slots_rx.recv();
    }
}
