//! Reference focus provider.

use tracing::{debug, warn};

use crate::host::{ControllerId, FocusProvider, LockHandle};

/// Which holders exclude each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusScope {
    /// A single holder across every controller.
    #[default]
    Global,
    /// One holder per controller stream.
    PerController,
}

/// Non-blocking lock arbiter handing out generation-stamped handles.
#[derive(Debug, Default)]
pub struct FocusArbiter {
    scope: FocusScope,
    holders: Vec<(ControllerId, u64)>,
    next_token: u64,
}

impl FocusArbiter {
    pub fn new(scope: FocusScope) -> Self {
        Self {
            scope,
            holders: Vec::new(),
            next_token: 1,
        }
    }

    pub fn scope(&self) -> FocusScope {
        self.scope
    }

    /// Whether any handle is outstanding for `controller`.
    pub fn is_held_by(&self, controller: ControllerId) -> bool {
        self.holders.iter().any(|(c, _)| *c == controller)
    }

    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }
}

impl FocusProvider for FocusArbiter {
    fn try_acquire(&mut self, controller: ControllerId) -> Option<LockHandle> {
        let contended = match self.scope {
            FocusScope::Global => !self.holders.is_empty(),
            FocusScope::PerController => self.is_held_by(controller),
        };
        if contended {
            debug!(?controller, "Focus denied");
            return None;
        }
        // Token 0 is never issued, even by a `Default` arbiter.
        let token = self.next_token.max(1);
        self.next_token = token + 1;
        self.holders.push((controller, token));
        Some(LockHandle::new(controller, token))
    }

    fn release(&mut self, handle: LockHandle) {
        let key = (handle.controller(), handle.token());
        match self.holders.iter().position(|h| *h == key) {
            Some(index) => {
                self.holders.remove(index);
            }
            None => warn!(?handle, "Released a lock handle that is not outstanding"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT: ControllerId = ControllerId(0);
    const RIGHT: ControllerId = ControllerId(1);

    #[test]
    fn test_global_scope_single_holder() {
        let mut arbiter = FocusArbiter::new(FocusScope::Global);
        let left = arbiter.try_acquire(LEFT).expect("first acquire succeeds");
        assert!(arbiter.try_acquire(RIGHT).is_none());
        assert!(arbiter.try_acquire(LEFT).is_none());
        assert_eq!(arbiter.holder_count(), 1);

        arbiter.release(left);
        assert_eq!(arbiter.holder_count(), 0);
        let right = arbiter.try_acquire(RIGHT).expect("free again");
        assert!(arbiter.is_held_by(RIGHT));
        arbiter.release(right);
    }

    #[test]
    fn test_per_controller_scope() {
        let mut arbiter = FocusArbiter::new(FocusScope::PerController);
        let left = arbiter.try_acquire(LEFT).unwrap();
        let right = arbiter.try_acquire(RIGHT).unwrap();
        assert!(arbiter.try_acquire(LEFT).is_none());
        assert_eq!(arbiter.holder_count(), 2);
        arbiter.release(left);
        arbiter.release(right);
        assert_eq!(arbiter.holder_count(), 0);
    }

    #[test]
    fn test_tokens_are_unique() {
        let mut arbiter = FocusArbiter::default();
        let a = arbiter.try_acquire(LEFT).unwrap();
        let token_a = a.token();
        arbiter.release(a);
        let b = arbiter.try_acquire(LEFT).unwrap();
        assert_ne!(token_a, b.token());
        assert_ne!(token_a, 0);
        arbiter.release(b);
    }

    #[test]
    fn test_stale_release_is_ignored() {
        let mut arbiter = FocusArbiter::default();
        let held = arbiter.try_acquire(LEFT).unwrap();
        arbiter.release(LockHandle::new(LEFT, held.token() + 100));
        assert!(arbiter.is_held_by(LEFT));
        arbiter.release(held);
        assert!(!arbiter.is_held_by(LEFT));
    }
}
