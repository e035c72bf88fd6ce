//! Reference input dispatch with frame-gated scroll accumulation.

use crate::host::InputDispatch;

/// Collects wheel requests during a frame and exposes them on the next one.
///
/// Requests made while frame `n` runs become the wheel delta reported for
/// frame `n + 1`; the delta is reported for exactly one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollAccumulator {
    requested: f32,
    current: f32,
}

impl ScrollAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, amount: f32) {
        self.requested += amount;
    }

    /// Latch pending requests as this frame's delta.
    pub fn begin_frame(&mut self) {
        self.current = self.requested;
        self.requested = 0.0;
    }

    /// Wheel delta for the current frame.
    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn pending(&self) -> f32 {
        self.requested
    }
}

/// A synthetic input event produced by the interaction core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyntheticInput {
    PrimaryDown,
    PrimaryUp,
    Cycle(f32),
}

/// Dispatch that queues events for the host to drain every frame.
#[derive(Debug, Clone, Default)]
pub struct QueuedDispatch {
    events: Vec<SyntheticInput>,
    scroll: ScrollAccumulator,
    primary_held: bool,
}

impl QueuedDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued event.
    pub fn drain(&mut self) -> Vec<SyntheticInput> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[SyntheticInput] {
        &self.events
    }

    /// Whether the synthetic primary button is currently down.
    pub fn primary_held(&self) -> bool {
        self.primary_held
    }

    /// Wheel delta for the current frame.
    pub fn scroll_delta(&self) -> f32 {
        self.scroll.current()
    }
}

impl InputDispatch for QueuedDispatch {
    fn begin_frame(&mut self) {
        self.scroll.begin_frame();
    }

    fn primary_down(&mut self) -> anyhow::Result<()> {
        self.primary_held = true;
        self.events.push(SyntheticInput::PrimaryDown);
        Ok(())
    }

    fn primary_up(&mut self) -> anyhow::Result<()> {
        self.primary_held = false;
        self.events.push(SyntheticInput::PrimaryUp);
        Ok(())
    }

    fn cycle(&mut self, amount: f32) -> anyhow::Result<()> {
        self.scroll.request(amount);
        self.events.push(SyntheticInput::Cycle(amount));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_reported_for_one_frame() {
        let mut scroll = ScrollAccumulator::new();
        scroll.request(1.0);
        scroll.request(1.0);
        assert_eq!(scroll.current(), 0.0);
        assert_eq!(scroll.pending(), 2.0);

        scroll.begin_frame();
        assert_eq!(scroll.current(), 2.0);
        assert_eq!(scroll.pending(), 0.0);

        scroll.begin_frame();
        assert_eq!(scroll.current(), 0.0);
    }

    #[test]
    fn test_queued_dispatch_records_events() {
        let mut dispatch = QueuedDispatch::new();
        dispatch.primary_down().unwrap();
        assert!(dispatch.primary_held());
        dispatch.primary_up().unwrap();
        dispatch.cycle(1.0).unwrap();
        assert!(!dispatch.primary_held());
        assert_eq!(
            dispatch.drain(),
            vec![
                SyntheticInput::PrimaryDown,
                SyntheticInput::PrimaryUp,
                SyntheticInput::Cycle(1.0)
            ]
        );
        assert!(dispatch.events().is_empty());

        assert_eq!(dispatch.scroll_delta(), 0.0);
        dispatch.begin_frame();
        assert_eq!(dispatch.scroll_delta(), 1.0);
    }
}
