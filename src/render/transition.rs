//! Transition records and log.
//!
//! ## Purpose
//!
//! This module is the explicit replacement for fire-and-forget DOM
//! animations: a redraw describes every animated attribute change as a
//! `Transition` record — target, attribute, from, to, duration — appended to
//! a log the host can drain and animate, or ignore.
//!
//! ## Design notes
//!
//! * **Last-writer-wins**: The scene always holds final values; transitions
//!   are descriptions, not deferred mutations. Overlapping redraws simply
//!   append newer records, mirroring a new animation visually overriding an
//!   in-flight one.
//! * **Fire-and-forget**: Beginning a transition returns a handle
//!   immediately; nothing blocks or awaits completion, and no cancellation
//!   is offered.
//! * **No records for enter/exit**: Entering marks appear at their final
//!   position and exiting marks are removed immediately; only updates
//!   transition.
//!
//! ## Invariants
//!
//! * Records are drained in the order they were begun.
//! * Handles increase monotonically within a log.
//!
//! ## Non-goals
//!
//! * This module does not interpolate values over time; timing belongs to
//!   the host.
//! * This module does not decide which attributes change (see the API
//!   layer's redraw).

// ============================================================================
// Transition Types
// ============================================================================

/// The scene element a transition applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionTarget {
    /// The x axis (ticks and gridlines).
    XAxis,

    /// The y axis (ticks and gridlines).
    YAxis,

    /// The regression overlay line.
    RegressionLine,

    /// The mark with the given key.
    Mark(String),
}

/// An attribute value at one end of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue<T> {
    /// A numeric attribute (position, radius, domain bound).
    Scalar(T),

    /// A paint attribute (fill color).
    Paint(String),
}

/// One animated attribute change.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<T> {
    /// Element the change applies to.
    pub target: TransitionTarget,

    /// Attribute name ("cx", "r", "fill", "domain-min", ...).
    pub attribute: &'static str,

    /// Value at the start of the animation.
    pub from: AttributeValue<T>,

    /// Value at the end of the animation.
    pub to: AttributeValue<T>,

    /// Animation duration in host time-units.
    pub duration: T,
}

/// Identifier of a begun transition within its log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionHandle(pub usize);

// ============================================================================
// Transition Log
// ============================================================================

/// Append-only log of transitions issued by redraws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionLog<T> {
    queue: Vec<Transition<T>>,
    begun: usize,
}

impl<T> TransitionLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            begun: 0,
        }
    }

    /// Record an animated attribute change and return its handle.
    pub fn begin(
        &mut self,
        target: TransitionTarget,
        attribute: &'static str,
        from: AttributeValue<T>,
        to: AttributeValue<T>,
        duration: T,
    ) -> TransitionHandle {
        self.queue.push(Transition {
            target,
            attribute,
            from,
            to,
            duration,
        });
        let handle = TransitionHandle(self.begun);
        self.begun += 1;
        handle
    }

    /// Number of undrained records.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the log holds no undrained records.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drain all records in issue order.
    pub fn take(&mut self) -> Vec<Transition<T>> {
        std::mem::take(&mut self.queue)
    }
}
