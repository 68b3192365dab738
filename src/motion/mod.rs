//! Entrance and hover motion model
//!
//! Card sections animate when they first scroll into view: every card goes
//! from [`Phase::Initial`] to [`Phase::Animate`], staggered by
//! [`STAGGER_STEP`] in catalog order. A [`ViewportLatch`] makes the entrance
//! fire once per page view. Hover is a separate transform applied only while
//! the pointer is over an element; it never touches the entrance state.
//!
//! The renderer encodes these timings into the markup and stylesheet; the
//! embedded `motion.js` runs the same latch in the browser.

use serde::Serialize;
use std::time::Duration;

/// Delay between sibling cards
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Duration of a card's entrance
pub const CARD_DURATION: Duration = Duration::from_millis(500);

/// Vertical offset of a card before it enters, in pixels
pub const RISE_OFFSET_PX: u32 = 20;

/// Timing of one transition relative to its trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub delay: Duration,
    pub duration: Duration,
}

impl Transition {
    pub const fn new(delay: Duration, duration: Duration) -> Self {
        Self { delay, duration }
    }
}

/// Entrance state of a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Offset and transparent
    Initial,
    /// In place and opaque
    Animate,
}

impl Phase {
    pub fn opacity(self) -> f32 {
        match self {
            Phase::Initial => 0.0,
            Phase::Animate => 1.0,
        }
    }

    pub fn offset_px(self) -> u32 {
        match self {
            Phase::Initial => RISE_OFFSET_PX,
            Phase::Animate => 0,
        }
    }
}

/// Two-state latch: armed until the first viewport entry, then fired for good
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportLatch {
    fired: bool,
}

impl ViewportLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a viewport entry; returns `true` only for the first one
    pub fn enter(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

/// Fixed per-sibling delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    step: Duration,
}

impl Default for Stagger {
    fn default() -> Self {
        Self { step: STAGGER_STEP }
    }
}

impl Stagger {
    /// Start offset of the sibling at `index`
    pub fn delay(&self, index: usize) -> Duration {
        self.step * index as u32
    }

    /// Entrance transitions for `count` siblings, in order
    pub fn schedule(&self, count: usize, duration: Duration) -> Vec<Transition> {
        (0..count)
            .map(|i| Transition::new(self.delay(i), duration))
            .collect()
    }
}

/// Entrance state machine for one card section
#[derive(Debug, Clone)]
pub struct SectionMotion {
    latch: ViewportLatch,
    stagger: Stagger,
    phases: Vec<Phase>,
}

impl SectionMotion {
    pub fn new(card_count: usize) -> Self {
        Self {
            latch: ViewportLatch::new(),
            stagger: Stagger::default(),
            phases: vec![Phase::Initial; card_count],
        }
    }

    /// Handle the section scrolling into view
    ///
    /// The first call moves every card to [`Phase::Animate`] and returns the
    /// staggered schedule. Later calls return `None` and change nothing.
    pub fn enter_viewport(&mut self) -> Option<Vec<Transition>> {
        if !self.latch.enter() {
            return None;
        }
        self.phases.fill(Phase::Animate);
        Some(self.schedule())
    }

    /// Staggered schedule for the cards of this section
    pub fn schedule(&self) -> Vec<Transition> {
        self.stagger.schedule(self.phases.len(), CARD_DURATION)
    }

    pub fn phase(&self, index: usize) -> Option<Phase> {
        self.phases.get(index).copied()
    }

    pub fn is_triggered(&self) -> bool {
        self.latch.is_fired()
    }
}

/// Timings of the hero block, which animates on load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroMotion {
    /// Fade-in of the whole block
    pub container: Transition,
    pub title: Transition,
    pub subtitle: Transition,
    pub actions: Transition,
}

impl Default for HeroMotion {
    fn default() -> Self {
        let rise = Duration::from_millis(800);
        Self {
            container: Transition::new(Duration::ZERO, Duration::from_secs(1)),
            title: Transition::new(Duration::from_millis(200), rise),
            subtitle: Transition::new(Duration::from_millis(400), rise),
            actions: Transition::new(Duration::from_millis(600), rise),
        }
    }
}

/// Momentary hover transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverEffect {
    /// Move up by the given number of pixels
    Lift(u32),
    Scale(f32),
    /// Rotate by the given number of degrees
    Rotate(i32),
}

impl HoverEffect {
    pub const PROJECT_CARD: HoverEffect = HoverEffect::Lift(5);
    pub const PROJECT_ICON: HoverEffect = HoverEffect::Scale(1.1);
    pub const POST_CARD: HoverEffect = HoverEffect::Scale(1.02);
    pub const POST_ICON: HoverEffect = HoverEffect::Rotate(15);

    /// CSS `transform` value in the hovered state
    pub fn css_transform(self) -> String {
        match self {
            HoverEffect::Lift(px) => format!("translateY(-{}px)", px),
            HoverEffect::Scale(factor) => format!("scale({})", factor),
            HoverEffect::Rotate(deg) => format!("rotate({}deg)", deg),
        }
    }
}
