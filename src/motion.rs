//! Entrance animation metadata.
//!
//! An element starts from a [`Pose`] at zero opacity and transitions to its
//! natural position once its [`Trigger`] fires. The animation is expressed as
//! inline CSS so the server and the browser produce the same markup.

/// Delay added per list position for cascading cards.
pub const STAGGER_MS: u32 = 100;
pub const DEFAULT_DURATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Plays as soon as the element is mounted.
    Mount,
    /// Plays the first time the element enters the viewport.
    InView,
}

/// Offset an element starts from before its entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: i32,
    pub y: i32,
    pub scale: f32,
}

impl Pose {
    pub const fn shifted(x: i32, y: i32) -> Self {
        Self { x, y, scale: 1.0 }
    }

    pub const fn scaled(scale: f32) -> Self {
        Self { x: 0, y: 0, scale }
    }

    fn transform(&self) -> String {
        if self.scale == 1.0 {
            format!("translate({}px, {}px)", self.x, self.y)
        } else {
            format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub trigger: Trigger,
}

impl Motion {
    pub const fn on_mount(from: Pose) -> Self {
        Self {
            from,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
            trigger: Trigger::Mount,
        }
    }

    pub const fn in_view(from: Pose) -> Self {
        Self {
            from,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
            trigger: Trigger::InView,
        }
    }

    pub const fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub const fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn staggered(self, index: usize) -> Self {
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay(self.delay_ms.saturating_add(step.saturating_mul(STAGGER_MS)))
    }

    pub fn style(&self, shown: bool) -> String {
        let transition = format!(
            "transition: opacity {d}ms ease-out {l}ms, transform {d}ms ease-out {l}ms",
            d = self.duration_ms,
            l = self.delay_ms,
        );
        if shown {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!("opacity: 0; transform: {}; {transition}", self.from.transform())
        }
    }
}

/// Releases an entrance animation the first time its element is seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealGate {
    revealed: bool,
}

impl RevealGate {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only on the first visible report.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }
}
