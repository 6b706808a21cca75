/// Vertical offset, in pixels, past which the header turns solid.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderVariant {
    #[default]
    Transparent,
    Solid,
}

impl HeaderVariant {
    pub fn for_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            Self::Solid
        } else {
            Self::Transparent
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Transparent => {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent py-6"
            }
            Self::Solid => {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-bg-dark/80 backdrop-blur-md border-b border-white/5 py-4"
            }
        }
    }
}

/// Tracks the header variant across scroll events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    variant: HeaderVariant,
}

impl ScrollTracker {
    pub fn variant(&self) -> HeaderVariant {
        self.variant
    }

    /// Feeds one scroll offset. Returns the new variant only when the offset
    /// crossed the threshold since the last call.
    pub fn observe(&mut self, offset: f64) -> Option<HeaderVariant> {
        let next = HeaderVariant::for_offset(offset);
        if next == self.variant {
            return None;
        }
        self.variant = next;
        Some(next)
    }
}
