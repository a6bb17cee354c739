//! Animation state machines and motion descriptors.
//!
//! Two independent latches drive every entrance effect:
//!
//! - [`MountFlag`] flips once, after a view's first render commits.
//! - [`VisibilityLatch`] follows a section crossing the viewport boundary,
//!   either one-shot or re-armable.
//!
//! [`Motion`] turns a latch value into inline CSS so the browser performs
//! the interpolation.

use std::fmt::Write as _;

// =============================================================================
// Mount Flag
// =============================================================================

/// Lifecycle phase of an animated view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountPhase {
    /// Constructed, first render not yet committed.
    #[default]
    Entering,
    /// First render committed. Terminal.
    Settled,
}

/// One-shot mount flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountFlag {
    phase: MountPhase,
}

impl MountFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MountPhase {
        self.phase
    }

    /// `true` once the first render has committed.
    pub fn is_mounted(&self) -> bool {
        self.phase == MountPhase::Settled
    }

    /// Move to [`MountPhase::Settled`]. Returns whether this call made the
    /// transition; later calls are no-ops.
    pub fn settle(&mut self) -> bool {
        let transitioned = self.phase == MountPhase::Entering;
        self.phase = MountPhase::Settled;
        transitioned
    }
}

// =============================================================================
// Visibility Latch
// =============================================================================

/// State of a scroll-triggered section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LatchState {
    /// Never intersected the viewport.
    #[default]
    NotSeen,
    /// Currently inside the viewport.
    Visible,
    /// Seen at least once with `once` set. Terminal.
    Settled,
    /// Left the viewport; the next crossing replays the transition.
    Rearmed,
}

/// Per-section visibility latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityLatch {
    once: bool,
    state: LatchState,
}

impl VisibilityLatch {
    /// Fire once, then stay shown.
    pub fn once() -> Self {
        Self::new(true)
    }

    /// Replay every time the section re-enters the viewport.
    pub fn repeating() -> Self {
        Self::new(false)
    }

    pub fn new(once: bool) -> Self {
        Self {
            once,
            state: LatchState::NotSeen,
        }
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    /// Whether the section should be at its rest pose.
    pub fn is_shown(&self) -> bool {
        matches!(self.state, LatchState::Visible | LatchState::Settled)
    }

    /// Feed a boundary-crossing signal. Returns whether the state changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let next = match (self.state, intersecting) {
            (LatchState::Settled, _) => LatchState::Settled,
            (LatchState::NotSeen | LatchState::Rearmed, true) => LatchState::Visible,
            (LatchState::Visible, false) if self.once => LatchState::Settled,
            (LatchState::Visible, false) => LatchState::Rearmed,
            (state, _) => state,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

// =============================================================================
// Motion Descriptors
// =============================================================================

/// Animated properties of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in pixels.
    pub translate_y: f64,
    pub scale: f64,
}

impl Pose {
    /// Fully visible, in place, natural size.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn offset(mut self, translate_y: f64) -> Self {
        self.translate_y = translate_y;
        self
    }

    pub const fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    fn write_css(&self, out: &mut String) {
        let _ = write!(
            out,
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.translate_y, self.scale
        );
    }
}

/// Residual displacement treated as "at rest" when sizing spring durations.
const SPRING_TOLERANCE: f64 = 0.01;

/// Easing for springs that settle without overshoot.
const OVERDAMPED_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Easing for springs that overshoot.
const UNDERDAMPED_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

/// How a motion interpolates between poses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Fixed-duration ease-out.
    Tween { duration_ms: u32, delay_ms: u32 },
    /// Unit-mass damped spring.
    Spring {
        tension: f64,
        friction: f64,
        delay_ms: u32,
    },
}

impl Transition {
    pub const fn tween(duration_ms: u32) -> Self {
        Self::Tween {
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn spring(tension: f64, friction: f64) -> Self {
        Self::Spring {
            tension,
            friction,
            delay_ms: 0,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        match self {
            Self::Tween { duration_ms, .. } => Self::Tween {
                duration_ms,
                delay_ms,
            },
            Self::Spring {
                tension, friction, ..
            } => Self::Spring {
                tension,
                friction,
                delay_ms,
            },
        }
    }

    pub fn delay_ms(&self) -> u32 {
        match self {
            Self::Tween { delay_ms, .. } | Self::Spring { delay_ms, .. } => *delay_ms,
        }
    }

    /// Wall-clock length of the interpolation.
    ///
    /// For springs this is the time for the envelope of the displacement to
    /// fall below [`SPRING_TOLERANCE`]:
    ///
    /// - underdamped (`ζ < 1`): decay rate `ζ·ω0 = c / 2`
    /// - critically or overdamped: slow pole `ω0·(ζ − √(ζ² − 1))`
    pub fn duration_ms(&self) -> u32 {
        match *self {
            Self::Tween { duration_ms, .. } => duration_ms,
            Self::Spring {
                tension, friction, ..
            } => {
                if tension <= 0.0 || friction <= 0.0 {
                    return 0;
                }
                let omega = tension.sqrt();
                let zeta = friction / (2.0 * omega);
                let decay = if zeta < 1.0 {
                    zeta * omega
                } else {
                    omega * (zeta - (zeta * zeta - 1.0).sqrt())
                };
                let seconds = (1.0 / SPRING_TOLERANCE).ln() / decay;
                (seconds * 1000.0).round() as u32
            }
        }
    }

    /// CSS timing function approximating the curve.
    pub fn easing(&self) -> &'static str {
        match *self {
            Self::Tween { .. } => "ease-out",
            Self::Spring {
                tension, friction, ..
            } => {
                if friction < 2.0 * tension.max(0.0).sqrt() {
                    UNDERDAMPED_EASING
                } else {
                    OVERDAMPED_EASING
                }
            }
        }
    }
}

/// Entry/rest poses plus the transition between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub entry: Pose,
    pub rest: Pose,
    pub transition: Transition,
}

impl Motion {
    pub const fn new(entry: Pose, transition: Transition) -> Self {
        Self {
            entry,
            rest: Pose::REST,
            transition,
        }
    }

    /// Opacity-only fade in.
    pub const fn fade(transition: Transition) -> Self {
        Self::new(Pose::hidden(), transition)
    }

    /// Fade in while rising from `offset` pixels below.
    pub const fn rise(offset: f64, transition: Transition) -> Self {
        Self::new(Pose::hidden().offset(offset), transition)
    }

    /// Fade in while growing from `scale`.
    pub const fn grow(scale: f64, transition: Transition) -> Self {
        Self::new(Pose::hidden().scaled(scale), transition)
    }

    pub fn pose(&self, shown: bool) -> Pose {
        if shown { self.rest } else { self.entry }
    }

    /// Inline style for the current latch value.
    ///
    /// The transition list is always emitted so the browser interpolates
    /// the entry → rest change.
    pub fn style(&self, shown: bool) -> String {
        let mut css = String::with_capacity(160);
        self.pose(shown).write_css(&mut css);
        let duration = self.transition.duration_ms();
        let easing = self.transition.easing();
        let delay = self.transition.delay_ms();
        let _ = write!(
            css,
            " transition: opacity {duration}ms {easing} {delay}ms, transform {duration}ms {easing} {delay}ms;"
        );
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_flag_flips_once() {
        let mut flag = MountFlag::new();
        assert!(!flag.is_mounted());
        assert_eq!(flag.phase(), MountPhase::Entering);

        assert!(flag.settle());
        assert!(flag.is_mounted());

        assert!(!flag.settle());
        assert!(flag.is_mounted());
        assert_eq!(flag.phase(), MountPhase::Settled);
    }

    #[test]
    fn test_once_latch_stays_shown() {
        let mut latch = VisibilityLatch::once();
        assert!(!latch.is_shown());

        assert!(latch.observe(true));
        assert_eq!(latch.state(), LatchState::Visible);
        assert!(latch.is_shown());

        assert!(latch.observe(false));
        assert_eq!(latch.state(), LatchState::Settled);
        assert!(latch.is_shown());

        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert_eq!(latch.state(), LatchState::Settled);
    }

    #[test]
    fn test_repeating_latch_rearms() {
        let mut latch = VisibilityLatch::repeating();
        latch.observe(true);
        assert!(latch.is_shown());

        latch.observe(false);
        assert_eq!(latch.state(), LatchState::Rearmed);
        assert!(!latch.is_shown());

        latch.observe(true);
        assert_eq!(latch.state(), LatchState::Visible);
        assert!(latch.is_shown());
    }

    #[test]
    fn test_latch_ignores_repeated_signals() {
        let mut latch = VisibilityLatch::repeating();
        assert!(!latch.observe(false));
        assert_eq!(latch.state(), LatchState::NotSeen);
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
    }

    #[test]
    fn test_spring_duration_overdamped() {
        // tension 280 / friction 60: ζ ≈ 1.79, slow pole ≈ 5.10/s
        let ms = Transition::spring(280.0, 60.0).duration_ms();
        assert!((880..=920).contains(&ms), "got {ms}");

        // tension 200 / friction 50: ζ ≈ 1.77, slow pole ≈ 4.38/s
        let ms = Transition::spring(200.0, 50.0).duration_ms();
        assert!((1030..=1070).contains(&ms), "got {ms}");
    }

    #[test]
    fn test_spring_duration_underdamped() {
        // ζ < 1: decay rate is friction / 2 = 13/s
        let ms = Transition::spring(170.0, 26.0).duration_ms();
        assert!((340..=370).contains(&ms), "got {ms}");
        assert_eq!(Transition::spring(170.0, 26.0).easing(), UNDERDAMPED_EASING);
    }

    #[test]
    fn test_spring_duration_degenerate() {
        assert_eq!(Transition::spring(0.0, 10.0).duration_ms(), 0);
        assert_eq!(Transition::spring(100.0, 0.0).duration_ms(), 0);
    }

    #[test]
    fn test_delay_preserved() {
        let t = Transition::spring(200.0, 50.0).delayed(200);
        assert_eq!(t.delay_ms(), 200);
        assert_eq!(Transition::tween(600).delayed(150).duration_ms(), 600);
    }

    #[test]
    fn test_motion_style_entry_and_rest() {
        let motion = Motion::rise(50.0, Transition::tween(600).delayed(200));
        assert_eq!(
            motion.style(false),
            "opacity: 0; transform: translateY(50px) scale(1); \
             transition: opacity 600ms ease-out 200ms, transform 600ms ease-out 200ms;"
        );
        assert!(motion.style(true).starts_with("opacity: 1; transform: translateY(0px) scale(1);"));
    }

    #[test]
    fn test_grow_pose() {
        let motion = Motion::grow(0.8, Transition::tween(300));
        assert_eq!(motion.pose(false).scale, 0.8);
        assert_eq!(motion.pose(false).opacity, 0.0);
        assert_eq!(motion.pose(true), Pose::REST);
    }
}
