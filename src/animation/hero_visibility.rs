use crate::config::HeroTiming;
use crate::viewport::{watch_width, BrowserViewport, Viewport};
use gloo_timers::callback::Timeout;
use log::debug;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroPhase {
    /// Wide viewport, text pinned visible.
    Wide,
    NarrowShown,
    NarrowHidden,
}

impl HeroPhase {
    pub fn is_narrow(self) -> bool {
        !matches!(self, HeroPhase::Wide)
    }

    pub fn is_text_visible(self) -> bool {
        !matches!(self, HeroPhase::NarrowHidden)
    }
}

/// How long a phase lasts before the cycle moves on, and where to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dwell {
    pub after_ms: u32,
    pub next: HeroPhase,
}

pub fn dwell_for(phase: HeroPhase, timing: &HeroTiming) -> Option<Dwell> {
    match phase {
        HeroPhase::Wide => None,
        HeroPhase::NarrowShown => Some(Dwell {
            after_ms: timing.shown_ms,
            next: HeroPhase::NarrowHidden,
        }),
        HeroPhase::NarrowHidden => Some(Dwell {
            after_ms: timing.hidden_ms,
            next: HeroPhase::NarrowShown,
        }),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroVisibility {
    phase: HeroPhase,
    /// Bumped on every phase entry so a pending dwell is re-armed even when
    /// a resize round-trip lands back on the same phase.
    epoch: u32,
    timing: HeroTiming,
}

impl HeroVisibility {
    /// An unknown width starts wide.
    pub fn new(width: Option<f64>, timing: HeroTiming) -> Self {
        let phase = match width {
            Some(w) if w < timing.breakpoint_px => HeroPhase::NarrowShown,
            _ => HeroPhase::Wide,
        };
        Self {
            phase,
            epoch: 0,
            timing,
        }
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn is_narrow(&self) -> bool {
        self.phase.is_narrow()
    }

    pub fn is_text_visible(&self) -> bool {
        self.phase.is_text_visible()
    }

    pub fn dwell(&self) -> Option<Dwell> {
        dwell_for(self.phase, &self.timing)
    }

    fn enter(&mut self, phase: HeroPhase) {
        debug!("hero {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Applies a width sample. Staying on the same side of the breakpoint
    /// leaves the cycle untouched.
    pub fn observe_width(&mut self, width: f64) -> bool {
        let narrow = width < self.timing.breakpoint_px;
        match (self.phase.is_narrow(), narrow) {
            (false, true) => self.enter(HeroPhase::NarrowShown),
            (true, false) => self.enter(HeroPhase::Wide),
            _ => return false,
        }
        true
    }

    pub fn dwell_elapsed(&mut self) -> bool {
        match self.dwell() {
            Some(dwell) => {
                self.enter(dwell.next);
                true
            }
            None => false,
        }
    }

    pub fn text_opacity(&self) -> f64 {
        if self.is_text_visible() {
            1.0
        } else {
            0.0
        }
    }

    pub fn cta_offset_px(&self) -> f64 {
        if self.is_text_visible() {
            0.0
        } else {
            self.timing.cta_offset_px
        }
    }

    pub fn text_style(&self) -> String {
        format!(
            "opacity: {}; transition: opacity {}s ease-in-out;",
            self.text_opacity(),
            self.timing.transition_secs
        )
    }

    pub fn cta_style(&self) -> String {
        format!(
            "transform: translateY({}px); transition: transform {}s ease-in-out;",
            self.cta_offset_px(),
            self.timing.transition_secs
        )
    }
}

pub enum HeroAction {
    Resize(f64),
    DwellElapsed,
}

impl Reducible for HeroVisibility {
    type Action = HeroAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            HeroAction::Resize(width) => next.observe_width(width),
            HeroAction::DwellElapsed => next.dwell_elapsed(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Drives [`HeroVisibility`] from the browser: width on mount and resize, and
/// one dwell timeout armed per phase entry.
#[hook]
pub fn use_hero_visibility(timing: HeroTiming) -> UseReducerHandle<HeroVisibility> {
    let state = use_reducer_eq(move || HeroVisibility::new(BrowserViewport.width(), timing));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = watch_width(
                    &BrowserViewport,
                    Callback::from(move |width| dispatcher.dispatch(HeroAction::Resize(width))),
                );
                move || drop(listener)
            },
            (),
        );
    }

    {
        let dispatcher = state.dispatcher();
        let dwell = state.dwell();
        use_effect_with_deps(
            move |_| {
                let timeout = dwell.map(|dwell| {
                    Timeout::new(dwell.after_ms, move || {
                        dispatcher.dispatch(HeroAction::DwellElapsed);
                    })
                });
                move || drop(timeout)
            },
            state.epoch(),
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::FakeViewport;
    use std::cell::RefCell;

    /// Runs the dwell table against a simulated millisecond clock, the same
    /// way the hook re-arms one timeout per phase entry.
    struct SimulatedHero {
        state: HeroVisibility,
        armed_epoch: u32,
        remaining_ms: Option<u32>,
    }

    impl SimulatedHero {
        fn new(state: HeroVisibility) -> Self {
            let mut sim = Self {
                armed_epoch: state.epoch(),
                remaining_ms: None,
                state,
            };
            sim.arm();
            sim
        }

        fn arm(&mut self) {
            self.armed_epoch = self.state.epoch();
            self.remaining_ms = self.state.dwell().map(|d| d.after_ms);
        }

        fn resize(&mut self, width: f64) {
            self.state.observe_width(width);
            if self.state.epoch() != self.armed_epoch {
                self.arm();
            }
        }

        fn advance(&mut self, mut ms: u32) {
            while let Some(remaining) = self.remaining_ms {
                if ms < remaining {
                    self.remaining_ms = Some(remaining - ms);
                    return;
                }
                ms -= remaining;
                self.state.dwell_elapsed();
                self.arm();
            }
        }
    }

    fn narrow() -> HeroVisibility {
        HeroVisibility::new(Some(375.0), HeroTiming::default())
    }

    #[test]
    fn initial_phase_follows_width() {
        let timing = HeroTiming::default();
        assert_eq!(HeroVisibility::new(Some(1280.0), timing).phase(), HeroPhase::Wide);
        assert_eq!(HeroVisibility::new(Some(640.0), timing).phase(), HeroPhase::Wide);
        assert_eq!(HeroVisibility::new(Some(639.0), timing).phase(), HeroPhase::NarrowShown);
        assert_eq!(HeroVisibility::new(None, timing).phase(), HeroPhase::Wide);
    }

    #[test]
    fn dwell_table() {
        let timing = HeroTiming::default();
        assert_eq!(dwell_for(HeroPhase::Wide, &timing), None);
        assert_eq!(
            dwell_for(HeroPhase::NarrowShown, &timing),
            Some(Dwell {
                after_ms: 8000,
                next: HeroPhase::NarrowHidden
            })
        );
        assert_eq!(
            dwell_for(HeroPhase::NarrowHidden, &timing),
            Some(Dwell {
                after_ms: 5000,
                next: HeroPhase::NarrowShown
            })
        );
    }

    #[test]
    fn wide_never_hides() {
        let mut sim = SimulatedHero::new(HeroVisibility::new(Some(1024.0), HeroTiming::default()));
        assert_eq!(sim.remaining_ms, None);
        for _ in 0..20 {
            sim.advance(7_000);
            assert!(sim.state.is_text_visible());
            assert_eq!(sim.state.phase(), HeroPhase::Wide);
        }
        assert!(!sim.state.clone().dwell_elapsed());
    }

    #[test]
    fn narrow_cycles_8s_shown_5s_hidden() {
        let mut sim = SimulatedHero::new(narrow());
        assert_eq!(sim.state.phase(), HeroPhase::NarrowShown);

        for _ in 0..3 {
            sim.advance(7_999);
            assert_eq!(sim.state.phase(), HeroPhase::NarrowShown);
            sim.advance(1);
            assert_eq!(sim.state.phase(), HeroPhase::NarrowHidden);
            assert!(!sim.state.is_text_visible());

            sim.advance(4_999);
            assert_eq!(sim.state.phase(), HeroPhase::NarrowHidden);
            sim.advance(1);
            assert_eq!(sim.state.phase(), HeroPhase::NarrowShown);
        }
    }

    #[test]
    fn long_jump_lands_in_correct_phase() {
        let mut sim = SimulatedHero::new(narrow());
        // two full cycles plus 9s: into the hidden part of the third
        sim.advance(2 * 13_000 + 9_000);
        assert_eq!(sim.state.phase(), HeroPhase::NarrowHidden);
        assert_eq!(sim.remaining_ms, Some(4_000));
    }

    #[test]
    fn widening_mid_cycle_pins_text_and_suspends_timer() {
        let mut sim = SimulatedHero::new(narrow());
        sim.advance(10_000);
        assert_eq!(sim.state.phase(), HeroPhase::NarrowHidden);

        sim.resize(900.0);
        assert_eq!(sim.state.phase(), HeroPhase::Wide);
        assert!(sim.state.is_text_visible());
        assert_eq!(sim.remaining_ms, None);

        sim.advance(60_000);
        assert_eq!(sim.state.phase(), HeroPhase::Wide);

        sim.resize(400.0);
        assert_eq!(sim.state.phase(), HeroPhase::NarrowShown);
        assert_eq!(sim.remaining_ms, Some(8_000));
        sim.advance(8_000);
        assert_eq!(sim.state.phase(), HeroPhase::NarrowHidden);
    }

    #[test]
    fn resize_within_narrow_keeps_running_dwell() {
        let mut sim = SimulatedHero::new(narrow());
        sim.advance(6_000);
        sim.resize(500.0);
        sim.resize(320.0);
        assert_eq!(sim.remaining_ms, Some(2_000));
        sim.advance(2_000);
        assert_eq!(sim.state.phase(), HeroPhase::NarrowHidden);
    }

    #[test]
    fn derived_outputs() {
        let mut state = narrow();
        assert_eq!(state.text_opacity(), 1.0);
        assert_eq!(state.cta_offset_px(), 0.0);

        state.dwell_elapsed();
        assert_eq!(state.text_opacity(), 0.0);
        assert_eq!(state.cta_offset_px(), 270.0);
        assert_eq!(
            state.cta_style(),
            "transform: translateY(270px); transition: transform 0.5s ease-in-out;"
        );
        assert_eq!(state.text_style(), "opacity: 0; transition: opacity 0.5s ease-in-out;");
    }

    #[test]
    fn custom_timing_is_honoured() {
        let timing = HeroTiming {
            breakpoint_px: 768.0,
            shown_ms: 3_000,
            hidden_ms: 1_000,
            cta_offset_px: 120.0,
            transition_secs: 0.25,
        };
        let mut sim = SimulatedHero::new(HeroVisibility::new(Some(700.0), timing));
        sim.advance(3_000);
        assert_eq!(sim.state.cta_offset_px(), 120.0);
        sim.advance(1_000);
        assert!(sim.state.is_text_visible());
    }

    #[test]
    fn reducer_driven_by_fake_viewport() {
        let viewport = FakeViewport::with_width(1200.0);
        let state = Rc::new(RefCell::new(Rc::new(HeroVisibility::new(
            viewport.width(),
            HeroTiming::default(),
        ))));

        let subscription = {
            let state = state.clone();
            watch_width(
                &viewport,
                Callback::from(move |width| {
                    let current = state.borrow().clone();
                    *state.borrow_mut() = current.reduce(HeroAction::Resize(width));
                }),
            )
        };
        assert_eq!(state.borrow().phase(), HeroPhase::Wide);

        viewport.resize(360.0);
        assert_eq!(state.borrow().phase(), HeroPhase::NarrowShown);
        let epoch = state.borrow().epoch();

        viewport.resize(380.0);
        assert_eq!(state.borrow().epoch(), epoch);

        let current = state.borrow().clone();
        *state.borrow_mut() = current.reduce(HeroAction::DwellElapsed);
        assert_eq!(state.borrow().phase(), HeroPhase::NarrowHidden);

        viewport.resize(1000.0);
        assert_eq!(state.borrow().phase(), HeroPhase::Wide);

        drop(subscription);
        viewport.resize(300.0);
        assert_eq!(state.borrow().phase(), HeroPhase::Wide);
    }
}
