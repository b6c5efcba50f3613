use crate::config::CounterTiming;
use crate::viewport::use_in_view;
use gloo_timers::callback::Interval;
use log::debug;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    /// Waiting for the element to become visible.
    Idle,
    Running,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterState {
    current: u64,
    target: u64,
    step: u64,
    started: bool,
}

impl CounterState {
    pub fn new(target: u64, steps: u32) -> Self {
        let steps = u64::from(steps.max(1));
        Self {
            current: 0,
            target,
            step: target.div_ceil(steps).max(1),
            started: false,
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn phase(&self) -> CounterPhase {
        if !self.started {
            CounterPhase::Idle
        } else if self.current >= self.target {
            CounterPhase::Finished
        } else {
            CounterPhase::Running
        }
    }

    /// Starts the ramp. Only the first call has any effect.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Advances one step, snapping to the target instead of passing it.
    pub fn tick(&mut self) -> bool {
        if self.phase() != CounterPhase::Running {
            return false;
        }
        self.current = self.current.saturating_add(self.step).min(self.target);
        true
    }
}

pub enum CounterAction {
    Start,
    Tick,
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            CounterAction::Start => next.start(),
            CounterAction::Tick => next.tick(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Largest target that survives the round trip through a JS number.
pub const MAX_TARGET: u64 = (1 << 53) - 1;

/// Negative targets display as zero; anything past [`MAX_TARGET`] is capped.
pub fn clamp_target(target: i64) -> u64 {
    u64::try_from(target).unwrap_or(0).min(MAX_TARGET)
}

/// Formats with the browser's thousands grouping.
#[cfg(target_arch = "wasm32")]
pub fn format_count(value: u64) -> String {
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string());
    js_sys::Number::from(value as f64)
        .to_locale_string(&locale)
        .into()
}

/// Formats with `en-US` thousands grouping.
#[cfg(not(target_arch = "wasm32"))]
pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    /// Clamped to `0..=MAX_TARGET`.
    pub target: i64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub timing: CounterTiming,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let state = {
        let target = clamp_target(props.target);
        let steps = props.timing.steps;
        use_reducer_eq(move || CounterState::new(target, steps))
    };

    {
        let dispatcher = state.dispatcher();
        let tick_ms = props.timing.tick_ms;
        let target = state.target();
        use_effect_with_deps(
            move |(in_view, phase): &(bool, CounterPhase)| {
                let mut interval = None;
                match (*in_view, *phase) {
                    (true, CounterPhase::Idle) => {
                        debug!("counter to {} started", target);
                        dispatcher.dispatch(CounterAction::Start);
                    }
                    (_, CounterPhase::Running) => {
                        interval = Some(Interval::new(tick_ms, move || {
                            dispatcher.dispatch(CounterAction::Tick);
                        }));
                    }
                    (_, CounterPhase::Finished) => debug!("counter reached {}", target),
                    (false, CounterPhase::Idle) => {}
                }
                // Reaching Finished re-runs this effect, which drops the interval.
                move || drop(interval)
            },
            (in_view, state.phase()),
        );
    }

    html! {
        <span ref={node} class="counter">
            { format_count(state.current()) }{ props.suffix.clone() }
        </span>
    }
}
