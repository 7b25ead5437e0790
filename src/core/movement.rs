use super::config::MovementSettings;
use super::location::Coordinate;
use rand::rngs::StdRng;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

/// Periodic callback source. The browser implementation wraps
/// `setInterval`/`clearInterval`; tests drive ticks by hand.
pub trait IntervalTimer {
    type Handle;

    /// Schedule `tick` every `period_ms`. `None` if the platform refused.
    fn set_interval(&mut self, period_ms: u32, tick: Box<dyn FnMut()>) -> Option<Self::Handle>;

    fn clear_interval(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementState {
    Idle,
    Running,
}

/// Uniform random walk around a starting point.
pub struct RandomWalk {
    position: Coordinate,
    step_deg: f64,
    rng: StdRng,
}

impl RandomWalk {
    pub fn new(start: Coordinate, step_deg: f64, rng: StdRng) -> Self {
        Self {
            position: start,
            step_deg,
            rng,
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn reset(&mut self, start: Coordinate) {
        self.position = start;
    }

    /// Move each axis by `(u - 0.5) * step_deg`, `u` uniform in `[0, 1)`.
    pub fn step(&mut self) -> Coordinate {
        self.position.lat += (self.rng.gen::<f64>() - 0.5) * self.step_deg;
        self.position.lng += (self.rng.gen::<f64>() - 0.5) * self.step_deg;
        self.position
    }
}

/// Two-state tracking toggle: Idle <-> Running.
///
/// While running, every timer tick advances the walk and hands the new
/// position to the sink supplied at start. Stopping clears the timer, so no
/// further positions are delivered.
pub struct MovementSimulator<T: IntervalTimer> {
    timer: T,
    handle: Option<T::Handle>,
    origin: Coordinate,
    settings: MovementSettings,
    walk: Rc<RefCell<RandomWalk>>,
}

impl<T: IntervalTimer> MovementSimulator<T> {
    pub fn new(timer: T, origin: Coordinate, settings: MovementSettings, rng: StdRng) -> Self {
        Self {
            timer,
            handle: None,
            origin,
            settings,
            walk: Rc::new(RefCell::new(RandomWalk::new(origin, settings.step_deg, rng))),
        }
    }

    pub fn state(&self) -> MovementState {
        if self.handle.is_some() {
            MovementState::Running
        } else {
            MovementState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn position(&self) -> Coordinate {
        self.walk.borrow().position()
    }

    /// Flip between Idle and Running; returns the new state.
    pub fn toggle(&mut self, sink: impl FnMut(Coordinate) + 'static) -> MovementState {
        if self.is_running() {
            self.stop();
        } else {
            self.start(sink);
        }
        self.state()
    }

    /// Begin a fresh walk from the origin. A running walk is restarted.
    pub fn start(&mut self, mut sink: impl FnMut(Coordinate) + 'static) -> MovementState {
        self.stop();
        self.walk.borrow_mut().reset(self.origin);
        let walk = self.walk.clone();
        let tick = Box::new(move || {
            let next = walk.borrow_mut().step();
            sink(next);
        });
        self.handle = self.timer.set_interval(self.settings.period_ms, tick);
        if self.handle.is_none() {
            log::error!("[move] could not schedule movement timer");
        }
        self.state()
    }

    /// Clear the timer. Returns whether a walk was running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                self.timer.clear_interval(handle);
                true
            }
            None => false,
        }
    }
}
