//! Guarded step-function driver.
//!
//! A run repeatedly derives a new state from the previous state/result,
//! checks a stop predicate, and derives a new result, until the predicate
//! accepts, the state source is exhausted, or the stall guard detects a
//! state that failed to advance. The loop is iterative on purpose: step
//! count is never bounded by call-stack depth.

/// Produces the next state from the previous state and result. Both are
/// absent on the first step; the callable synthesizes the starting state.
type DefaultNext<S, R> = fn(Option<&S>, Option<&R>) -> Option<S>;
/// Pre-condition stop guard over a freshly produced state.
type DefaultStop<S> = fn(&S) -> bool;
/// Produces the replacement result from the new state and previous result.
type DefaultStep<S, R> = fn(&S, Option<&R>) -> Option<R>;

/// How a run ended, carrying the final result.
///
/// `Stalled` means the stall guard fired: the stalled step's transform had
/// already run and its output was discarded, so the carried result is the
/// one accumulated through the last advancing step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Halt<R> {
    /// `should_stop` accepted the newly produced state.
    Stopped(Option<R>),
    /// The stall guard detected a state equal to the previous one.
    Stalled(Option<R>),
    /// `next_state` reported that no further state can be produced.
    Exhausted(Option<R>),
}

impl<R> Halt<R> {
    /// The final result, regardless of why the run ended.
    pub fn into_result(self) -> Option<R> {
        match self {
            Halt::Stopped(r) | Halt::Stalled(r) | Halt::Exhausted(r) => r,
        }
    }

    pub fn result(&self) -> Option<&R> {
        match self {
            Halt::Stopped(r) | Halt::Stalled(r) | Halt::Exhausted(r) => r.as_ref(),
        }
    }
}

/// Configuration for one run of the step loop.
///
/// Every parameter has a documented default, so a fully-defaulted driver
/// terminates immediately:
///
/// - `next_state`: `|_, _| None` (no state can be produced)
/// - `should_stop`: `|_| true` (stop on any state)
/// - `transform`: `|_, _| None` (absent result)
/// - seeds: absent; `safety`: on
///
/// ```
/// use step_fold::Driver;
///
/// let out: Option<u32> = Driver::<usize, u32>::new().run();
/// assert_eq!(out, None);
/// ```
///
/// State and result are owned by the run, replaced wholesale on each step,
/// and never shared with other runs. The only externally observable output
/// is the final result.
pub struct Driver<S, R, N = DefaultNext<S, R>, P = DefaultStop<S>, T = DefaultStep<S, R>> {
    next_state: N,
    should_stop: P,
    transform: T,
    seed_state: Option<S>,
    seed_result: Option<R>,
    safety: bool,
}

impl<S, R> Driver<S, R> {
    pub fn new() -> Self {
        Driver {
            next_state: |_, _| None,
            should_stop: |_| true,
            transform: |_, _| None,
            seed_state: None,
            seed_result: None,
            safety: true,
        }
    }
}

impl<S, R> Default for Driver<S, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R, N, P, T> Driver<S, R, N, P, T> {
    /// Set the state source. It receives the previous state and result
    /// (both `None` before the first step) and returns the next state, or
    /// `None` when no further state can be produced.
    pub fn next_state<N2>(self, next_state: N2) -> Driver<S, R, N2, P, T>
    where
        N2: FnMut(Option<&S>, Option<&R>) -> Option<S>,
    {
        Driver {
            next_state,
            should_stop: self.should_stop,
            transform: self.transform,
            seed_state: self.seed_state,
            seed_result: self.seed_result,
            safety: self.safety,
        }
    }

    /// Set the stop predicate. It is checked on each newly produced state
    /// before that state is transformed; a state that fails the check is
    /// never seen by `transform`.
    pub fn should_stop<P2>(self, should_stop: P2) -> Driver<S, R, N, P2, T>
    where
        P2: FnMut(&S) -> bool,
    {
        Driver {
            next_state: self.next_state,
            should_stop,
            transform: self.transform,
            seed_state: self.seed_state,
            seed_result: self.seed_result,
            safety: self.safety,
        }
    }

    /// Set the step transform. It receives the new state and a borrow of
    /// the previous result (`None` before the first producing step) and
    /// returns the replacement result.
    pub fn transform<T2>(self, transform: T2) -> Driver<S, R, N, P, T2>
    where
        T2: FnMut(&S, Option<&R>) -> Option<R>,
    {
        Driver {
            next_state: self.next_state,
            should_stop: self.should_stop,
            transform,
            seed_state: self.seed_state,
            seed_result: self.seed_result,
            safety: self.safety,
        }
    }

    /// Seed the previous-state slot for the first step.
    pub fn seed_state(mut self, state: S) -> Self {
        self.seed_state = Some(state);
        self
    }

    /// Seed the result; returned unchanged if the run performs no step.
    pub fn seed_result(mut self, result: R) -> Self {
        self.seed_result = Some(result);
        self
    }

    /// Enable or disable the stall guard (on by default). With the guard
    /// off, a `next_state` that never advances and a `should_stop` that
    /// never accepts make the run loop forever; termination is then the
    /// caller's responsibility.
    pub fn safety(mut self, enabled: bool) -> Self {
        self.safety = enabled;
        self
    }
}

impl<S, R, N, P, T> Driver<S, R, N, P, T>
where
    N: FnMut(Option<&S>, Option<&R>) -> Option<S>,
    P: FnMut(&S) -> bool,
    T: FnMut(&S, Option<&R>) -> Option<R>,
{
    /// Run to completion and return the final result.
    ///
    /// The stall guard compares successive states with `PartialEq`. For
    /// scalar states (indexes, cursors) this catches exactly the literal
    /// non-advancement it is meant to catch. For compound states it is
    /// broader: a freshly built state that is value-equal to the previous
    /// one also counts as a stall, since moved values carry no identity of
    /// their own. Use [`run_where`](Self::run_where) to supply a narrower
    /// or wider notion of "did not advance".
    pub fn run(self) -> Option<R>
    where
        S: PartialEq,
    {
        self.run_halt().into_result()
    }

    /// Like [`run`](Self::run), also reporting why the run ended.
    pub fn run_halt(self) -> Halt<R>
    where
        S: PartialEq,
    {
        let guarded = self.safety;
        self.run_where(move |previous, next| guarded && previous == next)
    }

    /// Run with an explicit stall strategy. `stalled` receives the
    /// previous and the newly produced state; returning `true` aborts the
    /// run and keeps the previous result. The `safety` flag is ignored
    /// here: the strategy is the guard.
    pub fn run_where<E>(mut self, mut stalled: E) -> Halt<R>
    where
        E: FnMut(&S, &S) -> bool,
    {
        let mut state = self.seed_state;
        let mut result = self.seed_result;
        loop {
            let next = match (self.next_state)(state.as_ref(), result.as_ref()) {
                Some(next) => next,
                None => return Halt::Exhausted(result),
            };
            if (self.should_stop)(&next) {
                return Halt::Stopped(result);
            }
            let stepped = (self.transform)(&next, result.as_ref());
            // The transform has already run for `next` at this point; a
            // stalled step therefore costs one discarded result, matching
            // the check order of the loop this generalizes.
            if state
                .as_ref()
                .map(|previous| stalled(previous, &next))
                .unwrap_or(false)
            {
                return Halt::Stalled(result);
            }
            state = Some(next);
            result = stepped;
        }
    }
}

/// Flat call shape: run a driver assembled from the given parts.
///
/// Seeds are explicit options; `safety` toggles the stall guard. See
/// [`Driver`] for the parameter contracts and defaults.
pub fn run<S, R, N, P, T>(
    next_state: N,
    should_stop: P,
    transform: T,
    seed_result: Option<R>,
    seed_state: Option<S>,
    safety: bool,
) -> Option<R>
where
    S: PartialEq,
    N: FnMut(Option<&S>, Option<&R>) -> Option<S>,
    P: FnMut(&S) -> bool,
    T: FnMut(&S, Option<&R>) -> Option<R>,
{
    Driver {
        next_state,
        should_stop,
        transform,
        seed_state,
        seed_result,
        safety,
    }
    .run()
}
