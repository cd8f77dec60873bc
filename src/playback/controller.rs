//! Step playback against a [`VisualBinding`].
//!
//! The controller owns the step iterator, the logical arrangement and the
//! motion timeline of the current step. Each [`tick`](PlaybackController::tick)
//! spends the elapsed time on whatever the current phase needs: waiting out
//! a delay, advancing in-flight motions, or pulling the next step. Nothing
//! is consumed unless the controller is running, so pausing freezes the
//! visualization exactly where it stands.

use std::time::Duration;

use rustc_hash::FxHashSet;

use super::state::PlaybackState;
use crate::animation::{MotionConfig, MotionPath, MotionTimeline};
use crate::binding::{BindingError, Color, ElementId, VisualBinding};
use crate::error::SortVizError;
use crate::layout::SlotLayout;
use crate::options::{ColorOptions, Options};
use crate::sort::{Arrangement, HighlightState, Step, Steps};

/// Pacing, motion and palette used by a [`PlaybackController`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSettings {
    /// Pause after every visible step.
    pub step_delay: Duration,
    /// Pause between start and the first step.
    pub start_delay: Duration,
    /// Height a hopping element rises above the row.
    pub lift_height: f32,
    /// Travel speed and tolerance.
    pub motion: MotionConfig,
    /// Highlight palette.
    pub colors: ColorOptions,
}

impl PlaybackSettings {
    /// Settings derived from user options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            step_delay: options.playback.step_delay(),
            start_delay: options.playback.start_delay(),
            lift_height: options.motion.lift_height,
            motion: options.motion.config(),
            colors: options.colors.clone(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Waiting(Duration),
    Ready,
    Moving(Step),
}

/// How a step paces the playback once it has been started.
enum Pace {
    Immediate,
    Delay,
    Moving,
}

/// Consumes a step sequence and renders it through a binding.
#[derive(Debug)]
pub struct PlaybackController {
    state: PlaybackState,
    settings: PlaybackSettings,
    layout: SlotLayout,
    labels: Vec<ElementId>,
    steps: Option<Steps>,
    arrangement: Arrangement,
    timeline: MotionTimeline,
    phase: Phase,
    in_flight: Vec<ElementId>,
    sorted: FxHashSet<ElementId>,
    reported_pass: usize,
    steps_applied: usize,
    comparisons: usize,
}

impl PlaybackController {
    /// Idle controller placing elements on `layout`.
    #[must_use]
    pub fn new(settings: PlaybackSettings, layout: SlotLayout) -> Self {
        let timeline = MotionTimeline::new(settings.motion);
        Self {
            state: PlaybackState::Idle,
            settings,
            layout,
            labels: Vec::new(),
            steps: None,
            arrangement: Arrangement::default(),
            timeline,
            phase: Phase::Ready,
            in_flight: Vec::new(),
            sorted: FxHashSet::default(),
            reported_pass: 0,
            steps_applied: 0,
            comparisons: 0,
        }
    }

    /// Index label elements, one per slot, recolored with highlights.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<ElementId>) -> Self {
        self.labels = labels;
        self
    }

    /// Begin playing `steps` over `arrangement`.
    ///
    /// The first step is taken after the start delay.
    pub fn start(
        &mut self,
        steps: Steps,
        arrangement: Arrangement,
    ) -> Result<(), SortVizError> {
        if self.state != PlaybackState::Idle {
            return Err(SortVizError::InvalidTransition {
                from: self.state,
                action: "start",
            });
        }
        log::info!(
            "playback started: {} slots, first step in {:?}",
            arrangement.len(),
            self.settings.start_delay
        );
        self.steps = Some(steps);
        self.arrangement = arrangement;
        self.phase = Phase::Waiting(self.settings.start_delay);
        self.state = PlaybackState::Running;
        Ok(())
    }

    /// Freeze playback, including any motion in flight.
    pub fn pause(&mut self) -> Result<(), SortVizError> {
        self.transition(PlaybackState::Running, PlaybackState::Paused, "pause")
    }

    /// Continue from exactly where [`pause`](Self::pause) left off.
    pub fn resume(&mut self) -> Result<(), SortVizError> {
        self.transition(PlaybackState::Paused, PlaybackState::Running, "resume")
    }

    /// Stop for good. Elements stay where they are; no further binding
    /// calls are made. A no-op once terminal.
    pub fn cancel(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        log::info!(
            "playback cancelled after {} steps ({:?})",
            self.steps_applied,
            self.state
        );
        self.abort();
    }

    /// Whether every step has been applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == PlaybackState::Completed
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Logical arrangement as of the last completed step.
    #[must_use]
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Number of steps taken so far.
    #[must_use]
    pub fn steps_applied(&self) -> usize {
        self.steps_applied
    }

    /// Number of comparisons performed so far.
    #[must_use]
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Last pass reported through the status text.
    #[must_use]
    pub fn pass(&self) -> usize {
        self.reported_pass
    }

    /// Whether elements are currently travelling.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        matches!(self.phase, Phase::Moving(_))
    }

    /// Advance playback by `elapsed`.
    ///
    /// Does nothing unless running. A failing binding call or an invalid
    /// step cancels the session and is returned to the caller.
    pub fn tick<B: VisualBinding + ?Sized>(
        &mut self,
        elapsed: Duration,
        binding: &mut B,
    ) -> Result<PlaybackState, SortVizError> {
        if self.state != PlaybackState::Running {
            return Ok(self.state);
        }
        if let Err(e) = self.advance(elapsed, binding) {
            log::error!(
                "playback failed at step {}: {e}",
                self.steps_applied
            );
            self.abort();
            return Err(e);
        }
        Ok(self.state)
    }

    fn transition(
        &mut self,
        from: PlaybackState,
        to: PlaybackState,
        action: &'static str,
    ) -> Result<(), SortVizError> {
        if self.state != from {
            return Err(SortVizError::InvalidTransition {
                from: self.state,
                action,
            });
        }
        log::debug!("playback {action}: {from:?} -> {to:?}");
        self.state = to;
        Ok(())
    }

    fn abort(&mut self) {
        self.timeline.cancel();
        self.in_flight.clear();
        self.steps = None;
        self.state = PlaybackState::Cancelled;
    }

    fn advance<B: VisualBinding + ?Sized>(
        &mut self,
        elapsed: Duration,
        binding: &mut B,
    ) -> Result<(), SortVizError> {
        let mut budget = elapsed;
        loop {
            match self.phase {
                Phase::Waiting(remaining) => {
                    if budget < remaining {
                        self.phase = Phase::Waiting(remaining - budget);
                        return Ok(());
                    }
                    budget -= remaining;
                    self.phase = Phase::Ready;
                }
                Phase::Moving(step) => {
                    let moving = self.timeline.update(budget.as_secs_f32());
                    for &(element, position) in self.timeline.get_interpolated()
                    {
                        binding.set_position(element, position)?;
                    }
                    if !moving {
                        self.finish_move(&step, binding)?;
                        self.phase = Phase::Waiting(self.settings.step_delay);
                    }
                    return Ok(());
                }
                Phase::Ready => {
                    let Some(step) = self.steps.as_mut().and_then(Iterator::next)
                    else {
                        return self.complete(binding);
                    };
                    self.report_pass(&step, binding)?;
                    self.steps_applied += 1;
                    log::trace!(
                        "step {} ({}): {step:?}",
                        self.steps_applied,
                        step.name()
                    );
                    match self.begin_step(&step, binding)? {
                        Pace::Immediate => {}
                        Pace::Delay => {
                            self.phase =
                                Phase::Waiting(self.settings.step_delay);
                        }
                        Pace::Moving => self.phase = Phase::Moving(step),
                    }
                }
            }
        }
    }

    fn complete<B: VisualBinding + ?Sized>(
        &mut self,
        binding: &mut B,
    ) -> Result<(), SortVizError> {
        binding.set_status(PlaybackState::Completed.label())?;
        self.steps = None;
        self.state = PlaybackState::Completed;
        log::info!(
            "playback completed: {} steps, {} comparisons",
            self.steps_applied,
            self.comparisons
        );
        Ok(())
    }

    fn report_pass<B: VisualBinding + ?Sized>(
        &mut self,
        step: &Step,
        binding: &mut B,
    ) -> Result<(), BindingError> {
        let pass = self.steps.as_ref().map_or(0, Steps::pass);
        // Final marking steps belong to no iteration.
        if pass == self.reported_pass || matches!(step, Step::MarkSorted(_)) {
            return Ok(());
        }
        self.reported_pass = pass;
        log::debug!("iteration {pass}");
        binding.set_status(&format!("Iteration: {pass}"))
    }

    fn begin_step<B: VisualBinding + ?Sized>(
        &mut self,
        step: &Step,
        binding: &mut B,
    ) -> Result<Pace, SortVizError> {
        match *step {
            Step::Compare(i, j) => {
                self.verify_slot(i, binding)?;
                self.verify_slot(j, binding)?;
                self.comparisons += 1;
                Ok(Pace::Immediate)
            }
            Step::Highlight {
                first,
                second,
                state,
            } => {
                self.paint(first, state, binding)?;
                if let Some(second) = second {
                    self.paint(second, state, binding)?;
                }
                Ok(Pace::Delay)
            }
            Step::Swap(i, j) => {
                self.begin_moves(&[(i, j), (j, i)], false, binding)?;
                Ok(Pace::Moving)
            }
            Step::ShiftInsert { from, to, key } => {
                let moving = self.arrangement.slot(from)?;
                if moving.value != key {
                    return Err(SortVizError::InvalidStep(format!(
                        "shift key {key} does not match value {} at slot \
                         {from}",
                        moving.value
                    )));
                }
                self.begin_moves(&shift_moves(from, to), true, binding)?;
                Ok(Pace::Moving)
            }
            Step::MarkSorted(slot) => {
                let element = self.arrangement.element_at(slot)?;
                let _ = self.sorted.insert(element);
                binding.set_color(element, self.settings.colors.sorted)?;
                Ok(Pace::Delay)
            }
        }
    }

    /// Check that the host still shows the value the arrangement expects.
    fn verify_slot<B: VisualBinding + ?Sized>(
        &self,
        slot: usize,
        binding: &B,
    ) -> Result<(), SortVizError> {
        let expected = self.arrangement.slot(slot)?;
        let text = binding.get_text(expected.element)?;
        if text.trim().parse::<i64>().ok() != Some(expected.value) {
            return Err(BindingError::Host(format!(
                "element {} shows '{text}' but slot {slot} holds {}",
                expected.element, expected.value
            ))
            .into());
        }
        Ok(())
    }

    fn paint<B: VisualBinding + ?Sized>(
        &mut self,
        slot: usize,
        state: HighlightState,
        binding: &mut B,
    ) -> Result<(), SortVizError> {
        let element = self.arrangement.element_at(slot)?;
        if state == HighlightState::Sorted {
            let _ = self.sorted.insert(element);
        }
        let color = match state {
            HighlightState::Idle => self.resting_color(element),
            _ => self.settings.colors.value_color(state),
        };
        binding.set_color(element, color)?;
        if let Some(&label) = self.labels.get(slot) {
            binding.set_color(label, self.settings.colors.label_color(state))?;
        }
        Ok(())
    }

    /// Queue one motion per `(from, to)` slot pair.
    ///
    /// Elements heading to a lower index hop over the row; the rest slide
    /// along it unless `hop_all` is set.
    fn begin_moves<B: VisualBinding + ?Sized>(
        &mut self,
        moves: &[(usize, usize)],
        hop_all: bool,
        binding: &mut B,
    ) -> Result<(), SortVizError> {
        self.in_flight.clear();
        for &(from, to) in moves {
            let element = self.arrangement.element_at(from)?;
            let _ = self.arrangement.element_at(to)?;
            let start = binding.get_position(element)?;
            let target = self.layout.slot_position(to);
            let path = if hop_all || to < from {
                MotionPath::hop(start, target, self.settings.lift_height)
            } else {
                MotionPath::slide(target)
            };
            binding.set_color(element, self.settings.colors.value_comparing)?;
            self.timeline.add(element, start, path);
            self.in_flight.push(element);
        }
        log::trace!("{} elements in flight", self.in_flight.len());
        Ok(())
    }

    fn finish_move<B: VisualBinding + ?Sized>(
        &mut self,
        step: &Step,
        binding: &mut B,
    ) -> Result<(), SortVizError> {
        self.arrangement.apply(step)?;
        for element in std::mem::take(&mut self.in_flight) {
            binding.set_color(element, self.resting_color(element))?;
        }
        Ok(())
    }

    fn resting_color(&self, element: ElementId) -> Color {
        if self.sorted.contains(&element) {
            self.settings.colors.sorted
        } else {
            self.settings.colors.value_idle
        }
    }
}

/// Slot moves for relocating `from` to `to` with everything between
/// shifting one slot toward the gap.
fn shift_moves(from: usize, to: usize) -> Vec<(usize, usize)> {
    let mut moves = vec![(from, to)];
    if to < from {
        moves.extend((to..from).map(|k| (k, k + 1)));
    } else {
        moves.extend((from + 1..=to).map(|k| (k, k - 1)));
    }
    moves
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::binding::{BindingCall, MemoryBinding};
    use crate::options::LayoutOptions;
    use crate::sort::{Algorithm, ArraySlot, StepSequence};

    const FRAME: Duration = Duration::from_micros(16_667);
    const MAX_FRAMES: usize = 200_000;

    fn settings() -> PlaybackSettings {
        PlaybackSettings {
            step_delay: Duration::from_millis(50),
            start_delay: Duration::from_millis(100),
            ..PlaybackSettings::default()
        }
    }

    struct Fixture {
        controller: PlaybackController,
        binding: MemoryBinding,
        layout: SlotLayout,
        labels: Vec<ElementId>,
    }

    fn fixture(values: &[i64], algorithm: Algorithm) -> Fixture {
        let layout =
            SlotLayout::new(Vec3::ZERO, values.len(), &LayoutOptions::default());
        let mut binding = MemoryBinding::new();
        let mut slots = Vec::new();
        let mut labels = Vec::new();
        for (slot, &value) in values.iter().enumerate() {
            let id = binding.create_element(value, slot).unwrap();
            binding.set_position(id, layout.slot_position(slot)).unwrap();
            slots.push(ArraySlot::new(value, id));
            labels.push(binding.create_label(slot).unwrap());
        }
        binding.clear_calls();
        let mut controller = PlaybackController::new(settings(), layout)
            .with_labels(labels.clone());
        let steps = StepSequence::new(algorithm, values).iter();
        controller.start(steps, Arrangement::new(slots)).unwrap();
        Fixture {
            controller,
            binding,
            layout,
            labels,
        }
    }

    fn run(f: &mut Fixture) -> PlaybackState {
        let mut state = f.controller.state();
        for _ in 0..MAX_FRAMES {
            state = f.controller.tick(FRAME, &mut f.binding).unwrap();
            if state.is_terminal() {
                break;
            }
        }
        assert!(state.is_terminal(), "playback did not finish");
        state
    }

    fn assert_resting(f: &Fixture) {
        for (slot, entry) in f.controller.arrangement().slots().iter().enumerate()
        {
            let position = f.binding.get_position(entry.element).unwrap();
            assert!(
                position.distance(f.layout.slot_position(slot)) < 1e-3,
                "slot {slot} element at {position}"
            );
        }
    }

    #[test]
    fn bubble_run_sorts_and_settles() {
        let mut f = fixture(&[5, 3, 4, 1, 2], Algorithm::Bubble);
        assert_eq!(run(&mut f), PlaybackState::Completed);
        assert!(f.controller.is_complete());
        assert_eq!(f.controller.arrangement().values(), vec![1, 2, 3, 4, 5]);
        assert_eq!(f.controller.comparisons(), 16);
        assert_eq!(f.binding.status(), "Sorted");
        assert_resting(&f);
        let sorted = settings().colors.sorted;
        for entry in f.controller.arrangement().slots() {
            assert_eq!(f.binding.color(entry.element), Some(sorted));
        }
    }

    #[test]
    fn insertion_run_sorts_and_resets_labels() {
        let mut f = fixture(&[4, 2, 9, 1, 1], Algorithm::Insertion);
        assert_eq!(run(&mut f), PlaybackState::Completed);
        assert_eq!(f.controller.arrangement().values(), vec![1, 1, 2, 4, 9]);
        assert_resting(&f);
        let index_idle = settings().colors.index_idle;
        for &label in &f.labels {
            assert_eq!(f.binding.color(label), Some(index_idle));
        }
    }

    #[test]
    fn nothing_happens_before_start_delay() {
        let mut f = fixture(&[2, 1], Algorithm::Bubble);
        let _ = f
            .controller
            .tick(Duration::from_millis(90), &mut f.binding)
            .unwrap();
        assert!(f.binding.calls().is_empty());
        let _ = f
            .controller
            .tick(Duration::from_millis(20), &mut f.binding)
            .unwrap();
        assert!(!f.binding.calls().is_empty());
    }

    #[test]
    fn reports_iterations_then_sorted() {
        let mut f = fixture(&[3, 2, 1], Algorithm::Bubble);
        let _ = run(&mut f);
        let statuses: Vec<_> = f
            .binding
            .calls()
            .iter()
            .filter_map(|c| match c {
                BindingCall::SetStatus(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(statuses, vec!["Iteration: 1", "Iteration: 2", "Sorted"]);
    }

    #[test]
    fn pause_resume_between_ticks_changes_nothing() {
        let values = [6, 1, 5, 2, 4, 3];
        let mut plain = fixture(&values, Algorithm::Insertion);
        let _ = run(&mut plain);

        let mut paused = fixture(&values, Algorithm::Insertion);
        for _ in 0..MAX_FRAMES {
            paused.controller.pause().unwrap();
            let _ = paused.controller.tick(FRAME, &mut paused.binding).unwrap();
            paused.controller.resume().unwrap();
            let state =
                paused.controller.tick(FRAME, &mut paused.binding).unwrap();
            if state.is_terminal() {
                break;
            }
        }
        assert_eq!(paused.controller.state(), PlaybackState::Completed);
        assert_eq!(plain.binding.calls(), paused.binding.calls());
    }

    #[test]
    fn pause_freezes_motion_in_flight() {
        let mut f = fixture(&[2, 1], Algorithm::Bubble);
        while !f.controller.is_moving() {
            let _ = f.controller.tick(FRAME, &mut f.binding).unwrap();
        }
        let _ = f.controller.tick(FRAME, &mut f.binding).unwrap();
        let element = f.controller.arrangement().slots()[0].element;
        let before = f.binding.get_position(element).unwrap();

        f.controller.pause().unwrap();
        let calls = f.binding.calls().len();
        let _ = f
            .controller
            .tick(Duration::from_secs(5), &mut f.binding)
            .unwrap();
        assert_eq!(f.binding.calls().len(), calls);
        assert_eq!(f.binding.get_position(element).unwrap(), before);

        f.controller.resume().unwrap();
        assert_eq!(run(&mut f), PlaybackState::Completed);
        assert_eq!(f.controller.arrangement().values(), vec![1, 2]);
        assert_resting(&f);
    }

    #[test]
    fn cancel_stops_all_binding_calls() {
        let mut f = fixture(&[4, 3, 2, 1], Algorithm::Bubble);
        for _ in 0..40 {
            let _ = f.controller.tick(FRAME, &mut f.binding).unwrap();
        }
        f.controller.cancel();
        assert_eq!(f.controller.state(), PlaybackState::Cancelled);
        let calls = f.binding.calls().len();
        for _ in 0..100 {
            let state = f.controller.tick(FRAME, &mut f.binding).unwrap();
            assert_eq!(state, PlaybackState::Cancelled);
        }
        assert_eq!(f.binding.calls().len(), calls);
        assert!(f.controller.resume().is_err());
    }

    #[test]
    fn cancel_while_paused() {
        let mut f = fixture(&[2, 1], Algorithm::Bubble);
        f.controller.pause().unwrap();
        f.controller.cancel();
        assert_eq!(f.controller.state(), PlaybackState::Cancelled);
    }

    #[test]
    fn cancel_after_completion_is_a_no_op() {
        let mut f = fixture(&[1, 2], Algorithm::Bubble);
        let _ = run(&mut f);
        f.controller.cancel();
        assert_eq!(f.controller.state(), PlaybackState::Completed);
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let mut f = fixture(&[2, 1], Algorithm::Bubble);
        let err = f
            .controller
            .start(
                StepSequence::new(Algorithm::Bubble, &[1]).iter(),
                Arrangement::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            SortVizError::InvalidTransition {
                from: PlaybackState::Running,
                action: "start"
            }
        ));
        assert!(f.controller.resume().is_err());
        f.controller.pause().unwrap();
        assert!(f.controller.pause().is_err());
    }

    #[test]
    fn binding_failure_cancels_session() {
        let mut f = fixture(&[3, 1, 2], Algorithm::Bubble);
        let victim = f.controller.arrangement().slots()[0].element;
        f.binding.fail_on(Some(victim));
        let err = f
            .controller
            .tick(Duration::from_secs(1), &mut f.binding)
            .unwrap_err();
        assert!(matches!(err, SortVizError::ElementBinding(_)));
        assert_eq!(f.controller.state(), PlaybackState::Cancelled);
        f.binding.fail_on(None);
        let calls = f.binding.calls().len();
        let _ = f.controller.tick(FRAME, &mut f.binding).unwrap();
        assert_eq!(f.binding.calls().len(), calls);
    }

    #[test]
    fn compare_detects_out_of_sync_host() {
        let mut f = fixture(&[3, 1], Algorithm::Bubble);
        let first = f.controller.arrangement().slots()[0].element;
        f.binding.set_text(first, "42").unwrap();
        let mut result = Ok(PlaybackState::Running);
        for _ in 0..MAX_FRAMES {
            result = f.controller.tick(FRAME, &mut f.binding);
            if !matches!(result, Ok(PlaybackState::Running)) {
                break;
            }
        }
        assert!(matches!(result, Err(SortVizError::ElementBinding(_))));
        assert_eq!(f.controller.state(), PlaybackState::Cancelled);
    }

    #[test]
    fn single_value_completes_immediately() {
        let mut f = fixture(&[7], Algorithm::Insertion);
        assert_eq!(run(&mut f), PlaybackState::Completed);
        assert_eq!(f.controller.steps_applied(), 0);
        assert_eq!(f.binding.status(), "Sorted");
    }

    #[test]
    fn disabled_motion_snaps_into_place() {
        let values = [3, 2, 1];
        let layout =
            SlotLayout::new(Vec3::ZERO, values.len(), &LayoutOptions::default());
        let mut binding = MemoryBinding::new();
        let mut slots = Vec::new();
        for (slot, &value) in values.iter().enumerate() {
            let id = binding.create_element(value, slot).unwrap();
            binding.set_position(id, layout.slot_position(slot)).unwrap();
            slots.push(ArraySlot::new(value, id));
        }
        let mut s = settings();
        s.motion.enabled = false;
        let mut controller = PlaybackController::new(s, layout);
        controller
            .start(
                StepSequence::new(Algorithm::Bubble, &values).iter(),
                Arrangement::new(slots),
            )
            .unwrap();
        for _ in 0..MAX_FRAMES {
            if controller.tick(FRAME, &mut binding).unwrap().is_terminal() {
                break;
            }
        }
        assert!(controller.is_complete());
        for (slot, entry) in controller.arrangement().slots().iter().enumerate() {
            assert_eq!(
                binding.get_position(entry.element).unwrap(),
                layout.slot_position(slot)
            );
        }
    }

    #[test]
    fn shift_moves_cover_the_gap() {
        assert_eq!(shift_moves(3, 1), vec![(3, 1), (1, 2), (2, 3)]);
        assert_eq!(shift_moves(0, 2), vec![(0, 2), (1, 0), (2, 1)]);
        assert_eq!(shift_moves(2, 2), vec![(2, 2)]);
    }
}
