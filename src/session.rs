//! User-facing session: submit, replay and control one sort at a time.
//!
//! [`Visualizer`] owns the host binding and everything created through it.
//! A submit parses the input, lays the elements out on the surface, and
//! hands a fresh [`PlaybackController`] the step sequence. The host drives
//! it by calling [`Visualizer::tick`] once per frame.

use std::time::Duration;

use glam::Vec3;

use crate::binding::{BindingError, ElementId, VisualBinding};
use crate::error::SortVizError;
use crate::input::{parse_values, KeyAction};
use crate::layout::SlotLayout;
use crate::options::Options;
use crate::playback::{PlaybackController, PlaybackSettings, PlaybackState};
use crate::sort::{Algorithm, Arrangement, ArraySlot, StepSequence};

/// A sorting visualization bound to one host.
#[derive(Debug)]
pub struct Visualizer<B: VisualBinding> {
    binding: B,
    options: Options,
    origin: Vec3,
    algorithm: Algorithm,
    /// Last submitted input, kept for replay.
    values: Option<Vec<i64>>,
    elements: Vec<ElementId>,
    labels: Vec<ElementId>,
    controller: Option<PlaybackController>,
}

impl<B: VisualBinding> Visualizer<B> {
    /// Session over `binding` with surface origin at the world origin.
    #[must_use]
    pub fn new(binding: B, options: Options) -> Self {
        let algorithm = options.playback.algorithm;
        Self {
            binding,
            options,
            origin: Vec3::ZERO,
            algorithm,
            values: None,
            elements: Vec::new(),
            labels: Vec::new(),
            controller: None,
        }
    }

    /// The host binding.
    #[must_use]
    pub fn binding(&self) -> &B {
        &self.binding
    }

    /// Mutable access to the host binding.
    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Algorithm used by the next submit or replay.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Choose the algorithm for the next submit or replay. A running sort
    /// keeps its own.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        log::info!("algorithm set to {}", algorithm.name());
        self.algorithm = algorithm;
    }

    /// Move the row to a new surface origin, effective from the next
    /// submit or replay.
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// Parse comma-separated `input` and start sorting it.
    ///
    /// Parse failures are also shown through the status text.
    pub fn submit(&mut self, input: &str) -> Result<(), SortVizError> {
        self.ensure_inactive()?;
        let values = match parse_values(input) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("rejected input: {e}");
                self.binding.set_status(&e.to_string())?;
                return Err(e);
            }
        };
        self.submit_values(&values)
    }

    /// Start sorting `values`, replacing any finished session.
    pub fn submit_values(
        &mut self,
        values: &[i64],
    ) -> Result<(), SortVizError> {
        self.ensure_inactive()?;
        if values.is_empty() {
            return Err(SortVizError::InvalidInput(
                "no values given".to_owned(),
            ));
        }
        self.values = Some(values.to_vec());
        self.launch(values)
    }

    /// Rebuild the last input and sort it again.
    pub fn replay(&mut self) -> Result<(), SortVizError> {
        self.ensure_inactive()?;
        let Some(values) = self.values.clone() else {
            return Err(SortVizError::InvalidTransition {
                from: self.state(),
                action: "replay",
            });
        };
        self.launch(&values)
    }

    /// Cancel whatever is running, then replay.
    pub fn restart(&mut self) -> Result<(), SortVizError> {
        self.cancel()?;
        self.replay()
    }

    /// Pause the running sort.
    pub fn pause(&mut self) -> Result<(), SortVizError> {
        self.controller_mut("pause")?.pause()
    }

    /// Resume a paused sort.
    pub fn resume(&mut self) -> Result<(), SortVizError> {
        self.controller_mut("resume")?.resume()
    }

    /// Pause if running, resume if paused.
    pub fn toggle_pause(&mut self) -> Result<(), SortVizError> {
        match self.state() {
            PlaybackState::Paused => self.resume(),
            _ => self.pause(),
        }
    }

    /// Stop the sort where it stands. Does nothing unless a sort is
    /// running or paused.
    pub fn cancel(&mut self) -> Result<(), SortVizError> {
        let Some(controller) = self.controller.as_mut() else {
            return Ok(());
        };
        if !controller.state().is_active() {
            return Ok(());
        }
        controller.cancel();
        self.binding
            .set_status(PlaybackState::Cancelled.label())
            .map_err(SortVizError::from)
    }

    /// Advance the active sort by `elapsed`.
    ///
    /// A failure cancels the session and the status text says so.
    pub fn tick(
        &mut self,
        elapsed: Duration,
    ) -> Result<PlaybackState, SortVizError> {
        let Some(controller) = self.controller.as_mut() else {
            return Ok(PlaybackState::Idle);
        };
        let result = controller.tick(elapsed, &mut self.binding);
        if result.is_err() {
            if let Err(e) =
                self.binding.set_status(PlaybackState::Cancelled.label())
            {
                log::warn!("could not report cancellation: {e}");
            }
        }
        result
    }

    /// Run the action bound to `key`, if any.
    pub fn handle_key(
        &mut self,
        key: &str,
    ) -> Result<Option<KeyAction>, SortVizError> {
        let Some(action) = self.options.keybindings.lookup(key) else {
            return Ok(None);
        };
        log::debug!("key {key} -> {action:?}");
        action.execute(self)?;
        Ok(Some(action))
    }

    /// State of the current session, `Idle` before the first submit.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.controller
            .as_ref()
            .map_or(PlaybackState::Idle, PlaybackController::state)
    }

    /// Logical arrangement of the current session.
    #[must_use]
    pub fn arrangement(&self) -> Option<&Arrangement> {
        self.controller.as_ref().map(PlaybackController::arrangement)
    }

    /// The current session's controller.
    #[must_use]
    pub fn controller(&self) -> Option<&PlaybackController> {
        self.controller.as_ref()
    }

    fn ensure_inactive(&self) -> Result<(), SortVizError> {
        if self.state().is_active() {
            return Err(SortVizError::AlreadyRunning);
        }
        Ok(())
    }

    fn controller_mut(
        &mut self,
        action: &'static str,
    ) -> Result<&mut PlaybackController, SortVizError> {
        self.controller
            .as_mut()
            .ok_or(SortVizError::InvalidTransition {
                from: PlaybackState::Idle,
                action,
            })
    }

    /// Tear down the previous session and start a new one over `values`.
    fn launch(&mut self, values: &[i64]) -> Result<(), SortVizError> {
        self.clear_elements()?;
        let layout =
            SlotLayout::new(self.origin, values.len(), &self.options.layout);
        let colors = &self.options.colors;

        let mut slots = Vec::with_capacity(values.len());
        for (slot, &value) in values.iter().enumerate() {
            let element = self.binding.create_element(value, slot)?;
            self.elements.push(element);
            self.binding
                .set_position(element, layout.slot_position(slot))?;
            self.binding.set_color(element, colors.value_idle)?;
            slots.push(ArraySlot::new(value, element));
        }
        if self.options.playback.show_index_labels {
            for slot in 0..values.len() {
                let label = self.binding.create_label(slot)?;
                self.labels.push(label);
                self.binding
                    .set_position(label, layout.label_position(slot))?;
                self.binding.set_color(label, colors.index_idle)?;
            }
        }

        let sequence = StepSequence::new(self.algorithm, values);
        let mut controller = PlaybackController::new(
            PlaybackSettings::from_options(&self.options),
            layout,
        )
        .with_labels(self.labels.clone());
        controller.start(sequence.iter(), Arrangement::new(slots))?;
        log::info!(
            "sorting {} values with {}",
            values.len(),
            self.algorithm.name()
        );
        self.controller = Some(controller);
        Ok(())
    }

    /// Destroy every element of the previous session.
    ///
    /// Elements the host already dropped are skipped. Elements that fail
    /// to destroy stay tracked so the next launch retries them; the first
    /// such failure is returned once every id has been tried.
    fn clear_elements(&mut self) -> Result<(), SortVizError> {
        self.controller = None;
        let mut first_error = None;
        let mut kept = Vec::new();
        for id in self.elements.drain(..).chain(self.labels.drain(..)) {
            match self.binding.destroy_element(id) {
                Ok(()) => {}
                Err(BindingError::MissingElement(_)) => {
                    log::warn!("element {id} was already destroyed");
                }
                Err(e) => {
                    log::error!("failed to destroy element {id}: {e}");
                    kept.push(id);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        self.elements = kept;
        first_error.map_or(Ok(()), |e| Err(e.into()))
    }
}

// ── KeyAction execution ──

impl KeyAction {
    /// Execute this action on the given visualizer.
    pub fn execute<B: VisualBinding>(
        self,
        visualizer: &mut Visualizer<B>,
    ) -> Result<(), SortVizError> {
        match self {
            Self::TogglePause => visualizer.toggle_pause(),
            Self::Pause => visualizer.pause(),
            Self::Resume => visualizer.resume(),
            Self::Replay => visualizer.replay(),
            Self::Restart => visualizer.restart(),
            Self::Cancel => visualizer.cancel(),
            Self::CycleAlgorithm => {
                visualizer.set_algorithm(visualizer.algorithm().next());
                Ok(())
            }
        }
    }
}
