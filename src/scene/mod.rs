//! Scene state: the item batch, its arrangement targets and the controller
//! moving items between them.
//!
//! [`Scene`] is the context object a host owns. It wires a [`LayoutEngine`]
//! to a [`TransitionController`] and exposes the operations a UI needs:
//! load a batch, request an arrangement, advance one frame, read positions.

mod engine;
mod item;

pub use engine::LayoutEngine;
pub use item::ItemPositions;

use glam::Vec3;

use crate::animation::TransitionController;
use crate::config::SceneConfig;
use crate::error::{self, Result};
use crate::layout::{Arrangement, scatter};

/// Items, arrangement targets and their transitions.
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    engine: LayoutEngine,
    controller: TransitionController,
    /// Number of loads so far; mixed into the scatter seed.
    generation: u64,
    /// Arrangement most recently requested since the last load.
    current: Option<Arrangement>,
}

impl Scene {
    /// Create an empty scene after validating `config`.
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            engine: LayoutEngine::new(config.layout.clone()),
            controller: TransitionController::new(&config.transition),
            config,
            generation: 0,
            current: None,
        })
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replace the item batch with `item_count` scattered items.
    ///
    /// Recomputes every arrangement and, when configured, starts the initial
    /// transition.
    pub fn load(&mut self, item_count: usize) -> Result<()> {
        let item_count = error::check_item_count(item_count)?;
        let positions = scatter(item_count, &self.config.scatter, self.generation);
        self.load_with_positions(&positions)
    }

    /// Load from an untyped count, rejecting negative, fractional and
    /// non-finite values.
    pub fn load_count(&mut self, item_count: f64) -> Result<()> {
        let item_count = error::validate_item_count(item_count)?;
        self.load(item_count)
    }

    /// Replace the item batch with items starting at `positions`.
    pub fn load_with_positions(&mut self, positions: &[Vec3]) -> Result<()> {
        error::check_item_count(positions.len())?;
        self.controller.reset_items(positions)?;
        self.engine.reload(positions.len());
        self.generation = self.generation.wrapping_add(1);
        self.current = None;

        log::info!("scene: loaded {} items (generation {})", positions.len(), self.generation);

        if let Some(initial) = self.config.initial_arrangement {
            self.request_arrangement(initial, None)?;
        }
        Ok(())
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Move every item with a target in `arrangement` toward it, cancelling
    /// whatever was running. Returns the number of transitions started.
    pub fn request_arrangement(&mut self, arrangement: Arrangement, duration: Option<f64>) -> Result<usize> {
        let started = self
            .controller
            .transition_to(self.engine.targets(arrangement), duration)?;
        self.current = Some(arrangement);
        log::debug!("scene: arrangement {arrangement} requested, {started} items moving");
        Ok(started)
    }

    /// [`request_arrangement`](Self::request_arrangement) by name.
    pub fn request_arrangement_by_name(&mut self, name: &str, duration: Option<f64>) -> Result<usize> {
        let arrangement: Arrangement = name.parse()?;
        self.request_arrangement(arrangement, duration)
    }

    /// Step the animation by `dt` time units. Returns the number of items
    /// still moving.
    pub fn advance(&mut self, dt: f64) -> Result<usize> {
        self.controller.advance(dt)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Live item positions.
    pub fn positions(&self) -> &ItemPositions {
        self.controller.positions()
    }

    /// Live position of one item.
    pub fn item_position(&self, index: usize) -> Result<Vec3> {
        self.controller.positions().try_get(index)
    }

    /// Target positions of `arrangement` for the current batch.
    pub fn targets(&self, arrangement: Arrangement) -> &[Vec3] {
        self.engine.targets(arrangement)
    }

    /// Number of items in the batch.
    pub fn item_count(&self) -> usize {
        self.engine.item_count()
    }

    /// Whether any item is still moving.
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Number of in-flight transitions.
    pub fn active_transition_count(&self) -> usize {
        self.controller.active_count()
    }

    /// Arrangement most recently requested since the last load.
    pub fn current_arrangement(&self) -> Option<Arrangement> {
        self.current
    }

    /// The transition controller.
    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    /// Scene configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

impl Default for Scene {
    /// Empty scene with the stock configuration, which needs no validation.
    fn default() -> Self {
        let config = SceneConfig::default();
        Self {
            engine: LayoutEngine::new(config.layout.clone()),
            controller: TransitionController::new(&config.transition),
            config,
            generation: 0,
            current: None,
        }
    }
}
