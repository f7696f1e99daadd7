//! Arrangement - WASM Module
//!
//! This module positions a batch of visual items in 3D space according to
//! one of four named arrangements and animates eased transitions between
//! them. It is compiled to WebAssembly and exposes a JavaScript-friendly API
//! via wasm-bindgen; the host's render loop calls `advance` every frame and
//! reads positions back for drawing.
//!
//! # Architecture
//!
//! - `layout`: Pure target-position generators (table, sphere, helix, grid)
//! - `animation`: Easing curves, per-item transitions and their controller
//! - `scene`: Layout engine, live position buffer and the `Scene` context
//! - `config`: Serde-backed configuration with stock defaults

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
pub mod error;
pub mod layout;
pub mod scene;

pub use config::SceneConfig;
pub use error::LayoutError;
pub use layout::Arrangement;
pub use scene::{ItemPositions, Scene};

use glam::Vec3;

/// Initialize the WASM module: panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (e.g. module re-instantiation) already has a logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn reject(err: LayoutError) -> JsError {
    log::warn!("rejected: {err}");
    JsError::from(err)
}

fn flatten(positions: &[Vec3]) -> Vec<f32> {
    positions.iter().flat_map(|p| p.to_array()).collect()
}

/// Main entry point for the arrangement scene.
///
/// This struct wraps the internal [`Scene`] and provides the public API
/// exposed to JavaScript.
#[wasm_bindgen]
pub struct ArrangementSceneWasm {
    scene: Scene,
}

#[wasm_bindgen]
impl ArrangementSceneWasm {
    /// Create a scene with the stock configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from a (possibly partial) config object.
    ///
    /// Fields not present keep their defaults, e.g.
    /// `{ transition: { duration: 1000 }, initial_arrangement: "sphere" }`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<ArrangementSceneWasm, JsError> {
        let config: SceneConfig = if config.is_undefined() || config.is_null() {
            SceneConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| reject(LayoutError::ConfigDecode(e.to_string())))?
        };
        let scene = Scene::new(config).map_err(reject)?;
        Ok(Self { scene })
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replace the item batch with `count` scattered items.
    ///
    /// Throws if `count` is negative, fractional or not finite.
    pub fn load(&mut self, count: f64) -> Result<(), JsError> {
        self.scene.load_count(count).map_err(reject)
    }

    /// Replace the item batch with items starting at the given positions.
    ///
    /// The positions array should be [x0, y0, z0, x1, y1, z1, ...].
    #[wasm_bindgen(js_name = loadWithPositions)]
    pub fn load_with_positions(&mut self, positions: &[f32]) -> Result<(), JsError> {
        let positions: Vec<Vec3> = ItemPositions::from_interleaved(positions)
            .map_err(reject)?
            .iter()
            .collect();
        self.scene.load_with_positions(&positions).map_err(reject)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Move items into the named arrangement ("table", "sphere", "helix",
    /// "grid"), cancelling any running transition.
    ///
    /// Returns the number of items set in motion.
    #[wasm_bindgen(js_name = requestArrangement)]
    pub fn request_arrangement(&mut self, name: &str, duration: Option<f64>) -> Result<u32, JsError> {
        self.scene
            .request_arrangement_by_name(name, duration)
            .map(|n| n as u32)
            .map_err(reject)
    }

    /// Step the animation by `dt` time units. Call once per frame.
    ///
    /// Returns the number of items still moving.
    pub fn advance(&mut self, dt: f64) -> Result<u32, JsError> {
        self.scene.advance(dt).map(|n| n as u32).map_err(reject)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of items in the batch.
    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> u32 {
        self.scene.item_count() as u32
    }

    /// Whether any item is still moving.
    #[wasm_bindgen(js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.scene.is_animating()
    }

    /// Number of in-flight transitions.
    #[wasm_bindgen(js_name = activeTransitionCount)]
    pub fn active_transition_count(&self) -> u32 {
        self.scene.active_transition_count() as u32
    }

    /// Name of the arrangement most recently requested, if any.
    #[wasm_bindgen(js_name = currentArrangement)]
    pub fn current_arrangement(&self) -> Option<String> {
        self.scene.current_arrangement().map(|a| a.to_string())
    }

    /// Get one item's live position as [x, y, z].
    #[wasm_bindgen(js_name = getItemPosition)]
    pub fn get_item_position(&self, index: u32) -> Option<Vec<f32>> {
        self.scene.positions().get(index as usize).map(|p| p.to_array().to_vec())
    }

    /// Copy all live positions as [x0, y0, z0, x1, ...].
    #[wasm_bindgen(js_name = getPositions)]
    pub fn get_positions(&self) -> Float32Array {
        Float32Array::from(&self.scene.positions().to_interleaved()[..])
    }

    /// Get an arrangement's target positions as [x0, y0, z0, x1, ...].
    ///
    /// Table and grid may hold fewer entries than there are items.
    #[wasm_bindgen(js_name = getTargets)]
    pub fn get_targets(&self, name: &str) -> Result<Float32Array, JsError> {
        let arrangement: Arrangement = name.parse().map_err(reject)?;
        Ok(Float32Array::from(&flatten(self.scene.targets(arrangement))[..]))
    }

    /// Get the bounding box of all items.
    ///
    /// Returns [min_x, min_y, min_z, max_x, max_y, max_z], or None if empty.
    #[wasm_bindgen(js_name = getBounds)]
    pub fn get_bounds(&self) -> Option<Vec<f32>> {
        self.scene
            .positions()
            .bounds()
            .map(|(min, max)| flatten(&[min, max]))
    }

    // =========================================================================
    // Position Buffer Access (Zero-Copy)
    // =========================================================================

    /// Get a zero-copy view of X positions.
    ///
    /// # Safety
    ///
    /// The returned view is invalidated if any Rust allocation occurs.
    /// Use immediately for upload, do not store.
    #[wasm_bindgen(js_name = getPositionsXView)]
    pub fn get_positions_x_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.positions().positions_x()) }
    }

    /// Get a zero-copy view of Y positions.
    ///
    /// # Safety
    ///
    /// The returned view is invalidated if any Rust allocation occurs.
    /// Use immediately for upload, do not store.
    #[wasm_bindgen(js_name = getPositionsYView)]
    pub fn get_positions_y_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.positions().positions_y()) }
    }

    /// Get a zero-copy view of Z positions.
    ///
    /// # Safety
    ///
    /// The returned view is invalidated if any Rust allocation occurs.
    /// Use immediately for upload, do not store.
    #[wasm_bindgen(js_name = getPositionsZView)]
    pub fn get_positions_z_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.positions().positions_z()) }
    }
}

impl Default for ArrangementSceneWasm {
    fn default() -> Self {
        Self {
            scene: Scene::default(),
        }
    }
}
