//! The scene: owns the shapes and composes the canvas operations.

use crate::compensation::{CompensationManager, CompensationMenuState, Consensus};
use crate::context_menu::MenuAction;
use crate::direction;
use crate::input::Gesture;
use crate::listeners::{net_changes, ListenerRegistry, ShapeEvent};
use crate::model::{CutSide, Point};
use crate::route::{RouteChain, RouteSequencer};
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;
use crate::shapes::{CamShape, ImportedShape};
use crate::spatial::Bounds;
use crate::visibility::VisibilityManager;
use routecanvas_core::{MachineKind, Notify, SceneError, ShapeListener};
use routecanvas_settings::{Config, HitRegion};
use std::sync::Arc;

/// Explicit configuration a scene is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub machine_kind: MachineKind,
    /// Plane origin where export routes start and end.
    pub origin: Point,
    pub start_move_radius: f64,
    pub click_tolerance: f64,
    pub drag_threshold: f64,
    pub hit_region: HitRegion,
    pub show_disabled: bool,
    pub show_path_direction: bool,
    pub show_wp_zero: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SceneConfig {
    fn from(config: &Config) -> Self {
        Self {
            machine_kind: config.machine.kind,
            origin: Point::new(config.plane.axis1_start_end, config.plane.axis2_start_end),
            start_move_radius: config.machine.start_move_radius,
            click_tolerance: config.selection.click_tolerance,
            drag_threshold: config.selection.drag_threshold,
            hit_region: config.selection.hit_region,
            show_disabled: config.view.show_disabled,
            show_path_direction: config.view.show_path_direction,
            show_wp_zero: config.view.show_wp_zero,
        }
    }
}

/// Canvas scene.
///
/// Every mutating operation collects the flips it causes and hands the net
/// changes to the registered listeners after the scene is consistent again.
#[derive(Debug, Clone)]
pub struct Scene {
    store: ShapeStore,
    selection: SelectionManager,
    visibility: VisibilityManager,
    compensation: CompensationManager,
    route: RouteSequencer,
    listeners: ListenerRegistry,
    origin: Point,
    start_move_radius: f64,
    click_tolerance: f64,
    drag_threshold: f64,
    show_path_direction: bool,
    show_wp_zero: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            store: ShapeStore::new(),
            selection: SelectionManager::new(config.hit_region),
            visibility: VisibilityManager::new(config.show_disabled),
            compensation: CompensationManager::new(config.machine_kind),
            route: RouteSequencer::new(),
            listeners: ListenerRegistry::new(),
            origin: config.origin,
            start_move_radius: config.start_move_radius,
            click_tolerance: config.click_tolerance,
            drag_threshold: config.drag_threshold,
            show_path_direction: config.show_path_direction,
            show_wp_zero: config.show_wp_zero,
        }
    }

    // Lifecycle

    /// Replaces every shape with `shapes`, assigning fresh ids in order.
    ///
    /// Listeners of the previous shapes and the export route are dropped.
    pub fn load_shapes(&mut self, shapes: impl IntoIterator<Item = ImportedShape>) -> Vec<u64> {
        self.store.clear();
        self.listeners.clear();
        self.route.reset();

        let mut ids = Vec::new();
        for imported in shapes {
            let id = self.store.generate_id();
            self.store
                .push(CamShape::from_import(id, imported, self.start_move_radius));
            ids.push(id);
        }
        tracing::info!("Loaded {} shapes into the scene", ids.len());
        ids
    }

    /// Drops every shape, listener and the export route.
    pub fn reset(&mut self) {
        self.store.clear();
        self.listeners.clear();
        self.route.reset();
        tracing::info!("Scene reset");
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn shape(&self, id: u64) -> Option<&CamShape> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Rearranges the draw order, see [`ShapeStore::reorder`].
    pub fn reorder(&mut self, ids: &[u64]) -> Result<(), SceneError> {
        self.store.reorder(ids)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn click_tolerance(&self) -> f64 {
        self.click_tolerance
    }

    pub fn drag_threshold(&self) -> f64 {
        self.drag_threshold
    }

    pub fn machine_kind(&self) -> MachineKind {
        self.compensation.machine_kind()
    }

    // Listeners

    /// Registers the listener of shape `id`, replacing any previous one.
    pub fn register_listener(
        &mut self,
        id: u64,
        listener: Arc<dyn ShapeListener>,
    ) -> Result<(), SceneError> {
        if self.store.get(id).is_none() {
            return Err(SceneError::ShapeNotFound { id });
        }
        self.listeners.register(id, listener);
        Ok(())
    }

    pub fn unregister_listener(&mut self, id: u64) -> bool {
        self.listeners.unregister(id)
    }

    fn notify(&self, events: Vec<ShapeEvent>) {
        let events = net_changes(events);
        if !events.is_empty() {
            self.listeners.dispatch(&events);
        }
    }

    // Selection

    pub fn selected_ids(&self) -> Vec<u64> {
        self.selection.selected_ids(&self.store)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.selected_count(&self.store)
    }

    pub fn is_multi_select(&self) -> bool {
        self.selection.is_multi_select()
    }

    /// Mirrors the multi-select modifier.
    pub fn set_multi_select(&mut self, multi: bool) {
        self.selection.set_multi_select(multi);
    }

    /// Nearest visible shape within the click tolerance of `point`.
    pub fn shape_at(&self, point: &Point) -> Option<u64> {
        self.selection.shape_at(
            &self.store,
            point,
            self.click_tolerance,
            self.visibility.show_disabled(),
        )
    }

    /// Toggles the shape nearest a click; see [`SelectionManager::pick_at`].
    pub fn pick_at(&mut self, point: &Point) -> Option<u64> {
        let tolerance = self.click_tolerance;
        self.pick_with_tolerance(point, tolerance)
    }

    fn pick_with_tolerance(&mut self, point: &Point, tolerance: f64) -> Option<u64> {
        let mut events = Vec::new();
        let hit = self.selection.pick_at(
            &mut self.store,
            point,
            tolerance,
            self.visibility.show_disabled(),
            &mut events,
        );
        self.notify(events);
        hit
    }

    /// Toggles every visible shape touching `rect`.
    pub fn pick_in_rect(&mut self, rect: &Bounds) -> Vec<u64> {
        let mut events = Vec::new();
        let toggled = self.selection.pick_in_rect(
            &mut self.store,
            rect,
            self.visibility.show_disabled(),
            &mut events,
        );
        self.notify(events);
        toggled
    }

    /// Applies a finished pointer gesture.
    ///
    /// Without the multi-select modifier a rubber band first clears the
    /// previous selection. Returns the ids that were hit.
    pub fn apply_gesture(&mut self, gesture: &Gesture) -> Vec<u64> {
        match gesture {
            Gesture::Click {
                point,
                tolerance_rect,
            } => self
                .pick_with_tolerance(point, tolerance_rect.width() / 2.0)
                .into_iter()
                .collect(),
            Gesture::RubberBand(rect) => {
                let mut events = Vec::new();
                if !self.selection.is_multi_select() {
                    self.selection.deselect_all(&mut self.store, &mut events);
                }
                let toggled = self.selection.pick_in_rect(
                    &mut self.store,
                    rect,
                    self.visibility.show_disabled(),
                    &mut events,
                );
                self.notify(events);
                toggled
            }
        }
    }

    pub fn invert_selection(&mut self) {
        let mut events = Vec::new();
        self.selection.invert_all(&mut self.store, &mut events);
        self.notify(events);
    }

    pub fn select_all(&mut self) {
        let mut events = Vec::new();
        self.selection.select_all(&mut self.store, &mut events);
        self.notify(events);
    }

    pub fn deselect_all(&mut self) {
        let mut events = Vec::new();
        self.selection.deselect_all(&mut self.store, &mut events);
        self.notify(events);
    }

    /// Sets the selected flag of one shape, e.g. from a tree view mirror.
    pub fn set_selected(
        &mut self,
        id: u64,
        selected: bool,
        notify: Notify,
    ) -> Result<bool, SceneError> {
        let mut events = Vec::new();
        let changed = self
            .selection
            .set_selected(&mut self.store, id, selected, notify, &mut events)?;
        self.notify(events);
        Ok(changed)
    }

    // Visibility

    pub fn show_disabled(&self) -> bool {
        self.visibility.show_disabled()
    }

    pub fn show_path_direction(&self) -> bool {
        self.show_path_direction
    }

    pub fn show_wp_zero(&self) -> bool {
        self.show_wp_zero
    }

    pub fn is_visible(&self, shape: &CamShape) -> bool {
        self.visibility.is_visible(shape)
    }

    pub fn hidden_ids(&self) -> Vec<u64> {
        self.visibility.hidden_ids(&self.store)
    }

    pub fn disable_selection(&mut self) -> usize {
        let mut events = Vec::new();
        let changed = self
            .visibility
            .disable_selected(&mut self.store, &mut events);
        self.notify(events);
        changed
    }

    pub fn enable_selection(&mut self) -> usize {
        let mut events = Vec::new();
        let changed = self.visibility.enable_selected(&mut self.store, &mut events);
        self.notify(events);
        changed
    }

    /// Enables or disables one shape; locked shapes are never disabled.
    pub fn set_disabled(
        &mut self,
        id: u64,
        disabled: bool,
        notify: Notify,
    ) -> Result<bool, SceneError> {
        let mut events = Vec::new();
        let changed =
            self.visibility
                .set_disabled(&mut self.store, id, disabled, notify, &mut events)?;
        self.notify(events);
        Ok(changed)
    }

    /// Returns the ids of the disabled shapes whose visibility was re-evaluated.
    pub fn set_show_disabled(&mut self, show: bool) -> Vec<u64> {
        self.visibility.set_show_disabled(&self.store, show)
    }

    pub fn set_show_path_direction(&mut self, show: bool) {
        self.show_path_direction = show;
    }

    pub fn set_show_wp_zero(&mut self, show: bool) {
        self.show_wp_zero = show;
    }

    /// Union of the bounds of all visible shapes, `None` if nothing is drawn.
    pub fn items_bounding_rect(&self) -> Option<Bounds> {
        self.store
            .iter()
            .filter(|s| self.visibility.is_visible(s))
            .map(|s| s.bounds())
            .reduce(|acc, b| acc.union(&b))
    }

    // Direction

    /// Reverses every selected shape.
    pub fn switch_direction(&mut self) -> Vec<u64> {
        direction::reverse_selected(&mut self.store)
    }

    pub fn reverse_shape(&mut self, id: u64) -> Result<(), SceneError> {
        direction::reverse(&mut self.store, id)
    }

    /// Re-roots closed shape `id`; open shapes are rejected.
    pub fn set_nearest_start_point(&mut self, id: u64, reference: &Point) -> Result<(), SceneError> {
        direction::set_nearest_start_point(&mut self.store, id, reference)
    }

    /// Re-roots every selected closed shape.
    pub fn set_nearest_start_point_selected(&mut self, reference: &Point) -> Vec<u64> {
        direction::set_nearest_start_point_selected(&mut self.store, reference)
    }

    // Compensation

    pub fn compensation_available(&self) -> bool {
        self.compensation.is_available()
    }

    /// Assigns `side` to the selection.
    pub fn set_compensation(&mut self, side: CutSide) -> usize {
        let ids = self.selected_ids();
        self.compensation.assign(&mut self.store, &ids, side)
    }

    pub fn set_compensation_for(&mut self, ids: &[u64], side: CutSide) -> usize {
        self.compensation.assign(&mut self.store, ids, side)
    }

    /// Swaps left and right compensation across the selection.
    pub fn toggle_compensation(&mut self) -> usize {
        let ids = self.selected_ids();
        self.compensation.toggle(&mut self.store, &ids)
    }

    pub fn toggle_compensation_for(&mut self, ids: &[u64]) -> usize {
        self.compensation.toggle(&mut self.store, ids)
    }

    pub fn compensation_consensus(&self) -> Consensus {
        self.compensation
            .consensus(&self.store, &self.selected_ids())
    }

    pub fn compensation_consensus_for(&self, ids: &[u64]) -> Consensus {
        self.compensation.consensus(&self.store, ids)
    }

    pub fn compensation_menu_state(&self) -> CompensationMenuState {
        self.compensation
            .menu_state(&self.store, &self.selected_ids())
    }

    // Export route

    pub fn route_chain(&self) -> &RouteChain {
        self.route.chain()
    }

    pub fn reset_export_route(&mut self) {
        self.route.reset();
    }

    /// Starts a new export route at the plane origin.
    pub fn begin_export_route(&mut self) {
        self.route.begin(self.origin);
    }

    /// Appends one group of shapes, given as draw-order indices.
    pub fn add_export_route(&mut self, order: &[usize], group: &str) -> Result<(), SceneError> {
        self.route.extend(&self.store, order, group)
    }

    /// Closes the route at the plane origin.
    pub fn close_export_route(&mut self) -> bool {
        self.route.close(self.origin)
    }

    /// Rebuilds the route for a single order starting at the plane origin.
    pub fn sequence_export_route(
        &mut self,
        order: &[usize],
        group: &str,
    ) -> Result<&RouteChain, SceneError> {
        self.route.sequence(&self.store, order, self.origin, group)
    }

    // Menu

    /// Executes a context menu entry.
    pub fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::InvertSelection => self.invert_selection(),
            MenuAction::DisableSelection => {
                self.disable_selection();
            }
            MenuAction::EnableSelection => {
                self.enable_selection();
            }
            MenuAction::SwitchDirection => {
                self.switch_direction();
            }
            MenuAction::SetNearestStartPoint(reference) => {
                self.set_nearest_start_point_selected(&reference);
            }
            MenuAction::Compensation(side) => {
                self.set_compensation(side);
            }
        }
    }
}
