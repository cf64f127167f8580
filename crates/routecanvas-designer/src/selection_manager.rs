use crate::listeners::ShapeEvent;
use crate::model::Point;
use crate::path_sampler;
use crate::shape_store::ShapeStore;
use crate::shapes::CamShape;
use crate::spatial::Bounds;
use routecanvas_core::{Notify, SceneError};
use routecanvas_settings::HitRegion;

/// Manages shape selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Handling point-based selection (clicking on shapes)
/// - Handling rectangle-based selection (drag-select)
/// - Bulk operations such as invert, select all and deselect all
/// - Multi-select mode (modifier held while clicking)
///
/// # Selection Model
///
/// The `selected` flag of every shape is the single source of truth and this
/// manager is its only writer, so the selected set can never drift from the
/// flags. Every flip is recorded as a [`ShapeEvent`] which the scene delivers
/// to listeners once the operation has finished.
///
/// # Hit-testing
///
/// Candidates are the visible shapes whose hit region (bounding box or
/// outline, see [`HitRegion`]) touches the query rectangle. Among
/// candidates the one with the smallest sampled distance to the click wins;
/// on equal distances the shape that comes first in draw order wins.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    multi_select: bool,
    hit_region: HitRegion,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` in single-select mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use routecanvas_designer::selection_manager::SelectionManager;
    /// use routecanvas_settings::HitRegion;
    ///
    /// let manager = SelectionManager::new(HitRegion::BoundingBox);
    /// assert!(!manager.is_multi_select());
    /// ```
    pub fn new(hit_region: HitRegion) -> Self {
        Self {
            multi_select: false,
            hit_region,
        }
    }

    /// Sets multi-select mode, usually mirroring a held modifier key.
    pub fn set_multi_select(&mut self, multi: bool) {
        self.multi_select = multi;
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    pub fn hit_region(&self) -> HitRegion {
        self.hit_region
    }

    pub fn set_hit_region(&mut self, hit_region: HitRegion) {
        self.hit_region = hit_region;
    }

    /// Ids of the selected shapes in draw order.
    pub fn selected_ids(&self, store: &ShapeStore) -> Vec<u64> {
        store
            .iter()
            .filter(|s| s.is_selected())
            .map(|s| s.id())
            .collect()
    }

    /// Returns the number of currently selected shapes.
    pub fn selected_count(&self, store: &ShapeStore) -> usize {
        store.iter().filter(|s| s.is_selected()).count()
    }

    /// Whether `shape` can be hit by a query rectangle.
    ///
    /// Hidden shapes (disabled while disabled shapes are not shown) are
    /// never candidates.
    pub fn is_candidate(&self, shape: &CamShape, rect: &Bounds, show_disabled: bool) -> bool {
        if shape.is_disabled() && !show_disabled {
            return false;
        }
        if !shape.bounds().intersects(rect) {
            return false;
        }
        match self.hit_region {
            HitRegion::BoundingBox => true,
            HitRegion::Outline => shape.path().intersects_rect(rect),
        }
    }

    /// Finds the shape closest to `point` among the candidates of the
    /// tolerance rectangle centered on it, without changing any state.
    pub fn shape_at(
        &self,
        store: &ShapeStore,
        point: &Point,
        tolerance: f64,
        show_disabled: bool,
    ) -> Option<u64> {
        let rect = Bounds::around(*point, tolerance);
        let mut best = None;
        let mut best_distance = f64::INFINITY;

        for shape in store
            .iter()
            .filter(|s| self.is_candidate(s, &rect, show_disabled))
        {
            let distance = path_sampler::distance_to_point(shape.path(), point);
            if distance < best_distance {
                best_distance = distance;
                best = Some(shape.id());
            }
        }

        best
    }

    /// Toggles the shape closest to a click.
    ///
    /// # Arguments
    ///
    /// * `store` - The shape store to select from
    /// * `point` - The clicked point in scene coordinates
    /// * `tolerance` - Half size of the rectangle used to gather candidates
    /// * `show_disabled` - Whether disabled shapes are currently visible
    /// * `events` - Receives one event per flipped shape
    ///
    /// # Multi-select Behavior
    ///
    /// - If multi-select is off: every other shape is deselected first
    /// - If multi-select is on: only the hit shape is toggled
    ///
    /// # Returns
    ///
    /// The id of the toggled shape, or `None` if nothing was hit. A miss
    /// leaves the selection untouched.
    pub fn pick_at(
        &mut self,
        store: &mut ShapeStore,
        point: &Point,
        tolerance: f64,
        show_disabled: bool,
        events: &mut Vec<ShapeEvent>,
    ) -> Option<u64> {
        let hit = self.shape_at(store, point, tolerance, show_disabled)?;

        if !self.multi_select {
            for shape in store.iter_mut().filter(|s| s.id() != hit) {
                Self::flip(shape, false, events);
            }
        }

        if let Some(shape) = store.get_mut(hit) {
            let selected = !shape.is_selected();
            Self::flip(shape, selected, events);
        }
        Some(hit)
    }

    /// Toggles every shape whose hit region touches `rect`.
    ///
    /// Selected shapes become deselected and vice versa, so applying the
    /// same rectangle twice restores the previous selection.
    ///
    /// # Returns
    ///
    /// The ids of the toggled shapes in draw order.
    pub fn pick_in_rect(
        &mut self,
        store: &mut ShapeStore,
        rect: &Bounds,
        show_disabled: bool,
        events: &mut Vec<ShapeEvent>,
    ) -> Vec<u64> {
        let mut toggled = Vec::new();
        for shape in store.iter_mut() {
            if self.is_candidate(shape, rect, show_disabled) {
                let selected = !shape.is_selected();
                Self::flip(shape, selected, events);
                toggled.push(shape.id());
            }
        }
        toggled
    }

    /// Flips the selected flag of every shape in the store.
    pub fn invert_all(&mut self, store: &mut ShapeStore, events: &mut Vec<ShapeEvent>) {
        for shape in store.iter_mut() {
            let selected = !shape.is_selected();
            Self::flip(shape, selected, events);
        }
    }

    /// Deselects all shapes.
    pub fn deselect_all(&mut self, store: &mut ShapeStore, events: &mut Vec<ShapeEvent>) {
        for shape in store.iter_mut() {
            Self::flip(shape, false, events);
        }
    }

    /// Selects all shapes.
    pub fn select_all(&mut self, store: &mut ShapeStore, events: &mut Vec<ShapeEvent>) {
        for shape in store.iter_mut() {
            Self::flip(shape, true, events);
        }
    }

    /// Sets the selected flag of one shape.
    ///
    /// With [`Notify::Silent`] the change is not reported, which is how a
    /// mirror that originated the change avoids hearing about it again.
    ///
    /// # Returns
    ///
    /// `true` if the flag changed.
    pub fn set_selected(
        &mut self,
        store: &mut ShapeStore,
        id: u64,
        selected: bool,
        notify: Notify,
        events: &mut Vec<ShapeEvent>,
    ) -> Result<bool, SceneError> {
        let shape = store.get_mut(id).ok_or(SceneError::ShapeNotFound { id })?;
        if notify.is_enabled() {
            Ok(Self::flip(shape, selected, events))
        } else {
            Ok(shape.set_selected(selected))
        }
    }

    fn flip(shape: &mut CamShape, selected: bool, events: &mut Vec<ShapeEvent>) -> bool {
        let changed = shape.set_selected(selected);
        if changed {
            events.push(ShapeEvent::SelectionChanged {
                id: shape.id(),
                selected,
            });
        }
        changed
    }
}
