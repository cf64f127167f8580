//! Export route visualization.
//!
//! The route threads the machining order through the end points of the
//! shapes: a start connector leaves the plane origin, travel connectors link
//! one shape's end point to the next and a return connector closes the
//! chain at the origin. Every connector except the return one carries a
//! `group,position` label at its end.

use crate::model::Point;
use crate::shape_store::ShapeStore;
use crate::style::{Rgb, ROUTE_START_COLOR, ROUTE_TRAVEL_COLOR};
use routecanvas_core::SceneError;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// First connector after the route was begun.
    Start,
    Travel,
    /// Closing connector back to the origin.
    Return,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub from: Point,
    pub to: Point,
    pub kind: ConnectorKind,
}

impl Connector {
    pub fn color(&self) -> Rgb {
        match self.kind {
            ConnectorKind::Start | ConnectorKind::Return => ROUTE_START_COLOR,
            ConnectorKind::Travel => ROUTE_TRAVEL_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteLabel {
    pub text: String,
    pub position: Point,
    pub group: String,
    /// 1-based position within the order the label was produced from.
    pub index: usize,
}

/// Connectors and labels in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteChain {
    pub connectors: Vec<Connector>,
    pub labels: Vec<RouteLabel>,
}

impl RouteChain {
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty() && self.labels.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.connectors
            .last()
            .is_some_and(|c| c.kind == ConnectorKind::Return)
    }
}

/// Builds the route chain with a running cursor.
///
/// The cursor survives several [`RouteSequencer::extend`] calls, one per
/// layer or group, until the route is closed or reset. Sequencing only
/// reads shape anchors; shapes are never modified.
#[derive(Debug, Clone, Default)]
pub struct RouteSequencer {
    chain: RouteChain,
    cursor: Option<Point>,
    next_kind: Option<ConnectorKind>,
}

impl RouteSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain(&self) -> &RouteChain {
        &self.chain
    }

    /// Current end of the route, if it was begun and not closed.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Discards the chain and the cursor.
    pub fn reset(&mut self) {
        self.chain = RouteChain::default();
        self.cursor = None;
        self.next_kind = None;
    }

    /// Starts a fresh route at `origin`.
    pub fn begin(&mut self, origin: Point) {
        self.reset();
        self.cursor = Some(origin);
        self.next_kind = Some(ConnectorKind::Start);
    }

    /// Appends one connector and one label per entry of `order`.
    ///
    /// `order` holds draw-order indices into `store`. The whole order is
    /// validated before anything is appended, so a rejected call leaves
    /// the chain untouched. Fails with [`SceneError::RouteNotOpen`] unless
    /// the route was begun and not closed since.
    pub fn extend(
        &mut self,
        store: &ShapeStore,
        order: &[usize],
        group: &str,
    ) -> Result<(), SceneError> {
        let mut cursor = self.cursor.ok_or(SceneError::RouteNotOpen)?;
        validate_order(order, store.len())?;

        for (position, &index) in order.iter().enumerate() {
            let Some(shape) = store.at(index) else {
                return Err(SceneError::IndexOutOfRange {
                    index,
                    len: store.len(),
                });
            };
            let end = shape.end_anchor().point;
            let kind = self.next_kind.take().unwrap_or(ConnectorKind::Travel);
            self.chain.connectors.push(Connector {
                from: cursor,
                to: end,
                kind,
            });
            self.chain.labels.push(RouteLabel {
                text: format!("{},{}", group, position + 1),
                position: end,
                group: group.to_string(),
                index: position + 1,
            });
            cursor = end;
        }

        self.cursor = Some(cursor);
        tracing::debug!(
            "Added {} shapes of group {} to the export route",
            order.len(),
            group
        );
        Ok(())
    }

    /// Appends the return connector from the cursor back to `origin`.
    ///
    /// Returns `false` when the route was never begun or is already closed.
    pub fn close(&mut self, origin: Point) -> bool {
        let Some(cursor) = self.cursor.take() else {
            return false;
        };
        self.chain.connectors.push(Connector {
            from: cursor,
            to: origin,
            kind: ConnectorKind::Return,
        });
        self.next_kind = None;
        true
    }

    /// Rebuilds the chain for a single order starting at `origin`.
    pub fn sequence(
        &mut self,
        store: &ShapeStore,
        order: &[usize],
        origin: Point,
        group: &str,
    ) -> Result<&RouteChain, SceneError> {
        validate_order(order, store.len())?;
        self.begin(origin);
        self.extend(store, order, group)?;
        Ok(&self.chain)
    }
}

fn validate_order(order: &[usize], len: usize) -> Result<(), SceneError> {
    let mut seen = HashSet::with_capacity(order.len());
    for &index in order {
        if index >= len {
            return Err(SceneError::IndexOutOfRange { index, len });
        }
        if !seen.insert(index) {
            return Err(SceneError::DuplicateIndex { index });
        }
    }
    Ok(())
}
