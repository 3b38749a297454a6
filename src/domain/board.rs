// src/domain/board.rs

use crate::domain::filters::{apply_filter, FilterCriteria};
use crate::domain::property::{find_property, Property, PropertyId, SEED_PROPERTIES};
use crate::domain::stats::DealStats;
use crate::map::viewport::{Viewport, FOCUSED_ZOOM};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("no property with id {0}")]
    UnknownProperty(PropertyId),
    #[error("property {0} is hidden by the current filters")]
    NotVisible(PropertyId),
}

/// Filter, selection and viewport for one visitor's deal board.
#[derive(Debug, Clone)]
pub struct BoardState {
    catalog: &'static [Property],
    pub filters: FilterCriteria,
    pub selected: Option<PropertyId>,
    pub viewport: Viewport,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::with_catalog(&SEED_PROPERTIES)
    }
}

impl BoardState {
    pub fn with_catalog(catalog: &'static [Property]) -> Self {
        Self {
            catalog,
            filters: FilterCriteria::default(),
            selected: None,
            viewport: Viewport::default(),
        }
    }

    pub fn catalog(&self) -> &'static [Property] {
        self.catalog
    }

    pub fn visible(&self) -> Vec<&'static Property> {
        apply_filter(self.catalog, &self.filters)
    }

    pub fn stats(&self) -> DealStats {
        DealStats::from_visible(&self.visible())
    }

    /// The selection the page shows: the stored one while it is still
    /// visible, else the first visible property.
    pub fn active(&self) -> Option<&'static Property> {
        let visible = self.visible();
        resolve_selection(self.selected, &visible)
            .and_then(|id| visible.into_iter().find(|p| p.id == id))
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
        self.reconcile_selection();
    }

    /// Back to "All"/"All"/"". Selection is only re-resolved.
    pub fn reset_filters(&mut self) {
        self.set_filters(FilterCriteria::default());
    }

    /// Picks a marker. Only properties currently on the map can be picked.
    pub fn select(&mut self, id: PropertyId) -> Result<(), BoardError> {
        let property =
            find_property(self.catalog, id).ok_or(BoardError::UnknownProperty(id))?;

        if !self.filters.matches(property) {
            return Err(BoardError::NotVisible(id));
        }

        self.focus(property, FOCUSED_ZOOM);
        Ok(())
    }

    /// Selects without the visibility check and centers the map.
    pub fn focus(&mut self, property: &Property, zoom: u8) {
        self.selected = Some(property.id);
        self.viewport = Viewport::focused_on(property.coordinate, zoom);
    }

    pub fn move_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let markers = self.visible();
        BoardSnapshot {
            filters: self.filters.clone(),
            stats: DealStats::from_visible(&markers),
            selected: self.active().map(|p| p.id),
            viewport: self.viewport,
            markers,
        }
    }

    fn reconcile_selection(&mut self) {
        self.selected = resolve_selection(self.selected, &self.visible());
    }
}

/// What `/arkhived/board.json` returns.
#[derive(Debug, Serialize)]
pub struct BoardSnapshot {
    pub filters: FilterCriteria,
    pub stats: DealStats,
    pub selected: Option<PropertyId>,
    pub viewport: Viewport,
    pub markers: Vec<&'static Property>,
}

/// Keep `previous` if it is still in `visible`, else fall back to the first
/// visible property, else nothing.
pub fn resolve_selection(
    previous: Option<PropertyId>,
    visible: &[&Property],
) -> Option<PropertyId> {
    match previous {
        Some(id) if visible.iter().any(|p| p.id == id) => Some(id),
        _ => visible.first().map(|p| p.id),
    }
}
