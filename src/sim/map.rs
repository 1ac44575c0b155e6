//! Map geometry loading.
//!
//! ## Sources
//!
//! Geometry comes from a `MapSource` handed in by the host (the asset
//! archive reader in a client, `InMemoryMapSource` in tests and tools).
//! Nothing here parses files.
//!
//! ## Lifetime
//!
//! A `MapGeometry` is built once and never mutated. Changing maps builds a
//! new one and swaps it into `ActiveMap` wholesale; the stepper only ever
//! borrows the current geometry immutably, so a swap cannot land mid-step.

use std::collections::HashMap;

use glam::Vec2;
use tracing::{debug, warn};

use crate::domain::foothold::FootholdRecord;
use crate::domain::graph::FootholdGraph;
use crate::domain::ladder::LadderRegion;
use crate::error::{FootholdError, MapError};

pub type MapId = u32;

/// Raw geometry of one map as delivered by a source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapData {
    pub footholds: Vec<FootholdRecord>,
    pub ladders: Vec<LadderRegion>,
}

pub trait MapSource {
    fn load(&self, map_id: MapId) -> Result<MapData, MapError>;
}

/// Map source backed by a table in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMapSource {
    maps: HashMap<MapId, MapData>,
}

impl InMemoryMapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, map_id: MapId, data: MapData) -> &mut Self {
        self.maps.insert(map_id, data);
        self
    }
}

impl MapSource for InMemoryMapSource {
    fn load(&self, map_id: MapId) -> Result<MapData, MapError> {
        self.maps.get(&map_id).cloned().ok_or(MapError::NotFound { map_id })
    }
}

// ══════════════════════════════════════════════════════════════
// MapGeometry
// ══════════════════════════════════════════════════════════════

/// Collision geometry of one loaded map.
#[derive(Clone, Debug)]
pub struct MapGeometry {
    map_id: MapId,
    graph: FootholdGraph,
    ladders: Vec<LadderRegion>,
}

impl MapGeometry {
    /// Build from raw data. Bad footholds and ladders are dropped; the
    /// rejected footholds are returned alongside the geometry.
    pub fn build(map_id: MapId, data: MapData, epsilon: f32) -> (Self, Vec<FootholdError>) {
        let (graph, rejected) = FootholdGraph::build(data.footholds, epsilon);

        let ladders: Vec<LadderRegion> = data.ladders.into_iter()
            .filter(|l| {
                if !l.is_finite() { warn!(map_id, "dropping ladder with non-finite coordinates: {l:?}"); }
                l.is_finite()
            })
            .collect();

        (MapGeometry { map_id, graph, ladders }, rejected)
    }

    /// Fetch `map_id` from `source` and build it.
    pub fn load(source: &dyn MapSource, map_id: MapId, epsilon: f32) -> Result<(Self, Vec<FootholdError>), MapError> {
        let data = source.load(map_id)?;
        Ok(Self::build(map_id, data, epsilon))
    }

    pub fn map_id(&self) -> MapId {
        self.map_id
    }

    pub fn graph(&self) -> &FootholdGraph {
        &self.graph
    }

    pub fn ladders(&self) -> &[LadderRegion] {
        &self.ladders
    }

    /// First ladder whose grab rectangle contains `position`.
    pub fn ladder_at(&self, position: Vec2, tolerance: f32) -> Option<&LadderRegion> {
        self.ladders.iter().find(|l| l.contains(position, tolerance))
    }

    /// Spawn position for a portal or respawn at `(x, y)`.
    ///
    /// Lifted `height_offset` above the ground below so the entity settles
    /// onto it under gravity. Without ground the requested point is used as is.
    pub fn spawn_point(&self, x: f32, y: f32, height_offset: f32) -> Vec2 {
        match self.graph.ground_below(x, y) {
            Some(ground_y) => Vec2::new(x, ground_y - height_offset),
            None => Vec2::new(x, y),
        }
    }
}

// ══════════════════════════════════════════════════════════════
// ActiveMap
// ══════════════════════════════════════════════════════════════

/// The single slot holding the map the player is on.
#[derive(Debug, Default)]
pub struct ActiveMap {
    current: Option<MapGeometry>,
}

impl ActiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `geometry`, dropping the previous map.
    pub fn replace(&mut self, geometry: MapGeometry) -> Option<MapGeometry> {
        debug!(
            map_id = geometry.map_id(),
            footholds = geometry.graph().len(),
            ladders = geometry.ladders().len(),
            "map geometry replaced"
        );
        self.current.replace(geometry)
    }

    /// Load `map_id` from `source` and make it current. On error the
    /// previous map stays active.
    pub fn load(&mut self, source: &dyn MapSource, map_id: MapId, epsilon: f32) -> Result<Vec<FootholdError>, MapError> {
        let (geometry, rejected) = MapGeometry::load(source, map_id, epsilon)?;
        self.replace(geometry);
        Ok(rejected)
    }

    pub fn unload(&mut self) -> Option<MapGeometry> {
        self.current.take()
    }

    pub fn get(&self) -> Option<&MapGeometry> {
        self.current.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MapData {
        MapData {
            footholds: vec![
                FootholdRecord::new(1, 0.0, 100.0, 500.0, 100.0),
                FootholdRecord::new(2, 600.0, 100.0, 600.0, 100.0),
            ],
            ladders: vec![
                LadderRegion::new(250.0, 0.0, 100.0),
                LadderRegion::new(f32::NAN, 0.0, 100.0),
            ],
        }
    }

    #[test]
    fn build_drops_bad_entries() {
        let (map, rejected) = MapGeometry::build(7, sample(), 1.0);
        assert_eq!(map.map_id(), 7);
        assert_eq!(map.graph().len(), 1);
        assert_eq!(map.ladders().len(), 1);
        assert_eq!(rejected, vec![FootholdError::ZeroLength { id: 2 }]);
    }

    #[test]
    fn source_reports_missing_map() {
        let source = InMemoryMapSource::new();
        let err = MapGeometry::load(&source, 404, 1.0).unwrap_err();
        assert_eq!(err, MapError::NotFound { map_id: 404 });
    }

    #[test]
    fn failed_load_keeps_previous_map() {
        let mut source = InMemoryMapSource::new();
        source.insert(1, sample());
        let mut active = ActiveMap::new();
        assert!(!active.is_ready());

        active.load(&source, 1, 1.0).unwrap();
        assert!(active.load(&source, 2, 1.0).is_err());
        assert_eq!(active.get().map(MapGeometry::map_id), Some(1));

        assert!(active.unload().is_some());
        assert!(!active.is_ready());
    }

    #[test]
    fn replace_swaps_wholesale() {
        let mut active = ActiveMap::new();
        let (a, _) = MapGeometry::build(1, sample(), 1.0);
        let (b, _) = MapGeometry::build(2, MapData::default(), 1.0);
        assert!(active.replace(a).is_none());
        let old = active.replace(b).unwrap();
        assert_eq!(old.map_id(), 1);
        assert!(active.get().unwrap().graph().is_empty());
    }

    #[test]
    fn spawn_point_sits_above_ground() {
        let (map, _) = MapGeometry::build(1, sample(), 1.0);
        assert_eq!(map.spawn_point(100.0, 0.0, 10.0), Vec2::new(100.0, 90.0));
        assert_eq!(map.spawn_point(550.0, 0.0, 10.0), Vec2::new(550.0, 0.0));
    }

    #[test]
    fn ladder_lookup() {
        let (map, _) = MapGeometry::build(1, sample(), 1.0);
        assert!(map.ladder_at(Vec2::new(255.0, 50.0), 10.0).is_some());
        assert!(map.ladder_at(Vec2::new(300.0, 50.0), 10.0).is_none());
    }
}
