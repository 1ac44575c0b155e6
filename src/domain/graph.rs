//! FootholdGraph: every foothold of one loaded map plus a spatial index.
//!
//! ## Arena
//!
//! Footholds live in a `Vec` sorted by id. Neighbor links are ids, resolved
//! through `by_id`; there are no references between footholds.
//!
//! ## Spatial index (x-range sweep)
//!
//! Footholds are indexed by their left edge `x1`. A point query binary-searches
//! the sorted list for `x1` in `[x - span, x]`, where `span` is the widest
//! indexed segment, so only footholds that may reach `x` are scanned.
//! Segments wider than `WIDE_SPAN` would blow `span` up for every query; they
//! are kept in a short side list that every query scans.
//!
//! ## Ground-below rule
//!
//! For a query `(x, y)` every non-wall foothold with `x1 <= x <= x2` yields
//! `ground_y = y1 + (x - x1) * slope`. A candidate qualifies if
//! `ground_y >= y - epsilon` (at or beneath the point, Y grows downward).
//! The qualifying candidate with the smallest `ground_y` wins.
//! No candidate → `None`, the "no ground" result.
//!
//! Ties (shared endpoints) go to the caller's current foothold, then to a
//! foothold linked to it, then to the lower id.

use std::collections::{BTreeMap, HashMap};

use glam::Vec2;
use tracing::warn;

use super::foothold::{Foothold, FootholdId, FootholdRecord};
use crate::error::FootholdError;

/// Segments wider than this bypass the sorted index.
const WIDE_SPAN: f32 = 4096.0;

/// Two ground heights closer than this are the same surface.
const TIE_TOLERANCE: f32 = 1e-3;

/// Offset used to stop an entity just short of a wall it ran into.
pub const WALL_SKIN: f32 = 0.01;

/// Result of a ground query: which foothold, and its height at the query x.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GroundHit {
    pub foothold: FootholdId,
    pub y: f32,
}

/// Caller context for ground queries.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GroundHint {
    /// Foothold the caller stands on; wins ties together with its neighbors.
    pub current: Option<FootholdId>,
    /// Foothold excluded from the query (drop-through suppression).
    pub ignore: Option<FootholdId>,
}

#[derive(Clone, Debug, Default)]
pub struct FootholdGraph {
    footholds: Vec<Foothold>,
    by_id: HashMap<FootholdId, usize>,
    /// Indices of footholds no wider than `WIDE_SPAN`, sorted by `x1`.
    by_x1: Vec<usize>,
    /// Widest segment in `by_x1`.
    span: f32,
    wide: Vec<usize>,
    epsilon: f32,
}

// ── Construction ──

impl FootholdGraph {
    /// Validate `records` and build the graph from the survivors.
    ///
    /// Rejected records are returned (and logged); a bad record never fails the
    /// whole map. Dropping a record can leave its neighbors' links dangling,
    /// so link validation repeats until every surviving link resolves.
    pub fn build(
        records: impl IntoIterator<Item = FootholdRecord>,
        epsilon: f32,
    ) -> (Self, Vec<FootholdError>) {
        let mut errors = Vec::new();
        let mut accepted: BTreeMap<FootholdId, Foothold> = BTreeMap::new();

        for rec in records {
            if accepted.contains_key(&rec.id) {
                errors.push(FootholdError::DuplicateId { id: rec.id });
                continue;
            }
            match Foothold::try_from(rec) {
                Ok(fh) => { accepted.insert(fh.id(), fh); }
                Err(e) => errors.push(e),
            }
        }

        loop {
            let dangling: Vec<(FootholdId, FootholdId)> = accepted
                .values()
                .filter_map(|fh| {
                    fh.links()
                        .find(|link| !accepted.contains_key(link))
                        .map(|link| (fh.id(), link))
                })
                .collect();
            if dangling.is_empty() { break; }
            for (id, link) in dangling {
                accepted.remove(&id);
                errors.push(FootholdError::DanglingLink { id, link });
            }
        }

        for e in &errors {
            warn!("rejected foothold: {e}");
        }

        (Self::from_footholds(accepted.into_values().collect(), epsilon), errors)
    }

    /// `footholds` must be sorted by id with unique ids.
    fn from_footholds(footholds: Vec<Foothold>, epsilon: f32) -> Self {
        let by_id = footholds.iter().enumerate().map(|(i, fh)| (fh.id(), i)).collect();

        let (mut by_x1, wide): (Vec<usize>, Vec<usize>) =
            (0..footholds.len()).partition(|&i| footholds[i].width() <= WIDE_SPAN);
        by_x1.sort_by(|&a, &b| footholds[a].x1().total_cmp(&footholds[b].x1()));
        let span = by_x1.iter().map(|&i| footholds[i].width()).fold(0.0, f32::max);

        FootholdGraph { footholds, by_id, by_x1, span, wide, epsilon }
    }

    /// Footholds whose x-range may overlap `[min_x, max_x]`, in no particular order.
    fn candidates(&self, min_x: f32, max_x: f32) -> impl Iterator<Item = &Foothold> + '_ {
        let start = self.by_x1.partition_point(|&i| self.footholds[i].x1() < min_x - self.span);
        let end = self.by_x1.partition_point(|&i| self.footholds[i].x1() <= max_x);
        let narrow = self.by_x1.get(start..end).unwrap_or(&[]);
        narrow.iter().chain(&self.wide).map(move |&i| &self.footholds[i])
    }
}

// ── Lookup ──

impl FootholdGraph {
    pub fn len(&self) -> usize {
        self.footholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footholds.is_empty()
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// All footholds in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Foothold> {
        self.footholds.iter()
    }

    pub fn get(&self, id: FootholdId) -> Option<&Foothold> {
        self.by_id.get(&id).map(|&i| &self.footholds[i])
    }

    /// Neighbor through `next_id` (moving right) or `previous_id` (moving left).
    pub fn connected(&self, foothold: &Foothold, moving_right: bool) -> Option<&Foothold> {
        let id = if moving_right { foothold.next_id() } else { foothold.previous_id() };
        id.and_then(|id| self.get(id))
    }

    /// `(min_x, min_y, max_x, max_y)` over all footholds.
    pub fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        self.footholds.iter().map(Foothold::bounds).reduce(|a, b| {
            (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
        })
    }
}

// ── Queries ──

impl FootholdGraph {
    /// Footholds whose bounding box intersects the rectangle, ascending id.
    pub fn footholds_in_area(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<&Foothold> {
        if max_x < min_x { return vec![]; }
        let mut hits: Vec<&Foothold> = self.candidates(min_x, max_x)
            .filter(|fh| fh.intersects_rect(min_x, min_y, max_x, max_y))
            .collect();
        hits.sort_unstable_by_key(|fh| fh.id());
        hits
    }

    /// The foothold spanning `x` whose height at `x` is closest to `y`.
    /// `None` if no ground foothold spans `x`. Equal distances go to the lower id.
    pub fn foothold_at(&self, x: f32, y: f32) -> Option<&Foothold> {
        self.candidates(x, x)
            .filter_map(|fh| fh.y_at(x).map(|ground_y| (fh, (ground_y - y).abs())))
            .min_by(|(a, da), (b, db)| da.total_cmp(db).then(a.id().cmp(&b.id())))
            .map(|(fh, _)| fh)
    }

    /// Height of the closest ground at or below `(x, y)`.
    pub fn ground_below(&self, x: f32, y: f32) -> Option<f32> {
        self.find_ground(x, y, GroundHint::default()).map(|hit| hit.y)
    }

    /// Foothold of the closest ground at or below `(x, y)`.
    pub fn foothold_below(&self, x: f32, y: f32) -> Option<&Foothold> {
        self.find_ground(x, y, GroundHint::default()).and_then(|hit| self.get(hit.foothold))
    }

    /// Ground-below query with tie-break and exclusion context.
    ///
    /// Every candidate within `TIE_TOLERANCE` of the lowest qualifying height
    /// is a tie; the tie is settled by `tie_rank` alone.
    pub fn find_ground(&self, x: f32, y: f32, hint: GroundHint) -> Option<GroundHit> {
        let current = hint.current.and_then(|id| self.get(id));
        let hits: Vec<(&Foothold, f32)> = self.candidates(x, x)
            .filter(|fh| Some(fh.id()) != hint.ignore)
            .filter_map(|fh| fh.y_at(x).map(|ground_y| (fh, ground_y)))
            .filter(|&(_, ground_y)| ground_y >= y - self.epsilon)
            .collect();

        let lowest = hits.iter().map(|&(_, ground_y)| ground_y).reduce(f32::min)?;
        hits.into_iter()
            .filter(|&(_, ground_y)| ground_y - lowest <= TIE_TOLERANCE)
            .min_by_key(|&(fh, _)| tie_rank(fh, current))
            .map(|(fh, y)| GroundHit { foothold: fh.id(), y })
    }

    /// Is `(x, y)` within `tolerance` of a ground surface?
    pub fn is_on_ground(&self, x: f32, y: f32, tolerance: f32) -> bool {
        self.ground_below(x, y - tolerance)
            .is_some_and(|ground_y| (ground_y - y).abs() <= tolerance)
    }

    /// Foothold (walls included) whose segment passes closest to `(x, y)`,
    /// if it lies within `max_distance`.
    pub fn nearest(&self, x: f32, y: f32, max_distance: f32) -> Option<&Foothold> {
        let p = Vec2::new(x, y);
        let mut best: Option<(&Foothold, f32)> = None;
        for fh in &self.footholds {
            let d = fh.closest_point(p).distance_squared(p);
            if d <= max_distance * max_distance && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((fh, d));
            }
        }
        best.map(|(fh, _)| fh)
    }

    /// First wall crossed when moving horizontally from `from_x` to `to_x`
    /// with feet at `y`. Returns the wall's x.
    ///
    /// A wall blocks when the feet are inside `(top, bottom]`: walls rising
    /// from the floor block, walls hanging beneath the floor do not.
    pub fn wall_between(&self, from_x: f32, to_x: f32, y: f32) -> Option<f32> {
        if from_x == to_x { return None; }
        let (lo, hi) = if from_x < to_x { (from_x, to_x) } else { (to_x, from_x) };
        let moving_right = to_x > from_x;

        self.footholds_in_area(lo, y, hi, y)
            .into_iter()
            .filter(|fh| fh.is_wall() && fh.top() < y && y <= fh.bottom())
            .map(|fh| fh.x1())
            .filter(|&wx| if moving_right { from_x < wx && wx <= to_x } else { to_x <= wx && wx < from_x })
            .reduce(|a, b| if moving_right { a.min(b) } else { a.max(b) })
    }
}

/// Lower is preferred: the current foothold, then its neighbors, then the rest.
fn tie_rank(fh: &Foothold, current: Option<&Foothold>) -> (u8, FootholdId) {
    let rank = match current {
        Some(cur) if cur.id() == fh.id() => 0,
        Some(cur) if cur.is_linked_to(fh) => 1,
        _ => 2,
    };
    (rank, fh.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0;

    fn graph(records: Vec<FootholdRecord>) -> FootholdGraph {
        let (g, errors) = FootholdGraph::build(records, EPS);
        assert!(errors.is_empty(), "unexpected rejections: {errors:?}");
        g
    }

    fn flat(id: FootholdId, x1: f32, x2: f32, y: f32) -> FootholdRecord {
        FootholdRecord::new(id, x1, y, x2, y)
    }

    // ── build ──

    #[test]
    fn bad_records_are_skipped_not_fatal() {
        let (g, errors) = FootholdGraph::build(
            vec![
                flat(1, 0.0, 100.0, 100.0),
                FootholdRecord::new(2, 50.0, 50.0, 50.0, 50.0),
                FootholdRecord::new(3, f32::NAN, 0.0, 10.0, 0.0),
                flat(4, 0.0, 100.0, 200.0).with_links(None, Some(99)),
                flat(1, 500.0, 600.0, 0.0),
            ],
            EPS,
        );
        assert_eq!(g.len(), 1);
        assert!(g.get(1).is_some());
        assert!(errors.contains(&FootholdError::ZeroLength { id: 2 }));
        assert!(errors.contains(&FootholdError::NonFinite { id: 3 }));
        assert!(errors.contains(&FootholdError::DanglingLink { id: 4, link: 99 }));
        assert!(errors.contains(&FootholdError::DuplicateId { id: 1 }));
    }

    #[test]
    fn rejection_cascades_through_links() {
        // 3 is broken, so 2 (linking to 3) and then 1 (linking to 2) go too
        let (g, errors) = FootholdGraph::build(
            vec![
                flat(1, 0.0, 100.0, 100.0).with_links(None, Some(2)),
                flat(2, 100.0, 200.0, 100.0).with_links(Some(1), Some(3)),
                FootholdRecord::new(3, 200.0, 100.0, 200.0, 100.0),
                flat(4, 300.0, 400.0, 100.0),
            ],
            EPS,
        );
        assert_eq!(g.iter().map(Foothold::id).collect::<Vec<_>>(), vec![4]);
        assert_eq!(errors.len(), 3);
        assert_eq!(g.ground_below(50.0, 0.0), None);
    }

    #[test]
    fn empty_graph_answers_no_ground() {
        let (g, _) = FootholdGraph::build(vec![], EPS);
        assert!(g.is_empty());
        assert_eq!(g.ground_below(0.0, 0.0), None);
        assert!(g.footholds_in_area(-1e6, -1e6, 1e6, 1e6).is_empty());
        assert_eq!(g.bounds(), None);
    }

    // ── ground_below ──

    #[test]
    fn closest_ground_beneath_wins() {
        let g = graph(vec![flat(1, 0.0, 500.0, 300.0), flat(2, 0.0, 500.0, 100.0)]);
        assert_eq!(g.ground_below(250.0, 0.0), Some(100.0));
        assert_eq!(g.ground_below(250.0, 150.0), Some(300.0));
        assert_eq!(g.ground_below(250.0, 301.5), None);
    }

    #[test]
    fn ground_matches_interpolation_across_the_range() {
        let g = graph(vec![
            FootholdRecord::new(1, 100.0, 100.0, 300.0, 180.0),
            FootholdRecord::new(2, 400.0, 250.0, 700.0, 100.0),
        ]);
        for fh in g.iter() {
            let slope = fh.slope().unwrap();
            for i in 0..=20 {
                let x = fh.x1() + (fh.x2() - fh.x1()) * i as f32 / 20.0;
                let expected = fh.y1() + (x - fh.x1()) * slope;
                let got = g.ground_below(x, -1000.0).unwrap();
                assert!((got - expected).abs() < 1e-3, "fh {} x {x}: {got} vs {expected}", fh.id());
            }
        }
        assert_eq!(g.ground_below(350.0, -1000.0), None);
    }

    #[test]
    fn epsilon_admits_ground_just_above() {
        let g = graph(vec![flat(1, 0.0, 100.0, 100.0)]);
        assert_eq!(g.ground_below(50.0, 100.5), Some(100.0));
        assert_eq!(g.ground_below(50.0, 101.5), None);
    }

    #[test]
    fn walls_are_not_ground() {
        let g = graph(vec![FootholdRecord::new(1, 50.0, 0.0, 50.0, 100.0)]);
        assert_eq!(g.ground_below(50.0, -10.0), None);
        assert!(g.foothold_at(50.0, 50.0).is_none());
    }

    #[test]
    fn query_far_outside_index_is_no_ground() {
        let g = graph(vec![flat(1, 1000.0, 1100.0, 0.0)]);
        assert_eq!(g.ground_below(-5000.0, -100.0), None);
        assert_eq!(g.ground_below(90000.0, -100.0), None);
    }

    #[test]
    fn long_foothold_is_found_along_its_whole_range() {
        let g = graph(vec![flat(1, 0.0, 2000.0, 100.0), flat(2, 1500.0, 1600.0, 50.0)]);
        for x in [0.0, 255.9, 256.0, 1024.0, 1999.0, 2000.0] {
            assert_eq!(g.ground_below(x, 60.0), Some(100.0), "x = {x}");
        }
        assert_eq!(g.ground_below(1550.0, 0.0), Some(50.0));
    }

    #[test]
    fn far_apart_footholds_build_and_answer() {
        let g = graph(vec![
            flat(1, -1e11, -1e11 + 1e5, 100.0),
            flat(2, 1e11, 1e11 + 1e5, 200.0),
            flat(3, 0.0, 100.0, 50.0),
        ]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.ground_below(-1e11 + 5e4, 0.0), Some(100.0));
        assert_eq!(g.ground_below(1e11 + 5e4, 0.0), Some(200.0));
        assert_eq!(g.ground_below(50.0, 0.0), Some(50.0));
        assert_eq!(g.ground_below(0.0, 60.0), None);
    }

    #[test]
    fn extremely_wide_foothold_is_indexed() {
        let g = graph(vec![
            flat(1, -3e38, 3e38, 100.0),
            flat(2, 0.0, 100.0, 50.0),
        ]);
        assert_eq!(g.ground_below(-1e30, 0.0), Some(100.0));
        assert_eq!(g.ground_below(1e30, 0.0), Some(100.0));
        assert_eq!(g.ground_below(50.0, 0.0), Some(50.0));
        assert_eq!(g.ground_below(50.0, 60.0), Some(100.0));
        let ids: Vec<_> = g.footholds_in_area(-10.0, 0.0, 10.0, 200.0).iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    // ── tie-break ──

    #[test]
    fn ties_are_measured_from_the_lowest_surface() {
        // 1 is within tolerance of 2, and 2 of 3, but 1 is not within tolerance of 3
        let g = graph(vec![
            flat(1, 0.0, 100.0, 100.0016),
            flat(2, 0.0, 100.0, 100.0008),
            flat(3, 0.0, 100.0, 100.0),
        ]);
        let hit = g.find_ground(50.0, 0.0, GroundHint::default()).unwrap();
        assert_eq!(hit.foothold, 2);

        let on_three = GroundHint { current: Some(3), ignore: None };
        assert_eq!(g.find_ground(50.0, 0.0, on_three).unwrap().foothold, 3);
        let on_one = GroundHint { current: Some(1), ignore: None };
        assert_eq!(g.find_ground(50.0, 0.0, on_one).unwrap().foothold, 2);
    }

    #[test]
    fn shared_endpoint_prefers_linked_neighbor() {
        let g = graph(vec![
            flat(1, 0.0, 100.0, 100.0).with_links(None, Some(5)),
            FootholdRecord::new(5, 100.0, 100.0, 200.0, 150.0).with_links(Some(1), None),
            FootholdRecord::new(2, 100.0, 100.0, 200.0, 50.0),
        ]);
        // At x = 100 all three meet at y = 100.
        let hint = GroundHint { current: Some(1), ignore: None };
        assert_eq!(g.find_ground(100.0, 90.0, hint).unwrap().foothold, 1);

        let from_elsewhere = GroundHint { current: Some(5), ignore: None };
        assert_eq!(g.find_ground(100.0, 90.0, from_elsewhere).unwrap().foothold, 5);

        // Without context the lowest id wins
        assert_eq!(g.find_ground(100.0, 90.0, GroundHint::default()).unwrap().foothold, 1);
    }

    #[test]
    fn linked_neighbor_beats_lower_id() {
        let g = graph(vec![
            FootholdRecord::new(1, 100.0, 100.0, 200.0, 50.0),
            flat(7, 0.0, 100.0, 100.0).with_links(None, Some(9)),
            FootholdRecord::new(9, 100.0, 100.0, 200.0, 150.0).with_links(Some(7), None),
        ]);
        // Standing on 7, step onto x = 100 where 1 and 9 (and 7) meet.
        // Ignoring 7 itself, the link to 9 beats the lower id 1.
        let hint = GroundHint { current: Some(7), ignore: Some(7) };
        assert_eq!(g.find_ground(100.0, 95.0, hint).unwrap().foothold, 9);
    }

    #[test]
    fn ignored_foothold_is_skipped() {
        let g = graph(vec![flat(1, 0.0, 100.0, 100.0), flat(2, 0.0, 100.0, 300.0)]);
        let hint = GroundHint { current: None, ignore: Some(1) };
        assert_eq!(g.find_ground(50.0, 50.0, hint), Some(GroundHit { foothold: 2, y: 300.0 }));
    }

    // ── foothold_at ──

    #[test]
    fn foothold_at_picks_closest_surface() {
        let g = graph(vec![flat(1, 0.0, 100.0, 100.0), flat(2, 0.0, 100.0, 200.0)]);
        assert_eq!(g.foothold_at(50.0, 120.0).unwrap().id(), 1);
        assert_eq!(g.foothold_at(50.0, 180.0).unwrap().id(), 2);
        assert_eq!(g.foothold_at(50.0, 150.0).unwrap().id(), 1); // equidistant → lower id
        assert!(g.foothold_at(150.0, 100.0).is_none());
    }

    // ── area / misc ──

    #[test]
    fn area_query_is_ordered_and_deduplicated() {
        let g = graph(vec![
            flat(3, 0.0, 1000.0, 100.0),
            flat(1, 200.0, 300.0, 50.0),
            flat(2, 900.0, 1200.0, 500.0),
        ]);
        let ids: Vec<_> = g.footholds_in_area(0.0, 0.0, 1000.0, 200.0).iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        let all: Vec<_> = g.footholds_in_area(-10.0, -10.0, 5000.0, 5000.0).iter().map(|f| f.id()).collect();
        assert_eq!(all, vec![1, 2, 3]);
    }

    #[test]
    fn connected_follows_links() {
        let g = graph(vec![
            flat(1, 0.0, 100.0, 100.0).with_links(None, Some(2)),
            flat(2, 100.0, 200.0, 100.0).with_links(Some(1), None),
        ]);
        let one = g.get(1).unwrap();
        assert_eq!(g.connected(one, true).map(Foothold::id), Some(2));
        assert!(g.connected(one, false).is_none());
    }

    #[test]
    fn on_ground_within_tolerance() {
        let g = graph(vec![flat(1, 0.0, 100.0, 100.0)]);
        assert!(g.is_on_ground(50.0, 100.0, 1.0));
        assert!(g.is_on_ground(50.0, 99.5, 1.0));
        assert!(!g.is_on_ground(50.0, 90.0, 1.0));
    }

    #[test]
    fn nearest_respects_max_distance() {
        let g = graph(vec![flat(1, 0.0, 100.0, 100.0), flat(2, 300.0, 400.0, 100.0)]);
        assert_eq!(g.nearest(120.0, 100.0, 50.0).map(Foothold::id), Some(1));
        assert_eq!(g.nearest(280.0, 90.0, 50.0).map(Foothold::id), Some(2));
        assert!(g.nearest(200.0, 100.0, 50.0).is_none());
    }

    #[test]
    fn wall_blocks_only_at_feet_height() {
        let g = graph(vec![
            flat(1, 0.0, 200.0, 100.0),
            FootholdRecord::new(2, 150.0, 40.0, 150.0, 100.0), // rises from the floor
            FootholdRecord::new(3, 60.0, 100.0, 60.0, 160.0),  // hangs under the floor
        ]);
        assert_eq!(g.wall_between(100.0, 160.0, 100.0), Some(150.0));
        assert_eq!(g.wall_between(160.0, 100.0, 100.0), Some(150.0));
        assert_eq!(g.wall_between(100.0, 140.0, 100.0), None);
        assert_eq!(g.wall_between(40.0, 80.0, 100.0), None);
        // above the wall's top, nothing blocks
        assert_eq!(g.wall_between(100.0, 160.0, 30.0), None);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let g = graph(vec![
            flat(1, 0.0, 100.0, 100.0).with_links(None, Some(2)),
            FootholdRecord::new(2, 100.0, 100.0, 200.0, 150.0).with_links(Some(1), None),
        ]);
        for x in [0.0, 37.5, 100.0, 163.0, 200.0] {
            let a = (g.ground_below(x, 0.0), g.foothold_at(x, 120.0).map(Foothold::id));
            let b = (g.ground_below(x, 0.0), g.foothold_at(x, 120.0).map(Foothold::id));
            assert_eq!(a, b);
        }
    }
}
