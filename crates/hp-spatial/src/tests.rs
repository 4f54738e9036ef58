//! Unit tests for hp-spatial.

use hp_core::{BuildingId, CellPos, Role, SimRng};

use crate::{
    Admission, BuildingKind, GradeBand, School, SearchRequest, SpatialError, SpatialIndex,
    SpatialIndexBuilder, ring_cells,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid(rows: u32, cols: u32) -> SpatialIndexBuilder {
    SpatialIndexBuilder::new(rows, cols)
}

fn one_business(at: CellPos, employees: u32) -> (SpatialIndex, BuildingId) {
    let mut b = grid(3, 3);
    let id = b.add_building(at, BuildingKind::business(employees), 0);
    (b.build().unwrap(), id)
}

// ── Ledger ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ledger {
    use super::*;

    #[test]
    fn employee_capacity_fills_up() {
        let (mut index, id) = one_business(CellPos::new(1, 1), 2);
        index.reserve(id, &Admission::employee(1)).unwrap();
        index.reserve(id, &Admission::employee(1)).unwrap();
        let err = index.reserve(id, &Admission::employee(1)).unwrap_err();
        assert!(matches!(err, SpatialError::CapacityExceeded { role: Role::Employee, .. }));
    }

    #[test]
    fn visitor_windows_are_time_indexed() {
        let mut b = grid(1, 1);
        let shop = b.add_building(CellPos::new(0, 0), BuildingKind::business(5), 1);
        let mut index = b.build().unwrap();

        index.reserve(shop, &Admission::visitor(10, 20)).unwrap();
        assert!(!index.admits(shop, &Admission::visitor(15, 25)));
        assert!(!index.admits(shop, &Admission::visitor(19, 20)));
        // Windows are half-open: [10, 20) does not collide with [20, 30).
        assert!(index.admits(shop, &Admission::visitor(20, 30)));
        assert!(index.admits(shop, &Admission::visitor(0, 10)));

        let ledger = index.building(shop).unwrap().visitors();
        assert_eq!(ledger.at(10), 1);
        assert_eq!(ledger.at(20), 0);
    }

    #[test]
    fn zero_visitor_capacity_never_admits() {
        let (index, id) = one_business(CellPos::new(0, 0), 3);
        assert!(!index.admits(id, &Admission::visitor(0, 1)));
    }

    #[test]
    fn visitor_window_past_week_end_is_clipped() {
        let mut b = grid(1, 1);
        let park = b.add_building(CellPos::new(0, 0), BuildingKind::business(0), 2);
        let mut index = b.build().unwrap();
        index.reserve(park, &Admission::visitor(1000, 1100)).unwrap();
        assert_eq!(index.building(park).unwrap().visitors().at(1007), 1);
    }

    #[test]
    fn school_grades_and_seats() {
        // 5 staff → 1 teacher → 30 seats.
        let school = School::with_timetable(5, GradeBand::Middle, 48, 90);
        assert_eq!(school.students.max, 30);
        assert!(school.has_grade_available(11, 1)); // grade 6
        assert!(school.has_grade_available(13, 30)); // grade 8
        assert!(!school.has_grade_available(13, 31));
        assert!(!school.has_grade_available(10, 1)); // grade 5
        assert!(!school.has_grade_available(3, 1));
    }

    #[test]
    fn school_timetable_ranges() {
        let mut rng = SimRng::new(11);
        for _ in 0..100 {
            let s = School::new(10, GradeBand::Elementary, &mut rng);
            assert!((42..60).contains(&s.start_time));
            assert!((s.start_time + 36..s.start_time + 48).contains(&s.end_time));
        }
    }

    #[test]
    fn role_kind_matching() {
        let mut b = grid(1, 1);
        let clinic  = b.add_building(CellPos::new(0, 0), BuildingKind::medical(1, 2), 0);
        let daycare = b.add_building(CellPos::new(0, 0), BuildingKind::daycare(3), 0);
        let home    = b.add_building(CellPos::new(0, 0), BuildingKind::Home, 0);
        let index = b.build().unwrap();

        assert!(index.admits(clinic, &Admission::employee(1)));
        assert!(index.admits(clinic, &Admission::patient(2)));
        assert!(!index.admits(clinic, &Admission::patient(3)));
        assert!(!index.admits(clinic, &Admission::daycare(1)));

        assert!(index.admits(daycare, &Admission::daycare(3)));
        assert!(!index.admits(daycare, &Admission::daycare(4)));
        assert!(!index.admits(daycare, &Admission::employee(1)));

        assert!(!index.admits(home, &Admission::employee(1)));
        assert!(!index.admits(home, &Admission::student(8)));
    }
}

// ── Index construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use super::*;

    #[test]
    fn hubs_are_not_listed_as_buildings() {
        let mut b = grid(2, 2);
        let hub  = b.add_transport_hub(CellPos::new(1, 0));
        let shop = b.add_building(CellPos::new(1, 0), BuildingKind::business(1), 0);
        let index = b.build().unwrap();

        let cell = index.cell_at(CellPos::new(1, 0)).unwrap();
        assert_eq!(cell.hub, Some(hub));
        assert_eq!(cell.buildings, vec![shop]);
        assert_eq!(index.hub_at(CellPos::new(0, 0)), None);
        assert!(index.cell_at(CellPos::new(2, 0)).is_none());
    }

    #[test]
    fn hub_everywhere() {
        let mut b = grid(3, 4);
        b.add_hub_everywhere();
        let index = b.build().unwrap();
        assert_eq!(index.building_count(), 12);
        assert!(index.hub_at(CellPos::new(2, 3)).is_some());
    }

    #[test]
    fn out_of_bounds_building_rejected() {
        let mut b = grid(2, 2);
        b.add_building(CellPos::new(2, 0), BuildingKind::Home, 0);
        assert!(matches!(b.build(), Err(SpatialError::CellOutOfBounds { .. })));
    }

    #[test]
    fn empty_grid_rejected() {
        assert!(matches!(grid(0, 5).build(), Err(SpatialError::EmptyGrid)));
    }

    #[test]
    fn unknown_building() {
        let (mut index, _) = one_business(CellPos::new(0, 0), 1);
        assert!(matches!(index.building(BuildingId(99)), Err(SpatialError::UnknownBuilding(_))));
        assert!(index.reserve(BuildingId(99), &Admission::employee(1)).is_err());
    }

    #[test]
    fn cell_offset_does_not_wrap_on_wide_grids() {
        use crate::index::cell_offset;

        assert_eq!(cell_offset(CellPos::new(1, 2), 3), 5);
        let wide = cell_offset(CellPos::new(70_000, 5), 70_000);
        assert_eq!(wide as u64, 70_000u64 * 70_000 + 5);
        assert!(wide as u64 > u64::from(u32::MAX));
    }
}

// ── Ring search ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ring_cells_unclipped_count() {
        let cells: Vec<_> = ring_cells(CellPos::new(5, 5), 2, 20, 20).collect();
        assert_eq!(cells.len(), 16);
        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), 16);
        assert!(cells.iter().all(|c| c.chebyshev(CellPos::new(5, 5)) == 2));
    }

    #[test]
    fn ring_cells_clipped_at_corner() {
        let cells: Vec<_> = ring_cells(CellPos::new(0, 0), 1, 3, 3).collect();
        let unique: HashSet<_> = cells.into_iter().collect();
        let expected: HashSet<_> =
            [CellPos::new(0, 1), CellPos::new(1, 0), CellPos::new(1, 1)].into_iter().collect();
        assert_eq!(unique, expected);
    }

    #[test]
    fn origin_cell_checked_first() {
        let mut b = grid(5, 5);
        let far  = b.add_building(CellPos::new(2, 3), BuildingKind::business(1), 0);
        let here = b.add_building(CellPos::new(2, 2), BuildingKind::business(1), 0);
        let index = b.build().unwrap();
        let req = SearchRequest::new(CellPos::new(2, 2), Admission::employee(1));
        assert_eq!(index.find_available_building(&req), Some(here));
        let _ = far;
    }

    #[test]
    fn nearest_ring_wins() {
        let mut b = grid(9, 9);
        let ring3 = b.add_building(CellPos::new(4, 7), BuildingKind::business(1), 0);
        let ring2 = b.add_building(CellPos::new(6, 4), BuildingKind::business(1), 0);
        let index = b.build().unwrap();
        let req = SearchRequest::new(CellPos::new(4, 4), Admission::employee(1));
        assert_eq!(index.find_available_building(&req), Some(ring2));
        let _ = ring3;
    }

    #[test]
    fn full_building_is_skipped() {
        // 3x3 grid, the only employer at (1,1) is already full.
        let (mut index, id) = one_business(CellPos::new(1, 1), 1);
        index.reserve(id, &Admission::employee(1)).unwrap();
        let req = SearchRequest::new(CellPos::new(0, 0), Admission::employee(1)).radius(Some(5));
        assert_eq!(index.find_available_building(&req), None);
    }

    #[test]
    fn full_building_skipped_for_next_one() {
        let mut b = grid(3, 3);
        let full  = b.add_building(CellPos::new(1, 1), BuildingKind::business(1), 0);
        let other = b.add_building(CellPos::new(2, 2), BuildingKind::business(1), 0);
        let mut index = b.build().unwrap();
        index.reserve(full, &Admission::employee(1)).unwrap();
        let req = SearchRequest::new(CellPos::new(0, 0), Admission::employee(1)).radius(Some(5));
        assert_eq!(index.find_available_building(&req), Some(other));
    }

    #[test]
    fn radius_limit_respected() {
        let mut b = grid(10, 10);
        b.add_building(CellPos::new(0, 6), BuildingKind::business(1), 0);
        let index = b.build().unwrap();
        let origin = CellPos::new(0, 0);
        for limit in 0..10 {
            let req = SearchRequest::new(origin, Admission::employee(1)).radius(Some(limit));
            match index.find_available_building(&req) {
                Some(id) => {
                    let d = index.location(id).unwrap().chebyshev(origin);
                    assert!(d <= limit, "found at distance {d} with limit {limit}");
                }
                None => assert!(limit < 6),
            }
        }
    }

    #[test]
    fn arrival_bound_stops_search() {
        let mut b = grid(1, 10);
        b.add_building(CellPos::new(0, 8), BuildingKind::business(1), 5);
        let index = b.build().unwrap();
        let origin = CellPos::new(0, 0);

        // 8 cells at rate 1 → 8 units: a 5-unit window cannot be reached.
        let short = SearchRequest::new(origin, Admission::visitor(100, 105));
        assert_eq!(index.find_available_building(&short), None);

        // At rate 2 the ring takes 4 units and fits.
        let fast = SearchRequest::new(origin, Admission::visitor(100, 105)).rate(2);
        assert!(index.find_available_building(&fast).is_some());
    }

    #[test]
    fn search_never_returns_overfull_building() {
        let mut rng = SimRng::new(5);
        let mut b = grid(6, 6);
        for _ in 0..12 {
            let cell = CellPos::new(rng.below(6), rng.below(6));
            b.add_building(cell, BuildingKind::business(1 + rng.below(3)), 0);
        }
        let mut index = b.build().unwrap();

        let mut hired = 0;
        loop {
            let origin = CellPos::new(rng.below(6), rng.below(6));
            let req = SearchRequest::new(origin, Admission::employee(1));
            let Some(id) = index.find_available_building(&req) else { break };
            index.reserve(id, &req.admission).unwrap();
            hired += 1;
        }

        let total: u32 = index
            .buildings()
            .iter()
            .map(|b| match &b.kind {
                BuildingKind::Business { employees } => {
                    assert!(employees.current <= employees.max);
                    employees.max
                }
                _ => 0,
            })
            .sum();
        assert_eq!(hired, total);
    }

    #[test]
    fn origin_outside_grid_is_none() {
        let (index, _) = one_business(CellPos::new(0, 0), 1);
        let req = SearchRequest::new(CellPos::new(7, 7), Admission::employee(1));
        assert_eq!(index.find_available_building(&req), None);
    }
}
