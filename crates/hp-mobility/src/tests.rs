//! Unit tests for hp-mobility.

use hp_core::{BuildingId, CellPos, ModeTable, Role, SimRng, TransportConfig, TransportMode};
use hp_schedule::{Schedule, ScheduleKind};
use hp_spatial::{BuildingKind, SpatialIndex, SpatialIndexBuilder};

use crate::{TransportChoice, TransportModel, move_to};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(public: f64, private: f64, walk: f64) -> TransportConfig {
    TransportConfig {
        probabilities: ModeTable { public, private, walk },
        rates:         ModeTable { public: 2, private: 3, walk: 1 },
        public_radius: 10,
        walk_radius:   3,
    }
}

fn draws(model: &TransportModel, distance: Option<u32>, limit: Option<u32>) -> Vec<TransportMode> {
    let mut rng = SimRng::new(17);
    (0..300).map(|_| model.choose(distance, limit, &mut rng).mode).collect()
}

/// 1×8 strip with a hub in every cell and two homes at the ends.
fn strip() -> (SpatialIndex, BuildingId, BuildingId) {
    let mut b = SpatialIndexBuilder::new(1, 8);
    b.add_hub_everywhere();
    let west = b.add_building(CellPos::new(0, 0), BuildingKind::Home, 0);
    let east = b.add_building(CellPos::new(0, 7), BuildingKind::Home, 0);
    (b.build().unwrap(), west, east)
}

fn choice(mode: TransportMode, rate: u32) -> TransportChoice {
    TransportChoice { mode, rate, travel_time: 0 }
}

// ── Mode choice ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod mode_choice {
    use super::*;

    #[test]
    fn beyond_public_radius_forces_private() {
        let model = TransportModel::new(&config(1.0, 0.0, 1.0));
        assert!(draws(&model, Some(11), None).iter().all(|m| *m == TransportMode::Private));
    }

    #[test]
    fn beyond_walk_radius_never_walks() {
        let model = TransportModel::new(&config(0.0, 0.0, 1.0));
        // Walk weight folds into public, the only remaining option.
        assert!(draws(&model, Some(5), None).iter().all(|m| *m == TransportMode::Public));
    }

    #[test]
    fn within_walk_radius_walks_when_weighted() {
        let model = TransportModel::new(&config(0.0, 0.0, 1.0));
        assert!(draws(&model, Some(2), None).iter().all(|m| *m == TransportMode::Walk));
    }

    #[test]
    fn tight_deadline_forces_private() {
        let model = TransportModel::new(&config(1.0, 0.0, 1.0));
        // 8 cells at public rate 2 → 4 units > 3.
        assert!(draws(&model, Some(8), Some(3)).iter().all(|m| *m == TransportMode::Private));
    }

    #[test]
    fn deadline_rules_out_walking_only() {
        let model = TransportModel::new(&config(0.0, 0.0, 1.0));
        // 3 cells: walking takes 3 units, public 2; the limit is 2.
        assert!(draws(&model, Some(3), Some(2)).iter().all(|m| *m == TransportMode::Public));
    }

    #[test]
    fn unconstrained_draw_uses_all_modes() {
        let model = TransportModel::new(&config(1.0, 1.0, 1.0));
        let modes = draws(&model, None, None);
        for mode in TransportMode::ALL {
            assert!(modes.contains(&mode), "{mode} never drawn");
        }
    }

    #[test]
    fn choice_carries_rate_and_time() {
        let model = TransportModel::new(&config(0.0, 1.0, 0.0));
        let c = model.choose(Some(7), None, &mut SimRng::new(1));
        assert_eq!(c, TransportChoice { mode: TransportMode::Private, rate: 3, travel_time: 3 });
    }
}

// ── Travel time ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod travel_time {
    use super::*;

    #[test]
    fn zero_for_same_cell_and_symmetric() {
        let model = TransportModel::new(&config(1.0, 1.0, 1.0));
        let cells = [CellPos::new(0, 0), CellPos::new(3, 9), CellPos::new(7, 2), CellPos::new(5, 5)];
        for mode in TransportMode::ALL {
            for &a in &cells {
                assert_eq!(model.travel_time(a, a, mode), 0);
                for &b in &cells {
                    assert_eq!(model.travel_time(a, b, mode), model.travel_time(b, a, mode));
                }
            }
        }
    }

    #[test]
    fn rounds_up_per_mode() {
        let model = TransportModel::new(&config(1.0, 1.0, 1.0));
        let (a, b) = (CellPos::new(0, 0), CellPos::new(4, 7));
        assert_eq!(model.travel_time(a, b, TransportMode::Walk), 7);
        assert_eq!(model.travel_time(a, b, TransportMode::Public), 4);
        assert_eq!(model.travel_time(a, b, TransportMode::Private), 3);
    }
}

// ── move_to ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn walking_emits_one_slot_per_cell() {
        let (index, west, east) = strip();
        let mut s = Schedule::new(ScheduleKind::UnemployedAdult);
        let t = move_to(&mut s, &index, west, east, Role::Home, 40, &choice(TransportMode::Walk, 1)).unwrap();

        assert_eq!(t, 7);
        assert_eq!(s.len(), 8);
        assert_eq!(s.slots()[0].location, west);
        assert_eq!(s.slots()[0].end_time, 40);
        for (k, slot) in s.slots()[1..].iter().enumerate() {
            assert_eq!(slot.role, Role::TransitWalk);
            assert_eq!(slot.end_time, 41 + k as u32);
            // Hubs were added first, one per column: hub id == column.
            assert_eq!(slot.location, BuildingId(k as u32 + 1));
        }
    }

    #[test]
    fn faster_mode_emits_fewer_slots() {
        let (index, west, east) = strip();
        let mut s = Schedule::new(ScheduleKind::UnemployedAdult);
        let t = move_to(&mut s, &index, west, east, Role::Home, 40, &choice(TransportMode::Private, 3)).unwrap();

        assert_eq!(t, 3);
        assert_eq!(s.end_time(), 43);
        let hubs: Vec<u32> = s.slots()[1..].iter().map(|sl| sl.location.0).collect();
        assert_eq!(hubs, vec![3, 6, 7]);
        assert!(s.slots()[1..].iter().all(|sl| sl.role == Role::TransitPrivate));
    }

    #[test]
    fn same_building_is_noop_beyond_departure_slot() {
        let (index, west, _) = strip();
        let mut s = Schedule::new(ScheduleKind::UnemployedAdult);
        let t = move_to(&mut s, &index, west, west, Role::Home, 10, &choice(TransportMode::Walk, 1)).unwrap();
        assert_eq!(t, 0);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn missing_hubs_fall_back_to_last_location() {
        let mut b = SpatialIndexBuilder::new(1, 4);
        let a = b.add_building(CellPos::new(0, 0), BuildingKind::Home, 0);
        let hub = b.add_transport_hub(CellPos::new(0, 2));
        let z = b.add_building(CellPos::new(0, 3), BuildingKind::Home, 0);
        let index = b.build().unwrap();

        let mut s = Schedule::new(ScheduleKind::UnemployedAdult);
        move_to(&mut s, &index, a, z, Role::Home, 5, &choice(TransportMode::Walk, 1)).unwrap();
        let locs: Vec<BuildingId> = s.slots().iter().map(|sl| sl.location).collect();
        // Departure at a, step to (0,1) without hub (stays a, transit), hub, then (0,3) without hub.
        assert_eq!(locs, vec![a, a, hub]);
        assert_eq!(s.end_time(), 8);
    }

    #[test]
    fn unknown_building_is_error() {
        let (index, west, _) = strip();
        let mut s = Schedule::new(ScheduleKind::UnemployedAdult);
        let r = move_to(&mut s, &index, west, BuildingId(500), Role::Home, 1, &choice(TransportMode::Walk, 1));
        assert!(r.is_err());
        assert!(s.is_empty());
    }
}
