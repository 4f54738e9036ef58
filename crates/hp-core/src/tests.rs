//! Unit tests for hp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BuildingId, FamilyId, PersonId};

    #[test]
    fn index_roundtrip() {
        let id = BuildingId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(BuildingId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_is_default() {
        assert_eq!(PersonId::default(), PersonId::INVALID);
        assert!(!FamilyId::INVALID.is_valid());
        assert!(FamilyId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(BuildingId(7).to_string(), "BuildingId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::CellPos;

    #[test]
    fn chebyshev_is_max_axis_delta() {
        let a = CellPos::new(2, 3);
        assert_eq!(a.chebyshev(a), 0);
        assert_eq!(a.chebyshev(CellPos::new(5, 4)), 3);
        assert_eq!(a.chebyshev(CellPos::new(0, 9)), 6);
    }

    #[test]
    fn chebyshev_symmetric() {
        let a = CellPos::new(1, 8);
        let b = CellPos::new(6, 2);
        assert_eq!(a.chebyshev(b), b.chebyshev(a));
    }

    #[test]
    fn stepping_reaches_target_in_chebyshev_steps() {
        let target = CellPos::new(0, 5);
        let mut p = CellPos::new(3, 0);
        let mut steps = 0;
        while p != target {
            p = p.step_toward(target);
            steps += 1;
        }
        assert_eq!(steps, CellPos::new(3, 0).chebyshev(target));
        assert_eq!(p.step_toward(target), target);
    }
}

#[cfg(test)]
mod time {
    use crate::{DAY_LENGTH, WEEK_LENGTH, WeekTime};

    #[test]
    fn week_constants() {
        assert_eq!(DAY_LENGTH, 144);
        assert_eq!(WEEK_LENGTH, 1008);
    }

    #[test]
    fn day_and_clock() {
        let t = WeekTime(DAY_LENGTH * 2 + 48);
        assert_eq!(t.day(), 2);
        assert_eq!(t.time_of_day(), 48);
        assert_eq!(t.clock(), (8, 0));
        assert!(t.is_school_day());
        assert!(!WeekTime::day_start(5).is_school_day());
    }

    #[test]
    fn display() {
        assert_eq!(WeekTime(51).to_string(), "Mon 08:30 (t=51)");
        assert_eq!(WeekTime(WEEK_LENGTH).to_string(), "End 00:00 (t=1008)");
    }
}

#[cfg(test)]
mod role {
    use crate::{Role, TransportMode};

    #[test]
    fn codes_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code('X'), None);
    }

    #[test]
    fn transit_partition() {
        let transit: Vec<Role> = Role::ALL.into_iter().filter(|r| r.is_transit()).collect();
        assert_eq!(transit, [Role::TransitPublic, Role::TransitPrivate, Role::TransitWalk]);
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::from_role(mode.transit_role()), Some(mode));
        }
        assert_eq!(TransportMode::from_role(Role::Home), None);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        for _ in 0..32 {
            assert_eq!(a.below(1000), b.below(1000));
        }
    }

    #[test]
    fn below_zero_is_zero() {
        let mut r = SimRng::new(1);
        assert_eq!(r.below(0), 0);
    }

    #[test]
    fn weighted_skips_zero_weights() {
        let mut r = SimRng::new(3);
        for _ in 0..200 {
            assert_eq!(r.weighted(&[0.0, 1.0, 0.0]), Some(1));
        }
        assert_eq!(r.weighted(&[0.0, 0.0]), None);
    }

    #[test]
    fn child_streams_are_reproducible_per_offset() {
        let draws = |offset| {
            let mut child = SimRng::new(4).child(offset);
            (0..8).map(|_| child.below(1_000_000)).collect::<Vec<_>>()
        };
        assert_eq!(draws(1), draws(1));
        assert_ne!(draws(1), draws(2));
    }

    #[test]
    fn gen_bool_clamps_probability() {
        let mut r = SimRng::new(6);
        assert!(r.gen_bool(1.5));
        assert!(!r.gen_bool(-0.5));
    }
}

#[cfg(test)]
mod config {
    use std::io::Cursor;

    use crate::{CoreError, SimulationConfig};

    #[test]
    fn defaults_validate() {
        SimulationConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_overrides_defaults() {
        let json = r#"{ "seed": 7, "transport": { "walk_radius": 5 } }"#;
        let cfg = SimulationConfig::from_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.transport.walk_radius, 5);
        assert_eq!(cfg.transport.public_radius, 30);
        assert_eq!(cfg.activity.adult_work.job, 0.90);
    }

    #[test]
    fn zero_rate_rejected() {
        let json = r#"{ "transport": { "rates": { "public": 0, "private": 1, "walk": 1 } } }"#;
        let err = SimulationConfig::from_json_reader(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn all_zero_weights_rejected() {
        let mut cfg = SimulationConfig::default();
        cfg.activity.adult_unemployed.home = 0.0;
        cfg.activity.adult_unemployed.out = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = SimulationConfig::from_json_reader(Cursor::new("{ seed: ")).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }
}

#[cfg(test)]
mod travel {
    use crate::travel_units;

    #[test]
    fn rounds_up() {
        assert_eq!(travel_units(0, 3), 0);
        assert_eq!(travel_units(1, 3), 1);
        assert_eq!(travel_units(6, 3), 2);
        assert_eq!(travel_units(7, 3), 3);
        assert_eq!(travel_units(7, 0), 7);
    }
}
