//! The `move_to` primitive shared by every schedule builder.

use hp_core::{BuildingId, Role, TimeUnit, travel_units};
use hp_schedule::{Schedule, TimeSlot};
use hp_spatial::SpatialIndex;

use crate::{MobilityResult, TransportChoice};

/// Leave `from` at time `at` and travel to `to`.
///
/// Emits the slot for the stay that ends now (`from`, `at`, `departing`),
/// then one transit slot per unit of travel.  Each unit covers `choice.rate`
/// grid steps toward the destination; the slot is attributed to the hub of
/// the cell reached, or to the last known location when that cell has none.
/// The emitted slots therefore end at `at + 1, …, at + travel`.
///
/// Returns the travel time `ceil(chebyshev(from, to) / rate)`; zero when both
/// buildings share a cell.
pub fn move_to(
    schedule:  &mut Schedule,
    index:     &SpatialIndex,
    from:      BuildingId,
    to:        BuildingId,
    departing: Role,
    at:        TimeUnit,
    choice:    &TransportChoice,
) -> MobilityResult<TimeUnit> {
    let start = index.location(from)?;
    let end   = index.location(to)?;

    schedule.push(TimeSlot::new(from, at, departing));
    if from == to {
        return Ok(0);
    }

    let rate = choice.rate.max(1);
    let travel = travel_units(start.chebyshev(end), rate);
    let transit = choice.mode.transit_role();

    let mut pos = start;
    let mut last = from;
    for k in 1..=travel {
        for _ in 0..rate {
            if pos == end {
                break;
            }
            pos = pos.step_toward(end);
        }
        last = index.hub_at(pos).unwrap_or(last);
        schedule.push(TimeSlot::new(last, at + k, transit));
    }
    Ok(travel)
}
