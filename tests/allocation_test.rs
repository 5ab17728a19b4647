use anyhow::Result;
use parking_lot_app::core::parking_lot::{Departure, LotRules};
use parking_lot_app::domain::model::SlotStatus;
use parking_lot_app::domain::ports::TicketRepository;
use parking_lot_app::{FlatRatePricing, InMemoryTicketRepository, ParkingError, ParkingLot};
use std::sync::Arc;

fn status(rows: &[(usize, &str)]) -> Vec<SlotStatus> {
    rows.iter()
        .map(|(slot_number, registration)| SlotStatus {
            slot_number: *slot_number,
            registration: registration.to_string(),
        })
        .collect()
}

#[test]
fn test_two_slot_scenario() -> Result<()> {
    let mut lot = ParkingLot::new(InMemoryTicketRepository::new(), FlatRatePricing::default());

    lot.create(2)?;
    assert_eq!(lot.allocate("A")?, 1);
    assert_eq!(lot.allocate("B")?, 2);
    assert!(matches!(lot.allocate("C"), Err(ParkingError::LotFull)));

    assert_eq!(
        lot.release("A", 4)?,
        Departure {
            slot_number: 1,
            charge: 30
        }
    );
    assert_eq!(lot.allocate("C")?, 1);
    assert_eq!(lot.snapshot(), status(&[(1, "C"), (2, "B")]));
    Ok(())
}

#[test]
fn test_freed_slot_reused_before_higher_free_slots() -> Result<()> {
    let mut lot = ParkingLot::new(InMemoryTicketRepository::new(), FlatRatePricing::default());
    lot.create(10)?;

    for i in 1..=6 {
        lot.allocate(&format!("CAR-{}", i))?;
    }
    lot.release("CAR-4", 3)?;

    // 4 is free along with 7..=10; the lowest wins.
    assert_eq!(lot.allocate("NEW-1")?, 4);
    assert_eq!(lot.allocate("NEW-2")?, 7);
    Ok(())
}

#[test]
fn test_releasing_slot_one_with_rest_occupied() -> Result<()> {
    let mut lot = ParkingLot::new(InMemoryTicketRepository::new(), FlatRatePricing::default());
    let capacity = 5;
    lot.create(capacity)?;
    for i in 1..=capacity {
        lot.allocate(&format!("CAR-{}", i))?;
    }

    lot.release("CAR-1", 1)?;
    assert_eq!(lot.allocate("LATE")?, 1);
    assert_eq!(lot.available(), 0);
    Ok(())
}

#[test]
fn test_tickets_visible_through_shared_store() -> Result<()> {
    let store = Arc::new(InMemoryTicketRepository::new());
    let mut lot = ParkingLot::new(Arc::clone(&store), FlatRatePricing::default());
    lot.create(3)?;

    lot.allocate("KA-01-HH-1234")?;
    lot.allocate("KA-01-HH-9999")?;

    let ticket = store.find("KA-01-HH-9999")?;
    assert_eq!(ticket.slot_number, 2);
    assert_eq!(lot.ticket("KA-01-HH-9999")?, ticket);
    assert_eq!(store.len(), 2);

    lot.release("KA-01-HH-1234", 2)?;
    assert!(matches!(
        store.find("KA-01-HH-1234"),
        Err(ParkingError::TicketNotFound { .. })
    ));
    assert_eq!(store.len(), 1);
    Ok(())
}

#[test]
fn test_failed_release_leaves_free_set_untouched() -> Result<()> {
    let mut lot = ParkingLot::new(InMemoryTicketRepository::new(), FlatRatePricing::default());
    lot.create(3)?;
    lot.allocate("A")?;

    let before = (lot.available(), lot.snapshot());
    assert!(lot.release("NEVER-PARKED", 1).is_err());
    assert!(lot.release("A", -1).is_err());
    assert_eq!((lot.available(), lot.snapshot()), before);

    assert_eq!(lot.allocate("B")?, 2);
    Ok(())
}

#[test]
fn test_custom_pricing_and_legacy_rules() -> Result<()> {
    let rules = LotRules {
        reject_duplicate_park: false,
        ..LotRules::default()
    };
    let mut lot = ParkingLot::with_rules(
        InMemoryTicketRepository::new(),
        FlatRatePricing::new(20, 1, 5),
        rules,
    );
    lot.create(2)?;

    lot.allocate("A")?;
    assert_eq!(lot.allocate("A")?, 2);
    assert!(matches!(lot.allocate("B"), Err(ParkingError::LotFull)));

    let departure = lot.release("A", 3)?;
    assert_eq!(departure.slot_number, 2);
    assert_eq!(departure.charge, 30);
    assert_eq!(lot.snapshot(), status(&[(1, "A")]));
    Ok(())
}
