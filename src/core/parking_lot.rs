use crate::core::free_slots::FreeSlots;
use crate::domain::model::{Slot, SlotStatus, Ticket};
use crate::domain::ports::{PricingPolicy, TicketRepository};
use crate::utils::error::{ParkingError, Result};

pub const DEFAULT_MAX_CAPACITY: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotRules {
    /// When false, parking an already-parked registration overwrites its
    /// ticket and the previous slot stays occupied with no owner.
    pub reject_duplicate_park: bool,
    /// Largest capacity `create` accepts; the slot table is allocated up front.
    pub max_capacity: usize,
}

impl Default for LotRules {
    fn default() -> Self {
        Self {
            reject_duplicate_park: true,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

/// Outcome of a successful `release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    pub slot_number: usize,
    pub charge: i64,
}

/// Allocation engine for a single lot.
///
/// Invariant: a slot number is in `free` exactly when `slots[number - 1]`
/// is unoccupied. Every mutation below keeps both sides in step.
///
/// Not internally synchronized; hosts that share a lot across threads wrap
/// it in a `Mutex`.
pub struct ParkingLot<R: TicketRepository, P: PricingPolicy> {
    slots: Vec<Slot>,
    free: FreeSlots,
    repository: R,
    pricing: P,
    rules: LotRules,
}

impl<R: TicketRepository, P: PricingPolicy> ParkingLot<R, P> {
    /// An uncreated lot: zero slots, so every `allocate` reports full.
    pub fn new(repository: R, pricing: P) -> Self {
        Self::with_rules(repository, pricing, LotRules::default())
    }

    pub fn with_rules(repository: R, pricing: P, rules: LotRules) -> Self {
        Self {
            slots: Vec::new(),
            free: FreeSlots::new(),
            repository,
            pricing,
            rules,
        }
    }

    /// (Re)creates the lot, discarding any previous slots and tickets.
    pub fn create(&mut self, capacity: i64) -> Result<usize> {
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|&c| c > 0 && c <= self.rules.max_capacity)
            .ok_or(ParkingError::InvalidCapacity { capacity })?;

        if !self.slots.is_empty() {
            tracing::warn!(
                "Re-creating parking lot; discarding {} slots and {} active tickets",
                self.slots.len(),
                self.repository.len()
            );
        }

        self.repository.clear()?;
        self.slots = (1..=capacity).map(Slot::new).collect();
        self.free = FreeSlots::with_capacity(capacity);

        tracing::info!("Created parking lot with {} slots", capacity);
        Ok(capacity)
    }

    /// Parks `registration` in the lowest-numbered free slot.
    pub fn allocate(&mut self, registration: &str) -> Result<usize> {
        if self.rules.reject_duplicate_park {
            match self.repository.find(registration) {
                Ok(existing) => {
                    return Err(ParkingError::AlreadyParked {
                        registration: registration.to_string(),
                        slot: existing.slot_number,
                    })
                }
                Err(ParkingError::TicketNotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        let slot_number = self.free.take_nearest().ok_or(ParkingError::LotFull)?;

        if let Err(e) = self.repository.save(Ticket::new(slot_number, registration)) {
            self.free.release(slot_number);
            return Err(e);
        }
        self.slots[slot_number - 1].occupy(registration);

        tracing::debug!("Allocated slot {} to {}", slot_number, registration);
        Ok(slot_number)
    }

    /// Frees the slot held by `registration` and charges for `hours`.
    ///
    /// Nothing is mutated when the ticket is missing or `hours` is negative
    /// or too large to price.
    pub fn release(&mut self, registration: &str, hours: i64) -> Result<Departure> {
        let ticket = self.repository.find(registration)?;
        if hours < 0 {
            return Err(ParkingError::InvalidDuration { hours });
        }
        let charge = self
            .pricing
            .charge(hours)
            .ok_or(ParkingError::InvalidDuration { hours })?;

        self.repository.delete(registration)?;
        let slot_number = ticket.slot_number;
        self.slots[slot_number - 1].vacate();
        self.free.release(slot_number);

        tracing::debug!(
            "Released slot {} from {} after {} hours, charge {}",
            slot_number,
            registration,
            hours,
            charge
        );
        Ok(Departure {
            slot_number,
            charge,
        })
    }

    /// Occupied slots in ascending slot order.
    pub fn snapshot(&self) -> Vec<SlotStatus> {
        self.slots
            .iter()
            .filter_map(|slot| {
                slot.registration.as_ref().map(|registration| SlotStatus {
                    slot_number: slot.number,
                    registration: registration.clone(),
                })
            })
            .collect()
    }

    pub fn ticket(&self, registration: &str) -> Result<Ticket> {
        self.repository.find(registration)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn available(&self) -> usize {
        self.free.len()
    }

    pub fn occupied(&self) -> usize {
        self.capacity() - self.available()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
