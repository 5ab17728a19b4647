use crate::domain::model::Ticket;
use crate::domain::ports::TicketRepository;
use crate::utils::error::{ParkingError, Result};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-lifetime ticket store. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryTicketRepository {
    tickets: RwLock<HashMap<String, Ticket>>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicked writer cannot leave the map half-updated, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Ticket>> {
        self.tickets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Ticket>> {
        self.tickets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TicketRepository for InMemoryTicketRepository {
    fn save(&self, ticket: Ticket) -> Result<()> {
        self.write().insert(ticket.registration.clone(), ticket);
        Ok(())
    }

    fn find(&self, registration: &str) -> Result<Ticket> {
        self.read()
            .get(registration)
            .cloned()
            .ok_or_else(|| ParkingError::TicketNotFound {
                registration: registration.to_string(),
            })
    }

    fn delete(&self, registration: &str) -> Result<()> {
        self.write()
            .remove(registration)
            .map(|_| ())
            .ok_or_else(|| ParkingError::TicketNotFound {
                registration: registration.to_string(),
            })
    }

    fn clear(&self) -> Result<()> {
        self.write().clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
