use crate::domain::model::Ticket;
use crate::utils::error::Result;

/// Active-ticket storage keyed by registration number.
///
/// Implementations must be safe to share between threads: readers may run
/// concurrently, writers are exclusive.
pub trait TicketRepository: Send + Sync {
    /// Upsert; silently replaces any ticket with the same registration.
    fn save(&self, ticket: Ticket) -> Result<()>;
    fn find(&self, registration: &str) -> Result<Ticket>;
    fn delete(&self, registration: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait PricingPolicy: Send + Sync {
    /// `None` when the charge does not fit in an `i64`.
    fn charge(&self, hours: i64) -> Option<i64>;
}

impl<T: TicketRepository + ?Sized> TicketRepository for std::sync::Arc<T> {
    fn save(&self, ticket: Ticket) -> Result<()> {
        (**self).save(ticket)
    }

    fn find(&self, registration: &str) -> Result<Ticket> {
        (**self).find(registration)
    }

    fn delete(&self, registration: &str) -> Result<()> {
        (**self).delete(registration)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
