use crate::events::CatalogEvent;

/// Trait for catalog event observation
pub trait CatalogObserver {
    /// Called after `event` has been applied to the library named `library`
    fn on_event(&self, library: &str, event: &CatalogEvent);
}

/// Emits every event as a human-readable notice through the `log` facade
///
/// Registered on every new [`crate::Library`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EventLogger;

impl CatalogObserver for EventLogger {
    fn on_event(&self, library: &str, event: &CatalogEvent) {
        match event {
            CatalogEvent::LoginRequired { user } => {
                log::warn!("{event} ({library}: {user} is not logged in)");
            }
            CatalogEvent::BookAdded { .. } | CatalogEvent::BookRemoved { .. } => {
                log::debug!("{library}: {event}");
            }
            CatalogEvent::CheckedOut { .. } | CatalogEvent::CheckedIn { .. } => {
                log::info!("{event}");
            }
        }
    }
}
