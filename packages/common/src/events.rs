//! Event publication.

use cosmwasm_std::Event;

/// Fire-and-forget event sink. Emitting never fails the calling operation.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}
