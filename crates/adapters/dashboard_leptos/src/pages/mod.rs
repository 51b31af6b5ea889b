mod events;

pub use events::Events;
