mod backdrop;
mod event_list;
mod loading;
mod modal;
mod nav;

pub use backdrop::Backdrop;
pub use event_list::EventList;
pub use loading::Loading;
pub use modal::Modal;
pub use nav::Nav;
