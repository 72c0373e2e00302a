mod phase;
mod request;
mod view_state;
mod view_update;

pub use {
    phase::{Phase, StatusTexts},
    request::{RequestCounter, RequestTag},
    view_state::ViewState,
    view_update::ViewUpdate,
};
