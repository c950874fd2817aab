mod action;
mod error;
mod reducer;
mod resource;
mod selector;
mod state_store;
mod stream_ext;
mod thunk;

pub use action::*;
pub use error::*;
pub use reducer::*;
pub use resource::*;
pub use selector::*;
pub use state_store::*;
pub use stream_ext::*;
pub use thunk::*;

pub trait State: Clone + Send + Sync + 'static {}
