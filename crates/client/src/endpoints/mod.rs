//! VI/JSON endpoint implementations.
//!
//! Every function takes the shared `reqwest::Client`, the API root
//! (`{base}/sdk/vim25/{release}`) and, except for login, the session id.

mod auth;
mod authorization;
mod request;

pub use auth::{login, logout};
pub(crate) use authorization::{
    ADD_ROLE_PATH, REMOVE_ROLE_PATH, ROLE_LIST_PATH, UPDATE_ROLE_PATH,
};
pub use authorization::{
    add_authorization_role, remove_authorization_role, role_list, update_authorization_role,
};
pub use request::send_request;
