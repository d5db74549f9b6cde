//! Typed state of each resource.
//!
//! Every model mirrors its schema attribute for attribute and converts to
//! and from the host's [`Value`](unkey_tfsdk::Value) through
//! [`AttrValue`](unkey_tfsdk::AttrValue).

mod api;
mod credits;
mod identity;
mod key;
mod permission;
mod ratelimit;
mod role;

pub use api::ApiModel;
pub use credits::{CreditsModel, RefillModel};
pub use identity::IdentityModel;
pub use key::KeyModel;
pub use permission::PermissionModel;
pub use ratelimit::RatelimitModel;
pub use role::RoleModel;
