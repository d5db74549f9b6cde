//! Translation between Terraform attribute values and Unkey API bodies.
//!
//! Null or unknown plan values map to absent request fields; empty API
//! collections map back to null so a refresh does not report a diff for an
//! attribute the practitioner never set.

mod credits;
mod primitives;
mod ratelimit;

pub use credits::{credits_from_api, credits_to_api, credits_to_update_api};
pub use primitives::{map_to_string, string_list_to_vec, string_to_map, vec_to_string_list};
pub use ratelimit::{ratelimits_from_api, ratelimits_to_api};
