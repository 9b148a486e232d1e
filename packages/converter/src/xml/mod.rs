//! XML utilities for navigating metadata DOM trees.

mod utils;

pub use utils::{find_child, find_children, get_attribute, get_tag_name, get_text};
