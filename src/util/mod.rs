pub mod geo;
pub mod slug;
pub mod validate;
