mod dictionary;
mod primitive;

pub use dictionary::Dictionary;
pub use primitive::{format_number, Object, ObjectId};
