pub mod contact;
pub mod email;
pub mod phone;
pub mod text;

pub use contact::Contact;
pub use email::normalize_email;
pub use phone::normalize_phone;
pub use text::{is_space, trim_space};
