pub mod book_card;
pub mod field_errors;
pub mod layout;
pub mod messages;
pub mod navbar;

pub use book_card::BookCard;
pub use field_errors::FieldErrors;
pub use layout::Layout;
pub use messages::Messages;
pub use navbar::Navbar;
