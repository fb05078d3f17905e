pub mod book_detail;
pub mod favorites;
pub mod home;
pub mod login;
pub mod register;

pub use book_detail::BookDetail;
pub use favorites::Favorites;
pub use home::Home;
pub use login::Login;
pub use register::Register;
