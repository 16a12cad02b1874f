pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod reveal;
pub mod services;
pub mod theme;
