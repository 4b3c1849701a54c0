pub use super::event::Entity as Event;
pub use super::save_file::Entity as SaveFile;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
