//! Contact routes: public intake plus the guarded admin operations.

pub mod create;
pub mod delete;
pub mod list;

pub use create::create_contact;
pub use delete::delete_contact;
pub use list::list_contacts;
