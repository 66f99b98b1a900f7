// ABOUTME: SeaORM entities module for the bookmarking schema
// ABOUTME: Exports the auth adapter tables and the content/space tables

pub mod account;
pub mod authenticator;
pub mod content_to_space;
pub mod session;
pub mod space;
pub mod stored_content;
pub mod user;
pub mod verification_token;

pub use account::{AccountType, Entity as Account};
pub use authenticator::Entity as Authenticator;
pub use content_to_space::Entity as ContentToSpace;
pub use session::Entity as Session;
pub use space::Entity as Space;
pub use stored_content::{ContentType, Entity as StoredContent};
pub use user::Entity as User;
pub use verification_token::Entity as VerificationToken;
