pub mod new_user;

pub use new_user::NewUser;
