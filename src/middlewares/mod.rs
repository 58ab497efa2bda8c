pub mod acting_user;

pub use acting_user::RequireActingUser;
