pub mod login;
pub mod role_selector;

pub use login::LoginForm;
pub use role_selector::RoleSelector;
