mod courses;
pub use courses::Courses;

mod account;
pub use account::Account;

mod login;
pub use login::Login;
