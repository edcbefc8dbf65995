mod configure;
mod home;
mod link;
mod not_found;

pub use configure::Configure;
pub use home::Home;
pub use link::Link;
pub use not_found::NotFound;
