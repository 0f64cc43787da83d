mod health_check;
mod home;
mod not_found;
mod playlists;

pub use health_check::health_check;
pub use home::home;
pub use not_found::not_found;
pub use playlists::submit_playlist;
