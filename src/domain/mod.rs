mod endpoint;
mod playlist_identifier;

pub use endpoint::Endpoint;
pub use playlist_identifier::PlaylistIdentifier;
