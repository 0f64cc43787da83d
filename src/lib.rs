pub mod configuration;
pub mod domain;
pub mod error;
pub mod outcome;
pub mod playlist_client;
pub mod routes;
pub mod startup;
pub mod state;
pub mod submit;
pub mod telemetry;
