//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("No screen registered for '{0}'")]
    UnknownScreen(String),

    #[error("Malformed route address: '{0}'")]
    MalformedAddress(String),

    #[error("Navigation host is no longer running")]
    HostGone,
}
