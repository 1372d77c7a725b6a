//! Domain ports for the hexagonal boundary.
//!
//! The directory is read-only, so every port here is a query port. Outbound
//! adapters (the in-memory store today) implement them; the
//! [`DirectoryService`](crate::domain::DirectoryService) consumes them.

mod macros;
pub(crate) use macros::define_port_error;

mod city_directory;
mod user_directory;

#[cfg(test)]
pub use city_directory::MockCityDirectory;
pub use city_directory::CityDirectory;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;

define_port_error! {
    /// Errors raised by directory read ports.
    pub enum DirectoryQueryError {
        /// The backing collection could not be read.
        Unavailable { message: String } => "directory unavailable: {message}",
    }
}
