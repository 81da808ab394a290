mod services;

pub use services::image;
pub use services::{ApplicationService, AuthError, AuthService, ServiceError, User};
