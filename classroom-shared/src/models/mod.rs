pub mod announcement;
pub mod envelope;
pub mod errors;
pub mod quiz;
pub mod user;

pub use announcement::Announcement;
pub use envelope::{Envelope, unwrap_data};
pub use errors::surfaced_message;
pub use quiz::{Quiz, QuizQuestion};
pub use user::{
    CurrentAdminResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UploadResponse, User,
};
