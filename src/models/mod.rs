// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Action, Credentials, Dog, DogAttributes, DogSex, Pagination, Reaction, User};
pub use requests::{DogRequest, PaginationQuery, ReactionRequest, SignInRequest, SignUpRequest};
pub use responses::{DogResponse, ErrorResponse, HealthResponse, SignInResponse, UserResponse};
