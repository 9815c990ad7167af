/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod generation_request;
mod generation_result;

pub use generation_request::{
    GenerationRequest, GenerationRequestBuilder, DEFAULT_GROUP_ID, DEFAULT_PORT,
    DEFAULT_PROJECT_VERSION,
};
pub use generation_result::GenerationResult;
