//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod photo;
pub mod user;

pub use photo::{CreatePhotoDTO, OwnerDTO, PhotoDTO, PhotoInputDTO, UpdatePhotoDTO};
pub use user::{CreateUserDTO, LoginDTO, LoginResponseDTO, UpdateUserDTO, UserDTO};
