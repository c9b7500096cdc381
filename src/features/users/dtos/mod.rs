mod user_dto;

pub use user_dto::{CoordinatesDto, CreateUserDto, UserResponseDto};
