pub mod audit;
pub mod build;
pub mod inspect;
pub mod verify;
