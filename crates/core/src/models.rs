pub mod slot;
pub mod week;
