pub mod health;
pub mod professor;
pub mod slots;
pub mod week;
