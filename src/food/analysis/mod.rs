pub mod lookup;
pub mod nutrition;
