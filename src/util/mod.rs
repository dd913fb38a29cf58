pub mod fs;
pub mod privilege;
