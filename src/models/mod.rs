pub mod bootstrap;
pub mod record;
