pub mod compat;
pub mod mock;

pub use compat::CompatProvider;
pub use mock::MockProvider;
