pub mod settings;
pub mod loader;
pub mod validator;

pub use settings::*;
pub use loader::*;
pub use validator::*;
