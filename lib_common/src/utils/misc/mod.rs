/// General helper functions (time formatting).
pub mod utils;
