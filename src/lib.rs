pub mod bay;
pub mod errors;
pub mod logging;
