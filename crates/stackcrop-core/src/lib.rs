pub mod consts;
pub mod coverage;
pub mod crop;
pub mod error;
pub mod frame;
pub mod io;
