#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

mod driver;
mod error;
mod register;
mod status;
mod utils;

pub use driver::{
    Ad7746, DEFAULT_CAP_SETUP, DEFAULT_CONFIGURATION, DEFAULT_EXC_SETUP, DEFAULT_READY_POLL_LIMIT,
    DEFAULT_RETRY_LIMIT, I2C_ADDR,
};
pub use error::Error;
pub use register::Register;
pub use status::Status;
pub use utils::{FULL_SCALE_PF, ZERO_SCALE_CODE, code_to_picofarads};
