#![no_std]

mod class_id;
mod clk;
mod device;
mod error;

pub use self::{
    class_id::ClassId,
    clk::ClkOps,
    device::{DeviceId, Driver},
    error::{Error, ErrorKind, ErrorType},
};
