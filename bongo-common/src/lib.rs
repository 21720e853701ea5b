#![no_std]
pub mod frame;
pub mod globals;
pub mod keycodes;
