pub mod fun_models;
pub mod fun_service;

pub use fun_service::{add_reply, choose_reply, hello_reply, repeat_plan, roll_reply};
