pub mod clock;
pub mod os_helper;
