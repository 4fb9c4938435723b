pub(crate) mod config;
pub(crate) mod frame;
pub(crate) mod scheduler;
pub(crate) mod transition;
