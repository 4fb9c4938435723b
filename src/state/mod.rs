pub(crate) mod render_state;
pub(crate) mod simulator;
