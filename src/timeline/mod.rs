pub(crate) mod builder;
pub(crate) mod diff;
pub(crate) mod events;
