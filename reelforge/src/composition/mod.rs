pub(crate) mod creative;
pub(crate) mod spec;
