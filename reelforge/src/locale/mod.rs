pub(crate) mod lang;
pub(crate) mod strings;
