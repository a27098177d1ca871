pub(crate) mod channel;
pub(crate) mod color;
pub(crate) mod mode;
