pub(crate) mod method;
pub(crate) mod op;
pub(crate) mod porter_duff;
