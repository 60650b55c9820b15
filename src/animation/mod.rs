pub(crate) mod ease;
pub(crate) mod entry;
pub(crate) mod interp;
pub(crate) mod sequence;
pub(crate) mod spring;
