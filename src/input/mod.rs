pub(crate) mod pointer;
pub(crate) mod scroll;
