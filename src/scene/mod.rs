pub(crate) mod ambient;
pub(crate) mod compositor;
pub(crate) mod external;
pub(crate) mod layer;
pub(crate) mod mapper;
pub(crate) mod menu;
pub(crate) mod parallax;
pub(crate) mod phase;
pub(crate) mod style;
