pub(crate) mod line;
pub(crate) mod point;
pub(crate) mod slider;
pub(crate) mod transit;
