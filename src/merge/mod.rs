pub(crate) mod blender;
pub(crate) mod region;
