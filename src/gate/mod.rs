pub(crate) mod loading;
