pub(crate) mod int_bool;
pub(crate) mod maybe_split_once;
