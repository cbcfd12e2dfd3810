pub mod form;
pub mod limits;
pub mod status;

#[cfg(feature = "json")]
pub mod response;
