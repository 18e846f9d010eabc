//! Domain Services - rules that span more than one record

pub mod catalog;
pub mod enrollment;
