pub mod db;
pub mod models;
pub mod repos;

pub use models::MemberTypeId;
