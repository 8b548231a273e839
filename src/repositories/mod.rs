mod http_contact_repository;
mod traits;

pub use http_contact_repository::HttpContactRepository;
pub use traits::ContactRepository;
