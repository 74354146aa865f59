mod repository;

pub use repository::KeyValueProfileRepository;
