mod in_memory_group_repo;

pub use in_memory_group_repo::InMemoryGroupRepository;
