pub mod memory_cache;
pub mod prepare_env;
