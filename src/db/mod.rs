pub mod stop_repository;
