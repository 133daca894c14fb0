pub mod mock_repositories;
