pub mod fixtures;
pub mod mock_countries_server;
