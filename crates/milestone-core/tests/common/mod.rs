pub mod stats_server;
