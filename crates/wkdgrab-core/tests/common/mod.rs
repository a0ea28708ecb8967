pub mod key_server;
