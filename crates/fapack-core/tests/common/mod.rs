pub mod svg_server;
