/// Local host configuration.
///
/// Address and port the WebSocket host binds to.
pub const BIND_ADDR: &str = "127.0.0.1";

pub const BIND_PORT: u16 = 8080;
