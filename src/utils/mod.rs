pub mod local_auth;
pub mod logging;
pub mod paths;
pub mod str2x;
pub mod term;
pub mod x2str;
