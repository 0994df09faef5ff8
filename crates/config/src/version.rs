/// The short version information.
pub const SHORT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The long version information.
pub const LONG_VERSION: &str = concat!(
    "Version: ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Repository: ",
    env!("CARGO_PKG_REPOSITORY"),
);
