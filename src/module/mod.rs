use crate::di::Container;
use crate::error::Result;

/// A group of providers registered together.
///
/// A module may rely on services registered before it (configuration, for
/// instance) and adds its own on top.
pub trait Module {
    fn register(container: &mut Container) -> Result<()>;
}
