use crate::di::Container;
use crate::error::Result;
use crate::module::Module;

/// Builder for assembling the application container before it is shared.
///
/// # Example
/// ```
/// use user_directory::di::ContainerBuilder;
/// use user_directory::users::UsersModule;
///
/// let container = ContainerBuilder::new()
///     .import::<UsersModule>()
///     .unwrap()
///     .build();
/// assert!(!container.is_empty());
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Let a module register its providers against what is already in the container.
    pub fn import<M: Module>(mut self) -> Result<Self> {
        M::register(&mut self.container)?;
        Ok(self)
    }

    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
