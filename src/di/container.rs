use crate::error::{DirectoryError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

type Shared = Arc<dyn Any + Send + Sync>;

/// Turns the stored implementation into an `Arc<Arc<dyn Trait>>` erased as `Shared`.
/// Returns `None` when the stored instance is not the bound implementation type.
type CasterFn = Arc<dyn Fn(Shared) -> Option<Shared> + Send + Sync>;

/// Type-keyed registry of shared services.
///
/// Concrete services are stored once and handed out as `Arc<T>`. Traits are
/// bound to a registered implementation with [`Container::register_trait`] and
/// resolved as `Arc<dyn Trait>`, so the user service never names the concrete
/// store it talks to.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, Shared>,
    bindings: DashMap<TypeId, (TypeId, CasterFn)>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.register_shared(Arc::new(instance))
    }

    /// Register an instance that is already shared with the caller.
    pub fn register_shared<T: 'static + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        tracing::debug!(service = std::any::type_name::<T>(), "registering service");
        self.services.insert(TypeId::of::<T>(), instance);
        self
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let caster: CasterFn = Arc::new(move |instance: Shared| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as Shared)
        });

        self.bindings
            .insert(TypeId::of::<Trait>(), (TypeId::of::<Impl>(), caster));
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let instance = self
            .services
            .get(&TypeId::of::<T>())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DirectoryError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            })?;

        instance
            .downcast::<T>()
            .map_err(|_| DirectoryError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let (impl_id, caster) = self
            .bindings
            .get(&TypeId::of::<T>())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DirectoryError::DependencyNotFound {
                type_name: format!("no binding for trait '{}'", std::any::type_name::<T>()),
            })?;

        let instance = self
            .services
            .get(&impl_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DirectoryError::DependencyNotFound {
                type_name: format!(
                    "implementation for trait '{}' not registered",
                    std::any::type_name::<T>()
                ),
            })?;

        let downcast_failed = || DirectoryError::DowncastFailed {
            type_name: std::any::type_name::<T>().to_string(),
        };

        // The caster yields an Arc<dyn Any> holding an Arc<T>.
        let wrapper = (*caster)(instance)
            .ok_or_else(downcast_failed)?
            .downcast::<Arc<T>>()
            .map_err(|_| downcast_failed())?;
        Ok(wrapper.as_ref().clone())
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.bindings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
