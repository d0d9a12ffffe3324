use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::registry::{RegistryEntry, TypeMeta};
use crate::reflection::Typed;

static GLOBAL_REGISTRY: OnceLock<RwLock<TypeRegistry>> = OnceLock::new();

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of mapped types, keyed by their registry names.
///
/// This is the store the deserializer consults to turn a type name — an
/// endpoint argument or a field's nested-type hint — into a constructible
/// type. Derived types land here automatically through their
/// [`RegistryEntry`] submissions; [`register`] adds types by hand.
///
/// # Examples
///
/// ```
/// use pson::Mapped;
/// use pson::registry::TypeRegistry;
///
/// #[derive(Mapped, Default)]
/// struct Capteur {
///     valeur: f64,
/// }
///
/// let registry = TypeRegistry::new();
/// assert!(registry.contains("Capteur"));
/// ```
pub struct TypeRegistry {
    types: HashMap<&'static str, TypeMeta>,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty registry, ignoring submitted entries.
    #[inline]
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Creates a registry holding every submitted [`RegistryEntry`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for entry in inventory::iter::<RegistryEntry> {
            registry.register_meta(entry.meta());
        }
        registry
    }

    /// Registers `T` by its registry name.
    ///
    /// Returns `false` (and keeps the existing entry) if the name is already
    /// taken.
    #[inline]
    pub fn register<T: Typed>(&mut self) -> bool {
        self.register_meta(TypeMeta::of::<T>())
    }

    /// Inserts prebuilt metadata. First registration of a name wins; a
    /// collision is logged and dropped.
    pub fn register_meta(&mut self, meta: TypeMeta) -> bool {
        let name = meta.type_name();
        if self.types.contains_key(name) {
            log::warn!("type name `{name}` is already registered, keeping the first entry");
            return false;
        }
        self.types.insert(name, meta);
        true
    }

    /// Looks up the metadata registered under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&TypeMeta> {
        self.types.get(name)
    }

    /// Whether `name` is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry holds no types.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The process-wide registry.
    ///
    /// Populated from the submitted entries on first access; that first
    /// population is the only write the mapper itself ever performs, and the
    /// lock makes concurrent first access safe. A poisoned lock is absorbed —
    /// the registry holds no invariants a panicking reader could break.
    pub fn global() -> &'static RwLock<TypeRegistry> {
        GLOBAL_REGISTRY.get_or_init(|| RwLock::new(TypeRegistry::new()))
    }
}

/// Registers `T` in the [global registry](TypeRegistry::global) by hand.
///
/// Only needed for types registered under a different name at runtime or on
/// platforms without static-registration support; derived types are submitted
/// automatically.
pub fn register<T: Typed>() -> bool {
    let mut registry = TypeRegistry::global()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.register::<T>()
}

#[cfg(test)]
mod tests {
    use crate::Mapped;
    use crate::registry::TypeRegistry;

    #[derive(Mapped, Default)]
    struct RegistryProbe {
        #[pson(expose)]
        id: u64,
    }

    #[test]
    fn auto_registration() {
        let registry = TypeRegistry::new();
        let meta = registry.get("RegistryProbe").expect("submitted by derive");
        assert_eq!(meta.info().field_len(), 1);
        assert!(meta.info().field("id").unwrap().exposed());
    }

    #[test]
    fn duplicate_names_keep_first() {
        let mut registry = TypeRegistry::empty();
        assert!(registry.register::<RegistryProbe>());
        assert!(!registry.register::<RegistryProbe>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn global_contains_submissions() {
        let registry = TypeRegistry::global().read().unwrap();
        assert!(registry.contains("RegistryProbe"));
    }
}
