use crate::info::StructInfo;
use crate::reflection::{MappedStruct, Typed};

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime metadata for one registered type: its descriptor table and a
/// blank-instance constructor.
///
/// Two pointers wide, so lookups hand out copies and no registry lock is held
/// across a recursive deserialization walk.
///
/// # Examples
///
/// ```
/// use pson::{Mapped, MappedStruct};
/// use pson::registry::TypeMeta;
///
/// #[derive(Mapped, Default)]
/// struct Jauge {
///     niveau: i32,
/// }
///
/// let meta = TypeMeta::of::<Jauge>();
/// assert_eq!(meta.type_name(), "Jauge");
///
/// let blank = meta.blank_boxed();
/// assert_eq!(blank.mapped_info().field_len(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct TypeMeta {
    info: &'static StructInfo,
    blank_boxed: fn() -> Box<dyn MappedStruct>,
}

impl TypeMeta {
    /// Creates the metadata of `T`.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self {
            info: T::struct_info(),
            blank_boxed: || Box::new(T::blank()),
        }
    }

    /// The type's descriptor table.
    #[inline]
    pub const fn info(&self) -> &'static StructInfo {
        self.info
    }

    /// The name the type is registered under.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.info.type_name()
    }

    /// Builds a boxed zero-valued instance, bypassing any user construction
    /// logic. See [`Typed::blank`].
    #[inline]
    pub fn blank_boxed(&self) -> Box<dyn MappedStruct> {
        (self.blank_boxed)()
    }
}

// -----------------------------------------------------------------------------
// RegistryEntry

/// One `inventory`-collected registration, emitted by the derive macro.
///
/// The metadata is behind a function pointer so collection itself stays
/// trivially cheap; entries are evaluated once, when the global registry is
/// first populated.
pub struct RegistryEntry {
    meta: fn() -> TypeMeta,
}

impl RegistryEntry {
    /// Creates an entry from a metadata constructor.
    pub const fn new(meta: fn() -> TypeMeta) -> Self {
        Self { meta }
    }

    /// Evaluates the entry.
    #[inline]
    pub fn meta(&self) -> TypeMeta {
        (self.meta)()
    }
}

inventory::collect!(RegistryEntry);
