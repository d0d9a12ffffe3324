// -----------------------------------------------------------------------------
// FieldModifier

/// A declared field modifier, the unit of the exclusion policy.
///
/// Without a `#[pson(modifier = "...")]` attribute the derive macro maps the
/// Rust visibility of the field: any `pub` form becomes [`Public`], inherited
/// visibility becomes [`Private`]. `Protected` and `Static` have no Rust
/// spelling and are always attribute-declared.
///
/// [`Public`]: FieldModifier::Public
/// [`Private`]: FieldModifier::Private
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldModifier {
    Public,
    Protected,
    Private,
    Static,
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for one declared field of a mapped type.
///
/// Absence of metadata is the permissive default: a field with no attributes
/// is included, carries no nested-type hint, and lacks the expose marker.
///
/// # Examples
///
/// ```
/// use pson::Mapped;
///
/// #[derive(Mapped, Default)]
/// struct Garage {
///     #[pson(class = "Voiture")]
///     voiture: pson::Value,
/// }
///
/// let info = <Garage as pson::Typed>::struct_info();
/// let field = info.field("voiture").unwrap();
///
/// assert_eq!(field.class_hint(), Some("Voiture"));
/// assert!(!field.exposed());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FieldInfo {
    name: &'static str,
    modifiers: &'static [FieldModifier],
    exposed: bool,
    class_hint: Option<&'static str>,
}

impl FieldInfo {
    /// Creates a descriptor for the field `name` with its declared modifiers.
    #[inline]
    pub const fn new(name: &'static str, modifiers: &'static [FieldModifier]) -> Self {
        Self {
            name,
            modifiers,
            exposed: false,
            class_hint: None,
        }
    }

    /// Marks the field with the expose marker (`#[pson(expose)]`).
    #[inline]
    pub const fn with_expose(mut self) -> Self {
        self.exposed = true;
        self
    }

    /// Attaches a nested-type hint (`#[pson(class = "...")]`).
    #[inline]
    pub const fn with_class(mut self, class: &'static str) -> Self {
        self.class_hint = Some(class);
        self
    }

    /// Returns the field name, which is also its JSON key.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared modifier set.
    #[inline]
    pub const fn modifiers(&self) -> &'static [FieldModifier] {
        self.modifiers
    }

    /// Whether the field carries the expose marker.
    #[inline]
    pub const fn exposed(&self) -> bool {
        self.exposed
    }

    /// The registry name a nested JSON object should be reconstructed as,
    /// if the field declares one.
    #[inline]
    pub const fn class_hint(&self) -> Option<&'static str> {
        self.class_hint
    }

    /// Whether the declared modifier set contains `modifier`.
    #[inline]
    pub fn has_modifier(&self, modifier: FieldModifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}
