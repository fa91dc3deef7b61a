//! The path engine and its per-type cache.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use core::str::FromStr;
use std::sync::{PoisonError, RwLock};

use log::debug;
use rp_utils::TypeIdMap;

use crate::access::lookup::{self, Member};
use crate::access::path::Segments;
use crate::access::{ParseError, PathError, PathKind, ResolutionStrategy, ResolvedPath};
use crate::access::{TypeComponent, Value};
use crate::info::{DynamicTypePath, DynamicTyped, TypeInfo, TypePath};
use crate::Reflect;

/// Logs one step of the hierarchy walk when the `debug` feature is on.
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug")]
        log::trace!($($arg)*);
    };
}

// -----------------------------------------------------------------------------
// PathOptions

/// Construction options of a [`ReflectionPath`].
///
/// With the `serde` feature, options can be read from configuration; missing
/// keys take their default.
///
/// ```
/// use rp_reflect::access::{PathOptions, ResolutionStrategy};
///
/// let options = PathOptions::default();
/// assert_eq!(options.strategy, ResolutionStrategy::FirstMatch);
/// assert!(options.ignore_to_string);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PathOptions {
    /// Picks among several members matching a type-based segment.
    pub strategy: ResolutionStrategy,
    /// Skips the zero-parameter `to_string` method in type-based lookup.
    pub ignore_to_string: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            strategy: ResolutionStrategy::FirstMatch,
            ignore_to_string: true,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectionPath

/// A parsed path expression with a per-type resolution cache.
///
/// The expression is parsed and classified once. The first use on a concrete
/// target type walks that type's hierarchy and caches the resulting
/// [`ResolvedPath`]; later uses on the same type reuse it.
///
/// `ReflectionPath` is `Send + Sync` and can be shared between threads.
/// Threads racing on an unseen type may each resolve it, but only the first
/// result is stored and every caller receives that one.
///
/// # Examples
///
/// ```
/// use rp_reflect::impl_class;
/// use rp_reflect::access::ReflectionPath;
///
/// #[derive(Clone)]
/// struct Greeter { name: String }
///
/// impl Greeter {
///     fn greet(&self, other: String) -> String {
///         format!("hello {other}, I am {}", self.name)
///     }
/// }
///
/// impl_class!(Greeter in "chat" {
///     fields { name: String }
///     methods { fn greet(&self, other: String) -> String; }
/// });
///
/// let greeter = Greeter { name: "Ann".into() };
///
/// let greet = ReflectionPath::new("greet").unwrap();
/// let out = greet.invoke_on(&greeter, &[&String::from("Bo")]).unwrap();
/// assert_eq!(out.take::<String>().unwrap(), "hello Bo, I am Ann");
/// ```
pub struct ReflectionPath {
    path: Box<str>,
    segments: Segments,
    options: PathOptions,
    cache: RwLock<TypeIdMap<Arc<ResolvedPath>>>,
}

impl ReflectionPath {
    /// Creates a path with the default options.
    ///
    /// Fails only for an empty expression.
    #[inline]
    pub fn new(path: &str) -> Result<Self, ParseError> {
        Self::with_options(path, PathOptions::default())
    }

    /// Creates a path with the given strategy.
    #[inline]
    pub fn with_strategy(path: &str, strategy: ResolutionStrategy) -> Result<Self, ParseError> {
        Self::with_options(
            path,
            PathOptions {
                strategy,
                ..PathOptions::default()
            },
        )
    }

    /// Creates a path with the given options.
    pub fn with_options(path: &str, options: PathOptions) -> Result<Self, ParseError> {
        let segments = Segments::parse(path)?;
        Ok(Self {
            path: path.into(),
            segments,
            options,
            cache: RwLock::new(TypeIdMap::new()),
        })
    }

    /// Sets whether `to_string` is skipped by type-based lookup.
    ///
    /// Resolutions already cached are not affected.
    #[inline]
    pub fn set_ignore_to_string(&mut self, ignore: bool) {
        self.options.ignore_to_string = ignore;
    }

    /// Builder form of [`set_ignore_to_string`](Self::set_ignore_to_string).
    #[inline]
    pub fn ignore_to_string(mut self, ignore: bool) -> Self {
        self.options.ignore_to_string = ignore;
        self
    }

    /// The expression as given.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The notation of the expression.
    #[inline]
    pub fn kind(&self) -> PathKind {
        self.segments.kind()
    }

    /// How type-based segments choose among several matches.
    #[inline]
    pub fn strategy(&self) -> ResolutionStrategy {
        self.options.strategy
    }

    /// The options this path was built with.
    #[inline]
    pub fn options(&self) -> PathOptions {
        self.options
    }

    /// Whether `to_string` is skipped by type-based lookup.
    #[inline]
    pub fn ignores_to_string(&self) -> bool {
        self.options.ignore_to_string
    }

    /// The bracketed segments; empty for a name-based path.
    pub fn components(&self) -> &[TypeComponent] {
        match &self.segments {
            Segments::Types(components) => components,
            Segments::Names(_) => &[],
        }
    }

    /// The name segments; empty for a type-based path.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        let names: &[Box<str>] = match &self.segments {
            Segments::Names(names) => names,
            Segments::Types(_) => &[],
        };
        names.iter().map(|name| &**name)
    }

    /// Number of target types with a cached resolution.
    pub fn cache_len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if a resolution is cached for the given target type.
    pub fn is_cached(&self, type_id: TypeId) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&type_id)
    }

    /// Drops every cached resolution.
    pub fn clear_cache(&mut self) {
        self.cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Resolves the path for the concrete type of `target`.
    ///
    /// Returns the cached resolution if there is one. Failures are not
    /// cached.
    pub fn resolve(&self, target: &dyn Reflect) -> Result<Arc<ResolvedPath>, PathError> {
        let type_id = target.ty_id();

        let cached = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned();
        if let Some(resolved) = cached {
            return Ok(resolved);
        }

        let info = target.reflect_type_info();
        debug!("resolving `{}` for `{}`", self.path, info.type_path());
        let resolved = Arc::new(self.build(info)?);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let stored = cache.get_or_insert(type_id, || Arc::clone(&resolved));
        if !Arc::ptr_eq(stored, &resolved) {
            debug!(
                "`{}` was resolved concurrently for `{}`, keeping the first",
                self.path,
                info.type_path(),
            );
        }
        Ok(Arc::clone(stored))
    }

    /// Reads the value at the end of the path.
    ///
    /// Methods on the path are invoked without arguments.
    pub fn get<'a>(&self, target: &'a dyn Reflect) -> Result<Value<'a>, PathError> {
        self.resolve(target)?.read(target)
    }

    /// Reads the value at the end of the path as a `T`.
    ///
    /// Fails with [`PathError::InvalidCast`] if the value is not a `T`.
    pub fn get_as<'a, T: Reflect + TypePath>(
        &self,
        target: &'a dyn Reflect,
    ) -> Result<Value<'a, T>, PathError> {
        self.get(target)?
            .downcast::<T>()
            .map_err(|value| PathError::InvalidCast {
                expected: T::type_path(),
                actual: value.reflect_type_path(),
            })
    }

    /// Invokes the method at the end of the path with `args`.
    ///
    /// Fails with [`PathError::NotInvocable`] if the path ends at a field.
    pub fn invoke_on(
        &self,
        target: &dyn Reflect,
        args: &[&dyn Reflect],
    ) -> Result<Box<dyn Reflect>, PathError> {
        self.resolve(target)?.call(target, args)
    }

    /// Walks the segments starting at `root`.
    fn build(&self, root: &'static TypeInfo) -> Result<ResolvedPath, PathError> {
        let mut resolved: Option<ResolvedPath> = None;
        let mut class = root;

        let mut step = |member: Member, class: &mut &'static TypeInfo| {
            trace_walk!(
                "`{}`: {} `{}` on `{}`",
                self.path,
                if matches!(member, Member::Field(_)) { "field" } else { "method" },
                member.name(),
                class.type_ident(),
            );
            resolved = Some(ResolvedPath::push(resolved.take(), member));
            *class = member.target();
        };

        match &self.segments {
            Segments::Names(names) => {
                for name in names.iter() {
                    let Some(member) = lookup::find_by_name(class, name) else {
                        return Err(PathError::MissingMember {
                            segment: name.clone(),
                            class: class.type_ident(),
                        });
                    };
                    step(member, &mut class);
                }
            }
            Segments::Types(components) => {
                for component in components.iter() {
                    let candidates =
                        lookup::find_by_type(class, component, self.options.ignore_to_string);
                    trace_walk!(
                        "`{}`: {} candidate(s) of `{component}` on `{}`",
                        self.path,
                        candidates.len(),
                        class.type_ident(),
                    );
                    if candidates.is_empty() {
                        return Err(PathError::NoTypeMatch {
                            type_name: component.type_name().into(),
                            class: class.type_ident(),
                        });
                    }
                    let Some(&member) = self.options.strategy.select(&candidates) else {
                        return Err(PathError::AmbiguousType {
                            type_name: component.type_name().into(),
                            class: class.type_ident(),
                            candidates: candidates.len(),
                        });
                    };
                    step(member, &mut class);
                }
            }
        }

        resolved.ok_or_else(|| PathError::Unresolved {
            path: self.path.clone(),
        })
    }
}

impl FromStr for ReflectionPath {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ReflectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl fmt::Debug for ReflectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReflectionPath")
            .field("path", &self.path)
            .field("kind", &self.kind())
            .field("options", &self.options)
            .field("cached", &self.cache_len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use alloc::{format, vec};
    use core::any::TypeId;
    use core::fmt;
    use std::thread;

    use super::{PathOptions, ReflectionPath};
    use crate::access::{ParseError, PathError, PathKind, ResolutionStrategy};
    use crate::info::InvokeError;
    use crate::{Reflect, ReflectCloneError};

    // --------------------------------------------------------------------
    // Fixtures

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum ConnectionType {
        Local,
        Remote,
    }

    crate::impl_class!(ConnectionType in "fixtures" {});

    #[derive(Clone)]
    struct Connection {
        kind: ConnectionType,
    }

    impl Connection {
        fn get_type(&self) -> ConnectionType {
            self.kind
        }
    }

    crate::impl_class!(Connection in "fixtures" {
        fields { kind: ConnectionType }
        methods { fn get_type(&self) -> ConnectionType; }
    });

    #[derive(Debug)]
    struct Kicked;

    impl fmt::Display for Kicked {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("player was kicked")
        }
    }

    impl core::error::Error for Kicked {}

    #[derive(Clone)]
    struct TestPlayer {
        name: String,
        connection: Connection,
        inventory: Vec<String>,
    }

    impl TestPlayer {
        fn new(name: &str, kind: ConnectionType) -> Self {
            Self {
                name: name.into(),
                connection: Connection { kind },
                inventory: vec!["sword".into(), "shield".into()],
            }
        }

        fn get_name(&self) -> String {
            self.name.clone()
        }

        fn get_connection(&self) -> Connection {
            self.connection.clone()
        }

        fn greet(&self, other: String, times: u8) -> String {
            let mut out = String::new();
            for _ in 0..times {
                out.push_str(&format!("hi {other}, I am {}. ", self.name));
            }
            out
        }

        fn reconnect(&self) -> Result<Connection, Kicked> {
            Err(Kicked)
        }
    }

    crate::impl_class!(TestPlayer in "fixtures" {
        fields { name: String, connection: Connection, inventory: Vec<String> }
        methods {
            fn get_name(&self) -> String;
            fn get_connection(&self) -> Connection;
            fn greet(&self, other: String, times: u8) -> String;
        }
        fallible { fn reconnect(&self) -> Connection; }
    });

    #[derive(Clone)]
    struct MultiFieldTest {
        first: String,
        last: String,
    }

    crate::impl_class!(MultiFieldTest in "fixtures" {
        fields { first: String, last: String }
    });

    #[derive(Clone)]
    struct Lobby {
        host: Option<TestPlayer>,
    }

    crate::impl_class!(Lobby in "fixtures" {
        optional { host: TestPlayer }
    });

    #[derive(Clone)]
    struct Entity {
        id: u32,
    }

    impl Entity {
        fn describe(&self) -> String {
            format!("entity #{}", self.id)
        }
    }

    crate::impl_class!(Entity in "fixtures" {
        fields { id: u32 }
        methods { fn describe(&self) -> String; }
    });

    #[derive(Clone)]
    struct Mob {
        entity: Entity,
        hp: u16,
        id: u32,
    }

    crate::impl_class!(Mob in "fixtures" {
        extends Entity => entity;
        fields { hp: u16, id: u32 }
    });

    #[derive(Clone)]
    struct Label {
        id: u32,
    }

    impl fmt::Display for Label {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "label-{}", self.id)
        }
    }

    crate::impl_class!(Label in "fixtures" {
        fields { id: u32 }
        methods { fn to_string(&self) -> String; }
    });

    fn steve() -> TestPlayer {
        TestPlayer::new("Steve", ConnectionType::Local)
    }

    // --------------------------------------------------------------------
    // Construction

    #[test]
    fn empty_path_is_rejected() {
        assert_eq!(ReflectionPath::new("").unwrap_err(), ParseError::Empty);
        assert_eq!("".parse::<ReflectionPath>().unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn classification_and_accessors() {
        let names = ReflectionPath::new("connection.kind").unwrap();
        assert_eq!(names.kind(), PathKind::NameBased);
        assert_eq!(names.names().collect::<Vec<_>>(), ["connection", "kind"]);
        assert!(names.components().is_empty());
        assert_eq!(names.to_string(), "connection.kind");

        let types: ReflectionPath = "[Connection].[String[]]".parse().unwrap();
        assert_eq!(types.kind(), PathKind::TypeBased);
        assert_eq!(types.names().len(), 0);
        assert_eq!(types.components().len(), 2);
        assert!(types.components()[1].is_array());
        assert_eq!(types.strategy(), ResolutionStrategy::FirstMatch);
        assert!(types.ignores_to_string());
    }

    // --------------------------------------------------------------------
    // Name-based

    #[test]
    fn name_path_reads_fields() {
        let player = steve();

        let name = ReflectionPath::new("name").unwrap();
        let value = name.get_as::<String>(&player).unwrap();
        assert!(value.is_borrowed());
        assert_eq!(*value, "Steve");

        let kind = ReflectionPath::new("connection.kind").unwrap();
        assert_eq!(
            *kind.get_as::<ConnectionType>(&player).unwrap(),
            player.connection.kind
        );
    }

    #[test]
    fn name_path_falls_back_to_methods() {
        let player = steve();

        let name = ReflectionPath::new("get_name").unwrap();
        let value = name.get_as::<String>(&player).unwrap();
        assert!(!value.is_borrowed());
        assert_eq!(*value, "Steve");

        let chained = ReflectionPath::new("connection.get_type").unwrap();
        assert_eq!(
            *chained.get_as::<ConnectionType>(&player).unwrap(),
            ConnectionType::Local
        );
    }

    #[test]
    fn field_of_method_result_is_detached() {
        let player = TestPlayer::new("Alex", ConnectionType::Remote);
        let path = ReflectionPath::new("get_connection.kind").unwrap();
        let value = path.get_as::<ConnectionType>(&player).unwrap();
        assert!(!value.is_borrowed());
        assert_eq!(value.into_owned(), ConnectionType::Remote);
    }

    #[test]
    fn inherited_members_are_found() {
        let mob = Mob {
            entity: Entity { id: 9 },
            hp: 20,
            id: 4,
        };

        // The subclass field shadows the superclass field.
        let id = ReflectionPath::new("id").unwrap();
        assert_eq!(*id.get_as::<u32>(&mob).unwrap(), 4);

        let describe = ReflectionPath::new("describe").unwrap();
        assert_eq!(*describe.get_as::<String>(&mob).unwrap(), "entity #9");

        let by_type = ReflectionPath::new("[u32]").unwrap();
        assert_eq!(*by_type.get_as::<u32>(&mob).unwrap(), 4);

        let last = ReflectionPath::with_strategy("[u32]", ResolutionStrategy::LastMatch).unwrap();
        assert_eq!(*last.get_as::<u32>(&mob).unwrap(), 9);
    }

    // --------------------------------------------------------------------
    // Type-based

    #[test]
    fn type_path_reads_fields() {
        let player = steve();
        let path = ReflectionPath::new("[Connection].[ConnectionType]").unwrap();
        assert_eq!(
            *path.get_as::<ConnectionType>(&player).unwrap(),
            ConnectionType::Local
        );

        let full = ReflectionPath::new("[fixtures::Connection].[ConnectionType]").unwrap();
        assert_eq!(
            *full.get_as::<ConnectionType>(&player).unwrap(),
            ConnectionType::Local
        );
    }

    #[test]
    fn array_segments_match_arrays_only() {
        let player = steve();

        let inventory = ReflectionPath::new("[String[]]").unwrap();
        assert_eq!(
            *inventory.get_as::<Vec<String>>(&player).unwrap(),
            ["sword", "shield"]
        );

        let text = ReflectionPath::new("[String]").unwrap();
        assert_eq!(*text.get_as::<String>(&player).unwrap(), "Steve");

        let multi = MultiFieldTest {
            first: "a".into(),
            last: "b".into(),
        };
        assert!(matches!(
            inventory.get(&multi),
            Err(PathError::NoTypeMatch { class: "MultiFieldTest", .. })
        ));
    }

    #[test]
    fn strategies_pick_candidates() {
        let multi = MultiFieldTest {
            first: "first".into(),
            last: "last".into(),
        };

        let first = ReflectionPath::with_strategy("[String]", ResolutionStrategy::FirstMatch).unwrap();
        assert_eq!(*first.get_as::<String>(&multi).unwrap(), "first");

        let last = ReflectionPath::with_strategy("[String]", ResolutionStrategy::LastMatch).unwrap();
        assert_eq!(*last.get_as::<String>(&multi).unwrap(), "last");

        let exact = ReflectionPath::with_strategy("[String]", ResolutionStrategy::ExactMatch).unwrap();
        match exact.get(&multi) {
            Err(PathError::AmbiguousType {
                type_name,
                class,
                candidates,
            }) => {
                assert_eq!(&*type_name, "String");
                assert_eq!(class, "MultiFieldTest");
                assert_eq!(candidates, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(exact.cache_len(), 0);

        let single =
            ReflectionPath::with_strategy("[String[]]", ResolutionStrategy::ExactMatch).unwrap();
        assert!(single.get(&steve()).is_ok());
    }

    #[test]
    fn methods_follow_fields_in_candidates() {
        let player = steve();
        // `connection`, then `get_connection` and `reconnect`.
        let first = ReflectionPath::new("[Connection]").unwrap();
        let resolved = first.resolve(&player).unwrap();
        assert!(!resolved.is_method());
        assert_eq!(resolved.member_name(), "connection");

        let last =
            ReflectionPath::with_strategy("[Connection]", ResolutionStrategy::LastMatch).unwrap();
        let resolved = last.resolve(&player).unwrap();
        assert!(resolved.is_method());
        assert_eq!(resolved.member_name(), "reconnect");

        let exact =
            ReflectionPath::with_strategy("[Connection]", ResolutionStrategy::ExactMatch).unwrap();
        assert!(matches!(
            exact.resolve(&player),
            Err(PathError::AmbiguousType { candidates: 3, .. })
        ));

        // Methods with parameters are never type candidates.
        let text = ReflectionPath::with_strategy("[String]", ResolutionStrategy::LastMatch).unwrap();
        assert_eq!(text.resolve(&player).unwrap().member_name(), "get_name");
    }

    #[test]
    fn to_string_is_excluded_by_default() {
        let label = Label { id: 7 };

        let skipped = ReflectionPath::new("[String]").unwrap();
        assert!(matches!(
            skipped.get(&label),
            Err(PathError::NoTypeMatch { class: "Label", .. })
        ));

        let allowed = ReflectionPath::new("[String]").unwrap().ignore_to_string(false);
        assert_eq!(*allowed.get_as::<String>(&label).unwrap(), "label-7");

        // Name-based lookup never excludes it.
        let named = ReflectionPath::new("to_string").unwrap();
        assert_eq!(*named.get_as::<String>(&label).unwrap(), "label-7");
    }

    #[test]
    fn toggling_to_string_keeps_cached_resolutions() {
        let label = Label { id: 1 };
        let mut path = ReflectionPath::new("[String]").unwrap().ignore_to_string(false);
        assert!(path.get(&label).is_ok());

        path.set_ignore_to_string(true);
        assert!(path.get(&label).is_ok());

        path.clear_cache();
        assert!(path.get(&label).is_err());
    }

    // --------------------------------------------------------------------
    // Errors

    #[test]
    fn missing_members_are_reported() {
        let player = steve();
        let path = ReflectionPath::new("connection.latency").unwrap();
        let err = path.get(&player).unwrap_err();
        assert!(matches!(
            &err,
            PathError::MissingMember { segment, class: "Connection" } if &**segment == "latency"
        ));
        assert_eq!(
            err.to_string(),
            "no field or method found for `latency` in Connection"
        );
        assert_eq!(path.cache_len(), 0);
    }

    #[test]
    fn blank_paths_are_unresolved() {
        let path = ReflectionPath::new(".").unwrap();
        let err = path.get(&steve()).unwrap_err();
        assert!(matches!(&err, PathError::Unresolved { path } if &**path == "."));

        let interior = ReflectionPath::new("connection..kind").unwrap();
        assert!(matches!(
            interior.get(&steve()),
            Err(PathError::MissingMember { class: "Connection", .. })
        ));
    }

    #[test]
    fn absent_intermediate_is_null() {
        let lobby = Lobby { host: None };
        let path = ReflectionPath::new("host.name").unwrap();
        assert!(matches!(
            path.get(&lobby),
            Err(PathError::NullValue { member: "host" })
        ));

        let lobby = Lobby { host: Some(steve()) };
        assert_eq!(*path.get_as::<String>(&lobby).unwrap(), "Steve");
    }

    #[test]
    fn wrong_cast_is_reported() {
        let path = ReflectionPath::new("name").unwrap();
        match path.get_as::<i32>(&steve()) {
            Err(PathError::InvalidCast { expected, actual }) => {
                assert_eq!(expected, "i32");
                assert_eq!(actual, "alloc::string::String");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[derive(Clone)]
    struct Grid {
        cells: Vec<Vec<u8>>,
    }

    crate::impl_class!(Grid in "fixtures" {
        fields { cells: Vec<Vec<u8>> }
    });

    #[test]
    fn wrong_cast_names_nested_vec() {
        let grid = Grid { cells: vec![vec![1, 2], vec![3]] };
        let path = ReflectionPath::new("cells").unwrap();
        match path.get_as::<u8>(&grid) {
            Err(PathError::InvalidCast { expected, actual }) => {
                assert_eq!(expected, "u8");
                assert_eq!(actual, "alloc::vec::Vec<alloc::vec::Vec<u8>>");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(path.get_as::<Vec<Vec<u8>>>(&grid).unwrap().len(), 2);
    }

    // --------------------------------------------------------------------
    // Invocation

    #[test]
    fn invoke_passes_arguments() {
        let player = steve();
        let path = ReflectionPath::new("greet").unwrap();
        let other = String::from("Bob");
        let out = path.invoke_on(&player, &[&other, &2_u8]).unwrap();
        assert_eq!(
            out.take::<String>().unwrap(),
            "hi Bob, I am Steve. hi Bob, I am Steve. "
        );
    }

    #[test]
    fn invoke_failures_keep_their_cause() {
        let player = steve();
        let greet = ReflectionPath::new("greet").unwrap();

        match greet.invoke_on(&player, &[]) {
            Err(PathError::Invoke {
                method: "greet",
                source: InvokeError::ArgCount { expected: 2, received: 0 },
            }) => {}
            other => panic!("unexpected result: {other:?}"),
        }

        let other = String::from("Bob");
        assert!(matches!(
            greet.invoke_on(&player, &[&2_u8, &other]),
            Err(PathError::Invoke {
                source: InvokeError::ArgType { index: 0, .. },
                ..
            })
        ));

        // Reading a method with parameters invokes it without arguments.
        assert!(matches!(
            greet.get(&player),
            Err(PathError::Invoke { source: InvokeError::ArgCount { .. }, .. })
        ));

        let reconnect = ReflectionPath::new("reconnect").unwrap();
        let err = reconnect.invoke_on(&player, &[]).unwrap_err();
        let source = core::error::Error::source(&err).unwrap();
        let cause = core::error::Error::source(source).unwrap();
        assert_eq!(cause.to_string(), "player was kicked");
    }

    #[test]
    fn fields_cannot_be_invoked() {
        let player = steve();
        let path = ReflectionPath::new("connection.kind").unwrap();
        assert!(matches!(
            path.invoke_on(&player, &[]),
            Err(PathError::NotInvocable { field: "kind" })
        ));
    }

    #[test]
    fn chained_method_invocation() {
        let player = steve();
        let path = ReflectionPath::new("get_connection.get_type").unwrap();
        let out = path.invoke_on(&player, &[]).unwrap();
        assert_eq!(out.take::<ConnectionType>().unwrap(), ConnectionType::Local);
    }

    // --------------------------------------------------------------------
    // Cache

    #[test]
    fn cache_is_per_concrete_type() {
        let path = ReflectionPath::new("name").unwrap();
        let a = steve();
        let b = TestPlayer::new("Alex", ConnectionType::Remote);

        assert_eq!(*path.get_as::<String>(&a).unwrap(), "Steve");
        assert_eq!(*path.get_as::<String>(&b).unwrap(), "Alex");
        assert_eq!(path.cache_len(), 1);
        assert!(path.is_cached(TypeId::of::<TestPlayer>()));

        let first = path.resolve(&a).unwrap();
        let second = path.resolve(&b).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let lobby_path = ReflectionPath::new("[String]").unwrap();
        assert!(lobby_path.get(&a).is_ok());
        assert!(lobby_path.get(&MultiFieldTest { first: "x".into(), last: "y".into() }).is_ok());
        assert_eq!(lobby_path.cache_len(), 2);
    }

    #[test]
    fn concurrent_first_use_shares_one_resolution() {
        let path = ReflectionPath::new("connection.kind").unwrap();
        let player = steve();

        let resolved: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| path.resolve(&player).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(path.cache_len(), 1);
        let cached = path.resolve(&player).unwrap();
        assert!(resolved.iter().all(|r| Arc::ptr_eq(r, &cached)));
    }

    #[test]
    fn resolved_path_shape() {
        let path = ReflectionPath::new("get_connection.kind").unwrap();
        let resolved = path.resolve(&steve()).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.member_name(), "kind");
        assert!(!resolved.is_method());
        assert_eq!(resolved.value_info().type_ident(), "ConnectionType");
        assert_eq!(
            format!("{resolved:?}"),
            "TestPlayer::get_connection() -> Connection::kind"
        );
    }

    // --------------------------------------------------------------------
    // Detach failures

    struct Sealed;

    impl crate::info::TypePath for Sealed {
        fn type_path() -> &'static str {
            "fixtures::Sealed"
        }
        fn type_name() -> &'static str {
            "Sealed"
        }
        fn type_ident() -> &'static str {
            "Sealed"
        }
    }

    impl crate::info::Typed for Sealed {
        fn type_info() -> &'static crate::info::TypeInfo {
            static CELL: crate::impls::NonGenericTypeInfoCell =
                crate::impls::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                crate::info::TypeInfo::Opaque(crate::info::OpaqueInfo::new::<Self>())
            })
        }
    }

    impl Reflect for Sealed {
        fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
            Err(ReflectCloneError::NotCloneable {
                type_path: "fixtures::Sealed",
            })
        }
    }

    #[derive(Clone)]
    struct Vault {
        id: u32,
    }

    impl Vault {
        fn open(&self) -> Safe {
            Safe { sealed: self.id }
        }
    }

    #[derive(Clone)]
    struct Safe {
        sealed: u32,
    }

    struct Locker {
        content: Sealed,
    }

    impl Clone for Locker {
        fn clone(&self) -> Self {
            Self { content: Sealed }
        }
    }

    impl Safe {
        fn locker(&self) -> Locker {
            Locker { content: Sealed }
        }
    }

    crate::impl_class!(Locker in "fixtures" { fields { content: Sealed } });
    crate::impl_class!(Safe in "fixtures" {
        fields { sealed: u32 }
        methods { fn locker(&self) -> Locker; }
    });
    crate::impl_class!(Vault in "fixtures" {
        fields { id: u32 }
        methods { fn open(&self) -> Safe; }
    });

    #[test]
    fn uncloneable_field_of_method_result() {
        let vault = Vault { id: 5 };

        let sealed = ReflectionPath::new("open.sealed").unwrap();
        assert_eq!(*sealed.get_as::<u32>(&vault).unwrap(), 5);

        let content = ReflectionPath::new("open.locker.content").unwrap();
        assert!(matches!(
            content.get(&vault),
            Err(PathError::Detach { member: "content", .. })
        ));
    }

    // --------------------------------------------------------------------
    // Options

    #[test]
    fn options_are_applied() {
        let options = PathOptions {
            strategy: ResolutionStrategy::LastMatch,
            ignore_to_string: false,
        };
        let path = ReflectionPath::with_options("[String]", options).unwrap();
        assert_eq!(path.options(), options);
        assert_eq!(*path.get_as::<String>(&Label { id: 2 }).unwrap(), "label-2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_from_config() {
        let options: PathOptions = serde_json::from_str(r#"{ "strategy": "EXACT_MATCH" }"#).unwrap();
        assert_eq!(options.strategy, ResolutionStrategy::ExactMatch);
        assert!(options.ignore_to_string);

        let options: PathOptions = serde_json::from_str(r#"{ "ignore_to_string": false }"#).unwrap();
        assert_eq!(options.strategy, ResolutionStrategy::FirstMatch);
        assert!(!options.ignore_to_string);
    }
}
