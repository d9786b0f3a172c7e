//! String interner for efficient identifier storage.
//!
//! Provides O(1) interning and lookup. Interior mutability lets a
//! driver share one interner across compiler phases by reference.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Internal storage for interned strings.
struct InternerData {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

impl InternerData {
    fn new() -> Self {
        let mut data = InternerData {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        // Pre-intern empty string at index 0
        let empty: &'static str = "";
        data.map.insert(empty, 0);
        data.strings.push(empty);
        data
    }
}

/// String interner mapping identifier text to compact [`Name`]s.
///
/// # Thread Safety
/// Uses an `RwLock` for concurrent read/write access, so one interner
/// can be shared by reference across phases.
pub struct StringInterner {
    data: RwLock<InternerData>,
}

impl StringInterner {
    /// Create a new interner with pre-interned keywords.
    pub fn new() -> Self {
        let interner = StringInterner {
            data: RwLock::new(InternerData::new()),
        };
        interner.pre_intern_keywords();
        interner
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` strings.
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: check if already interned
        {
            let guard = self.data.read();
            if let Some(&index) = guard.map.get(s) {
                return Name::new(index);
            }
        }

        // Slow path: need to insert
        let mut guard = self.data.write();

        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(s) {
            return Name::new(index);
        }

        // Leak the string to get 'static lifetime
        let owned: String = s.to_owned();
        let leaked: &'static str = Box::leak(owned.into_boxed_str());

        let index = u32::try_from(guard.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded {} strings", u32::MAX));
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);

        Name::new(index)
    }

    /// Look up the string for a Name.
    ///
    /// Interned strings are leaked, never deallocated, so the returned
    /// reference is `'static`.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.data.read();
        guard.strings[name.index()]
    }

    /// Pre-intern all Mica keywords.
    fn pre_intern_keywords(&self) {
        const KEYWORDS: &[&str] = &[
            "int", "bool", "void", "struct", "if", "else", "while", "return", "true", "false",
            "cin", "cout", "main",
        ];

        for kw in KEYWORDS {
            self.intern(kw);
        }
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.data.read().strings.len()
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// Higher-level crates can accept any `StringLookup` implementor
/// without depending directly on `StringInterner`.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_lookup() {
        let interner = StringInterner::new();

        let hello = interner.intern("hello");
        let world = interner.intern("world");
        let hello2 = interner.intern("hello");

        assert_eq!(hello, hello2);
        assert_ne!(hello, world);

        assert_eq!(interner.lookup(hello), "hello");
        assert_eq!(interner.lookup(world), "world");
    }

    #[test]
    fn test_empty_string() {
        let interner = StringInterner::new();
        let empty = interner.intern("");
        assert_eq!(empty, Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn test_keywords_pre_interned() {
        let interner = StringInterner::new();
        let before = interner.len();

        let struct_kw = interner.intern("struct");
        let void_kw = interner.intern("void");

        assert_eq!(interner.lookup(struct_kw), "struct");
        assert_eq!(interner.lookup(void_kw), "void");
        assert_eq!(interner.len(), before);
    }
}
