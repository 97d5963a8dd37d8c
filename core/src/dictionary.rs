// core/src/dictionary.rs
//
// Capability interface every dictionary backend provides to the lookup engine.
// The engine only reads through this trait; the caller owns the stack.

use std::sync::Arc;

use crate::outline::Outline;

/// A definition together with its optional comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub translation: String,
    pub comment: Option<String>,
}

/// A steno dictionary as seen by the lookup engine.
///
/// A caller's dictionary stack is an ordered slice of these; earlier
/// dictionaries take precedence over later ones.
///
/// Only `path`, `enabled` and `get` are required. Backends without a reverse
/// index, comments, or the ability to enumerate keys keep the defaults, which
/// report "no data".
pub trait Dictionary {
    /// Location the dictionary was loaded from.
    fn path(&self) -> &str;

    fn enabled(&self) -> bool;

    /// Translation for an outline.
    fn get(&self, outline: &Outline) -> Option<String>;

    /// Every outline that translates to `translation`.
    fn reverse_lookup(&self, _translation: &str) -> Vec<Outline> {
        Vec::new()
    }

    /// Translation and comment for an outline.
    fn lookup(&self, _outline: &Outline) -> Option<Entry> {
        None
    }

    /// Keys of the forward index.
    fn outlines(&self) -> Box<dyn Iterator<Item = &Outline> + '_> {
        Box::new(std::iter::empty())
    }

    /// Keys of the reverse index.
    fn translations(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(std::iter::empty())
    }
}

macro_rules! forward_dictionary {
    ($($ptr:ty),*) => {$(
        impl<T: Dictionary + ?Sized> Dictionary for $ptr {
            fn path(&self) -> &str {
                (**self).path()
            }
            fn enabled(&self) -> bool {
                (**self).enabled()
            }
            fn get(&self, outline: &Outline) -> Option<String> {
                (**self).get(outline)
            }
            fn reverse_lookup(&self, translation: &str) -> Vec<Outline> {
                (**self).reverse_lookup(translation)
            }
            fn lookup(&self, outline: &Outline) -> Option<Entry> {
                (**self).lookup(outline)
            }
            fn outlines(&self) -> Box<dyn Iterator<Item = &Outline> + '_> {
                (**self).outlines()
            }
            fn translations(&self) -> Box<dyn Iterator<Item = &str> + '_> {
                (**self).translations()
            }
        }
    )*};
}

forward_dictionary!(&T, Box<T>, Arc<T>);

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend implementing only the required methods.
    struct Bare;

    impl Dictionary for Bare {
        fn path(&self) -> &str {
            "bare.json"
        }
        fn enabled(&self) -> bool {
            true
        }
        fn get(&self, outline: &Outline) -> Option<String> {
            (outline.joined() == "HEL").then(|| "hell".to_string())
        }
    }

    #[test]
    fn defaults_report_no_data() {
        let d = Bare;
        assert!(d.reverse_lookup("hell").is_empty());
        assert!(d.lookup(&Outline::parse("HEL")).is_none());
        assert_eq!(d.outlines().count(), 0);
        assert_eq!(d.translations().count(), 0);
    }

    #[test]
    fn trait_objects_and_pointers_forward() {
        let boxed: Box<dyn Dictionary> = Box::new(Bare);
        let shared: Arc<dyn Dictionary> = Arc::new(Bare);
        assert_eq!(boxed.get(&Outline::parse("HEL")).as_deref(), Some("hell"));
        assert_eq!(shared.path(), "bare.json");
        let by_ref: &dyn Dictionary = &Bare;
        assert!(by_ref.enabled());
    }
}
