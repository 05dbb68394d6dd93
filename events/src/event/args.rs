//! Payload handed to every handler on dispatch.
//!
//! [`EventArgs`] borrows the object that raised the event and carries a [`Params`] map for
//! event-specific extras. Values in the map are type-erased (`Box<dyn Any>`) and recovered with
//! a typed [`Params::get`], so new kinds of data can ride along without a new argument type per
//! event.

use std::{
    any::{Any, type_name},
    collections::HashMap,
    fmt,
};

/// Open-ended named parameters attached to an [`EventArgs`].
#[derive(Default)]
pub struct Params {
    values: HashMap<String, Box<dyn Any>>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Inserts `value` under `name`, returning the value previously stored there, if any.
    pub fn insert<T: Any>(&mut self, name: impl Into<String>, value: T) -> Option<Box<dyn Any>> {
        self.values.insert(name.into(), Box::new(value))
    }

    /// Returns the value stored under `name` if it exists and is a `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name)?.downcast_ref::<T>()
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.values.get_mut(name)?.downcast_mut::<T>()
    }

    /// Removes `name`, returning its value when it was a `T`.
    ///
    /// A value of a different type is still removed; `None` is returned in that case.
    pub fn remove<T: Any>(&mut self, name: &str) -> Option<T> {
        self.values
            .remove(name)?
            .downcast::<T>()
            .ok()
            .map(|value| *value)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over parameter names in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

/// Arguments passed to every handler of a single dispatch.
///
/// The sender is borrowed for the duration of the dispatch and can't be replaced once the args
/// are built. Extra data goes in [`params`](Self::params_mut).
pub struct EventArgs<'a, S: ?Sized> {
    sender: &'a S,
    params: Params,
}

impl<'a, S: ?Sized> EventArgs<'a, S> {
    /// Creates arguments for `sender` with no extra parameters.
    pub fn new(sender: &'a S) -> Self {
        Self::with_params(sender, Params::new())
    }

    /// Creates arguments for `sender` carrying `params`.
    pub fn with_params(sender: &'a S, params: Params) -> Self {
        Self { sender, params }
    }

    /// The object that raised the event.
    #[inline]
    pub fn sender(&self) -> &'a S {
        self.sender
    }

    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[inline]
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

impl<S: ?Sized> fmt::Debug for EventArgs<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventArgs")
            .field("sender", &type_name::<S>())
            .field("params", &self.params)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sender {
        id: u32,
    }

    // ==================== Params ====================

    #[test]
    fn new_params_are_empty() {
        let params = Params::new();

        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert_eq!(params.keys().count(), 0);
    }

    #[test]
    fn get_returns_typed_value() {
        let mut params = Params::new();
        params.insert("reason", "shutdown");
        params.insert("code", 7_i32);

        assert_eq!(params.get::<&str>("reason"), Some(&"shutdown"));
        assert_eq!(params.get::<i32>("code"), Some(&7));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn get_with_wrong_type_is_none() {
        let mut params = Params::new();
        params.insert("code", 7_i32);

        assert!(params.get::<u64>("code").is_none());
        assert!(params.contains("code"));
    }

    #[test]
    fn get_missing_is_none() {
        let params = Params::new();

        assert!(params.get::<i32>("nope").is_none());
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut params = Params::new();
        assert!(params.insert("attempt", 1_u8).is_none());

        let previous = params.insert("attempt", 2_u8);

        assert_eq!(previous.and_then(|v| v.downcast::<u8>().ok()).map(|v| *v), Some(1));
        assert_eq!(params.get::<u8>("attempt"), Some(&2));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut params = Params::new();
        params.insert("hits", Vec::<u32>::new());

        params.get_mut::<Vec<u32>>("hits").unwrap().push(3);

        assert_eq!(params.get::<Vec<u32>>("hits"), Some(&vec![3]));
    }

    #[test]
    fn remove_returns_owned_value() {
        let mut params = Params::new();
        params.insert("label", String::from("main"));

        assert_eq!(params.remove::<String>("label"), Some("main".to_owned()));
        assert!(!params.contains("label"));
        assert!(params.remove::<String>("label").is_none());
    }

    #[test]
    fn remove_with_wrong_type_still_removes() {
        let mut params = Params::new();
        params.insert("label", String::from("main"));

        assert!(params.remove::<i32>("label").is_none());
        assert!(params.is_empty());
    }

    // ==================== EventArgs ====================

    #[test]
    fn args_borrow_sender() {
        let sender = Sender { id: 9 };

        let args = EventArgs::new(&sender);

        assert!(std::ptr::eq(args.sender(), &sender));
        assert_eq!(args.sender().id, 9);
        assert!(args.params().is_empty());
    }

    #[test]
    fn args_with_params() {
        let sender = Sender { id: 1 };
        let mut params = Params::new();
        params.insert("phase", "warmup");

        let mut args = EventArgs::with_params(&sender, params);
        args.params_mut().insert("extra", true);

        assert_eq!(args.params().get::<&str>("phase"), Some(&"warmup"));
        assert_eq!(args.params().get::<bool>("extra"), Some(&true));
    }

    #[test]
    fn debug_lists_param_names() {
        let sender = Sender { id: 1 };
        let mut args = EventArgs::new(&sender);
        args.params_mut().insert("phase", 1_u8);

        let rendered = format!("{args:?}");

        assert!(rendered.contains("EventArgs"));
        assert!(rendered.contains("\"phase\""));
    }
}
