//! Per-item validators for collection-valued properties.

use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use crate::binding::{PropertyValidator, Validator};

/// A property value that can be split into items.
///
/// `Option<C>` treats `None` as a collection with no items.
pub trait Collection {
    /// Element type.
    type Item;

    /// Consumes the value, yielding its items in iteration order.
    fn into_items(self) -> Vec<Self::Item>;
}

impl<E> Collection for Vec<E> {
    type Item = E;

    fn into_items(self) -> Vec<E> {
        self
    }
}

impl<E> Collection for VecDeque<E> {
    type Item = E;

    fn into_items(self) -> Vec<E> {
        self.into()
    }
}

impl<E> Collection for Box<[E]> {
    type Item = E;

    fn into_items(self) -> Vec<E> {
        self.into_vec()
    }
}

impl<E, const N: usize> Collection for [E; N] {
    type Item = E;

    fn into_items(self) -> Vec<E> {
        self.into()
    }
}

impl<E> Collection for BTreeSet<E> {
    type Item = E;

    fn into_items(self) -> Vec<E> {
        self.into_iter().collect()
    }
}

impl<C: Collection> Collection for Option<C> {
    type Item = C::Item;

    fn into_items(self) -> Vec<C::Item> {
        self.map(Collection::into_items).unwrap_or_default()
    }
}

// ============================================================================
// ITEM VALIDATORS
// ============================================================================

impl<T, C> PropertyValidator<T, C>
where
    T: Send + Sync + 'static,
    C: Collection + Send + Sync + 'static,
    C::Item: Send + Sync + 'static,
{
    /// One validator per item, each prefixed `Name[index]`.
    ///
    /// Items are read when this method is called; items added to the
    /// collection later get no validator. All item validators share the
    /// parent's command.
    ///
    /// ```rust,ignore
    /// for item in validator.property("Attachments", |m: &Message| m.attachments.clone()).validators() {
    ///     item.property("FileName", |a: &Attachment| a.file_name.clone()).not_empty();
    /// }
    /// ```
    pub fn validators(&self) -> impl Iterator<Item = Validator<C::Item>> + use<T, C> {
        let command = self.command().clone();
        let path = self.property_name();
        self.value()
            .into_items()
            .into_iter()
            .enumerate()
            .map(move |(index, item)| {
                let item = Arc::new(item);
                Validator::from_parts(
                    Arc::new(move || Arc::clone(&item)),
                    command.clone(),
                    format!("{path}[{index}]"),
                )
            })
    }

    /// Calls `f` with the validator of every item, then returns `self` for
    /// further chaining.
    pub fn for_each<F>(self, f: F) -> Self
    where
        F: FnMut(Validator<C::Item>),
    {
        self.validators().for_each(f);
        self
    }
}
