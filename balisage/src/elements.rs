use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{Element, Error, IntoElement, Result};

/// The ordered children of a [crate::Node].
///
/// Positional operations take an `isize` index; negative values count from the
/// end, so `-1` is the last element. An index outside the valid range is an
/// [Error::IndexOutOfBounds] and leaves the sequence unchanged.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Elements<'bump> {
    #[cfg_attr(feature = "serde", serde(skip))]
    bump: &'bump Bump,
    items: BumpVec<'bump, Element<'bump>>,
}
impl<'bump> Elements<'bump> {
    /// Create an empty sequence.
    pub fn new(bump: &'bump Bump) -> Self {
        Self {
            bump,
            items: BumpVec::new_in(bump),
        }
    }

    /// Append one element.
    pub fn push(&mut self, element: impl IntoElement<'bump>) {
        self.items.push(element.into_element(self.bump));
    }

    /// Append elements in iteration order.
    pub fn add<E: IntoElement<'bump>>(&mut self, elements: impl IntoIterator<Item = E>) {
        let bump = self.bump;
        self.items
            .extend(elements.into_iter().map(|e| e.into_element(bump)));
    }

    /// Replace the whole sequence.
    pub fn set<E: IntoElement<'bump>>(&mut self, elements: impl IntoIterator<Item = E>) {
        let bump = self.bump;
        self.items = BumpVec::from_iter_in(elements.into_iter().map(|e| e.into_element(bump)), bump);
    }

    /// Insert an element before `index`.
    ///
    /// Valid indices are `-len..=len`; `len` appends.
    pub fn insert(&mut self, index: isize, element: impl IntoElement<'bump>) -> Result<()> {
        let position = self.resolve(index, self.items.len() + 1)?;
        self.items.insert(position, element.into_element(self.bump));
        Ok(())
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn update(
        &mut self,
        index: isize,
        element: impl IntoElement<'bump>,
    ) -> Result<Element<'bump>> {
        let position = self.resolve(index, self.items.len())?;
        let element = element.into_element(self.bump);
        Ok(std::mem::replace(&mut self.items[position], element))
    }

    /// Remove the element at `index`.
    pub fn remove(&mut self, index: isize) -> Result<()> {
        self.pop_at(index).map(drop)
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<Element<'bump>> {
        self.pop_at(-1)
    }

    /// Remove and return the element at `index`.
    pub fn pop_at(&mut self, index: isize) -> Result<Element<'bump>> {
        let position = self.resolve(index, self.items.len())?;
        Ok(self.items.remove(position))
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get the element at `index`, if it exists. Negative indices count from the end.
    pub fn get(&self, index: isize) -> Option<&Element<'bump>> {
        let position = self.resolve(index, self.items.len()).ok()?;
        self.items.get(position)
    }

    /// Get the element at `index` mutably, if it exists.
    pub fn get_mut(&mut self, index: isize) -> Option<&mut Element<'bump>> {
        let position = self.resolve(index, self.items.len()).ok()?;
        self.items.get_mut(position)
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element<'bump>> {
        self.items.iter()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[Element<'bump>] {
        self.items.as_slice()
    }

    /// Map `index` onto `0..upper`, counting negative indices back from `len`.
    fn resolve(&self, index: isize, upper: usize) -> Result<usize> {
        let len = self.items.len();
        let position = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        match position {
            Some(position) if position < upper => Ok(position),
            _ => {
                tracing::debug!(index, len, "element index out of bounds");
                Err(Error::IndexOutOfBounds { index, len })
            }
        }
    }
}
impl PartialEq for Elements<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}
impl Eq for Elements<'_> {}
impl<'a, 'bump> IntoIterator for &'a Elements<'bump> {
    type Item = &'a Element<'bump>;
    type IntoIter = std::slice::Iter<'a, Element<'bump>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
