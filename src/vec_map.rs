use std::collections::TryReserveError;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// The trait that must be implemented by keys in an `VecMap`
pub trait NumericId: Copy {
    fn to_index(self) -> usize;
}

/// A dense map from (numeric id) keys to values
///
/// It's a convenience wrapper type around a `Vec<V>`.  Keys are handed out in
/// order by `push`, and the map only ever grows.
#[derive(Debug, Clone)]
pub struct VecMap<K: NumericId, V> {
    pub _marker: PhantomData<fn(K)>,
    pub inner: Vec<V>,
}

impl<K: NumericId, V> Index<K> for VecMap<K, V> {
    type Output = V;

    #[inline]
    fn index(&self, index: K) -> &Self::Output {
        &self.inner[index.to_index()]
    }
}

impl<K: NumericId, V> IndexMut<K> for VecMap<K, V> {
    #[inline]
    fn index_mut(&mut self, index: K) -> &mut Self::Output {
        &mut self.inner[index.to_index()]
    }
}

impl<K: NumericId, V> VecMap<K, V> {
    pub fn new(inner: Vec<V>) -> Self {
        Self {
            _marker: PhantomData,
            inner,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.inner.iter()
    }

    /// Append a value, doubling the capacity first if it's full
    ///
    /// On failure the map is left as it was.
    pub fn try_push(&mut self, value: V) -> Result<(), TryReserveError> {
        grow(&mut self.inner)?;
        self.inner.push(value);
        Ok(())
    }
}

/// Make room for one more element, doubling the capacity when it's full
pub fn grow<T>(v: &mut Vec<T>) -> Result<(), TryReserveError> {
    if v.len() == v.capacity() {
        let extra = v.capacity().max(crate::config::BASE_CAPACITY);
        v.try_reserve_exact(extra)?;
    }
    Ok(())
}
