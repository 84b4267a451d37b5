use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Typed key into a [`Blackboard`].
///
/// Keys are plain numeric ids; the type parameter only fixes what the slot holds.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BbKey<T: 'static> {
    id: u64,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for BbKey<T> {}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> BbKey<T> {
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    pub fn id(self) -> u64 {
        self.id
    }
}

/// Shared scratch space that every node of a tree can read and write during a tick.
///
/// Trace collection (see `bt-tools`) also lives here, so a tree can be
/// instrumented without changing any node signature.
#[derive(Default)]
pub struct Blackboard {
    values: BTreeMap<u64, Box<dyn Any>>,
}

impl fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blackboard")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn mismatch<T: 'static>(id: u64) -> ! {
    panic!(
        "blackboard type mismatch for key id={id} (requested {})",
        type_name::<T>()
    )
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains<T: 'static>(&self, key: BbKey<T>) -> bool {
        self.values.contains_key(&key.id)
    }

    pub fn set<T: 'static>(&mut self, key: BbKey<T>, value: T) {
        self.values.insert(key.id, Box::new(value));
    }

    pub fn get<T: 'static>(&self, key: BbKey<T>) -> Option<&T> {
        let value = self.values.get(&key.id)?;
        match value.downcast_ref::<T>() {
            Some(v) => Some(v),
            None => mismatch::<T>(key.id),
        }
    }

    pub fn get_mut<T: 'static>(&mut self, key: BbKey<T>) -> Option<&mut T> {
        let value = self.values.get_mut(&key.id)?;
        match value.downcast_mut::<T>() {
            Some(v) => Some(v),
            None => mismatch::<T>(key.id),
        }
    }

    pub fn get_or_insert_with<T: 'static>(
        &mut self,
        key: BbKey<T>,
        make: impl FnOnce() -> T,
    ) -> &mut T {
        let value = self
            .values
            .entry(key.id)
            .or_insert_with(|| Box::new(make()) as Box<dyn Any>);
        match value.downcast_mut::<T>() {
            Some(v) => v,
            None => mismatch::<T>(key.id),
        }
    }

    pub fn remove<T: 'static>(&mut self, key: BbKey<T>) -> Option<T> {
        let value = self.values.remove(&key.id)?;
        match value.downcast::<T>() {
            Ok(v) => Some(*v),
            Err(_) => mismatch::<T>(key.id),
        }
    }
}
