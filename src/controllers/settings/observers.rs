use std::fmt;

pub type Observer = Box<dyn Fn() + Send + Sync>;

/// Attach-only, ordered list of change callbacks.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Observer>,
}

impl ObserverRegistry {
    pub fn add(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    /// Calls every observer in registration order on the current thread.
    pub fn notify_all(&self) {
        for observer in &self.observers {
            observer();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
