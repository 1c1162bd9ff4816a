use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::sync::mpsc;

struct Slot<V>
{
    value: Option<V>,
    observers: Vec<mpsc::UnboundedSender<Option<V>>>
}

/// A single slot holding the latest published value (or none yet)
///   broadcasting updates to any number of [Observer]s
///
/// - [Latest::publish] overwrites the slot and notifies every attached
///    observer, last publish wins
/// - [Latest::observe] attaches a new [Observer] which is handed the
///    slot's current content immediately, even if it is none, then every
///    later published value in publish order
/// - Handles are cheap to clone, clones share the same slot
///
/// Observers are given their own unbounded queue so a slow observer
///   never misses an update, cf [Observer]
pub struct Latest<V>
{
    slot: Arc<Mutex<Slot<V>>>
}

impl<V> Clone for Latest<V>
{
    fn clone(&self) -> Latest<V>
    {
        Latest { slot: self.slot.clone() }
    }
}

impl<V: Clone> Latest<V>
{
    pub fn new() -> Latest<V>
    {
        Latest
        {
            slot: Arc::new(Mutex::new(Slot { value: None, observers: vec![] }))
        }
    }

    /// Overwrite the slot with value and notify attached observers,
    ///   detached observers are pruned
    pub async fn publish(&self, value: V)
    {
        let mut slot = self.slot.lock().await;
        slot.value = Some(value.clone());
        slot.observers.retain
        (
            |observer| observer.send(Some(value.clone())).is_ok()
        );
    }

    /// A clone of the slot's current content
    pub async fn peek(&self) -> Option<V>
    {
        self.slot.lock().await.value.clone()
    }

    pub async fn observers(&self) -> usize
    {
        self.slot.lock().await.observers.len()
    }

    /// Attach a new [Observer], it is handed the current content
    ///   before the slot can change again
    pub async fn observe(&self) -> Observer<V>
    {
        let (send, recv) = mpsc::unbounded_channel();
        let mut slot = self.slot.lock().await;
        send.send(slot.value.clone()).ok();
        slot.observers.push(send);
        Observer { recv }
    }
}

/// One subscriber's end of a [Latest] stream
///
/// Items are the slot content, so none means "no value yet". Dropping
///   the observer detaches it, other observers are unaffected
pub struct Observer<V>
{
    recv: mpsc::UnboundedReceiver<Option<V>>
}

impl<V> Observer<V>
{
    /// The next delivered slot content, or [None] if the [Latest]
    ///   itself is gone
    pub async fn next(&mut self) -> Option<Option<V>>
    {
        self.recv.recv().await
    }
}
