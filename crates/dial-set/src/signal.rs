//! Cross-thread refresh requests.
//!
//! A [`RefreshSignal`] is the only part of a parameter set that may leave
//! the owning thread. It queues parameter names; the owner applies them
//! with [`ParameterSet::drain_signals`](crate::ParameterSet::drain_signals).

use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::error::SetError;

/// Cloneable, `Send` handle that asks a supplier-bound set to refresh a
/// parameter.
///
/// Requests are applied in FIFO order, on the thread that owns the set,
/// when it drains its queue.
///
/// # Examples
///
/// ```
/// use dial_core::{ParameterValue, Supplier, Tunable};
/// use dial_param::NumericParameter;
/// use dial_set::{ParameterSet, SetConfig};
///
/// struct Fixed;
/// impl Supplier for Fixed {
///     fn value_of(&self, _: &dyn Tunable) -> ParameterValue {
///         ParameterValue::Double(4.0)
///     }
/// }
///
/// let mut set = ParameterSet::with_supplier(SetConfig::default(), Fixed).unwrap();
/// let x = set.add(NumericParameter::new("x", 1.0, 0.0, 10.0).unwrap()).unwrap();
/// let signal = set.refresh_signal().unwrap();
///
/// std::thread::spawn(move || signal.request("x").unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(set.drain_signals().unwrap(), 1);
/// assert_eq!(set.read::<f64>(x).unwrap(), 4.0);
/// ```
#[derive(Clone, Debug)]
pub struct RefreshSignal {
    tx: Sender<String>,
}

impl RefreshSignal {
    /// Queue a refresh of the parameter called `name`.
    ///
    /// The name is resolved when the queue is drained, not here.
    ///
    /// # Errors
    ///
    /// [`SetError::SignalFull`] if the bounded queue is at capacity;
    /// [`SetError::SignalDisconnected`] if the owning set was dropped.
    pub fn request(&self, name: impl Into<String>) -> Result<(), SetError> {
        self.tx.try_send(name.into()).map_err(|e| match e {
            TrySendError::Full(_) => SetError::SignalFull,
            TrySendError::Disconnected(_) => SetError::SignalDisconnected,
        })
    }
}

/// Owning end of the refresh queue.
#[derive(Debug)]
pub(crate) struct SignalQueue {
    tx: Sender<String>,
    rx: Receiver<String>,
}

impl SignalQueue {
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        let (tx, rx) = match capacity {
            Some(cap) => crossbeam_channel::bounded(cap),
            None => crossbeam_channel::unbounded(),
        };
        Self { tx, rx }
    }

    pub(crate) fn handle(&self) -> RefreshSignal {
        RefreshSignal {
            tx: self.tx.clone(),
        }
    }

    pub(crate) fn try_next(&self) -> Option<String> {
        self.rx.try_recv().ok()
    }

    pub(crate) fn pending(&self) -> usize {
        self.rx.len()
    }
}
