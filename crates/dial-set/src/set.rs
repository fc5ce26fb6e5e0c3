//! The [`ParameterSet`] aggregate.

use std::any::Any;
use std::fmt;

use dial_core::{
    BoundsPolicy, ParameterError, ParameterId, ParameterPayload, ParameterValue,
    ParameterVersion, SubscriptionId, Supplier, Tunable,
};
use indexmap::IndexMap;
use tracing::{debug, info, trace, warn};

use crate::config::{ConfigError, SetConfig};
use crate::error::SetError;
use crate::observer::ObserverRegistry;
use crate::signal::{RefreshSignal, SignalQueue};

/// An ordered, observable collection of named parameters.
///
/// The set exclusively owns its parameters. Every successful change,
/// whether a direct [`update`](Self::update), a supplier-driven
/// [`refresh`](Self::refresh) or a [`reset`](Self::reset), increments
/// [`version()`](Self::version) once and then calls each subscriber once,
/// in registration order. A failed change leaves every parameter as it was
/// and notifies no one.
///
/// # Examples
///
/// ```
/// use dial_param::{ListParameter, NumericParameter};
/// use dial_set::ParameterSet;
///
/// let mut set = ParameterSet::new();
/// let x = set.add(NumericParameter::new("x", 1.0, 0.0, 10.0).unwrap()).unwrap();
/// let mode = set
///     .add(ListParameter::new("mode", "a".to_string(), ["a", "b", "c"].map(String::from)).unwrap())
///     .unwrap();
///
/// set.update(x, 5.0).unwrap();
/// assert_eq!(set.read::<f64>(x).unwrap(), 5.0);
/// assert_eq!(set.read::<String>(mode).unwrap(), "a");
/// assert_eq!(set.version().0, 1);
/// ```
pub struct ParameterSet {
    config: SetConfig,
    parameters: IndexMap<String, Box<dyn Tunable>>,
    supplier: Option<Box<dyn Supplier>>,
    signals: Option<SignalQueue>,
    observers: ObserverRegistry,
    version: ParameterVersion,
    sealed: bool,
}

impl ParameterSet {
    // ── Construction ───────────────────────────────────────────────

    /// An empty set with the default configuration and no supplier.
    pub fn new() -> Self {
        Self::build(SetConfig::default(), None)
    }

    /// An empty set with no supplier.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by [`SetConfig::validate`].
    pub fn with_config(config: SetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, None))
    }

    /// An empty set bound to `supplier`.
    ///
    /// Only supplier-bound sets accept [`refresh`](Self::refresh) and hand
    /// out a [`RefreshSignal`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by [`SetConfig::validate`].
    pub fn with_supplier(
        config: SetConfig,
        supplier: impl Supplier + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, Some(Box::new(supplier))))
    }

    fn build(config: SetConfig, supplier: Option<Box<dyn Supplier>>) -> Self {
        let signals = supplier
            .as_ref()
            .map(|_| SignalQueue::new(config.signal_capacity));
        Self {
            config,
            parameters: IndexMap::new(),
            supplier,
            signals,
            observers: ObserverRegistry::default(),
            version: ParameterVersion::default(),
            sealed: false,
        }
    }

    // ── Setup ──────────────────────────────────────────────────────

    /// Add a parameter and return its ID.
    ///
    /// IDs are assigned sequentially from zero.
    ///
    /// # Errors
    ///
    /// [`SetError::Sealed`] after [`seal()`](Self::seal);
    /// [`SetError::DuplicateName`] if the name is already taken.
    pub fn add(&mut self, parameter: impl Tunable) -> Result<ParameterId, SetError> {
        self.add_boxed(Box::new(parameter))
    }

    /// Add an already-boxed parameter. See [`add`](Self::add).
    pub fn add_boxed(&mut self, parameter: Box<dyn Tunable>) -> Result<ParameterId, SetError> {
        if self.sealed {
            return Err(SetError::Sealed {
                label: self.config.label.clone(),
            });
        }
        let name = parameter.name().to_string();
        if self.parameters.contains_key(&name) {
            return Err(SetError::DuplicateName { name });
        }
        let id = u32::try_from(self.parameters.len())
            .map(ParameterId)
            .map_err(|_| SetError::CapacityExceeded)?;
        debug!(
            set = %self.config.label,
            parameter = %name,
            id = %id,
            kind = %parameter.kind(),
            "parameter added"
        );
        self.parameters.insert(name, parameter);
        Ok(id)
    }

    /// Stop accepting new parameters. Idempotent.
    pub fn seal(&mut self) {
        if !self.sealed {
            self.sealed = true;
            info!(set = %self.config.label, parameters = self.parameters.len(), "set sealed");
        }
    }

    /// Whether [`seal()`](Self::seal) has taken effect.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    // ── Reads ──────────────────────────────────────────────────────

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// The set's configuration.
    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    /// Number of successful changes so far.
    pub fn version(&self) -> ParameterVersion {
        self.version
    }

    /// Whether the set is bound to a supplier.
    pub fn has_supplier(&self) -> bool {
        self.supplier.is_some()
    }

    /// Look up a parameter by ID.
    pub fn get(&self, id: ParameterId) -> Option<&dyn Tunable> {
        self.parameters
            .get_index(id.index())
            .map(|(_, p)| p.as_ref())
    }

    /// Look up a parameter by name.
    pub fn by_name(&self, name: &str) -> Option<&dyn Tunable> {
        self.parameters.get(name).map(|p| p.as_ref())
    }

    /// The ID of the parameter called `name`.
    pub fn id_of(&self, name: &str) -> Option<ParameterId> {
        // Indices fit in u32; `add_boxed` refuses to grow past that.
        self.parameters
            .get_index_of(name)
            .map(|i| ParameterId(i as u32))
    }

    /// Whether a parameter called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterId, &dyn Tunable)> + '_ {
        self.parameters
            .values()
            .enumerate()
            .map(|(i, p)| (ParameterId(i as u32), p.as_ref()))
    }

    /// Current value of a parameter.
    pub fn value(&self, id: ParameterId) -> Option<ParameterValue> {
        self.get(id).map(|p| p.current_value())
    }

    /// Current value of a parameter, converted to `T`.
    ///
    /// # Errors
    ///
    /// [`SetError::UnknownParameter`] for a bad ID;
    /// [`ParameterError::TypeMismatch`] if the parameter's kind is not
    /// `T::KIND`; [`ParameterError::InvalidValue`] if the value has the
    /// right kind but `T` rejects it.
    pub fn read<T: ParameterPayload>(&self, id: ParameterId) -> Result<T, SetError> {
        let parameter = self.require(id)?;
        T::from_value(parameter.current_value())
            .map_err(|e| SetError::Parameter(e.for_parameter(parameter.name())))
    }

    /// Borrow a parameter as its concrete type.
    ///
    /// `None` if the ID is unknown or the parameter is not a `P`.
    pub fn downcast<P: Tunable>(&self, id: ParameterId) -> Option<&P> {
        let parameter: &dyn Any = self.get(id)?;
        parameter.downcast_ref::<P>()
    }

    /// `(name, current value)` for every parameter, in insertion order.
    pub fn snapshot(&self) -> Vec<(String, ParameterValue)> {
        self.parameters
            .iter()
            .map(|(name, p)| (name.clone(), p.current_value()))
            .collect()
    }

    // ── Direct updates ─────────────────────────────────────────────

    /// Assign `value` to a parameter under the configured bounds policy.
    ///
    /// # Errors
    ///
    /// [`SetError::UnknownParameter`], or [`SetError::Parameter`] when the
    /// parameter rejects the value.
    pub fn update(
        &mut self,
        id: ParameterId,
        value: impl Into<ParameterValue>,
    ) -> Result<(), SetError> {
        let value = value.into();
        self.apply(id, "update", |p, policy| p.assign(value, policy))
    }

    /// [`update`](Self::update) addressed by name.
    pub fn update_by_name(
        &mut self,
        name: &str,
        value: impl Into<ParameterValue>,
    ) -> Result<(), SetError> {
        let id = self.require_name(name)?;
        self.update(id, value)
    }

    /// Assign a type-erased value.
    ///
    /// The box must hold exactly the parameter's payload type; anything
    /// else fails with [`ParameterError::InvalidCast`].
    pub fn update_any(&mut self, id: ParameterId, value: Box<dyn Any>) -> Result<(), SetError> {
        self.apply(id, "update", |p, policy| p.assign_any(value, policy))
    }

    // ── Supplier-driven updates ────────────────────────────────────

    /// Fetch a parameter's value from the supplier and apply it.
    ///
    /// The supplier is asked exactly once.
    ///
    /// # Errors
    ///
    /// [`SetError::NoSupplier`] if the set has no supplier,
    /// [`SetError::UnknownParameter`] for a bad ID, or
    /// [`SetError::Parameter`] when the supplied value is rejected.
    pub fn refresh(&mut self, id: ParameterId) -> Result<(), SetError> {
        let Some(supplier) = self.supplier.as_deref() else {
            return Err(SetError::NoSupplier {
                label: self.config.label.clone(),
            });
        };
        let parameter = self
            .parameters
            .get_index(id.index())
            .map(|(_, p)| p.as_ref())
            .ok_or(SetError::UnknownParameter { id })?;
        let value = supplier.value_of(parameter);

        let result = self.apply(id, "refresh", |p, policy| p.assign(value, policy));
        if let Err(SetError::Parameter(err)) = &result {
            warn!(
                set = %self.config.label,
                parameter = err.parameter_name(),
                error = %err,
                "supplier value rejected"
            );
        }
        result
    }

    /// [`refresh`](Self::refresh) addressed by name.
    pub fn refresh_by_name(&mut self, name: &str) -> Result<(), SetError> {
        if self.supplier.is_none() {
            return Err(SetError::NoSupplier {
                label: self.config.label.clone(),
            });
        }
        let id = self.require_name(name)?;
        self.refresh(id)
    }

    /// A handle for requesting refreshes from other threads.
    ///
    /// `None` if the set has no supplier.
    pub fn refresh_signal(&self) -> Option<RefreshSignal> {
        self.signals.as_ref().map(SignalQueue::handle)
    }

    /// Number of queued refresh requests.
    pub fn pending_signals(&self) -> usize {
        self.signals.as_ref().map_or(0, SignalQueue::pending)
    }

    /// Apply queued refresh requests in FIFO order.
    ///
    /// Returns the number applied. Stops at the first failing request,
    /// which is consumed; later requests stay queued.
    ///
    /// # Errors
    ///
    /// Whatever [`refresh_by_name`](Self::refresh_by_name) returns for the
    /// failing request.
    pub fn drain_signals(&mut self) -> Result<usize, SetError> {
        let mut applied = 0;
        while let Some(name) = self.signals.as_ref().and_then(SignalQueue::try_next) {
            self.refresh_by_name(&name)?;
            applied += 1;
        }
        if applied > 0 {
            trace!(set = %self.config.label, applied, "refresh signals drained");
        }
        Ok(applied)
    }

    // ── Reset ──────────────────────────────────────────────────────

    /// Restore one parameter's default value.
    pub fn reset(&mut self, id: ParameterId) -> Result<(), SetError> {
        self.apply(id, "reset", |p, _| {
            p.reset();
            Ok(())
        })
    }

    /// Restore every parameter's default value with a single notification.
    ///
    /// An empty set is left untouched.
    pub fn reset_all(&mut self) {
        if self.parameters.is_empty() {
            return;
        }
        for parameter in self.parameters.values_mut() {
            parameter.reset();
        }
        self.commit();
        debug!(set = %self.config.label, version = %self.version, "all parameters reset");
    }

    // ── Subscribers ────────────────────────────────────────────────

    /// Register a change callback.
    ///
    /// The callback receives the set's version after each successful
    /// change. It runs on the updating thread, before the update call
    /// returns; a panic in it unwinds through that call.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(ParameterVersion) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Remove a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    // ── Internals ──────────────────────────────────────────────────

    fn require(&self, id: ParameterId) -> Result<&dyn Tunable, SetError> {
        self.get(id).ok_or(SetError::UnknownParameter { id })
    }

    fn require_name(&self, name: &str) -> Result<ParameterId, SetError> {
        self.id_of(name).ok_or_else(|| SetError::UnknownName {
            name: name.to_string(),
        })
    }

    fn apply(
        &mut self,
        id: ParameterId,
        origin: &'static str,
        change: impl FnOnce(&mut dyn Tunable, BoundsPolicy) -> Result<(), ParameterError>,
    ) -> Result<(), SetError> {
        let policy = self.config.bounds_policy;
        let (_, parameter) = self
            .parameters
            .get_index_mut(id.index())
            .ok_or(SetError::UnknownParameter { id })?;
        change(parameter.as_mut(), policy)?;
        debug!(
            set = %self.config.label,
            parameter = parameter.name(),
            value = %parameter.current_value(),
            version = %self.version.next(),
            origin,
            "parameter changed"
        );
        self.commit();
        Ok(())
    }

    fn commit(&mut self) {
        self.version = self.version.next();
        if self.config.seal_on_first_update {
            self.seal();
        }
        trace!(
            set = %self.config.label,
            version = %self.version,
            subscribers = self.observers.len(),
            "notifying subscribers"
        );
        self.observers.notify(self.version);
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSet")
            .field("label", &self.config.label)
            .field("parameters", &self.parameters.keys().collect::<Vec<_>>())
            .field("version", &self.version)
            .field("sealed", &self.sealed)
            .field("has_supplier", &self.supplier.is_some())
            .field("subscribers", &self.observers.len())
            .finish()
    }
}
