use async_trait::async_trait;

/// Sentinel returned by every value accessor when the requested value
/// is invalid, out of range, or the device is inactive.
pub const UNAVAILABLE: &str = "none";

/// Immutable description of one device kind: its name, what it is, and
/// the names and types of the values it exposes. Each driver instance
/// holds its own descriptor, so differently-configured instances can
/// coexist in one process.
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub name: &'static str,
    pub kind: &'static str,
    pub version: &'static str,
    pub value_names: &'static [&'static str],
    pub value_types: &'static [&'static str],
}

/// Uniform accessor surface over one sensor.
///
/// Metadata lookups are bounds-checked and fall back to [`UNAVAILABLE`];
/// value accessors additionally gate on the active flag set once at
/// initialization. Values are measured fresh on every call, never cached.
#[async_trait]
pub trait Device: Send {
    /// Instance identifier from configuration.
    fn id(&self) -> &str;

    fn descriptor(&self) -> &Descriptor;

    /// Whether initialization succeeded. An inactive device answers
    /// [`UNAVAILABLE`] to every value accessor indefinitely.
    fn is_active(&self) -> bool;

    /// Measure and render the value at `index`.
    async fn value_at(&mut self, index: usize) -> String;

    fn device_name(&self) -> &str {
        self.descriptor().name
    }

    fn device_kind(&self) -> &str {
        self.descriptor().kind
    }

    fn version(&self) -> String {
        let descriptor = self.descriptor();
        format!("{} {}", descriptor.name, descriptor.version)
    }

    fn num_values(&self) -> usize {
        self.descriptor().value_names.len()
    }

    fn name_at(&self, index: usize) -> &str {
        self.descriptor()
            .value_names
            .get(index)
            .copied()
            .unwrap_or(UNAVAILABLE)
    }

    fn type_at(&self, index: usize) -> &str {
        self.descriptor()
            .value_types
            .get(index)
            .copied()
            .unwrap_or(UNAVAILABLE)
    }

    /// Measure the value whose name matches, or answer [`UNAVAILABLE`]
    /// when no value carries that name.
    async fn value_by_name(&mut self, name: &str) -> String {
        let index = self
            .descriptor()
            .value_names
            .iter()
            .position(|candidate| *candidate == name);

        match index {
            Some(index) => self.value_at(index).await,
            None => UNAVAILABLE.to_string(),
        }
    }
}
