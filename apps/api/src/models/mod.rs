pub mod application;
pub mod job;

/// Collects the names of required fields that are absent or blank.
#[derive(Debug, Default)]
pub(crate) struct MissingFields(Vec<&'static str>);

impl MissingFields {
    pub fn text(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.0.push(name);
                String::new()
            }
        }
    }

    pub fn mark(&mut self, name: &'static str) {
        self.0.push(name);
    }

    pub fn number(&mut self, name: &'static str, value: Option<f64>) -> f64 {
        match value {
            Some(v) if v.is_finite() => v,
            _ => {
                self.0.push(name);
                0.0
            }
        }
    }

    /// `Err` with a message naming every missing field, in declaration order.
    pub fn finish(self, entity: &str) -> Result<(), String> {
        if self.0.is_empty() {
            return Ok(());
        }
        let fields = self
            .0
            .iter()
            .map(|f| format!("{f} is required"))
            .collect::<Vec<_>>()
            .join(", ");
        Err(format!("{entity} validation failed: {fields}"))
    }
}
