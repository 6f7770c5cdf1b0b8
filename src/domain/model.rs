use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A service group and the output-key prefix its instances and vars live under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceGroup {
    pub name: &'static str,
    pub output_prefix: &'static str,
}

impl ServiceGroup {
    pub const fn new(name: &'static str, output_prefix: &'static str) -> Self {
        Self {
            name,
            output_prefix,
        }
    }

    pub fn instances_key(&self) -> String {
        format!("{}_instances", self.output_prefix)
    }

    pub fn vars_key(&self) -> String {
        format!("{}_ansible_vars", self.output_prefix)
    }
}

pub const SERVICE_GROUPS: [ServiceGroup; 13] = [
    ServiceGroup::new("forgejo_runners", "forgejo_runner"),
    ServiceGroup::new("prometheus", "prometheus"),
    ServiceGroup::new("forgejo", "forgejo"),
    ServiceGroup::new("postgresql", "postgresql"),
    ServiceGroup::new("alertmanager", "alertmanager"),
    ServiceGroup::new("step_ca", "step_ca"),
    ServiceGroup::new("mosquitto", "mosquitto"),
    ServiceGroup::new("alloy", "alloy"),
    ServiceGroup::new("grafana", "grafana"),
    ServiceGroup::new("loki", "loki"),
    ServiceGroup::new("coredns", "coredns"),
    ServiceGroup::new("openfga", "openfga"),
    ServiceGroup::new("dex", "dex"),
];

/// Parsed `tofu output -json`: output-key -> `{ "value": ..., "type": ..., "sensitive": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvisioningOutput {
    outputs: Map<String, Value>,
}

impl ProvisioningOutput {
    /// The wrapped `value` of an output, or `None` when the key is absent,
    /// the wrapper has no `value`, or the value is null.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.outputs
            .get(key)
            .and_then(|wrapper| wrapper.get("value"))
            .filter(|value| !value.is_null())
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    #[serde(skip)]
    pub name: String,
    pub hosts: Vec<String>,
    pub vars: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Meta {
    /// instance-name -> host variables, in the order instances were first seen.
    pub hostvars: Map<String, Value>,
}

/// Ansible dynamic inventory document.
///
/// Serialises as `_meta`, then `all`, then one entry per group in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub meta: Meta,
    pub groups: Vec<Group>,
}

impl Inventory {
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn host_count(&self) -> usize {
        self.meta.hostvars.len()
    }
}

#[derive(Serialize)]
struct AllGroup<'a> {
    children: Vec<&'a str>,
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len() + 2))?;
        map.serialize_entry("_meta", &self.meta)?;
        map.serialize_entry(
            "all",
            &AllGroup {
                children: self.groups.iter().map(|group| group.name.as_str()).collect(),
            },
        )?;
        for group in &self.groups {
            map.serialize_entry(&group.name, group)?;
        }
        map.end()
    }
}
