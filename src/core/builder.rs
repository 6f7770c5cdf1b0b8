use crate::domain::model::{Group, Inventory, Meta, ProvisioningOutput, ServiceGroup};
use serde_json::{json, Map, Value};

/// Builds the inventory for `groups` from provisioning outputs.
///
/// Missing or null outputs leave a group empty with only the connection
/// defaults. An instance listed under more than one group keeps the hostvars
/// of the last group processed.
pub fn build_inventory(
    output: &ProvisioningOutput,
    groups: &[ServiceGroup],
    connection: &str,
    remote: &str,
) -> Inventory {
    let mut inventory = Inventory {
        meta: Meta::default(),
        groups: groups
            .iter()
            .map(|group| Group {
                name: group.name.to_string(),
                hosts: Vec::new(),
                vars: default_vars(connection, remote),
            })
            .collect(),
    };

    for (group, slot) in groups.iter().zip(inventory.groups.iter_mut()) {
        add_instances(output, group, slot, &mut inventory.meta);
        apply_vars_override(output, group, slot);
    }

    inventory
}

fn default_vars(connection: &str, remote: &str) -> Map<String, Value> {
    let mut vars = Map::new();
    vars.insert(
        "ansible_connection".to_string(),
        Value::String(connection.to_string()),
    );
    vars.insert(
        "ansible_incus_remote".to_string(),
        Value::String(remote.to_string()),
    );
    vars
}

fn add_instances(
    output: &ProvisioningOutput,
    group: &ServiceGroup,
    slot: &mut Group,
    meta: &mut Meta,
) {
    let key = group.instances_key();
    let Some(value) = output.value(&key) else {
        return;
    };
    let Some(instances) = value.as_object() else {
        tracing::warn!("Output '{}' is not a mapping of instances, skipping", key);
        return;
    };

    for (name, attributes) in instances {
        slot.hosts.push(name.clone());
        let ipv4_address = attributes
            .get("ipv4_address")
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));
        let previous = meta.hostvars.insert(
            name.clone(),
            json!({
                "ansible_incus_host": name,
                "ipv4_address": ipv4_address,
            }),
        );
        if previous.is_some() {
            tracing::debug!("Instance '{}' listed again under '{}'", name, group.name);
        }
    }

    tracing::debug!("Group '{}': {} hosts", group.name, slot.hosts.len());
}

fn apply_vars_override(output: &ProvisioningOutput, group: &ServiceGroup, slot: &mut Group) {
    let key = group.vars_key();
    let Some(value) = output.value(&key) else {
        return;
    };
    match value {
        Value::Object(overrides) => {
            for (name, var) in overrides {
                slot.vars.insert(name.clone(), var.clone());
            }
        }
        _ => tracing::warn!("Output '{}' is not a mapping of variables, skipping", key),
    }
}
