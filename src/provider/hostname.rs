//! Instance hostnames
//!
//! ECS names the host after its instance ID: the first `-` becomes `z` and a
//! trailing `z` is added (`i-uf69zddmom11ci7est12` => `izuf69zddmom11ci7est12z`).
//! Node names must match exactly or the node never joins its Machine.

/// Derive the ECS hostname for an instance ID
pub fn instance_id_to_name(instance_id: &str) -> String {
    let mut name = instance_id.replacen('-', "z", 1);
    name.push('z');
    name
}
