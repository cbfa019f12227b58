use k8s_openapi::api::core::v1::{Container, ContainerPort, EnvVar};
use launch_common::workload::ContainerDefinition;

pub fn build_container(def: &ContainerDefinition) -> Container {
    let ports = (!def.ports.is_empty()).then(|| {
        def.ports
            .iter()
            .map(|port| ContainerPort {
                container_port: *port,
                ..Default::default()
            })
            .collect()
    });
    let env = (!def.env.is_empty()).then(|| {
        def.env
            .iter()
            .map(|var| EnvVar {
                name: var.name.clone(),
                value: Some(var.value.clone()),
                ..Default::default()
            })
            .collect()
    });

    Container {
        name: def.name.clone(),
        image: Some(def.image.clone()),
        ports,
        env,
        args: def.args.clone(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_fields() {
        let def = ContainerDefinition::new("sentence-reverser", "nginx:latest")
            .port(80)
            .env("SENTENCE", "Demo");
        let container = build_container(&def);

        assert_eq!(container.name, "sentence-reverser");
        assert_eq!(container.image.as_deref(), Some("nginx:latest"));
        let ports = container.ports.unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].container_port, 80);
        let env = container.env.unwrap();
        assert_eq!(env[0].name, "SENTENCE");
        assert_eq!(env[0].value.as_deref(), Some("Demo"));
        assert!(container.args.is_none());
    }

    #[test]
    fn empty_lists_are_omitted() {
        let container = build_container(&ContainerDefinition::new("hello-world", "hello-world"));
        assert!(container.ports.is_none());
        assert!(container.env.is_none());
    }
}
